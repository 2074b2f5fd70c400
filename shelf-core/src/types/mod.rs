//! Core types for the shelf data model

mod book;
mod metadata;
mod toc;

pub use book::{BookId, EPUB_EXTENSION};
pub use metadata::{BookMetadata, ManifestEntry, MetaEntry};
pub use toc::{ChapterEntry, ContentRef, TableOfContents};
