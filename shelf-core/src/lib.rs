//! Shelf Core Library
//!
//! Resolves book identifiers inside a confined library directory, opens EPUB
//! containers, decodes their OPF metadata and NCX navigation documents, and
//! streams raw resources out of them. Nothing is cached: every operation
//! reads the archive as it currently is on disk.

pub mod container;
pub mod content;
pub mod decoder;
pub mod error;
pub mod library;
pub mod resolver;
pub mod shelf;
pub mod types;

pub use error::{ContainerError, DecodeError, Result, ShelfError};
pub use resolver::{split_book_path, PathResolver, ResolvedBook};
pub use shelf::Shelf;
pub use types::{BookId, BookMetadata, ChapterEntry, ContentRef, TableOfContents};
