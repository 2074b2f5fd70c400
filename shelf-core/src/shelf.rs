//! Entry point tying the components together per operation

use crate::container::Container;
use crate::content::ContentLocator;
use crate::decoder::{read_metadata, read_toc};
use crate::error::Result;
use crate::library::LibraryScanner;
use crate::resolver::PathResolver;
use crate::types::{BookMetadata, TableOfContents};
use std::io::Write;
use std::path::Path;

/// A library of EPUB files rooted at one directory
///
/// Holds no state beyond the root: every call opens, decodes and releases
/// its own archive handle.
#[derive(Debug, Clone)]
pub struct Shelf {
    resolver: PathResolver,
}

impl Shelf {
    /// Open a library rooted at `root`, which must be an existing directory
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            resolver: PathResolver::new(root)?,
        })
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Metadata of every book whose file name contains `filter`
    pub fn list_books(&self, filter: &str) -> Result<Vec<BookMetadata>> {
        LibraryScanner::new(&self.resolver).scan(filter)
    }

    /// Metadata of a single book
    pub fn book_info(&self, identifier: &str) -> Result<BookMetadata> {
        let book = self.resolver.resolve(identifier)?;
        let mut container = Container::open(&book)?;
        Ok(read_metadata(&mut container, book.id.as_str())?)
    }

    /// Table of contents of a single book
    pub fn table_of_contents(&self, identifier: &str) -> Result<TableOfContents> {
        let book = self.resolver.resolve(identifier)?;
        let mut container = Container::open(&book)?;
        Ok(read_toc(&mut container, book.id.as_str())?)
    }

    /// Copy the raw bytes of a resource inside a book into `writer`
    pub fn copy_content<W: Write>(
        &self,
        identifier: &str,
        resource: &str,
        writer: &mut W,
    ) -> Result<u64> {
        ContentLocator::new(&self.resolver).copy_to(identifier, resource, writer)
    }
}
