//! Raw access to resources stored inside a book

use crate::container::Container;
use crate::decoder::CONTENT_ROOT;
use crate::error::{Result, ShelfError};
use crate::resolver::PathResolver;
use std::io::{self, Write};

/// Streams archive entries addressed relative to the content root
pub struct ContentLocator<'a> {
    resolver: &'a PathResolver,
}

/// Map a resource path to its internal archive path
///
/// Leading slashes are dropped and the rest is placed under `OEBPS/`. The
/// path is zip-scoped, so no filesystem confinement applies to it.
pub fn entry_path(resource: &str) -> Result<String> {
    let resource = resource.trim_start_matches('/');
    if resource.is_empty() {
        return Err(ShelfError::InvalidInput("missing resource path".to_string()));
    }
    Ok(format!("{}/{}", CONTENT_ROOT, resource))
}

impl<'a> ContentLocator<'a> {
    pub fn new(resolver: &'a PathResolver) -> Self {
        Self { resolver }
    }

    /// Copy the raw bytes of a resource into `writer`
    ///
    /// Nothing is written unless the book and entry were both found, so
    /// callers can still pick a response status from the error. Bytes already
    /// written before a mid-stream failure stay written.
    pub fn copy_to<W: Write>(&self, identifier: &str, resource: &str, writer: &mut W) -> Result<u64> {
        let name = entry_path(resource)?;
        let book = self.resolver.resolve(identifier)?;
        let mut container = Container::open(&book)?;
        let mut entry = container.entry(&name)?;

        let copied = io::copy(&mut entry, writer).map_err(ShelfError::Stream)?;
        tracing::debug!("Streamed {} bytes of {} from {}", copied, name, book.id);
        Ok(copied)
    }
}
