//! Library scanning across every book in the root directory

use crate::container::Container;
use crate::decoder::read_metadata;
use crate::error::Result;
use crate::resolver::PathResolver;
use crate::types::{BookMetadata, EPUB_EXTENSION};
use rayon::prelude::*;
use std::io;
use std::path::PathBuf;

/// Lists and decodes the books directly under a library root
pub struct LibraryScanner<'a> {
    resolver: &'a PathResolver,
}

impl<'a> LibraryScanner<'a> {
    /// Create a new library scanner
    pub fn new(resolver: &'a PathResolver) -> Self {
        Self { resolver }
    }

    /// File names of candidate books whose name contains `filter`
    ///
    /// Only names ending in `.epub` are considered. The result is sorted by
    /// name so listings are stable across platforms.
    pub fn candidates(&self, filter: &str) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(self.resolver.root())?;
        Ok(matching_names(entries.map(|entry| entry.map(|e| e.path())), filter))
    }

    /// Decode metadata for every matching book
    ///
    /// A book that cannot be resolved, opened or decoded is logged and left
    /// out; it never fails the scan. Only an unreadable root directory is an
    /// error.
    pub fn scan(&self, filter: &str) -> Result<Vec<BookMetadata>> {
        tracing::debug!("Scanning {} for {:?}", self.resolver.root().display(), filter);
        let start = std::time::Instant::now();

        let names = self.candidates(filter)?;
        let books: Vec<BookMetadata> = names
            .par_iter()
            .filter_map(|name| match self.load(name) {
                Ok(metadata) => Some(metadata),
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", name, e);
                    None
                }
            })
            .collect();

        tracing::debug!(
            "Library scan complete: {} of {} books in {:?}",
            books.len(),
            names.len(),
            start.elapsed()
        );

        Ok(books)
    }

    fn load(&self, name: &str) -> Result<BookMetadata> {
        let book = self.resolver.resolve(name)?;
        let mut container = Container::open(&book)?;
        Ok(read_metadata(&mut container, book.id.as_str())?)
    }
}

/// Sorted `.epub` file names among `entries` that contain `filter`
///
/// An entry that failed to enumerate is logged and skipped.
fn matching_names<I>(entries: I, filter: &str) -> Vec<String>
where
    I: IntoIterator<Item = io::Result<PathBuf>>,
{
    let mut names = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("Skipping unreadable directory entry: {}", e);
                continue;
            }
        };
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            tracing::debug!("Skipping non UTF-8 file name: {:?}", path);
            continue;
        };
        if !name.ends_with(EPUB_EXTENSION) || !name.contains(filter) {
            continue;
        }
        // Follows symlinks; the resolver re-checks containment later
        match path.metadata() {
            Ok(meta) if meta.is_file() => names.push(name.to_string()),
            Ok(_) => {}
            Err(e) => tracing::debug!("Skipping {}: {}", name, e),
        }
    }
    names.sort();
    names
}
