//! Confinement of untrusted book identifiers to the library root

use crate::error::{Result, ShelfError};
use crate::types::{BookId, EPUB_EXTENSION};
use std::path::{Component, Path, PathBuf};

/// Maps caller-supplied identifiers to files inside a fixed root directory
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
}

/// A book identifier that was confirmed to name an existing file under the root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBook {
    pub id: BookId,
    pub path: PathBuf,
}

impl PathResolver {
    /// Create a resolver for the given root directory
    ///
    /// The root is canonicalized once here so every later containment check
    /// compares canonical paths.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let canonical = root.canonicalize().map_err(|e| {
            ShelfError::NotFound(format!("library root {}: {}", root.display(), e))
        })?;
        if !canonical.is_dir() {
            return Err(ShelfError::InvalidInput(format!(
                "library root {} is not a directory",
                root.display()
            )));
        }
        Ok(Self { root: canonical })
    }

    /// Canonical library root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve an identifier to an existing file inside the root
    pub fn resolve(&self, identifier: &str) -> Result<ResolvedBook> {
        if identifier.is_empty() {
            return Err(ShelfError::InvalidInput("missing book identifier".to_string()));
        }
        if !identifier.ends_with(EPUB_EXTENSION) {
            return Err(ShelfError::InvalidInput(format!(
                "book identifier must end in {}: {}",
                EPUB_EXTENSION, identifier
            )));
        }

        // Normalize path components, rejecting any that escape the root
        let mut normalized = PathBuf::new();
        let mut parts = Vec::new();
        for component in Path::new(identifier).components() {
            match component {
                Component::Normal(c) => {
                    normalized.push(c);
                    parts.push(c.to_string_lossy().into_owned());
                }
                Component::CurDir => {}
                Component::ParentDir | Component::Prefix(_) | Component::RootDir => {
                    tracing::warn!("Path traversal attempt detected: {:?}", identifier);
                    return Err(ShelfError::NotFound(identifier.to_string()));
                }
            }
        }
        if parts.is_empty() {
            return Err(ShelfError::InvalidInput("missing book identifier".to_string()));
        }

        let candidate = self.root.join(&normalized);
        match candidate.try_exists() {
            Ok(true) => {}
            Ok(false) => return Err(ShelfError::NotFound(identifier.to_string())),
            Err(e) => {
                tracing::debug!("Could not stat {}: {}", candidate.display(), e);
                return Err(ShelfError::NotFound(identifier.to_string()));
            }
        }

        // Symlinks may still point outside the root
        let canonical = candidate
            .canonicalize()
            .map_err(|_| ShelfError::NotFound(identifier.to_string()))?;
        if !canonical.starts_with(&self.root) {
            tracing::warn!(
                "Identifier {:?} resolves outside the library root",
                identifier
            );
            return Err(ShelfError::NotFound(identifier.to_string()));
        }
        if !canonical.is_file() {
            return Err(ShelfError::NotFound(identifier.to_string()));
        }

        Ok(ResolvedBook {
            id: BookId::new(parts.join("/")),
            path: canonical,
        })
    }
}

/// Split a request path into book identifier and archive resource path
///
/// The identifier is everything up to and including the first `.epub`; the
/// resource path is whatever follows it (possibly empty). Returns `None`
/// when the path holds no `.epub` marker.
pub fn split_book_path(path: &str) -> Option<(&str, &str)> {
    let end = path.find(EPUB_EXTENSION)? + EPUB_EXTENSION.len();
    Some(path.split_at(end))
}
