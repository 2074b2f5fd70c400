//! Book identifier type

use serde::{Deserialize, Serialize};
use std::fmt;

/// Archive extension every book identifier ends with
pub const EPUB_EXTENSION: &str = ".epub";

/// Identifier of a book file relative to the library root
///
/// Always `/`-separated and always ending in `.epub`. Only
/// [`PathResolver`](crate::resolver::PathResolver) produces values that are
/// known to exist inside the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name component of the identifier
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BookId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
