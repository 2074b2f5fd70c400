//! Error types for Shelf Core

use thiserror::Error;

/// Result type alias using ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Top-level error type for all shelf operations
#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Stream error: {0}")]
    Stream(#[source] std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while opening an archive or one of its entries
#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("Unreadable archive {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Unreadable entry {name}: {source}")]
    EntryUnreadable {
        name: String,
        #[source]
        source: zip::result::ZipError,
    },
}

/// Errors raised while decoding an OPF or NCX document
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Container(#[from] ContainerError),

    #[error("Missing document: {0}")]
    MissingDocument(String),

    #[error("Malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed document: {0}")]
    Malformed(String),
}

impl From<ContainerError> for ShelfError {
    fn from(err: ContainerError) -> Self {
        match err {
            ContainerError::EntryNotFound(name) => ShelfError::NotFound(name),
            err @ ContainerError::Unreadable { .. } => ShelfError::Decode(err.into()),
            err @ ContainerError::EntryUnreadable { .. } => {
                ShelfError::Stream(std::io::Error::new(std::io::ErrorKind::Other, err))
            }
        }
    }
}

impl ShelfError {
    /// Whether the error is the caller's fault rather than the server's
    pub fn is_client_error(&self) -> bool {
        matches!(self, ShelfError::InvalidInput(_) | ShelfError::NotFound(_))
    }
}
