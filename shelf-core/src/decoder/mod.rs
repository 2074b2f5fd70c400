//! Decoders for the well-known EPUB documents
//!
//! Each document type has its own explicit parser built on [`xml::walk`],
//! so the mapping from elements to fields is visible in code.

mod ncx;
mod opf;
mod xml;

pub use ncx::{parse_toc, read_toc};
pub use opf::{read_metadata, OpfDocument};

use crate::container::Container;
use crate::error::{ContainerError, DecodeError};
use std::io::{Read, Seek};

/// Directory inside the archive holding all book resources
pub const CONTENT_ROOT: &str = "OEBPS";

/// Package document carrying metadata and manifest
pub const OPF_PATH: &str = "OEBPS/content.opf";

/// Navigation document carrying the table of contents
pub const NCX_PATH: &str = "OEBPS/toc.ncx";

/// Open a well-known document, reporting its absence as a decode failure
fn open_document<'a, R: Read + Seek>(
    container: &'a mut Container<R>,
    name: &str,
) -> Result<impl Read + 'a, DecodeError> {
    container.entry(name).map_err(|e| match e {
        ContainerError::EntryNotFound(name) => DecodeError::MissingDocument(name),
        other => DecodeError::Container(other),
    })
}
