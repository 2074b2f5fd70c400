//! Zip container access for EPUB files

use crate::error::ContainerError;
use crate::resolver::ResolvedBook;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use zip::result::ZipError;
use zip::ZipArchive;

/// An opened EPUB archive
///
/// The archive handle is owned by this value and released when it is dropped.
pub struct Container<R = BufReader<File>> {
    name: String,
    archive: ZipArchive<R>,
}

impl Container {
    /// Open a resolved book file as a zip archive
    pub fn open(book: &ResolvedBook) -> Result<Self, ContainerError> {
        let file = File::open(&book.path).map_err(|e| ContainerError::Unreadable {
            path: book.id.to_string(),
            source: ZipError::Io(e),
        })?;
        Self::from_reader(book.id.as_str(), BufReader::new(file))
    }
}

impl<R: Read + Seek> Container<R> {
    /// Wrap any seekable reader holding a zip archive
    pub fn from_reader(name: impl Into<String>, reader: R) -> Result<Self, ContainerError> {
        let name = name.into();
        match ZipArchive::new(reader) {
            Ok(archive) => Ok(Self { name, archive }),
            Err(source) => Err(ContainerError::Unreadable { path: name, source }),
        }
    }

    /// Name the container was opened under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of entries in the archive
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }

    /// Whether an entry with the exact internal path exists
    pub fn contains(&self, name: &str) -> bool {
        self.archive.index_for_name(name).is_some()
    }

    /// Internal paths of all entries, in central directory order
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.archive.file_names()
    }

    /// Open a named entry for streamed reading
    pub fn entry(&mut self, name: &str) -> Result<impl Read + '_, ContainerError> {
        match self.archive.by_name(name) {
            Ok(file) => Ok(file),
            Err(ZipError::FileNotFound) => Err(ContainerError::EntryNotFound(name.to_string())),
            Err(source) => Err(ContainerError::EntryUnreadable {
                name: name.to_string(),
                source,
            }),
        }
    }
}
