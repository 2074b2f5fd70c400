//! OPF package document decoder

use super::xml::{attribute, below_root, walk, Node};
use super::{open_document, OPF_PATH};
use crate::container::Container;
use crate::error::DecodeError;
use crate::types::{BookMetadata, ManifestEntry, MetaEntry};
use std::io::{BufReader, Read, Seek};

/// The subset of `content.opf` this crate understands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpfDocument {
    pub title: Option<String>,
    pub description: Option<String>,
    pub creator: Option<String>,
    pub meta: Vec<MetaEntry>,
    pub manifest: Vec<ManifestEntry>,
}

#[derive(Clone, Copy)]
enum TextField {
    Title,
    Description,
    Creator,
}

impl TextField {
    fn at(path: &[String]) -> Option<Self> {
        if below_root(path, &["metadata", "title"]) {
            Some(Self::Title)
        } else if below_root(path, &["metadata", "description"]) {
            Some(Self::Description)
        } else if below_root(path, &["metadata", "creator"]) {
            Some(Self::Creator)
        } else {
            None
        }
    }
}

impl OpfDocument {
    /// Parse an OPF document
    ///
    /// Recognised elements, by local name below the root:
    /// `metadata/title`, `metadata/description`, `metadata/creator`
    /// (a repeated element overrides earlier ones), `metadata/meta[@name, @content]` and
    /// `manifest/item[@id, @href]` (all occurrences, in document order).
    pub fn parse<R: Read>(reader: R) -> Result<Self, DecodeError> {
        let mut doc = OpfDocument::default();
        let mut pending: Option<(TextField, String)> = None;

        walk(BufReader::new(reader), |path, node| {
            match node {
                Node::Open(element) => {
                    if let Some(field) = TextField::at(path) {
                        pending = Some((field, String::new()));
                    } else if below_root(path, &["metadata", "meta"]) {
                        doc.meta.push(MetaEntry {
                            name: attribute(element, "name")?.unwrap_or_default(),
                            content: attribute(element, "content")?.unwrap_or_default(),
                        });
                    } else if below_root(path, &["manifest", "item"]) {
                        doc.manifest.push(ManifestEntry {
                            id: attribute(element, "id")?.unwrap_or_default(),
                            href: attribute(element, "href")?.unwrap_or_default(),
                        });
                    }
                }
                Node::Text(text) => {
                    if let Some((_, buf)) = pending.as_mut() {
                        if TextField::at(path).is_some() {
                            buf.push_str(text);
                        }
                    }
                }
                Node::Close => {
                    if TextField::at(path).is_some() {
                        if let Some((field, text)) = pending.take() {
                            *doc.field_mut(field) = Some(text.trim().to_string());
                        }
                    }
                }
            }
            Ok(())
        })?;

        Ok(doc)
    }

    fn field_mut(&mut self, field: TextField) -> &mut Option<String> {
        match field {
            TextField::Title => &mut self.title,
            TextField::Description => &mut self.description,
            TextField::Creator => &mut self.creator,
        }
    }

    /// Resolve the cover image href
    ///
    /// Takes the first `<meta name="cover">`, uses its content as a manifest
    /// id and returns that item's href. Any missing link in the chain, or an
    /// empty href, yields `None`.
    pub fn cover_href(&self) -> Option<&str> {
        let cover_id = self.meta.iter().find(|m| m.name == "cover")?.content.as_str();
        self.manifest
            .iter()
            .find(|item| item.id == cover_id)
            .map(|item| item.href.as_str())
            .filter(|href| !href.is_empty())
    }

    /// Build the public metadata record for the book identified by `base_url`
    pub fn into_metadata(self, base_url: impl Into<String>) -> BookMetadata {
        let cover_url = self.cover_href().map(str::to_string);
        BookMetadata {
            base_url: base_url.into(),
            cover_url,
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            creator: self.creator.unwrap_or_default(),
        }
    }
}

/// Decode `OEBPS/content.opf` from an opened container
pub fn read_metadata<R: Read + Seek>(
    container: &mut Container<R>,
    base_url: &str,
) -> Result<BookMetadata, DecodeError> {
    let entry = open_document(container, OPF_PATH)?;
    let doc = OpfDocument::parse(entry)?;
    Ok(doc.into_metadata(base_url))
}
