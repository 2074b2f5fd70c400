//! Book metadata types decoded from the OPF package document

use serde::{Deserialize, Serialize};

/// Bibliographic record for one book
///
/// Field names on the wire follow the reader front-end: `baseUrl`,
/// `coverUrl`, `name`, `intro` and `author`. Empty values are left out.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookMetadata {
    /// Identifier of the book this record was decoded from
    #[serde(rename = "baseUrl", default, skip_serializing_if = "String::is_empty")]
    pub base_url: String,

    /// Manifest href of the cover image, if the cover join succeeded
    #[serde(rename = "coverUrl", default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,

    /// Book title
    #[serde(rename = "name", default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Book description/summary
    #[serde(rename = "intro", default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Author
    #[serde(rename = "author", default, skip_serializing_if = "String::is_empty")]
    pub creator: String,
}

/// A `<meta name=".." content=".."/>` declaration from the OPF metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaEntry {
    pub name: String,
    pub content: String,
}

/// An `<item id=".." href=".."/>` declaration from the OPF manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub id: String,
    pub href: String,
}
