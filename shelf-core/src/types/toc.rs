//! Table of contents types decoded from the NCX navigation document

use serde::{Deserialize, Serialize};

/// Chapters of a book in reading order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableOfContents {
    pub chapters: Vec<ChapterEntry>,
}

impl TableOfContents {
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }
}

/// A single navigation point
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChapterEntry {
    /// Identifier of the owning book
    #[serde(rename = "baseUrl", default, skip_serializing_if = "String::is_empty")]
    pub base_url: String,

    /// Display title
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Reference to the chapter document inside the archive
    #[serde(default)]
    pub content: ContentRef,
}

/// Archive-relative location of chapter content (`content[@src]`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentRef {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl ChapterEntry {
    /// Create a new chapter entry
    pub fn new(
        base_url: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            title: title.into(),
            content: ContentRef { url: url.into() },
        }
    }

    /// Archive-relative URL of the chapter document
    pub fn url(&self) -> &str {
        &self.content.url
    }
}
