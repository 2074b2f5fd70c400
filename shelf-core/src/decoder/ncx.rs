//! NCX navigation document decoder

use super::xml::{attribute, below_root, walk, Node};
use super::{open_document, NCX_PATH};
use crate::container::Container;
use crate::error::DecodeError;
use crate::types::{ChapterEntry, TableOfContents};
use std::io::{BufReader, Read, Seek};

const NAV_POINT: &[&str] = &["navMap", "navPoint"];
const NAV_LABEL_TEXT: &[&str] = &["navMap", "navPoint", "navLabel", "text"];
const NAV_CONTENT: &[&str] = &["navMap", "navPoint", "content"];

/// Parse an NCX document into a table of contents
///
/// Every `navMap/navPoint` directly below the root becomes one chapter, in
/// document order, titled by its `navLabel/text` and pointing at its
/// `content[@src]`. When either repeats the last one is kept. Each chapter is
/// stamped with `base_url`.
pub fn parse_toc<R: Read>(reader: R, base_url: &str) -> Result<TableOfContents, DecodeError> {
    let mut toc = TableOfContents::default();
    let mut current: Option<ChapterEntry> = None;
    let mut label = String::new();

    walk(BufReader::new(reader), |path, node| {
        match node {
            Node::Open(element) => {
                if below_root(path, NAV_POINT) {
                    current = Some(ChapterEntry::new(base_url, "", ""));
                    label.clear();
                } else if below_root(path, NAV_CONTENT) {
                    let src = attribute(element, "src")?;
                    if let (Some(chapter), Some(src)) = (current.as_mut(), src) {
                        chapter.content.url = src;
                    }
                }
            }
            Node::Text(text) => {
                if below_root(path, NAV_LABEL_TEXT) {
                    label.push_str(text);
                }
            }
            Node::Close => {
                if below_root(path, NAV_LABEL_TEXT) {
                    if let Some(chapter) = current.as_mut() {
                        chapter.title = label.trim().to_string();
                    }
                    label.clear();
                } else if below_root(path, NAV_POINT) {
                    if let Some(chapter) = current.take() {
                        toc.chapters.push(chapter);
                    }
                }
            }
        }
        Ok(())
    })?;

    Ok(toc)
}

/// Decode `OEBPS/toc.ncx` from an opened container
pub fn read_toc<R: Read + Seek>(
    container: &mut Container<R>,
    base_url: &str,
) -> Result<TableOfContents, DecodeError> {
    let entry = open_document(container, NCX_PATH)?;
    parse_toc(entry, base_url)
}
