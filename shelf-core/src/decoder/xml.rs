//! Minimal event walker over quick-xml that tracks the element path

use crate::error::DecodeError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;

/// A structural event together with the path of local names leading to it
pub(crate) enum Node<'a> {
    /// An element was opened; the path already ends with its name
    Open(&'a BytesStart<'a>),
    /// Character data directly inside the element at the end of the path
    Text(&'a str),
    /// The element at the end of the path is about to close
    Close,
}

/// Walk a whole document, calling `visit` for every element and text node
///
/// Paths hold local names only, so namespace prefixes such as `dc:` and
/// `opf:` do not matter. Malformed markup, an unclosed element or a missing
/// root element all fail the walk.
pub(crate) fn walk<R, F>(reader: R, mut visit: F) -> Result<(), DecodeError>
where
    R: BufRead,
    F: FnMut(&[String], Node<'_>) -> Result<(), DecodeError>,
{
    let mut reader = Reader::from_reader(reader);
    reader.config_mut().trim_text(true);
    reader.config_mut().expand_empty_elements = true;

    let mut path: Vec<String> = Vec::new();
    let mut seen_root = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                seen_root = true;
                path.push(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
                visit(&path, Node::Open(e))?;
            }
            Event::End(_) => {
                if path.is_empty() {
                    return Err(DecodeError::Malformed("unexpected closing tag".to_string()));
                }
                visit(&path, Node::Close)?;
                path.pop();
            }
            Event::Text(ref t) => {
                if !path.is_empty() {
                    let text = t.unescape()?;
                    visit(&path, Node::Text(&text))?;
                }
            }
            Event::CData(ref c) => {
                if !path.is_empty() {
                    let text = String::from_utf8_lossy(c);
                    visit(&path, Node::Text(text.trim()))?;
                }
            }
            Event::Eof => {
                if let Some(open) = path.last() {
                    return Err(DecodeError::Malformed(format!(
                        "unexpected end of document inside <{}>",
                        open
                    )));
                }
                if !seen_root {
                    return Err(DecodeError::Malformed("no root element".to_string()));
                }
                break;
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Value of the attribute with the given local name, unescaped
pub(crate) fn attribute(element: &BytesStart<'_>, name: &str) -> Result<Option<String>, DecodeError> {
    for attr in element.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.local_name().as_ref() == name.as_bytes() {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Whether `path` is exactly the given sequence of names below the root element
pub(crate) fn below_root(path: &[String], names: &[&str]) -> bool {
    path.len() == names.len() + 1 && path[1..].iter().zip(names).all(|(a, b)| a == b)
}
