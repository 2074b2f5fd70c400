//! Integration tests for shelf-core
//!
//! These tests build small EPUB archives inside a temporary library root and
//! drive the public `Shelf` operations end to end.

use proptest::prelude::*;
use shelf_core::{Shelf, ShelfError};
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

// =============================================================================
// Fixtures
// =============================================================================

fn opf(title: &str, cover: Option<(&str, &str)>) -> String {
    let (meta, item) = match cover {
        Some((id, href)) => (
            format!(r#"<meta name="cover" content="{}"/>"#, id),
            format!(r#"<item id="{}" href="{}" media-type="image/jpeg"/>"#, id, href),
        ),
        None => (String::new(), String::new()),
    };
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<package xmlns="http://www.idpf.org/2007/opf" version="2.0">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/">
    <dc:title>{title}</dc:title>
    <dc:creator>Test Author</dc:creator>
    <dc:description>About {title}</dc:description>
    {meta}
  </metadata>
  <manifest>
    <item id="ncx" href="toc.ncx" media-type="application/x-dtbncx+xml"/>
    {item}
  </manifest>
</package>"#
    )
}

const NCX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ncx xmlns="http://www.daisy.org/z3986/2005/ncx/" version="2005-1">
  <navMap>
    <navPoint id="p1"><navLabel><text>One</text></navLabel><content src="text/ch1.xhtml"/></navPoint>
    <navPoint id="p2"><navLabel><text>Two</text></navLabel><content src="text/ch2.xhtml"/></navPoint>
  </navMap>
</ncx>"#;

/// Chapter body with bytes that must survive untouched
const CHAPTER: &[u8] = b"<html>\r\n<body>caf\xc3\xa9 \x00\xff</body></html>";

fn write_epub(dir: &Path, name: &str, entries: &[(&str, &[u8])]) {
    let file = std::fs::File::create(dir.join(name)).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let stored = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    let deflated =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    writer.start_file("mimetype", stored).unwrap();
    writer.write_all(b"application/epub+zip").unwrap();
    for (entry, data) in entries {
        writer.start_file(*entry, deflated).unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap();
}

fn write_book(dir: &Path, name: &str, title: &str) {
    let opf = opf(title, Some(("cover-image", "images/cover.jpg")));
    write_epub(
        dir,
        name,
        &[
            ("OEBPS/content.opf", opf.as_bytes()),
            ("OEBPS/toc.ncx", NCX.as_bytes()),
            ("OEBPS/text/ch2.xhtml", CHAPTER),
        ],
    );
}

/// `alice.epub` is valid, `bob.epub` is not a zip archive
fn scenario_library() -> (TempDir, Shelf) {
    let dir = TempDir::new().unwrap();
    write_book(dir.path(), "alice.epub", "Alice");
    std::fs::write(dir.path().join("bob.epub"), b"definitely not a zip").unwrap();
    let shelf = Shelf::open(dir.path()).unwrap();
    (dir, shelf)
}

// =============================================================================
// Scenario
// =============================================================================

#[test]
fn test_list_skips_corrupt_book() {
    let (_dir, shelf) = scenario_library();

    let books = shelf.list_books("").unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Alice");
    assert_eq!(books[0].base_url, "alice.epub");
    assert_eq!(books[0].cover_url.as_deref(), Some("images/cover.jpg"));
}

#[test]
fn test_info_for_corrupt_book_is_decode_failure() {
    let (_dir, shelf) = scenario_library();

    let err = shelf.book_info("bob.epub").unwrap_err();
    assert!(matches!(err, ShelfError::Decode(_)), "got {err:?}");
    assert!(!err.is_client_error());
}

#[test]
fn test_missing_content_entry_is_not_found() {
    let (_dir, shelf) = scenario_library();

    let mut out = Vec::new();
    let err = shelf
        .copy_content("alice.epub", "/text/ch1.xhtml", &mut out)
        .unwrap_err();
    assert!(matches!(err, ShelfError::NotFound(_)), "got {err:?}");
    assert!(out.is_empty());
}

// =============================================================================
// Operations
// =============================================================================

#[test]
fn test_partial_failure_isolation() {
    let dir = TempDir::new().unwrap();
    for i in 0..5 {
        write_book(dir.path(), &format!("book{i}.epub"), &format!("Book {i}"));
    }
    std::fs::write(dir.path().join("broken.epub"), b"PK\x03\x04garbage").unwrap();
    write_epub(dir.path(), "no-opf.epub", &[("OEBPS/toc.ncx", NCX.as_bytes())]);
    write_epub(
        dir.path(),
        "bad-xml.epub",
        &[("OEBPS/content.opf", b"<package><metadata></package>")],
    );
    let shelf = Shelf::open(dir.path()).unwrap();

    let books = shelf.list_books("").unwrap();
    let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Book 0", "Book 1", "Book 2", "Book 3", "Book 4"]);
}

#[test]
fn test_list_filter_is_case_sensitive_substring() {
    let dir = TempDir::new().unwrap();
    write_book(dir.path(), "Alice in Wonderland.epub", "Alice");
    write_book(dir.path(), "Through the Looking-Glass.epub", "Glass");
    std::fs::write(dir.path().join("Alice notes.txt"), b"not a book").unwrap();
    std::fs::create_dir(dir.path().join("Alice folder.epub")).unwrap();
    let shelf = Shelf::open(dir.path()).unwrap();

    let books = shelf.list_books("Alice").unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].base_url, "Alice in Wonderland.epub");

    assert!(shelf.list_books("alice").unwrap().is_empty());
    assert!(shelf.list_books("nothing matches").unwrap().is_empty());
    assert_eq!(shelf.list_books("").unwrap().len(), 2);
}

#[test]
fn test_book_info() {
    let (_dir, shelf) = scenario_library();

    let info = shelf.book_info("alice.epub").unwrap();
    assert_eq!(info.title, "Alice");
    assert_eq!(info.creator, "Test Author");
    assert_eq!(info.description, "About Alice");
    assert_eq!(info.cover_url.as_deref(), Some("images/cover.jpg"));
}

#[test]
fn test_book_info_without_cover() {
    let dir = TempDir::new().unwrap();
    let opf = opf("Plain", None);
    write_epub(dir.path(), "plain.epub", &[("OEBPS/content.opf", opf.as_bytes())]);
    let shelf = Shelf::open(dir.path()).unwrap();

    let info = shelf.book_info("plain.epub").unwrap();
    assert_eq!(info.cover_url, None);
    let json = serde_json::to_value(&info).unwrap();
    assert!(json.get("coverUrl").is_none());
}

#[test]
fn test_table_of_contents() {
    let (_dir, shelf) = scenario_library();

    let toc = shelf.table_of_contents("alice.epub").unwrap();
    let titles: Vec<&str> = toc.chapters.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["One", "Two"]);
    assert!(toc.chapters.iter().all(|c| c.base_url == "alice.epub"));
}

#[test]
fn test_unknown_book_is_not_found() {
    let (_dir, shelf) = scenario_library();

    assert!(matches!(
        shelf.book_info("carol.epub"),
        Err(ShelfError::NotFound(_))
    ));
    assert!(matches!(
        shelf.table_of_contents("carol.epub"),
        Err(ShelfError::NotFound(_))
    ));
    assert!(matches!(
        shelf.copy_content("carol.epub", "/text/ch2.xhtml", &mut Vec::new()),
        Err(ShelfError::NotFound(_))
    ));
}

#[test]
fn test_content_round_trip() {
    let (_dir, shelf) = scenario_library();

    let mut out = Vec::new();
    let copied = shelf
        .copy_content("alice.epub", "/text/ch2.xhtml", &mut out)
        .unwrap();
    assert_eq!(copied as usize, CHAPTER.len());
    assert_eq!(out, CHAPTER);
}

#[test]
fn test_fresh_decode_after_file_changes() {
    let (dir, shelf) = scenario_library();
    assert_eq!(shelf.book_info("alice.epub").unwrap().title, "Alice");

    write_book(dir.path(), "alice.epub", "Alice, Revised");
    assert_eq!(shelf.book_info("alice.epub").unwrap().title, "Alice, Revised");
}

// =============================================================================
// Confinement
// =============================================================================

#[test]
fn test_traversal_never_escapes() {
    let outer = TempDir::new().unwrap();
    let root = outer.path().join("library");
    std::fs::create_dir(&root).unwrap();
    write_book(outer.path(), "secret.epub", "Secret");
    write_book(&root, "alice.epub", "Alice");
    let shelf = Shelf::open(&root).unwrap();

    for id in ["../secret.epub", "./../secret.epub", "alice.epub/../../secret.epub"] {
        assert!(matches!(shelf.book_info(id), Err(ShelfError::NotFound(_))), "{id}");
    }
}

proptest! {
    #[test]
    fn prop_resolved_books_stay_inside_root(
        segments in prop::collection::vec(
            prop_oneof![
                Just("..".to_string()),
                Just(".".to_string()),
                Just("".to_string()),
                "[a-z]{1,6}",
            ],
            0..6,
        ),
        absolute in any::<bool>(),
    ) {
        let outer = TempDir::new().unwrap();
        let root = outer.path().join("library");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(outer.path().join("book.epub"), b"outside").unwrap();
        std::fs::write(root.join("book.epub"), b"inside").unwrap();
        let shelf = Shelf::open(&root).unwrap();

        let mut id = segments.join("/");
        if !id.is_empty() {
            id.push('/');
        }
        id.push_str("book.epub");
        if absolute {
            id.insert(0, '/');
        }

        if let Ok(book) = shelf.resolver().resolve(&id) {
            prop_assert!(book.path.starts_with(shelf.resolver().root()));
            prop_assert_eq!(std::fs::read(&book.path).unwrap(), b"inside".to_vec());
        }
    }
}
