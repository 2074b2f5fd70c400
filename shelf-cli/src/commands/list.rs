//! List command implementation

use anyhow::{Context, Result};
use shelf_core::Shelf;

/// List books whose file name contains `filter`
pub fn list(shelf: &Shelf, filter: &str, json: bool) -> Result<()> {
    let books = shelf
        .list_books(filter)
        .with_context(|| format!("Failed to scan {}", shelf.resolver().root().display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&books)?);
        return Ok(());
    }

    for book in &books {
        let title = if book.title.is_empty() {
            "(untitled)"
        } else {
            book.title.as_str()
        };
        if book.creator.is_empty() {
            println!("{}  [{}]", title, book.base_url);
        } else {
            println!("{} / {}  [{}]", title, book.creator, book.base_url);
        }
    }
    tracing::info!("{} books", books.len());

    Ok(())
}
