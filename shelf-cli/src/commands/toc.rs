//! Table of contents command implementation

use anyhow::{Context, Result};
use shelf_core::Shelf;

/// Display the table of contents of a book
pub fn toc(shelf: &Shelf, book: &str, json: bool) -> Result<()> {
    let toc = shelf
        .table_of_contents(book)
        .with_context(|| format!("Failed to read table of contents of {}", book))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&toc)?);
        return Ok(());
    }

    let width = toc.len().to_string().len();
    for (i, chapter) in toc.chapters.iter().enumerate() {
        println!("{:>width$}. {}  ({})", i + 1, chapter.title, chapter.url());
    }

    Ok(())
}
