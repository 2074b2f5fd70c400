//! Info command implementation

use anyhow::{Context, Result};
use shelf_core::Shelf;

/// Display metadata of a book
pub fn info(shelf: &Shelf, book: &str, json: bool) -> Result<()> {
    let metadata = shelf
        .book_info(book)
        .with_context(|| format!("Failed to read {}", book))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
    } else {
        println!("Book:        {}", metadata.base_url);
        println!("Title:       {}", metadata.title);
        if !metadata.creator.is_empty() {
            println!("Author:      {}", metadata.creator);
        }
        if !metadata.description.is_empty() {
            println!("Description: {}", metadata.description);
        }
        if let Some(cover) = &metadata.cover_url {
            println!("Cover:       {}", cover);
        }
    }

    Ok(())
}
