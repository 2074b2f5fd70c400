//! Cat command implementation

use anyhow::{Context, Result};
use shelf_core::Shelf;
use std::io::Write;

/// Write a raw resource from inside a book to stdout
pub fn cat(shelf: &Shelf, book: &str, resource: &str) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let copied = shelf
        .copy_content(book, resource, &mut out)
        .with_context(|| format!("Failed to read {} from {}", resource, book))?;
    out.flush()?;

    tracing::debug!("Wrote {} bytes", copied);
    Ok(())
}
