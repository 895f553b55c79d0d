//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const DOC_PAGE: &str = include_str!("../assets/doc-page.css");
const BOOK_PAGE: &str = include_str!("../assets/book-page.css");

/// Typography rules for the rendered fragment on doc pages.
///
/// Inlined into each doc page head rather than bundled, so a copied page
/// keeps its content styling without the external stylesheet.
pub(crate) const DOC_CONTENT: &str = include_str!("../assets/doc-content.css");

/// Writes the bundled stylesheet for standalone doc pages
///
/// # Arguments
///
/// * `dir`: Output directory holding doc pages
///
/// # Errors
///
/// Returns error if the stylesheet cannot be written
pub fn write_doc_styles(dir: &Path) -> Result<()> {
    write_bundled(dir, &[BASE, DOC_PAGE])
}

/// Writes the bundled stylesheet for book chapter pages
///
/// # Arguments
///
/// * `dir`: Book output directory
///
/// # Errors
///
/// Returns error if the stylesheet cannot be written
pub fn write_book_styles(dir: &Path) -> Result<()> {
    write_bundled(dir, &[BASE, BOOK_PAGE])
}

fn write_bundled(dir: &Path, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join("styles.css"), css)
        .with_context(|| format!("Failed to write stylesheet in: {}", dir.display()))?;
    Ok(())
}
