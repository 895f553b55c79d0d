//! Build orchestration: rendering manifest entries into pages on disk.

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets;
use crate::manifest::{BookManifest, PageEntry, SiteMeta};
use crate::markdown::MarkdownRenderer;
use crate::pages::book::{self, BookPageData};
use crate::pages::doc::{self, DocPageData};
use crate::util::depth_of;

/// What one build run produced, for the summary line and browser preview.
#[derive(Debug, Default)]
pub struct BuildSummary {
    /// Standalone doc pages written, in manifest order
    pub doc_pages: Vec<PathBuf>,
    /// Book chapter pages written, in manifest order
    pub book_pages: Vec<PathBuf>,
    /// Promoted root index, when the book has an `index` chapter
    pub root_index: Option<PathBuf>,
}

impl BuildSummary {
    /// Returns the page to open in the browser preview.
    ///
    /// The promoted root index when present, otherwise the first page
    /// written in this run.
    pub fn preview_target(&self) -> Option<&Path> {
        self.root_index
            .as_deref()
            .or_else(|| self.doc_pages.first().map(PathBuf::as_path))
            .or_else(|| self.book_pages.first().map(PathBuf::as_path))
    }
}

/// Builds every standalone doc page and its stylesheets.
///
/// Each entry's markdown input is rendered, wrapped in the doc page
/// template, and written to its output path; one bundled `styles.css` is
/// written into every distinct directory that received a page.
///
/// # Arguments
///
/// * `renderer`: Markdown renderer shared across entries
/// * `site`: Site metadata for the page chrome
/// * `entries`: Page records in manifest order
/// * `docs_dir`: Directory markdown inputs are resolved against
/// * `output_dir`: Directory outputs are resolved against
///
/// # Returns
///
/// Written page paths in manifest order
///
/// # Errors
///
/// Returns error if a markdown input cannot be read or an output cannot
/// be written.
pub fn build_doc_pages(
    renderer: &MarkdownRenderer,
    site: &SiteMeta,
    entries: &[PageEntry],
    docs_dir: &Path,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(entries.len());
    let mut style_dirs = BTreeSet::new();

    for entry in entries {
        let content = renderer.render_file(docs_dir.join(&entry.input))?;
        let markup = doc::generate(DocPageData {
            title: &entry.title,
            lang: entry.lang,
            site,
            content: &content,
            depth: depth_of(Path::new(&entry.output)),
        });

        let output_path = output_dir.join(&entry.output);
        write_page(&output_path, &markup.into_string())?;
        println!("Generated: {}", entry.output);

        if let Some(parent) = output_path.parent() {
            style_dirs.insert(parent.to_path_buf());
        }
        written.push(output_path);
    }

    for dir in &style_dirs {
        assets::write_doc_styles(dir)?;
    }

    Ok(written)
}

/// Builds the book: every chapter page, the book stylesheet, and the
/// promoted root index.
///
/// Chapters land in `<output>/<book.dir>/<id>.html`. The chapter with id
/// `index` is additionally written to `<output>/index.html` with its
/// hrefs rebased into the book directory; a book without an `index`
/// chapter skips the promotion with a warning.
///
/// # Arguments
///
/// * `renderer`: Markdown renderer shared across chapters
/// * `site`: Site metadata for the page chrome
/// * `book`: Book manifest
/// * `docs_dir`: Directory markdown inputs are resolved against
/// * `output_dir`: Directory outputs are resolved against
///
/// # Returns
///
/// Written chapter paths in manifest order and the promoted root index
/// path when one was produced.
///
/// # Errors
///
/// Returns error if a markdown input cannot be read or an output cannot
/// be written.
pub fn build_book(
    renderer: &MarkdownRenderer,
    site: &SiteMeta,
    book: &BookManifest,
    docs_dir: &Path,
    output_dir: &Path,
) -> Result<(Vec<PathBuf>, Option<PathBuf>)> {
    let book_dir = output_dir.join(&book.dir);
    let mut written = Vec::with_capacity(book.pages.len());
    let mut index_html = None;

    for entry in &book.pages {
        let content = renderer.render_file(docs_dir.join(&entry.input))?;
        let markup = book::generate(BookPageData {
            entry,
            book,
            site,
            content: &content,
        });
        let html = markup.into_string();

        let output_path = book_dir.join(entry.file_name());
        write_page(&output_path, &html)?;
        println!("Generated: {}/{}", book.dir, entry.file_name());

        if entry.id == "index" {
            index_html = Some(html);
        }
        written.push(output_path);
    }

    assets::write_book_styles(&book_dir)?;

    let root_index = match index_html {
        Some(html) => {
            let root_path = output_dir.join("index.html");
            write_page(&root_path, &promote_root_index(&html, book))?;
            println!("Generated: index.html");
            Some(root_path)
        }
        None => {
            eprintln!("Warning: book has no index chapter, skipping root index");
            None
        }
    };

    Ok((written, root_index))
}

/// Rebases an index chapter's hrefs for the output root.
///
/// The root copy lives one level above the book directory, so every other
/// chapter's nav href and the stylesheet href get the book directory
/// prefixed. First occurrence only per href, matching the one nav link
/// and one stylesheet link a chapter page carries; the index chapter's
/// own href and absolute URLs are left alone.
fn promote_root_index(html: &str, book: &BookManifest) -> String {
    let mut html = html.to_string();
    for entry in &book.pages {
        if entry.id == "index" {
            continue;
        }
        let from = format!("href=\"{}\"", entry.file_name());
        let to = format!("href=\"{}/{}\"", book.dir, entry.file_name());
        html = html.replacen(&from, &to, 1);
    }
    html = html.replacen(
        "href=\"styles.css\"",
        &format!("href=\"{}/styles.css\"", book.dir),
        1,
    );
    html
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("Failed to write page: {}", path.display()))
}
