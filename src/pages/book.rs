//! Book chapter page generation

use maud::{Markup, PreEscaped, html};

use crate::components::footer::license_footer;
use crate::components::layout::document_shell;
use crate::components::nav::book_nav;
use crate::manifest::{BookEntry, BookManifest, SiteMeta};

/// Data container for book chapter generation
pub struct BookPageData<'a> {
    pub entry: &'a BookEntry,
    pub book: &'a BookManifest,
    pub site: &'a SiteMeta,
    /// Rendered markdown fragment
    pub content: &'a str,
}

/// Generates a book chapter page
///
/// Chapters share a sidebar with the logo block, the chapter navigation
/// (current chapter active), an optional language-switch link, and the
/// repository/package links. The main area holds the rendered fragment
/// and a license footer. All in-book hrefs are sibling-relative; the root
/// index promotion rebases them textually afterwards.
///
/// # Arguments
///
/// * `data`: Book page data container
///
/// # Returns
///
/// Complete HTML markup for the chapter
pub fn generate(data: BookPageData<'_>) -> Markup {
    let body = html! {
        div class="sidebar" {
            div class="logo" {
                h2 { (data.site.name) }
                @if let Some(tagline) = &data.site.tagline {
                    p { (tagline) }
                }
            }
            (book_nav(&data.book.pages, &data.entry.id, &data.book.links))
            @if let Some(en_link) = &data.entry.en_link {
                div class="lang-switch" {
                    a href=(en_link) target="_blank" class="en-link" { "🇬🇧 English version" }
                }
            }
            div class="footer-links" {
                @if let Some(repository) = &data.site.repository {
                    a href=(repository.href) target="_blank" { (repository.label) }
                }
                @if let Some(package) = &data.site.package {
                    a href=(package.href) target="_blank" { (package.label) }
                }
            }
        }
        div class="main-content" {
            div class="content" {
                (PreEscaped(data.content))
            }
            (license_footer(data.site))
        }
    };

    document_shell(
        data.book.lang,
        &data.entry.title,
        &data.site.name,
        "styles.css",
        None,
        body,
    )
}
