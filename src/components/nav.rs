//! Book sidebar navigation component

use maud::{Markup, html};

use crate::manifest::{BookEntry, SiteLink};

/// Renders the book chapter navigation
///
/// One link per chapter in manifest order, with the current chapter
/// marked active. External links follow the chapters, open in a new tab
/// and carry a small outward-arrow marker.
///
/// # Arguments
///
/// * `chapters`: Book chapters in navigation order
/// * `current_id`: Id of the chapter being rendered
/// * `links`: External links appended after the chapters
///
/// # Returns
///
/// Sidebar navigation markup
pub fn book_nav(chapters: &[BookEntry], current_id: &str, links: &[SiteLink]) -> Markup {
    html! {
        nav class="nav" {
            @for chapter in chapters {
                @if chapter.id == current_id {
                    a href=(chapter.file_name()) class="active" { (chapter.title) }
                } @else {
                    a href=(chapter.file_name()) { (chapter.title) }
                }
            }
            @for link in links {
                a href=(link.href) target="_blank" {
                    (link.label) " " span class="external-marker" { "↗" }
                }
            }
        }
    }
}
