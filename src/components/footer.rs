//! Footer components for the two page flavors

use maud::{Markup, html};

use crate::locale::Lang;
use crate::manifest::{SiteLink, SiteMeta};

/// Renders the standalone doc page footer
///
/// Shows a localized attribution line when an author is configured and a
/// bullet-separated row of repository, package and license links. Absent
/// links are simply skipped.
///
/// # Arguments
///
/// * `site`: Site metadata holding the footer links
/// * `lang`: Page language for the attribution string
///
/// # Returns
///
/// Footer markup for a doc page
pub fn doc_footer(site: &SiteMeta, lang: Lang) -> Markup {
    let links: Vec<&SiteLink> = [&site.repository, &site.package, &site.license]
        .into_iter()
        .flatten()
        .collect();

    html! {
        footer class="footer" {
            div class="footer-content" {
                @if let Some(author) = &site.author {
                    p {
                        (lang.made_with()) " ❤️ by "
                        a href=(author.href) target="_blank" { (author.label) }
                    }
                }
                @if !links.is_empty() {
                    p class="footer-links" {
                        @for (i, link) in links.iter().enumerate() {
                            @if i > 0 { span { "•" } }
                            a href=(link.href) target="_blank" { (link.label) }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the book main-content footer with the license link
pub fn license_footer(site: &SiteMeta) -> Markup {
    html! {
        footer class="footer" {
            @if let Some(license) = &site.license {
                p {
                    a href=(license.href) target="_blank" { (license.label) }
                }
            }
        }
    }
}
