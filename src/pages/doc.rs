//! Standalone doc page generation

use maud::{Markup, PreEscaped, html};

use crate::assets;
use crate::components::footer::doc_footer;
use crate::components::layout::document_shell;
use crate::locale::Lang;
use crate::manifest::SiteMeta;
use crate::util::relative_root;

/// Data container for doc page generation
pub struct DocPageData<'a> {
    pub title: &'a str,
    pub lang: Lang,
    pub site: &'a SiteMeta,
    /// Rendered markdown fragment
    pub content: &'a str,
    /// Directory levels between this page and the output root
    pub depth: usize,
}

/// Generates a standalone doc page
///
/// Wraps the rendered fragment in the doc chrome: a site header with the
/// name as logo link and a localized back-to-home link, the content area,
/// and the attribution footer. The logo and back links climb to the
/// generated root index via a prefix derived from the page depth; the
/// stylesheet sits next to the page. Content-area typography rules are
/// inlined so a doc page stays readable even if the bundled stylesheet
/// is missing.
///
/// # Arguments
///
/// * `data`: Doc page data container
///
/// # Returns
///
/// Complete HTML markup for the page
pub fn generate(data: DocPageData<'_>) -> Markup {
    let home = format!("{}index.html", relative_root(data.depth));

    let body = html! {
        header class="header" {
            div class="container" {
                div class="header-content" {
                    h1 class="logo" {
                        a href=(home) style="color: inherit; text-decoration: none;" {
                            (data.site.name)
                        }
                    }
                    nav class="nav" {
                        a href=(home) class="back-link" { (data.lang.back_to_home()) }
                    }
                }
            }
        }
        div class="container" {
            main class="content" {
                div class="doc-content" {
                    (PreEscaped(data.content))
                }
                (doc_footer(data.site, data.lang))
            }
        }
    };

    document_shell(
        data.lang,
        data.title,
        &data.site.name,
        "styles.css",
        Some(assets::DOC_CONTENT),
        body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteMeta {
        SiteMeta {
            name: "my-config".into(),
            ..SiteMeta::default()
        }
    }

    #[test]
    fn test_doc_page_embeds_content_unescaped() {
        // Arrange
        let site = site();
        let data = DocPageData {
            title: "Style Guide",
            lang: Lang::En,
            site: &site,
            content: "<h1>Rules</h1>\n<p>text</p>",
            depth: 1,
        };

        // Act
        let html = generate(data).into_string();

        // Assert
        assert!(
            html.contains("<div class=\"doc-content\"><h1>Rules</h1>\n<p>text</p></div>"),
            "Rendered fragment must be embedded verbatim"
        );
        assert!(html.contains("<title>Style Guide - my-config</title>"));
    }

    #[test]
    fn test_doc_page_links_climb_to_root() {
        // Arrange
        let site = site();
        let data = DocPageData {
            title: "T",
            lang: Lang::Ru,
            site: &site,
            content: "",
            depth: 1,
        };

        // Act
        let html = generate(data).into_string();

        // Assert
        assert!(
            html.contains("<a href=\"../index.html\" class=\"back-link\">← Назад на главную</a>"),
            "Back link should climb one level and be localized"
        );
        assert!(html.contains("<link rel=\"stylesheet\" href=\"styles.css\">"));
    }

    #[test]
    fn test_root_level_doc_page_links_stay_local() {
        // Arrange
        let site = site();
        let data = DocPageData {
            title: "T",
            lang: Lang::En,
            site: &site,
            content: "",
            depth: 0,
        };

        // Act
        let html = generate(data).into_string();

        // Assert
        assert!(html.contains("href=\"index.html\""));
        assert!(html.contains("← Back to Home"));
    }
}
