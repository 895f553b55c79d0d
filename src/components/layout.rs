//! Document shell component

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::locale::Lang;

/// Wraps page content with the standard HTML document structure
///
/// Provides consistent DOCTYPE, html, head and body structure across both
/// page flavors. The shell handles charset, viewport, the title suffix
/// and stylesheet loading while the caller provides the page body.
///
/// # Arguments
///
/// * `lang`: Page language for the html lang attribute
/// * `title`: Page title text (site name is appended)
/// * `site_name`: Site name for the title suffix
/// * `stylesheet`: Href of the page stylesheet
/// * `inline_style`: Optional raw CSS inlined in a style element
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn document_shell(
    lang: Lang,
    title: &str,
    site_name: &str,
    stylesheet: &str,
    inline_style: Option<&str>,
    body: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang.code()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - " (site_name) }
                link rel="stylesheet" href=(stylesheet);
                @if let Some(css) = inline_style {
                    style { (PreEscaped(css)) }
                }
            }
            body {
                (body)
            }
        }
    }
}
