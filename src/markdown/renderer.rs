//! Restricted-dialect markdown to HTML conversion.

use anyhow::{Context, Result};
use std::path::Path;

use super::patterns::{
    BLOCK_START_RE, BOLD_RE, FENCED_CODE_RE, H1_RE, H2_RE, H3_RE, H4_RE, INLINE_CODE_RE, LINK_RE,
    LIST_ITEM_RE,
};

/// Sentinel prefix protecting extracted code blocks from later passes.
///
/// A segment containing this token is left out of paragraph wrapping so
/// text glued to a fence without a blank line stays unwrapped. Collision
/// with literal document content is possible but considered improbable
/// for trusted documentation sources.
const PLACEHOLDER_PREFIX: &str = "__CODE_BLOCK_";

/// Renders the restricted markdown dialect to an HTML fragment.
///
/// Supports headings levels 1-4, bold spans, inline code, fenced code
/// blocks with an optional language tag, flat unordered lists, links, and
/// paragraphs. Conversion is a fixed-order pipeline of whole-document
/// string transforms with no intermediate syntax tree. Rendering never
/// fails: text that matches no pattern passes through inside its paragraph
/// wrapper.
///
/// Code block content is inserted verbatim without HTML escaping, which is
/// only acceptable for trusted documentation sources.
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Creates a renderer.
    ///
    /// The renderer is stateless; patterns are compiled lazily in module
    /// statics and shared across instances.
    pub fn new() -> Self {
        Self
    }

    /// Renders markdown content to an HTML fragment string.
    ///
    /// Pipeline order is load-bearing: fences are extracted first so the
    /// inline passes cannot corrupt code content, and block assembly runs
    /// before placeholder restoration so code blocks are never wrapped in
    /// paragraphs.
    ///
    /// # Arguments
    ///
    /// * `markdown`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Rendered HTML fragment
    pub fn render(&self, markdown: &str) -> String {
        let (html, code_blocks) = extract_code_blocks(markdown);
        let html = convert_headings(&html);
        let html = BOLD_RE.replace_all(&html, "<strong>$1</strong>");
        let html = INLINE_CODE_RE.replace_all(&html, "<code>$1</code>");
        let html = LIST_ITEM_RE.replace_all(&html, "<li>$1</li>");
        let html = LINK_RE.replace_all(&html, "<a href=\"$2\">$1</a>");
        let html = assemble_blocks(&html);
        restore_code_blocks(html, &code_blocks)
    }

    /// Renders a markdown file to an HTML fragment string.
    ///
    /// # Arguments
    ///
    /// * `path`: Path to the markdown source file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid UTF8.
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let markdown = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown source: {}", path.display()))?;
        Ok(self.render(&markdown))
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts fenced code blocks into a placeholder table.
///
/// Each fence is rendered into its final HTML wrapper immediately, pushed
/// onto the returned table, and replaced in the document by an indexed
/// sentinel token. The language tag is captured by the pattern but unused;
/// syntax highlighting is out of scope. Code bodies keep their trailing
/// newline and receive no HTML escaping.
fn extract_code_blocks(markdown: &str) -> (String, Vec<String>) {
    let mut blocks = Vec::new();
    let html = FENCED_CODE_RE
        .replace_all(markdown, |caps: &regex::Captures<'_>| {
            let token = format!("{}{}__", PLACEHOLDER_PREFIX, blocks.len());
            blocks.push(format!(
                "<div class=\"code-block\"><pre><code>{}</code></pre></div>",
                &caps[2]
            ));
            token
        })
        .into_owned();
    (html, blocks)
}

/// Converts heading lines, longest prefix first.
///
/// `####` before `###` before `##` before `#`, so a level-four line is
/// never half-converted by a shorter pattern.
fn convert_headings(html: &str) -> String {
    let html = H4_RE.replace_all(html, "<h4>$1</h4>");
    let html = H3_RE.replace_all(&html, "<h3>$1</h3>");
    let html = H2_RE.replace_all(&html, "<h2>$1</h2>");
    H1_RE.replace_all(&html, "<h1>$1</h1>").into_owned()
}

/// Assembles blank-line-delimited segments into block elements.
///
/// Runs after every inline pass, so a segment either already starts with a
/// produced block tag, contains converted `<li>` items, or is prose. List
/// wrapping is per segment: disjoint list blocks separated by prose stay
/// disjoint `<ul>` elements. Blank segments map to empty strings but are
/// still joined, preserving runs of blank lines as extra newlines.
fn assemble_blocks(html: &str) -> String {
    html.split("\n\n")
        .map(|segment| {
            if BLOCK_START_RE.is_match(segment) || segment.contains(PLACEHOLDER_PREFIX) {
                segment.to_string()
            } else if segment.trim().is_empty() {
                String::new()
            } else if segment.contains("<li>") {
                format!("<ul>{}</ul>", segment)
            } else {
                format!("<p>{}</p>", segment.replace('\n', " "))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Substitutes stored code blocks back for their sentinel tokens.
///
/// One replacement per placeholder, in table order, matching the 1:1
/// extraction contract.
fn restore_code_blocks(html: String, blocks: &[String]) -> String {
    let mut html = html;
    for (i, block) in blocks.iter().enumerate() {
        let token = format!("{}{}__", PLACEHOLDER_PREFIX, i);
        html = html.replacen(&token, block, 1);
    }
    html
}
