//! Markdown rendering for the restricted documentation dialect.
//!
//! This module converts a small markdown subset (headings 1-4, bold,
//! inline code, fenced code blocks, flat lists, links, paragraphs) to HTML
//! fragments through an ordered pipeline of regex substitutions.

mod patterns;
mod renderer;

pub use renderer::MarkdownRenderer;
