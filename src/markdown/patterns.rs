//! Cached regex patterns for markdown conversion.
//!
//! Uses LazyLock to compile each pattern once on first use. The renderer
//! applies these in a fixed order; see the pipeline in `renderer`.

use regex::Regex;
use std::sync::LazyLock;

/// Matches fenced code blocks with an optional language tag.
///
/// Group 1 is the language tag, group 2 the raw body including its final
/// newline. The body is matched lazily so back-to-back fences stay separate.
pub static FENCED_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(\w+)?\n(.*?)```").unwrap());

/// Matches level-four heading lines
pub static H4_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#### (.*)$").unwrap());

/// Matches level-three heading lines
pub static H3_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^### (.*)$").unwrap());

/// Matches level-two heading lines
pub static H2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^## (.*)$").unwrap());

/// Matches level-one heading lines
pub static H1_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.*)$").unwrap());

/// Matches `**bold**` spans, non-greedy, allowed to cross line breaks
pub static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\*\*(.*?)\*\*").unwrap());

/// Matches single-backtick code spans with no backtick inside
pub static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Matches `- ` list item lines
pub static LIST_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^- (.*)$").unwrap());

/// Matches `[label](url)` links; label may not contain `]`, url may not contain `)`
pub static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Matches segments already starting with a block-level element
pub static BLOCK_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<(h[1-6]|div|ul|code)").unwrap());
