//! Static documentation site generator for markdown sources.

mod assets;
pub mod components;
mod config;
mod generators;
mod locale;
mod manifest;
mod markdown;
pub mod pages;
mod util;

pub use config::Config;
pub use generators::{BuildSummary, build_book, build_doc_pages};
pub use locale::Lang;
pub use manifest::{BookEntry, BookManifest, Manifest, PageEntry, SiteLink, SiteMeta};
pub use markdown::MarkdownRenderer;
pub use util::{depth_of, relative_root};
