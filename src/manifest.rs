//! Site manifest: page records and site metadata driving one build run.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::locale::Lang;

/// Labeled external link used in footers and book navigation.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteLink {
    /// Visible link text
    pub label: String,
    /// Link target URL
    pub href: String,
}

/// Site-wide metadata shared by every generated page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteMeta {
    /// Site name shown in page titles and logos.
    ///
    /// An empty name is resolved at build time to the name of the
    /// directory containing the docs directory.
    #[serde(default)]
    pub name: String,

    /// Short descriptive line under the book logo
    #[serde(default)]
    pub tagline: Option<String>,

    /// Author attribution link for the doc page footer
    #[serde(default)]
    pub author: Option<SiteLink>,

    /// Source repository link
    #[serde(default)]
    pub repository: Option<SiteLink>,

    /// Published package link
    #[serde(default)]
    pub package: Option<SiteLink>,

    /// License link
    #[serde(default)]
    pub license: Option<SiteLink>,
}

/// One standalone doc page: markdown input to HTML output.
#[derive(Debug, Clone, Deserialize)]
pub struct PageEntry {
    /// Markdown source path, relative to the docs directory
    pub input: String,
    /// HTML output path, relative to the output directory
    pub output: String,
    /// Page title (site name is appended in the title tag)
    pub title: String,
    /// Language for the html attribute and localized chrome
    #[serde(default)]
    pub lang: Lang,
}

/// One book chapter.
///
/// The output file is always `<book.dir>/<id>.html` and the in-book
/// navigation href is `<id>.html`.
#[derive(Debug, Clone, Deserialize)]
pub struct BookEntry {
    /// Chapter identifier; the chapter with id `index` is promoted to the
    /// output root after the book is built
    pub id: String,
    /// Markdown source path, relative to the docs directory (may reach
    /// above it, e.g. `../README.md`)
    pub input: String,
    /// Chapter title, also the navigation label
    pub title: String,
    /// Link to an English version of the chapter, shown in the sidebar
    #[serde(default)]
    pub en_link: Option<String>,
}

/// The book flavor: chapters sharing one sidebar navigation.
#[derive(Debug, Clone, Deserialize)]
pub struct BookManifest {
    /// Language for every chapter page
    #[serde(default)]
    pub lang: Lang,
    /// Output subdirectory holding the chapter pages
    #[serde(default = "default_book_dir")]
    pub dir: String,
    /// Chapters in navigation order
    pub pages: Vec<BookEntry>,
    /// External navigation links appended after the chapters, opened in a
    /// new tab
    #[serde(default)]
    pub links: Vec<SiteLink>,
}

fn default_book_dir() -> String {
    "docbook".to_string()
}

/// Everything one build run generates: site metadata, standalone pages,
/// and an optional book.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Site-wide metadata
    #[serde(default)]
    pub site: SiteMeta,
    /// Standalone doc pages
    #[serde(default)]
    pub pages: Vec<PageEntry>,
    /// Book flavor, absent when the site has no book
    #[serde(default)]
    pub book: Option<BookManifest>,
}

impl Manifest {
    /// Loads a manifest from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path`: Path to the manifest JSON file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not a valid
    /// manifest document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse manifest: {}", path.display()))
    }

    /// Returns the built-in manifest used when no manifest file is given.
    ///
    /// Mirrors the documentation set this tool was first built for: six
    /// standalone pages (profiles, style guide and rules, each in English
    /// and Russian) plus a three-chapter Russian book. Site metadata is
    /// left empty so the name resolves from the project directory.
    pub fn builtin() -> Self {
        Self {
            site: SiteMeta::default(),
            pages: vec![
                PageEntry {
                    input: "PROFILES.md".into(),
                    output: "page/profiles.html".into(),
                    title: "Profiles Guide".into(),
                    lang: Lang::En,
                },
                PageEntry {
                    input: "PROFILES_RU.md".into(),
                    output: "page/profiles-ru.html".into(),
                    title: "Руководство по профилям".into(),
                    lang: Lang::Ru,
                },
                PageEntry {
                    input: "README_STYLEGUIDE.md".into(),
                    output: "page/style-guide.html".into(),
                    title: "Style Guide".into(),
                    lang: Lang::En,
                },
                PageEntry {
                    input: "README_STYLEGUIDE_RU.md".into(),
                    output: "page/style-guide-ru.html".into(),
                    title: "Стайлгайд".into(),
                    lang: Lang::Ru,
                },
                PageEntry {
                    input: "README_RULES.md".into(),
                    output: "page/rules.html".into(),
                    title: "Rules Reference".into(),
                    lang: Lang::En,
                },
                PageEntry {
                    input: "README_RULES_RU.md".into(),
                    output: "page/rules-ru.html".into(),
                    title: "Справочник правил".into(),
                    lang: Lang::Ru,
                },
            ],
            book: Some(BookManifest {
                lang: Lang::Ru,
                dir: default_book_dir(),
                pages: vec![
                    BookEntry {
                        id: "index".into(),
                        input: "../README_RU.md".into(),
                        title: "Главная".into(),
                        en_link: None,
                    },
                    BookEntry {
                        id: "styleguide".into(),
                        input: "README_STYLEGUIDE_RU.md".into(),
                        title: "Стайлгайд линтера".into(),
                        en_link: None,
                    },
                    BookEntry {
                        id: "profiles".into(),
                        input: "PROFILES_RU.md".into(),
                        title: "Руководство по профилям".into(),
                        en_link: None,
                    },
                ],
                links: vec![],
            }),
        }
    }
}

impl BookEntry {
    /// Output file name of this chapter inside the book directory
    pub fn file_name(&self) -> String {
        format!("{}.html", self.id)
    }
}
