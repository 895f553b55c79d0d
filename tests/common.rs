//! Shared test utilities for integration tests.
//!
//! Provides helpers for laying out a temporary documentation project
//! (markdown sources plus a manifest file) used across multiple test
//! files.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Manifest fixture covering both flavors and every metadata field.
pub const MANIFEST_JSON: &str = r#"{
  "site": {
    "name": "fixture-config",
    "tagline": "Shared lint rules",
    "author": { "label": "Someone", "href": "https://example.com/someone" },
    "repository": { "label": "GitHub", "href": "https://example.com/repo" },
    "package": { "label": "NPM", "href": "https://example.com/pkg" },
    "license": { "label": "MIT License", "href": "https://example.com/LICENSE" }
  },
  "pages": [
    { "input": "GUIDE.md", "output": "page/guide.html", "title": "Guide", "lang": "en" },
    { "input": "GUIDE_RU.md", "output": "page/guide-ru.html", "title": "Гайд", "lang": "ru" }
  ],
  "book": {
    "lang": "ru",
    "dir": "docbook",
    "pages": [
      { "id": "index", "input": "../README_RU.md", "title": "Главная" },
      { "id": "guide", "input": "GUIDE_RU.md", "title": "Гайд",
        "en_link": "https://example.com/GUIDE.md" }
    ],
    "links": [ { "label": "Правила", "href": "https://example.com/rules" } ]
  }
}"#;

/// Creates a temporary documentation project.
///
/// Lays out a project root containing a `docs` directory with two
/// markdown guides, a `README_RU.md` above it (reached by the book's
/// `../` input), and a `manifest.json` matching [`MANIFEST_JSON`].
///
/// # Returns
///
/// Temporary directory holding the project root
///
/// # Errors
///
/// Returns error if any fixture file cannot be written
pub fn create_project_fixture() -> Result<TempDir> {
    let dir = TempDir::new()?;
    let root = dir.path();
    let docs = root.join("docs");
    fs::create_dir_all(&docs)?;

    fs::write(
        docs.join("GUIDE.md"),
        "# Guide\n\nPick a **profile**:\n\n- strict\n- relaxed\n\n```js\nconst x = 1;\n```\n\nSee [Home](index.html).\n",
    )?;
    fs::write(
        docs.join("GUIDE_RU.md"),
        "# Гайд\n\nВыберите **профиль**:\n\n- strict\n- relaxed\n",
    )?;
    fs::write(
        root.join("README_RU.md"),
        "# Главная\n\nНабор правил с `shared` настройками.\n",
    )?;
    fs::write(root.join("manifest.json"), MANIFEST_JSON)?;

    Ok(dir)
}

/// Returns the docs directory inside a project fixture.
pub fn docs_dir(project: &Path) -> PathBuf {
    project.join("docs")
}

/// Returns the manifest path inside a project fixture.
pub fn manifest_path(project: &Path) -> PathBuf {
    project.join("manifest.json")
}
