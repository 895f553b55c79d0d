//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for Docmill.
#[derive(Debug, Clone, Parser)]
#[command(name = "docmill", version, about, long_about = None)]
pub struct Config {
    /// Documentation source directory
    #[arg(default_value = "docs")]
    pub docs: PathBuf,

    /// Output directory (defaults to the docs directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Manifest file describing pages and book chapters
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Site name
    #[arg(long)]
    pub name: Option<String>,

    /// Skip standalone doc pages
    #[arg(long)]
    pub skip_pages: bool,

    /// Skip the doc book
    #[arg(long)]
    pub skip_book: bool,

    /// Do not open the generated site in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the docs directory does not exist or a manifest
    /// path is given but names no file.
    pub fn validate(&self) -> Result<()> {
        if !self.docs.is_dir() {
            bail!("Docs directory does not exist: {}", self.docs.display());
        }

        if let Some(manifest) = &self.manifest {
            if !manifest.is_file() {
                bail!("Manifest file does not exist: {}", manifest.display());
            }
        }

        Ok(())
    }

    /// Returns the directory generated files are written to.
    ///
    /// The original layout writes pages next to their sources, so the
    /// docs directory doubles as the default output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| self.docs.clone())
    }

    /// Returns the site name from configuration or the docs location.
    ///
    /// Without an explicit name, the docs directory usually sits inside
    /// the project it documents, so the parent directory name is used;
    /// a docs directory without a parent falls back to its own name.
    ///
    /// # Errors
    ///
    /// Returns error if no name component can be extracted or it contains
    /// invalid UTF8.
    pub fn project_name(&self) -> Result<String> {
        if let Some(name) = &self.name {
            return Ok(name.clone());
        }

        let path = self
            .docs
            .canonicalize()
            .unwrap_or_else(|_| self.docs.clone());

        path.parent()
            .and_then(|p| p.file_name())
            .or_else(|| path.file_name())
            .and_then(|n| n.to_str())
            .with_context(|| format!("Cannot extract project name from path: {}", path.display()))
            .map(String::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_docs(docs: &str) -> Config {
        Config {
            docs: PathBuf::from(docs),
            output: None,
            manifest: None,
            name: None,
            skip_pages: false,
            skip_book: false,
            no_open: true,
        }
    }

    #[test]
    fn test_project_name_with_explicit_name() {
        // Arrange
        let mut config = config_with_docs("docs");
        config.name = Some("ExplicitName".to_string());

        // Act
        let result = config.project_name();

        // Assert
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "ExplicitName");
    }

    #[test]
    fn test_project_name_uses_parent_of_docs_dir() {
        // Arrange
        let config = config_with_docs("/tmp/my-project/docs");

        // Act
        let name = config.project_name().expect("Name should be derived");

        // Assert
        assert_eq!(
            name, "my-project",
            "Name should come from the directory containing docs"
        );
    }

    #[test]
    fn test_output_dir_defaults_to_docs_dir() {
        // Arrange
        let config = config_with_docs("docs");

        // Act & Assert
        assert_eq!(config.output_dir(), PathBuf::from("docs"));
    }

    #[test]
    fn test_output_dir_override() {
        // Arrange
        let mut config = config_with_docs("docs");
        config.output = Some(PathBuf::from("dist"));

        // Act & Assert
        assert_eq!(config.output_dir(), PathBuf::from("dist"));
    }

    #[test]
    fn test_validate_missing_docs_dir() {
        // Arrange
        let config = config_with_docs("definitely-not-a-real-docs-dir");

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err(), "Nonexistent docs directory should fail validation");
    }

    #[test]
    fn test_validate_existing_docs_dir() {
        // Arrange
        let config = config_with_docs(".");

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_ok(), "Current directory should be valid");
    }

    #[test]
    fn test_validate_missing_manifest() {
        // Arrange
        let mut config = config_with_docs(".");
        config.manifest = Some(PathBuf::from("no-such-manifest.json"));

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err(), "Nonexistent manifest file should fail validation");
    }
}
