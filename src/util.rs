//! Path utilities for HTML generation

use std::path::{Component, Path};

/// Calculates relative path depth for a generated page.
///
/// Determines how many `../` prefixes are needed to reach the output root
/// from the page named by `output`. Only real directory components count;
/// a bare file name sits at the root (depth zero).
///
/// # Arguments
///
/// * `output`: Page output path relative to the output root
///
/// # Returns
///
/// Number of directory levels between the page and the output root
pub fn depth_of(output: &Path) -> usize {
    output
        .parent()
        .map(|parent| {
            parent
                .components()
                .filter(|c| matches!(c, Component::Normal(_)))
                .count()
        })
        .unwrap_or(0)
}

/// Builds the `../` chain climbing `depth` directory levels.
///
/// An empty string for depth zero, so joining with a root-relative file
/// name yields a same-directory reference.
pub fn relative_root(depth: usize) -> String {
    "../".repeat(depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_of_root_level_file() {
        assert_eq!(depth_of(Path::new("index.html")), 0);
        assert_eq!(depth_of(Path::new("rules.html")), 0);
    }

    #[test]
    fn test_depth_of_nested_file() {
        assert_eq!(depth_of(Path::new("page/profiles.html")), 1);
        assert_eq!(depth_of(Path::new("docbook/styleguide.html")), 1);
        assert_eq!(depth_of(Path::new("a/b/c.html")), 2);
    }

    #[test]
    fn test_depth_of_ignores_current_dir_component() {
        assert_eq!(depth_of(Path::new("./page/profiles.html")), 1);
    }

    #[test]
    fn test_relative_root_chains() {
        assert_eq!(relative_root(0), "");
        assert_eq!(relative_root(1), "../");
        assert_eq!(relative_root(3), "../../../");
    }

    #[test]
    fn test_depth_composes_into_home_link() {
        // Arrange
        let output = Path::new("page/style-guide.html");

        // Act
        let home = format!("{}index.html", relative_root(depth_of(output)));

        // Assert
        assert_eq!(home, "../index.html", "Nested page should climb one level");
    }
}
