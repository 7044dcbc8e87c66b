//! Test infrastructure shared across the workspace.
//!
//! Locates the workspace root so tests can read fixtures from `test_data/`
//! and write artifacts to `test_output/` regardless of the directory cargo
//! runs them from.
//!
//! ```rust
//! use test_helpers::{fixture_path, output_path};
//!
//! let catalog = fixture_path("hyg.csv");
//! assert!(catalog.exists());
//!
//! let rendered = output_path("stars.json");
//! assert!(rendered.parent().unwrap().exists());
//! ```

use once_cell::sync::Lazy;
use std::env;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum TestHelperError {
    /// No ancestor directory holds a workspace `Cargo.toml`
    #[error("Failed to find project root: {0}")]
    ProjectRootNotFound(String),
}

/// Find the workspace root by walking up from the current directory to the
/// first `Cargo.toml` containing a `[workspace]` section.
pub fn find_project_root() -> Result<PathBuf, TestHelperError> {
    let mut current_dir = env::current_dir().map_err(|e| {
        TestHelperError::ProjectRootNotFound(format!("Failed to get current directory: {}", e))
    })?;

    loop {
        let cargo_toml = current_dir.join("Cargo.toml");
        if cargo_toml.exists() {
            let content = std::fs::read_to_string(&cargo_toml).map_err(|e| {
                TestHelperError::ProjectRootNotFound(format!("Failed to read Cargo.toml: {}", e))
            })?;

            if content.contains("[workspace]") {
                return Ok(current_dir);
            }
        }

        if !current_dir.pop() {
            break;
        }
    }

    Err(TestHelperError::ProjectRootNotFound(
        "Workspace root not found".to_string(),
    ))
}

static PROJECT_ROOT: Lazy<PathBuf> =
    Lazy::new(|| find_project_root().expect("Failed to find project root directory"));

/// Path to a checked-in fixture under `<root>/test_data/`
pub fn fixture_path<P: AsRef<Path>>(path: P) -> PathBuf {
    PROJECT_ROOT.join("test_data").join(path)
}

/// Test output directory, created on first use
pub fn get_output_dir() -> PathBuf {
    let output_dir = PROJECT_ROOT.join("test_output");

    if !output_dir.exists() {
        std::fs::create_dir_all(&output_dir).expect("Failed to create output directory");
    }

    output_dir
}

/// Path within the test output directory
pub fn output_path<P: AsRef<Path>>(path: P) -> PathBuf {
    get_output_dir().join(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_root_exists() {
        let root = find_project_root().expect("Failed to find project root");
        assert!(root.join("Cargo.toml").exists());
        assert!(root.join("test_data").is_dir());
    }

    #[test]
    fn test_fixture_paths() {
        for name in ["hyg.csv", "ngc.csv", "constellations.csv"] {
            assert!(fixture_path(name).exists(), "missing fixture {name}");
        }
    }

    #[test]
    fn test_output_path_parent_exists() {
        let path = output_path("probe.json");
        assert_eq!(path.parent().unwrap(), get_output_dir());
        assert!(get_output_dir().is_dir());
    }
}
