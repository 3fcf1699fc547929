//! Path utilities.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::PsrError;

/// Find the package.json file starting from the given directory.
///
/// Searches the given directory and every parent up to the filesystem root.
///
/// # Errors
///
/// Returns an error if no package.json is found.
pub fn find_package_json(start_dir: &Path) -> Result<PathBuf> {
    let start = start_dir.canonicalize().with_context(|| {
        format!(
            "Cannot access directory '{}': path does not exist or is not accessible",
            start_dir.display()
        )
    })?;

    let mut current = start.as_path();

    loop {
        let package_json = current.join("package.json");
        if package_json.is_file() {
            return Ok(package_json);
        }

        match current.parent() {
            Some(parent) if parent != current => current = parent,
            _ => break,
        }
    }

    Err(PsrError::NoPackageJson.into())
}

/// Find the project root (directory containing package.json).
///
/// # Errors
///
/// Returns an error if no package.json is found.
pub fn find_project_root(start_dir: &Path) -> Result<PathBuf> {
    let package_json = find_package_json(start_dir)?;
    let root = package_json
        .parent()
        .context("package.json has no parent directory")?;
    Ok(root.to_path_buf())
}

/// Get the user config file path.
///
/// Returns `~/.config/psr/config.toml` on Unix-like systems.
pub fn user_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("psr").join("config.toml"))
}
