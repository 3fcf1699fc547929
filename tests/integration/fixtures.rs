//! Test helpers for creating temporary npm projects.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Lock files a project can carry, for package manager detection tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockfileType {
    Pnpm,
    Bun,
    Npm,
}

impl LockfileType {
    pub fn file_name(self) -> &'static str {
        match self {
            LockfileType::Pnpm => "pnpm-lock.yaml",
            LockfileType::Bun => "bun.lockb",
            LockfileType::Npm => "package-lock.json",
        }
    }
}

/// A typical set of scripts for tests that need more than one entry.
pub fn standard_scripts() -> Vec<(&'static str, &'static str)> {
    vec![
        ("dev", "vite"),
        ("build", "vite build"),
        ("test", "vitest"),
        ("lint", "eslint ."),
        ("format", "prettier --write ."),
    ]
}

/// Create a temporary project with a package.json containing the given scripts.
pub fn create_project(scripts: &[(&str, &str)]) -> TempDir {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    write_package_json(temp.path(), scripts);
    temp
}

/// Create a project whose package.json has an empty scripts object.
pub fn create_empty_project() -> TempDir {
    create_project(&[])
}

/// Create a project whose package.json has no scripts field at all.
pub fn create_project_no_scripts() -> TempDir {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let content = r#"{
  "name": "test-project",
  "version": "1.0.0"
}"#;
    fs::write(temp.path().join("package.json"), content).expect("Failed to write package.json");
    temp
}

/// Create a project with a syntactically broken package.json.
pub fn create_project_invalid_json() -> TempDir {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(temp.path().join("package.json"), "{ invalid json }")
        .expect("Failed to write package.json");
    temp
}

/// Create a project with the given scripts and a lock file.
pub fn create_project_with_lockfile(scripts: &[(&str, &str)], lockfile: LockfileType) -> TempDir {
    let temp = create_project(scripts);
    fs::write(temp.path().join(lockfile.file_name()), "")
        .expect("Failed to write lock file");
    temp
}

/// Create a project with a nested subdirectory for walk-up tests.
///
/// Returns the temp dir; the subdirectory is `src/components` under it.
pub fn create_nested_project(scripts: &[(&str, &str)]) -> TempDir {
    let temp = create_project(scripts);
    fs::create_dir_all(temp.path().join("src/components"))
        .expect("Failed to create subdirectories");
    temp
}

/// Write a config file into `dir` and return its path, for use with --config.
pub fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, content).expect("Failed to write config file");
    path
}

fn write_package_json(dir: &Path, scripts: &[(&str, &str)]) {
    let entries: Vec<String> = scripts
        .iter()
        .map(|(name, command)| format!("    \"{name}\": \"{command}\""))
        .collect();

    let content = format!(
        "{{\n  \"name\": \"test-project\",\n  \"version\": \"1.0.0\",\n  \"scripts\": {{\n{}\n  }}\n}}\n",
        entries.join(",\n")
    );

    fs::write(dir.join("package.json"), content).expect("Failed to write package.json");
}
