//! Script parsing from package.json.

use std::path::Path;

use anyhow::{Context, Result};

use crate::error::PsrError;

use super::types::{Package, Script, Scripts};

/// Parse the scripts from a project's package.json.
///
/// # Arguments
///
/// * `project_dir` - The directory containing package.json
///
/// # Errors
///
/// Returns an error if:
/// - The package.json file cannot be read
/// - The JSON is malformed
pub fn parse_scripts(project_dir: &Path) -> Result<Scripts> {
    let package_json = project_dir.join("package.json");
    let content = std::fs::read_to_string(&package_json)
        .with_context(|| format!("Failed to read {}", package_json.display()))?;

    parse_scripts_from_json(&content).map_err(|e| {
        PsrError::ParseError {
            path: package_json,
            message: e.to_string(),
        }
        .into()
    })
}

/// Parse the full package.json structure.
///
/// # Errors
///
/// Returns an error if the JSON is malformed.
pub fn parse_package_json(content: &str) -> Result<Package> {
    let package: Package =
        serde_json::from_str(content).map_err(|e| anyhow::anyhow!(format_json_error(content, &e)))?;
    Ok(package)
}

/// Parse scripts from package.json content.
///
/// A missing `scripts` key and an empty `scripts` object both produce an
/// empty collection; deciding that this is an error is left to the caller.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or a script value is not a
/// string.
///
/// # Examples
///
/// ```
/// use psr::package::parse_scripts_from_json;
///
/// let json = r#"{"scripts": {"dev": "vite", "build": "vite build"}}"#;
/// let scripts = parse_scripts_from_json(json).unwrap();
/// assert_eq!(scripts.names(), vec!["dev", "build"]);
/// ```
pub fn parse_scripts_from_json(content: &str) -> Result<Scripts> {
    let package = parse_package_json(content)?;
    extract_scripts(&package)
}

/// Extract the scripts from a parsed Package, in declaration order.
fn extract_scripts(package: &Package) -> Result<Scripts> {
    let mut scripts = Scripts::new();

    for (name, value) in &package.scripts {
        let command = value.as_str().ok_or_else(|| {
            anyhow::anyhow!(
                "invalid value for script \"{name}\": expected a string, got {}",
                json_type_name(value)
            )
        })?;
        scripts.add(Script::new(name, command));
    }

    Ok(scripts)
}

/// Format a JSON parsing error with the offending line and a caret.
fn format_json_error(content: &str, error: &serde_json::Error) -> String {
    let line = error.line();
    let column = error.column();

    if let Some(error_line) = content.lines().nth(line.saturating_sub(1)) {
        let pointer = " ".repeat(column.saturating_sub(1)) + "^";
        format!(
            "{}\n  at line {}, column {}:\n    {}\n    {}",
            error, line, column, error_line, pointer
        )
    } else {
        format!("{} at line {}, column {}", error, line, column)
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
