//! Custom error types for psr.
//!
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for psr.
pub mod exit_code {
    /// Success.
    pub const SUCCESS: i32 = 0;
    /// General error.
    pub const GENERAL_ERROR: i32 = 1;
    /// No package.json found.
    pub const NO_PACKAGE_JSON: i32 = 2;
    /// No scripts defined.
    pub const NO_SCRIPTS: i32 = 3;
    /// Invalid configuration.
    pub const INVALID_CONFIG: i32 = 5;
    /// Interrupted (Ctrl+C).
    pub const INTERRUPTED: i32 = 130;
}

/// Main error type for psr.
#[derive(Error, Debug)]
pub enum PsrError {
    /// No package.json found in the directory chain.
    #[error("No package.json found in current directory or parent directories")]
    NoPackageJson,

    /// Failed to parse package.json with location details.
    #[error("Failed to parse package.json at {path}:\n  {message}")]
    ParseError { path: PathBuf, message: String },

    /// No scripts found in package.json (missing key or empty object).
    #[error("No scripts found in package.json")]
    NoScripts,

    /// Script not found (direct --script invocation).
    #[error("Script '{name}' not found in package.json")]
    ScriptNotFound { name: String },

    /// Invalid configuration file.
    #[error("Invalid config at {path}:\n  {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PsrError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PsrError::NoPackageJson => exit_code::NO_PACKAGE_JSON,
            PsrError::ParseError { .. } => exit_code::NO_PACKAGE_JSON,
            PsrError::NoScripts => exit_code::NO_SCRIPTS,
            PsrError::ScriptNotFound { .. } => exit_code::GENERAL_ERROR,
            PsrError::InvalidConfig { .. } => exit_code::INVALID_CONFIG,
            PsrError::Io(_) => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for psr operations.
pub type Result<T> = std::result::Result<T, PsrError>;
