//! psr - package script runner
//!
//! An interactive terminal picker for the scripts declared in the nearest
//! `package.json`, executed through an auto-detected package manager
//! (pnpm, bun, or npm).
//!
//! # Flow
//!
//! 1. Locate the project root (nearest ancestor owning `package.json`).
//! 2. Read the `scripts` object, keeping declaration order.
//! 3. Resolve the package manager (override, then lock files, then npm).
//! 4. Pick a script in the TUI and run `<manager> <script>` with the
//!    project root as working directory.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface argument parsing
//! - [`config`] - Configuration file loading
//! - [`error`] - Error types and exit codes
//! - [`filter`] - Fuzzy filtering for the picker
//! - [`package`] - Package.json parsing and package manager detection
//! - [`runner`] - Script execution
//! - [`tui`] - Terminal user interface
//! - [`utils`] - Path utilities
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use psr::package::{parse_scripts, resolve_package_manager, PmSetting};
//!
//! let project_dir = Path::new("./my-project");
//! let scripts = parse_scripts(project_dir).expect("failed to parse scripts");
//!
//! let manager = resolve_package_manager(PmSetting::Auto, project_dir);
//! println!("Command: {}", manager.command_line("dev"));
//! ```

/// CLI argument definitions.
pub mod cli;

/// Configuration file loading.
pub mod config;

/// Error types and exit codes.
pub mod error;

/// Fuzzy filtering for the picker.
pub mod filter;

/// Package.json parsing and package manager detection.
pub mod package;

/// Script execution.
pub mod runner;

/// Terminal user interface.
pub mod tui;

/// Path utilities.
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::Config;
pub use error::{PsrError, Result};
pub use package::{PackageManager, PmSetting, Script, Scripts};
