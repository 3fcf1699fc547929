//! Script execution.
//!
//! The command to run is a single formatted string such as `"pnpm dev"`,
//! produced by [`PackageManager::command_line`]. Execution goes through the
//! [`JobRunner`] trait so everything up to the spawn can be tested without
//! starting real processes.
//!
//! [`PackageManager::command_line`]: crate::package::PackageManager::command_line

use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

/// Exit code when interrupted by Ctrl+C (SIGINT).
/// On Unix, this is 128 + signal number (SIGINT = 2).
pub const EXIT_CODE_INTERRUPTED: i32 = 130;

/// Execution boundary for running a formatted shell command.
///
/// Implementations receive the full command string and the working
/// directory. The tool does not interpret or capture the job's output;
/// only the exit code comes back.
pub trait JobRunner {
    /// Run `command` with `cwd` as working directory and wait for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be spawned.
    fn run(&self, command: &str, cwd: &Path) -> Result<i32>;
}

/// Production runner: spawns the command as a child process with
/// inherited stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellJobRunner;

impl ShellJobRunner {
    /// Create a new shell job runner.
    pub fn new() -> Self {
        Self
    }
}

impl JobRunner for ShellJobRunner {
    fn run(&self, command: &str, cwd: &Path) -> Result<i32> {
        let parts = shell_words::split(command)
            .with_context(|| format!("Failed to parse command: {command}"))?;

        let (program, args) = parts
            .split_first()
            .context("Empty command")?;

        let mut child = Command::new(program);
        child.args(args);
        child.current_dir(cwd);

        // Inherit stdio for interactive scripts
        child.stdin(Stdio::inherit());
        child.stdout(Stdio::inherit());
        child.stderr(Stdio::inherit());

        let status = child
            .status()
            .with_context(|| format!("Failed to execute: {command}"))?;

        Ok(status.code().unwrap_or(EXIT_CODE_INTERRUPTED))
    }
}
