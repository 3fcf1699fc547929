//! CLI argument definitions for psr.
//!
//! Uses clap with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{generate, Shell};

use crate::package::PmSetting;

/// Interactive picker for running package.json scripts.
#[derive(Parser, Debug)]
#[command(name = "psr")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = false)]
pub struct Cli {
    /// Path to project directory (default: current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// List scripts non-interactively (no picker)
    #[arg(short, long)]
    pub list: bool,

    /// Run a script directly without the picker
    #[arg(short = 'n', long = "script", value_name = "NAME")]
    pub script: Option<String>,

    /// Override package manager detection
    #[arg(short = 'p', long = "pm", value_name = "PM", value_enum)]
    pub pm: Option<CliPm>,

    /// Show the command without executing it
    #[arg(short, long)]
    pub dry_run: bool,

    /// Path to config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ignore the config file
    #[arg(long)]
    pub no_config: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<CliShell>,
}

/// Package manager for CLI parsing.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliPm {
    Pnpm,
    Bun,
    Npm,
}

impl From<CliPm> for PmSetting {
    fn from(pm: CliPm) -> Self {
        match pm {
            CliPm::Pnpm => PmSetting::Pnpm,
            CliPm::Bun => PmSetting::Bun,
            CliPm::Npm => PmSetting::Npm,
        }
    }
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliShell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    Powershell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Get the start directory for the project search.
    ///
    /// Returns the provided path or the current directory.
    pub fn start_dir(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Get the package manager override, if any.
    pub fn pm_override(&self) -> Option<PmSetting> {
        self.pm.map(Into::into)
    }

    /// Check if the picker should be shown.
    pub fn should_show_picker(&self) -> bool {
        !self.list && self.script.is_none()
    }

    /// Generate shell completions and write to stdout.
    pub fn generate_completions(shell: CliShell) {
        let mut cmd = Cli::command();
        let shell = match shell {
            CliShell::Bash => Shell::Bash,
            CliShell::Zsh => Shell::Zsh,
            CliShell::Fish => Shell::Fish,
            CliShell::Powershell => Shell::PowerShell,
            CliShell::Elvish => Shell::Elvish,
        };
        generate(shell, &mut cmd, "psr", &mut std::io::stdout());
    }
}
