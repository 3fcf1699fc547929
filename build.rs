//! Build script for psr.
//!
//! Generates a man page using clap_mangen.

use std::env;
use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};

/// Minimal CLI struct for man page generation.
///
/// This duplicates the CLI definition to avoid build dependency issues.
#[derive(Parser)]
#[command(name = "psr")]
#[command(
    author,
    version,
    about = "Interactive picker for running package.json scripts"
)]
#[command(
    long_about = "psr finds the nearest package.json, lets you pick one of its scripts \
    interactively, and runs it through the detected package manager (pnpm, bun, or npm) \
    with the project root as working directory.\n\n\
    Run without arguments to launch the picker. Use arrow keys to navigate, type to \
    filter, and Enter to run the highlighted script."
)]
struct Cli {
    /// Path to project directory (default: current directory)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// List scripts non-interactively (no picker)
    #[arg(short, long)]
    list: bool,

    /// Run a script directly without the picker
    #[arg(short = 'n', long = "script", value_name = "NAME")]
    script: Option<String>,

    /// Override package manager detection
    #[arg(short = 'p', long = "pm", value_name = "PM", value_enum)]
    pm: Option<Pm>,

    /// Show the command without executing it
    #[arg(short, long)]
    dry_run: bool,

    /// Path to config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Ignore the config file
    #[arg(long)]
    no_config: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Pm {
    Pnpm,
    Bun,
    Npm,
}

#[derive(Clone, Copy, ValueEnum)]
enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
    Elvish,
}

fn main() {
    // Only generate the man page for release builds or when explicitly requested
    let profile = env::var("PROFILE").unwrap_or_default();
    if profile != "release" && env::var("PSR_GEN_MANPAGE").is_err() {
        return;
    }

    let out_dir = match env::var_os("OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => return,
    };

    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);

    let mut buffer = Vec::new();
    man.render(&mut buffer)
        .expect("Failed to generate man page");

    let man_path = out_dir.join("psr.1");
    fs::write(&man_path, buffer).expect("Failed to write man page");

    println!("cargo:rerun-if-changed=build.rs");
}
