//! psr - package script runner
//!
//! Entry point for the psr CLI application.

use std::io::{self, IsTerminal};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use psr::cli::Cli;
use psr::config::{load_config, load_config_file, Config};
use psr::error::{exit_code, PsrError};
use psr::package::{parse_scripts, resolve_package_manager, PackageManager, Scripts};
use psr::runner::{JobRunner, ShellJobRunner};
use psr::tui::{run_picker, App};
use psr::utils::find_project_root;

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            // Our own errors carry a dedicated exit code and message.
            if let Some(psr_err) = err.downcast_ref::<PsrError>() {
                eprintln!("Error: {psr_err}");
                return ExitCode::from(psr_err.exit_code() as u8);
            }
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code::GENERAL_ERROR as u8)
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse_args();

    // Handle shell completions early
    if let Some(shell) = cli.completions {
        Cli::generate_completions(shell);
        return Ok(exit_code::SUCCESS);
    }

    // Find project root
    let project_dir = find_project_root(&cli.start_dir())?;

    // Parse scripts
    let scripts = parse_scripts(&project_dir)?;

    // Missing scripts key and an empty scripts object are the same failure.
    if scripts.is_empty() {
        return Err(PsrError::NoScripts.into());
    }

    // Resolve the package manager: CLI flag, then config file, then detection.
    let config = if cli.no_config {
        Config::default()
    } else if let Some(path) = cli.config.as_deref() {
        load_config_file(path)?
    } else {
        load_config()
    };

    let setting = cli.pm_override().unwrap_or(config.package_manager);
    let manager = resolve_package_manager(setting, &project_dir);

    if cli.list {
        // List mode: print scripts and exit
        return list_scripts(&scripts, manager);
    }

    let runner = ShellJobRunner::new();

    if let Some(script_name) = &cli.script {
        // Direct script execution
        return run_script_by_name(
            &scripts,
            manager,
            script_name,
            &project_dir,
            cli.dry_run,
            &runner,
        );
    }

    // Picker mode
    let project_name = project_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("project")
        .to_string();

    let app = App::new(scripts, project_name, manager);

    match run_picker(app).context("Picker error")? {
        // Cancellation is a silent no-op.
        None => Ok(exit_code::SUCCESS),
        Some(script_name) => execute(manager, &script_name, &project_dir, cli.dry_run, &runner),
    }
}

/// Format the command for a script and hand it to the job runner.
fn execute(
    manager: PackageManager,
    script_name: &str,
    project_dir: &Path,
    dry_run: bool,
    runner: &dyn JobRunner,
) -> Result<i32> {
    let command = manager.command_line(script_name);

    if dry_run {
        println!("Would run: {command}");
        return Ok(exit_code::SUCCESS);
    }

    // The script's exit code passes through as our own.
    runner.run(&command, project_dir)
}

/// Run a script by name directly (non-picker mode).
fn run_script_by_name(
    scripts: &Scripts,
    manager: PackageManager,
    script_name: &str,
    project_dir: &Path,
    dry_run: bool,
    runner: &dyn JobRunner,
) -> Result<i32> {
    if scripts.get(script_name).is_none() {
        let err = PsrError::ScriptNotFound {
            name: script_name.to_string(),
        };
        eprintln!("Error: {err}");
        eprintln!();
        eprintln!("Available scripts:");
        for script in scripts.iter() {
            eprintln!("  {}", script.name());
        }
        return Ok(exit_code::GENERAL_ERROR);
    }

    execute(manager, script_name, project_dir, dry_run, runner)
}

/// List scripts in a readable format (non-picker mode).
fn list_scripts(scripts: &Scripts, manager: PackageManager) -> Result<i32> {
    let use_colors = io::stdout().is_terminal();

    if use_colors {
        println!("\x1b[1;36mAvailable scripts ({manager}):\x1b[0m");
    } else {
        println!("Available scripts ({manager}):");
    }
    println!();

    // Align commands on the longest script name
    let max_name_len = scripts
        .iter()
        .map(|s| s.name().chars().count())
        .max()
        .unwrap_or(0)
        .min(30);

    for script in scripts.iter() {
        let name = script.name();
        let command = truncate_string(script.command(), 60);

        if use_colors {
            println!("  \x1b[1;32m{name:max_name_len$}\x1b[0m  \x1b[2m{command}\x1b[0m");
        } else {
            println!("  {name:max_name_len$}  {command}");
        }
    }

    println!();
    if use_colors {
        println!("\x1b[2m{} scripts found\x1b[0m", scripts.len());
    } else {
        println!("{} scripts found", scripts.len());
    }

    Ok(exit_code::SUCCESS)
}

/// Truncate a string to a maximum length, adding ellipsis if needed.
/// Handles multi-byte characters properly.
fn truncate_string(s: &str, max_len: usize) -> String {
    if max_len < 4 {
        return s.chars().take(max_len).collect();
    }

    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{truncated}...")
    }
}
