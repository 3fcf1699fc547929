//! Package manager detection tests.
//!
//! The resolved manager is observed through --dry-run output, which prints
//! the exact command line that would run.

use assert_cmd::Command;
use predicates::prelude::*;

use crate::fixtures::{create_project, create_project_with_lockfile, LockfileType};

fn psr() -> Command {
    Command::cargo_bin("psr").unwrap()
}

fn dry_run_dev(project: &tempfile::TempDir, extra: &[&str]) -> assert_cmd::assert::Assert {
    let mut args = vec!["--script", "dev", "--dry-run", "--no-config"];
    args.extend_from_slice(extra);

    psr().args(&args).current_dir(project.path()).assert()
}

const DEV_SCRIPTS: &[(&str, &str)] = &[("dev", "vite")];

// ==================== Lock File Detection ====================

#[test]
fn test_defaults_to_npm_without_lockfile() {
    let project = create_project(DEV_SCRIPTS);

    dry_run_dev(&project, &[])
        .success()
        .stdout(predicate::str::contains("Would run: npm run dev"));
}

#[test]
fn test_detects_pnpm_from_lockfile() {
    let project = create_project_with_lockfile(DEV_SCRIPTS, LockfileType::Pnpm);

    dry_run_dev(&project, &[])
        .success()
        .stdout(predicate::str::contains("Would run: pnpm dev"));
}

#[test]
fn test_detects_bun_from_lockfile() {
    let project = create_project_with_lockfile(DEV_SCRIPTS, LockfileType::Bun);

    // bun runs scripts without a "run" subcommand
    dry_run_dev(&project, &[])
        .success()
        .stdout(predicate::str::contains("Would run: bun dev"));
}

#[test]
fn test_npm_lockfile_still_npm() {
    let project = create_project_with_lockfile(DEV_SCRIPTS, LockfileType::Npm);

    dry_run_dev(&project, &[])
        .success()
        .stdout(predicate::str::contains("Would run: npm run dev"));
}

#[test]
fn test_pnpm_wins_over_bun() {
    let project = create_project_with_lockfile(DEV_SCRIPTS, LockfileType::Pnpm);
    std::fs::write(project.path().join("bun.lockb"), "").unwrap();

    dry_run_dev(&project, &[])
        .success()
        .stdout(predicate::str::contains("Would run: pnpm dev"));
}

// ==================== CLI Override ====================

#[test]
fn test_pm_flag_overrides_lockfile() {
    let project = create_project_with_lockfile(DEV_SCRIPTS, LockfileType::Pnpm);

    dry_run_dev(&project, &["--pm", "npm"])
        .success()
        .stdout(predicate::str::contains("Would run: npm run dev"));
}

#[test]
fn test_pm_flag_bun() {
    let project = create_project(DEV_SCRIPTS);

    dry_run_dev(&project, &["--pm", "bun"])
        .success()
        .stdout(predicate::str::contains("Would run: bun dev"));
}

#[test]
fn test_pm_flag_rejects_unknown_value() {
    let project = create_project(DEV_SCRIPTS);

    psr()
        .args(["--script", "dev", "--dry-run", "--pm", "yarn", "--no-config"])
        .current_dir(project.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
