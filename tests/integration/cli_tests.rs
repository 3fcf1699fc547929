//! CLI integration tests for psr.
//!
//! These tests verify the command-line interface behavior using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;

use crate::fixtures::{
    create_empty_project, create_nested_project, create_project, create_project_invalid_json,
    create_project_no_scripts, standard_scripts,
};

/// Get a Command for the psr binary.
fn psr() -> Command {
    Command::cargo_bin("psr").unwrap()
}

// ==================== Help and Version ====================

#[test]
fn test_help_output() {
    psr()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Options:"))
        .stdout(predicate::str::contains("--list"))
        .stdout(predicate::str::contains("--script"))
        .stdout(predicate::str::contains("--pm"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_version_output() {
    psr()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("psr"))
        .stdout(predicate::str::is_match(r"\d+\.\d+\.\d+").unwrap());
}

// ==================== List Mode ====================

#[test]
fn test_list_basic() {
    let project = create_project(&standard_scripts());

    psr()
        .args(["--list", "--no-config"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("dev"))
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("test"))
        .stdout(predicate::str::contains("lint"))
        .stdout(predicate::str::contains("format"))
        .stdout(predicate::str::contains("5 scripts found"));
}

#[test]
fn test_list_short_flag() {
    let project = create_project(&standard_scripts());

    psr()
        .args(["-l", "--no-config"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("dev"));
}

#[test]
fn test_list_keeps_declaration_order() {
    let project = create_project(&[("zebra", "echo z"), ("alpha", "echo a")]);

    let output = psr()
        .args(["--list", "--no-config"])
        .current_dir(project.path())
        .output()
        .expect("Failed to run psr");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let zebra = stdout.find("zebra").expect("zebra should be listed");
    let alpha = stdout.find("alpha").expect("alpha should be listed");
    assert!(zebra < alpha, "Declaration order not preserved:\n{stdout}");
}

#[test]
fn test_list_empty_scripts() {
    let project = create_empty_project();

    psr()
        .args(["--list", "--no-config"])
        .current_dir(project.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No scripts found in package.json",
        ));
}

#[test]
fn test_list_no_scripts_field() {
    let project = create_project_no_scripts();

    psr()
        .args(["--list", "--no-config"])
        .current_dir(project.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No scripts found in package.json",
        ));
}

// ==================== Direct Script Mode ====================

#[test]
fn test_script_dry_run() {
    let project = create_project(&standard_scripts());

    psr()
        .args(["--script", "dev", "--dry-run", "--no-config"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: npm run dev"));
}

#[test]
fn test_script_short_flags() {
    let project = create_project(&standard_scripts());

    psr()
        .args(["-n", "build", "-d", "--no-config"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: npm run build"));
}

#[test]
fn test_script_invalid() {
    let project = create_project(&standard_scripts());

    psr()
        .args(["--script", "nonexistent", "--no-config"])
        .current_dir(project.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("'nonexistent' not found"))
        .stderr(predicate::str::contains("Available scripts:"))
        .stderr(predicate::str::contains("dev"));
}

#[test]
fn test_script_special_characters() {
    let project = create_project(&[("build:prod", "vite build --mode production")]);

    psr()
        .args(["--script", "build:prod", "--dry-run", "--no-config"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: npm run build:prod"));
}

// ==================== Project Location ====================

#[test]
fn test_path_argument() {
    let project = create_project(&standard_scripts());

    psr()
        .args(["--list", "--no-config", project.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("dev"));
}

#[test]
fn test_walks_up_to_package_json() {
    let project = create_nested_project(&standard_scripts());

    psr()
        .args(["--list", "--no-config"])
        .current_dir(project.path().join("src/components"))
        .assert()
        .success()
        .stdout(predicate::str::contains("5 scripts found"));
}

#[test]
fn test_nearest_package_json_wins() {
    let project = create_nested_project(&standard_scripts());

    // An inner package.json shadows the outer one
    std::fs::write(
        project.path().join("src/package.json"),
        r#"{"name": "inner", "scripts": {"only": "echo inner"}}"#,
    )
    .unwrap();

    psr()
        .args(["--list", "--no-config"])
        .current_dir(project.path().join("src/components"))
        .assert()
        .success()
        .stdout(predicate::str::contains("only"))
        .stdout(predicate::str::contains("1 scripts found"));
}

// ==================== Exit Codes ====================

#[test]
fn test_exit_code_no_package_json() {
    let temp = tempfile::tempdir().unwrap();

    psr()
        .args(["--list", "--no-config"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "No package.json found in current directory or parent directories",
        ));
}

#[test]
fn test_exit_code_no_scripts() {
    let project = create_empty_project();

    psr()
        .args(["--list", "--no-config"])
        .current_dir(project.path())
        .assert()
        .code(3);
}

#[test]
fn test_exit_code_invalid_json() {
    let project = create_project_invalid_json();

    psr()
        .args(["--list", "--no-config"])
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse package.json"));
}

#[test]
fn test_non_string_script_value_is_parse_error() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(
        temp.path().join("package.json"),
        r#"{"scripts": {"dev": 42}}"#,
    )
    .unwrap();

    psr()
        .args(["--list", "--no-config"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("dev"))
        .stderr(predicate::str::contains("expected a string"));
}
