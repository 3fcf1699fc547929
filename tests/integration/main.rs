//! Integration tests for psr.
//!
//! Organized by feature:
//!
//! - `fixtures` - Test helpers for creating temporary projects
//! - `cli_tests` - CLI interface tests
//! - `detection_tests` - Package manager detection tests
//! - `config_tests` - Configuration loading tests

mod cli_tests;
mod detection_tests;
mod fixtures;
