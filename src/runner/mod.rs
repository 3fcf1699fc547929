//! Script execution.

mod executor;

pub use executor::{JobRunner, ShellJobRunner};
