//! Type definitions for package.json parsing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A script defined in package.json.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    name: String,
    command: String,
}

impl Script {
    /// Create a new script.
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }

    /// Get the script name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the script command.
    pub fn command(&self) -> &str {
        &self.command
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Script")
            .field("name", &self.name)
            .field("command", &self.command)
            .finish()
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.command)
    }
}

/// Collection of scripts from a project, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Scripts {
    scripts: Vec<Script>,
}

impl Scripts {
    /// Create a new empty scripts collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a vector of scripts.
    pub fn from_vec(scripts: Vec<Script>) -> Self {
        Self { scripts }
    }

    /// Add a script to the collection.
    pub fn add(&mut self, script: Script) {
        self.scripts.push(script);
    }

    /// Get the number of scripts.
    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// Get an iterator over the scripts.
    pub fn iter(&self) -> impl Iterator<Item = &Script> {
        self.scripts.iter()
    }

    /// Get the scripts as a slice.
    pub fn as_slice(&self) -> &[Script] {
        &self.scripts
    }

    /// Get a script by name.
    pub fn get(&self, name: &str) -> Option<&Script> {
        self.scripts.iter().find(|s| s.name == name)
    }

    /// Get script names as a vector, in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.scripts.iter().map(|s| s.name()).collect()
    }
}

impl IntoIterator for Scripts {
    type Item = Script;
    type IntoIter = std::vec::IntoIter<Script>;

    fn into_iter(self) -> Self::IntoIter {
        self.scripts.into_iter()
    }
}

impl<'a> IntoIterator for &'a Scripts {
    type Item = &'a Script;
    type IntoIter = std::slice::Iter<'a, Script>;

    fn into_iter(self) -> Self::IntoIter {
        self.scripts.iter()
    }
}

/// Parsed package.json structure.
///
/// Only the fields this tool consumes are declared; everything else in the
/// file is ignored. The `scripts` map is a `serde_json::Map`, which with the
/// `preserve_order` feature keeps keys in declaration order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Package {
    /// Package name.
    #[serde(default)]
    pub name: String,

    /// Raw scripts object.
    #[serde(default)]
    pub scripts: serde_json::Map<String, serde_json::Value>,
}

impl Package {
    /// Get the package name, or "project" if not set.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "project"
        } else {
            &self.name
        }
    }

    /// Check if this package has any scripts.
    pub fn has_scripts(&self) -> bool {
        !self.scripts.is_empty()
    }
}
