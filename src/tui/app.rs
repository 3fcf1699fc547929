//! Picker application state.

use crate::filter::filter_scripts;
use crate::package::{PackageManager, Script, Scripts};

/// State of the interactive script picker.
///
/// Holds the full script list, the current filter query, the filtered view
/// (indices into the full list), and the highlighted entry. The picker ends
/// either with a chosen script name or with a cancellation.
pub struct App {
    scripts: Scripts,
    project_name: String,
    manager: PackageManager,
    query: String,
    matches: Vec<usize>,
    selected: usize,
    chosen: Option<String>,
    should_quit: bool,
}

impl App {
    /// Create a new picker over the given scripts.
    pub fn new(scripts: Scripts, project_name: String, manager: PackageManager) -> Self {
        let matches = (0..scripts.len()).collect();
        Self {
            scripts,
            project_name,
            manager,
            query: String::new(),
            matches,
            selected: 0,
            chosen: None,
            should_quit: false,
        }
    }

    /// Get the project name for the header.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Get the resolved package manager.
    pub fn manager(&self) -> PackageManager {
        self.manager
    }

    /// Get the current filter query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Get the scripts visible under the current filter, in filter order.
    pub fn visible_scripts(&self) -> Vec<&Script> {
        self.matches
            .iter()
            .filter_map(|&i| self.scripts.as_slice().get(i))
            .collect()
    }

    /// Index of the highlighted entry within the visible list.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Get the highlighted script, if any is visible.
    pub fn selected_script(&self) -> Option<&Script> {
        self.matches
            .get(self.selected)
            .and_then(|&i| self.scripts.as_slice().get(i))
    }

    /// Total number of scripts before filtering.
    pub fn total_scripts(&self) -> usize {
        self.scripts.len()
    }

    /// Move the highlight up one entry.
    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move the highlight down one entry.
    pub fn move_down(&mut self) {
        if self.selected + 1 < self.matches.len() {
            self.selected += 1;
        }
    }

    /// Append a character to the filter query.
    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.refresh_matches();
    }

    /// Remove the last character of the filter query.
    pub fn pop_query_char(&mut self) {
        self.query.pop();
        self.refresh_matches();
    }

    /// Clear the filter query.
    pub fn clear_query(&mut self) {
        self.query.clear();
        self.refresh_matches();
    }

    /// Confirm the highlighted script as the selection.
    ///
    /// Does nothing when the filtered list is empty, so free text can
    /// never produce a selection.
    pub fn confirm(&mut self) {
        if let Some(script) = self.selected_script() {
            self.chosen = Some(script.name().to_string());
            self.should_quit = true;
        }
    }

    /// Cancel the picker without a selection.
    pub fn cancel(&mut self) {
        self.chosen = None;
        self.should_quit = true;
    }

    /// Check if the picker loop should end.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The chosen script name, if the picker ended with a selection.
    pub fn chosen(&self) -> Option<&str> {
        self.chosen.as_deref()
    }

    fn refresh_matches(&mut self) {
        self.matches = filter_scripts(&self.query, self.scripts.as_slice())
            .into_iter()
            .map(|(i, _)| i)
            .collect();

        // Keep the highlight inside the (possibly shorter) filtered list.
        if self.selected >= self.matches.len() {
            self.selected = self.matches.len().saturating_sub(1);
        }
    }
}
