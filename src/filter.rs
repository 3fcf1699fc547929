//! Fuzzy filtering for the picker.
//!
//! Uses SkimMatcherV2 for fuzzy matching with scoring.

use std::sync::OnceLock;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::package::Script;

/// Global matcher instance, initialized once and reused across calls.
static GLOBAL_MATCHER: OnceLock<SkimMatcherV2> = OnceLock::new();

fn global_matcher() -> &'static SkimMatcherV2 {
    GLOBAL_MATCHER.get_or_init(SkimMatcherV2::default)
}

/// Filter scripts against a query.
///
/// Returns (original_index, score) pairs sorted by score descending, with
/// the original index breaking ties so declaration order is stable. An
/// empty query returns all scripts with score 0, in declaration order.
///
/// # Examples
///
/// ```
/// use psr::filter::filter_scripts;
/// use psr::package::Script;
///
/// let scripts = vec![
///     Script::new("dev", "vite"),
///     Script::new("build", "vite build"),
/// ];
///
/// let matches = filter_scripts("bld", &scripts);
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].0, 1);
/// ```
pub fn filter_scripts(query: &str, scripts: &[Script]) -> Vec<(usize, i64)> {
    if query.is_empty() {
        return (0..scripts.len()).map(|i| (i, 0)).collect();
    }

    let matcher = global_matcher();
    let query = query.to_lowercase();

    let mut matches: Vec<(usize, i64)> = scripts
        .iter()
        .enumerate()
        .filter_map(|(i, script)| {
            matcher
                .fuzzy_match(&script.name().to_lowercase(), &query)
                .map(|score| (i, score))
        })
        .collect();

    matches.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    matches
}
