//! Brute-force search: the reference oracle the other algorithms are
//! validated against.

use tracing::debug;

use super::{is_degenerate, SubstringSearch};
use crate::results::{Diagnostics, SearchOutcome};

/// Direct character-by-character comparison at every candidate start.
/// O(n*m) worst case, but unbeatable on tiny inputs and trivially correct.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveSearch;

impl SubstringSearch for NaiveSearch {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn search(&self, text: &str, pattern: &str) -> SearchOutcome {
        let text: Vec<char> = text.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();
        let mut diagnostics = Diagnostics::default();

        if is_degenerate(&text, &pattern) {
            return SearchOutcome::no_match(diagnostics);
        }

        let n = text.len();
        let m = pattern.len();
        let mut positions = Vec::new();

        for start in 0..=n - m {
            let mut matched = true;
            for offset in 0..m {
                diagnostics.comparisons += 1;
                if text[start + offset] != pattern[offset] {
                    matched = false;
                    break;
                }
            }
            if matched {
                positions.push(start);
            }
        }

        debug!(
            "naive scan done: {} occurrence(s), {} comparisons",
            positions.len(),
            diagnostics.comparisons
        );
        SearchOutcome::from_positions(positions, diagnostics)
    }
}
