//! Knuth-Morris-Pratt search: linear-time scanning driven by the pattern's
//! prefix (failure) function.

use tracing::debug;

use super::{is_degenerate, SubstringSearch};
use crate::results::{Diagnostics, SearchOutcome};

/// KMP strategy. Preprocesses the pattern in O(m), scans the text in O(n),
/// and never moves the text pointer backwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnuthMorrisPratt;

impl SubstringSearch for KnuthMorrisPratt {
    fn name(&self) -> &'static str {
        "knuth-morris-pratt"
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
        let prefix = prefix_function(&pattern);
        let mut positions = Vec::new();

        let mut text_pointer = 0;
        let mut pattern_pointer = 0;
        while text_pointer < n {
            diagnostics.comparisons += 1;
            if text[text_pointer] == pattern[pattern_pointer] {
                text_pointer += 1;
                pattern_pointer += 1;
                if pattern_pointer == m {
                    positions.push(text_pointer - m);
                    // Resume from the widest border so overlapping
                    // occurrences are found without rescanning.
                    pattern_pointer = prefix[m - 1];
                }
            } else if pattern_pointer != 0 {
                // Fall back through shorter borders, text pointer held.
                pattern_pointer = prefix[pattern_pointer - 1];
            } else {
                text_pointer += 1;
            }
        }

        debug!(
            "kmp scan done: {} occurrence(s), {} comparisons",
            positions.len(),
            diagnostics.comparisons
        );
        SearchOutcome::from_positions(positions, diagnostics)
    }
}

/// Prefix function of `pattern`: `prefix[k]` is the length of the longest
/// proper prefix of `pattern[..=k]` that is also a suffix of it.
fn prefix_function(pattern: &[char]) -> Vec<usize> {
    let mut prefix = vec![0usize; pattern.len()];
    let mut border = 0; // length of the border being extended
    let mut index = 1;

    while index < pattern.len() {
        if pattern[index] == pattern[border] {
            border += 1;
            prefix[index] = border;
            index += 1;
        } else if border != 0 {
            // Try the next shorter border before giving up on this index.
            border = prefix[border - 1];
        } else {
            prefix[index] = 0;
            index += 1;
        }
    }

    prefix
}
