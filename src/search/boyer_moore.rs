//! Boyer-Moore search: right-to-left matching with the bad-character and
//! good-suffix shift heuristics combined.

use tracing::debug;

use super::{is_degenerate, SubstringSearch};
use crate::results::{Diagnostics, SearchOutcome};

/// Fixed bucket count for the bad-character table. 1024 covers ASCII and
/// the Cyrillic block; wider code points are folded in by modulo. A bucket
/// collision can only shrink a shift, never skip a valid match.
const ALPHABET_SIZE: usize = 1024;

/// Boyer-Moore strategy. On each mismatch the pattern jumps forward by the
/// larger of the two heuristic shifts; both are safe lower bounds on the
/// distance to the next possible match.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoyerMoore;

impl SubstringSearch for BoyerMoore {
    fn name(&self) -> &'static str {
        "boyer-moore"
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
        let bad_character = bad_character_table(&pattern);
        let good_suffix = good_suffix_table(&pattern);
        let mut positions = Vec::new();

        let mut shift = 0;
        while shift <= n - m {
            // Compare right to left.
            let mut j = m as isize - 1;
            while j >= 0 {
                diagnostics.comparisons += 1;
                if pattern[j as usize] != text[shift + j as usize] {
                    break;
                }
                j -= 1;
            }

            if j < 0 {
                positions.push(shift);
                // good_suffix[0] is the minimal safe shift after a full
                // match, so overlapping occurrences are still found.
                shift += good_suffix[0];
            } else {
                let j = j as usize;
                let mismatched = text[shift + j];
                let last_occurrence = bad_character[mismatched as usize % ALPHABET_SIZE];
                let bad_character_shift = (j as isize - last_occurrence).max(1) as usize;
                let good_suffix_shift = good_suffix[j + 1];
                shift += bad_character_shift.max(good_suffix_shift);
            }
        }

        debug!(
            "boyer-moore scan done: {} occurrence(s), {} comparisons",
            positions.len(),
            diagnostics.comparisons
        );
        SearchOutcome::from_positions(positions, diagnostics)
    }
}

/// Last index in `pattern` of each character bucket, -1 when absent.
fn bad_character_table(pattern: &[char]) -> Vec<isize> {
    let mut table = vec![-1isize; ALPHABET_SIZE];
    for (index, &ch) in pattern.iter().enumerate() {
        table[ch as usize % ALPHABET_SIZE] = index as isize;
    }
    table
}

/// Good-suffix shift table of length `m + 1`.
///
/// `table[k]` is the minimal safe shift when the suffix of length `m - k`
/// has already matched (so `table[0]` applies after a full match and
/// `table[m]` after a mismatch on the last character).
///
/// Two-phase border construction. Phase one walks the pattern right to
/// left computing border positions for each suffix, writing `j - i` into a
/// shift slot the first time that suffix is seen to stop matching. Phase
/// two propagates the widest prefix-border into every slot still unset.
/// An incorrect table here causes missed matches, not just slower scans.
fn good_suffix_table(pattern: &[char]) -> Vec<usize> {
    let m = pattern.len();
    let mut shifts = vec![m; m + 1];
    let mut border_positions = vec![0usize; m + 1];

    let mut i = m;
    let mut j = m + 1;
    border_positions[i] = j;

    while i > 0 {
        while j <= m && pattern[i - 1] != pattern[j - 1] {
            if shifts[j] == m {
                shifts[j] = j - i;
            }
            j = border_positions[j];
        }
        i -= 1;
        j -= 1;
        border_positions[i] = j;
    }

    let mut prefix_border = border_positions[0];
    for k in 0..=m {
        if shifts[k] == m {
            shifts[k] = prefix_border;
        }
        if k == prefix_border {
            prefix_border = border_positions[prefix_border];
        }
    }

    shifts
}
