//! Rabin-Karp search: a rolling polynomial hash slides a window across the
//! text, and only hash-equal windows are verified character by character.

use tracing::debug;

use super::{is_degenerate, SubstringSearch};
use crate::results::{Diagnostics, SearchOutcome};

/// Polynomial base: one past the largest 16-bit code unit, so distinct
/// short windows map to distinct polynomials before reduction.
const HASH_BASE: i64 = 65536;

/// Modulus keeping the running hash small. Deliberately modest: collisions
/// are expected and resolved by verification, never reported as matches.
const HASH_MODULUS: i64 = 3301;

/// Rabin-Karp strategy. Average O(n+m); degrades to O(n*m) only under
/// adversarial hash collisions, since every candidate is verified.
#[derive(Debug, Clone, Copy, Default)]
pub struct RabinKarp;

impl SubstringSearch for RabinKarp {
    fn name(&self) -> &'static str {
        "rabin-karp"
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

        let pattern_hash = polynomial_hash(&pattern, &mut diagnostics);
        let mut window_hash = polynomial_hash(&text[..m], &mut diagnostics);

        // HASH_BASE^(m-1) mod HASH_MODULUS, the leading character's weight.
        let mut power = 1i64;
        for _ in 0..m - 1 {
            power = (power * HASH_BASE) % HASH_MODULUS;
        }

        for start in 0..=n - m {
            if window_hash == pattern_hash {
                // Hash equality is only a candidate; verify before
                // recording so collisions never produce false positives.
                let mut offset = 0;
                while offset < m {
                    diagnostics.comparisons += 1;
                    if text[start + offset] != pattern[offset] {
                        break;
                    }
                    offset += 1;
                }
                if offset == m {
                    positions.push(start);
                }
            }

            if start < n - m {
                // Roll the window: drop the leading character's weighted
                // contribution, append the trailing character.
                window_hash = (HASH_BASE * (window_hash - text[start] as i64 * power)
                    + text[start + m] as i64)
                    % HASH_MODULUS;
                if window_hash < 0 {
                    window_hash += HASH_MODULUS;
                }
                diagnostics.hashes += 1;
            }
        }

        debug!(
            "rabin-karp scan done: {} occurrence(s), {} comparisons, {} hashes",
            positions.len(),
            diagnostics.comparisons,
            diagnostics.hashes
        );
        SearchOutcome::from_positions(positions, diagnostics)
    }
}

/// Horner-scheme polynomial hash of `window`, reduced after every step so
/// the running value stays within `[0, HASH_MODULUS)`.
fn polynomial_hash(window: &[char], diagnostics: &mut Diagnostics) -> i64 {
    let mut hash = 0i64;
    for &ch in window {
        hash = (ch as i64 + hash * HASH_BASE) % HASH_MODULUS;
    }
    diagnostics.hashes += 1;
    hash
}
