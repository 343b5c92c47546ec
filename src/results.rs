//! Search result types shared by every algorithm.
//!
//! Diagnostics are returned by value alongside the positions instead of
//! living as mutable counters on the strategy object. This keeps strategy
//! values stateless, makes repeated calls trivially idempotent, and removes
//! the need to reset anything between calls.

use serde::Serialize;

/// Sentinel position reported when a search finds nothing.
///
/// The contract deliberately returns the single-element list `[-1]` rather
/// than an empty list, for both degenerate inputs and zero-occurrence scans.
/// Real positions are always `>= 0`, so a leading `-1` is unambiguous.
pub const NO_MATCH: isize = -1;

/// Per-call operation counters, for algorithm-comparison reporting.
///
/// Not part of the correctness contract: two conforming implementations may
/// count differently, but a single implementation must count
/// deterministically for identical inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    /// Character equality tests performed, including the mismatching one
    /// that ends a window or alignment.
    pub comparisons: u64,
    /// Hash computations performed. Zero for everything but Rabin-Karp.
    pub hashes: u64,
}

/// The result of one `search` call: match positions plus diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    positions: Vec<isize>,
    diagnostics: Diagnostics,
}

impl SearchOutcome {
    /// Builds an outcome from collected match positions, mapping an empty
    /// collection onto the sentinel.
    pub(crate) fn from_positions(positions: Vec<usize>, diagnostics: Diagnostics) -> Self {
        if positions.is_empty() {
            return Self::no_match(diagnostics);
        }
        Self {
            positions: positions.into_iter().map(|p| p as isize).collect(),
            diagnostics,
        }
    }

    /// The sentinel outcome `[-1]`.
    pub(crate) fn no_match(diagnostics: Diagnostics) -> Self {
        Self {
            positions: vec![NO_MATCH],
            diagnostics,
        }
    }

    /// Ascending starting positions of every occurrence (character indices),
    /// or the single sentinel `-1` when there are none.
    pub fn positions(&self) -> &[isize] {
        &self.positions
    }

    /// Whether at least one occurrence was found.
    pub fn is_match(&self) -> bool {
        self.positions[0] != NO_MATCH
    }

    /// Number of occurrences found; zero for the sentinel outcome.
    pub fn match_count(&self) -> usize {
        if self.is_match() {
            self.positions.len()
        } else {
            0
        }
    }

    /// Operation counters recorded during this call.
    pub fn diagnostics(&self) -> Diagnostics {
        self.diagnostics
    }
}
