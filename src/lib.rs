//! Classic substring search algorithms behind a single contract.
//!
//! Four strategies — [`NaiveSearch`], [`KnuthMorrisPratt`], [`BoyerMoore`],
//! and [`RabinKarp`] — implement the [`SubstringSearch`] trait. Each takes a
//! text and a pattern and reports every starting position (character index)
//! at which the pattern occurs, overlaps included, together with per-call
//! [`Diagnostics`] for algorithm comparison.
//!
//! The library performs no I/O and exposes no error channel: degenerate
//! inputs (empty pattern, empty text, pattern longer than text) and
//! zero-occurrence scans both yield the [`NO_MATCH`] sentinel position `-1`,
//! so callers branch on `outcome.positions()[0] == -1` or on
//! [`SearchOutcome::is_match`].
//!
//! # Example
//!
//! ```
//! use stringscout::{BoyerMoore, NaiveSearch, SubstringSearch};
//!
//! let outcome = BoyerMoore.search("abracadabra", "abra");
//! assert_eq!(outcome.positions(), &[0, 7]);
//!
//! // All strategies agree on the same contract.
//! let oracle = NaiveSearch.search("abracadabra", "abra");
//! assert_eq!(outcome.positions(), oracle.positions());
//!
//! // No match is the sentinel, not an empty list.
//! let missing = BoyerMoore.search("abracadabra", "xyz");
//! assert_eq!(missing.positions(), &[-1]);
//! assert!(!missing.is_match());
//! ```

pub mod results;
pub mod search;

pub use results::{Diagnostics, SearchOutcome, NO_MATCH};
pub use search::{
    strategies, BoyerMoore, KnuthMorrisPratt, NaiveSearch, RabinKarp, SubstringSearch,
};
