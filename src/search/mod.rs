//! The strategy contract and the four algorithms implementing it.
//!
//! Every algorithm is an independent leaf: none depends on another, all
//! depend only on [`SubstringSearch`] and the result types. Callers pick one
//! strategy, or iterate [`strategies`] to run all four over the same inputs
//! and compare results and diagnostics.

pub mod boyer_moore;
pub mod knuth_morris_pratt;
pub mod naive;
pub mod rabin_karp;

pub use boyer_moore::BoyerMoore;
pub use knuth_morris_pratt::KnuthMorrisPratt;
pub use naive::NaiveSearch;
pub use rabin_karp::RabinKarp;

use crate::results::SearchOutcome;

/// Contract satisfied by every substring search strategy.
///
/// `search` reports the starting position of every occurrence of `pattern`
/// in `text`, in ascending order, as character indices (code points, not
/// bytes). Overlapping occurrences are all reported. Degenerate inputs and
/// zero-occurrence scans yield the `[-1]` sentinel outcome; there is no
/// failure channel.
pub trait SubstringSearch {
    /// Stable algorithm name for reports and benchmarks.
    fn name(&self) -> &'static str;

    /// Finds all occurrences of `pattern` in `text`.
    fn search(&self, text: &str, pattern: &str) -> SearchOutcome;
}

/// One instance of each algorithm, in a fixed order with the naive oracle
/// first. Conformance tests and benchmarks iterate this list.
pub fn strategies() -> Vec<Box<dyn SubstringSearch>> {
    vec![
        Box::new(NaiveSearch),
        Box::new(KnuthMorrisPratt),
        Box::new(BoyerMoore),
        Box::new(RabinKarp),
    ]
}

/// Degenerate-input guard shared by all strategies: empty pattern, empty
/// text, or a pattern longer than the text short-circuits to the sentinel
/// without scanning.
pub(crate) fn is_degenerate(text: &[char], pattern: &[char]) -> bool {
    pattern.is_empty() || text.is_empty() || pattern.len() > text.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategies_order_and_names() {
        let names: Vec<_> = strategies().iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec!["naive", "knuth-morris-pratt", "boyer-moore", "rabin-karp"]
        );
    }

    #[test]
    fn test_degenerate_guard() {
        let text: Vec<char> = "abc".chars().collect();
        let pattern: Vec<char> = "abcd".chars().collect();
        assert!(is_degenerate(&text, &pattern));
        assert!(is_degenerate(&[], &text));
        assert!(is_degenerate(&text, &[]));
        assert!(!is_degenerate(&pattern, &text));
    }
}
