//! Cross-algorithm conformance suite: every strategy must agree with every
//! other on the full observable contract, sentinel included.

use stringscout::{strategies, NaiveSearch, SubstringSearch, NO_MATCH};

/// Runs every strategy over the same inputs and asserts they all produce
/// `expected`.
fn assert_all_find(text: &str, pattern: &str, expected: &[isize]) {
    for strategy in strategies() {
        let outcome = strategy.search(text, pattern);
        assert_eq!(
            outcome.positions(),
            expected,
            "{} disagreed for text {:?} / pattern {:?}",
            strategy.name(),
            text,
            pattern
        );
    }
}

#[test]
fn test_repeating_chars_finds_all_overlapping_occurrences() {
    let expected: Vec<isize> = (0..=8).collect();
    assert_all_find("aaaaaaaaaa", "aa", &expected);
}

#[test]
fn test_empty_text_yields_sentinel() {
    assert_all_find("", "aa", &[NO_MATCH]);
}

#[test]
fn test_empty_pattern_yields_sentinel() {
    assert_all_find("aaaaaaaaaa", "", &[NO_MATCH]);
}

#[test]
fn test_pattern_longer_than_text_yields_sentinel() {
    assert_all_find("aa", "aaaaaaaaaa", &[NO_MATCH]);
}

#[test]
fn test_absent_pattern_yields_sentinel() {
    assert_all_find("aaaaaaaaaa", "bb", &[NO_MATCH]);
}

#[test]
fn test_repeated_pattern_matches_every_period() {
    let pattern = "aabbc";
    let text = pattern.repeat(100);
    let expected: Vec<isize> = (0..100).map(|k| k * pattern.len() as isize).collect();
    assert_all_find(&text, pattern, &expected);
}

#[test]
fn test_cyrillic_positions_are_character_indices() {
    let text = "В доме Облонских всё смешалось, Анна Каренина не могла успокоиться.";
    assert_all_find(text, "Анна Каренина", &[32]);
}

#[test]
fn test_long_pattern_single_match_at_start() {
    let pattern = "Все счастливые семьи похожи друг на друга, \
                   каждая несчастливая семья несчастлива по-своему";
    let text = format!("{}. Всё смешалось в доме Облонских...", pattern);
    assert_all_find(&text, pattern, &[0]);
}

#[test]
fn test_large_text_single_occurrence_at_end() {
    let mut text = "б".repeat(100_000);
    text.push_str("анна");
    assert_all_find(&text, "анна", &[100_000]);
}

#[test]
fn test_oracle_equivalence_exhaustive_small_alphabet() {
    // Every text over {a, b} up to length 8 against every pattern up to
    // length 3: all strategies must reproduce the naive oracle exactly.
    let patterns = ["a", "b", "aa", "ab", "ba", "bb", "aab", "aba", "bab"];
    for length in 0..=8usize {
        for bits in 0..(1u32 << length) {
            let text: String = (0..length)
                .map(|i| if bits >> i & 1 == 0 { 'a' } else { 'b' })
                .collect();
            for pattern in patterns {
                let expected = NaiveSearch.search(&text, pattern);
                for strategy in strategies() {
                    let outcome = strategy.search(&text, pattern);
                    assert_eq!(
                        outcome.positions(),
                        expected.positions(),
                        "{} disagreed with oracle for text {:?} / pattern {:?}",
                        strategy.name(),
                        text,
                        pattern
                    );
                }
            }
        }
    }
}

#[test]
fn test_idempotence_including_diagnostics() {
    let text = "aabbc".repeat(20);
    for strategy in strategies() {
        let first = strategy.search(&text, "aabbc");
        let second = strategy.search(&text, "aabbc");
        assert_eq!(first, second, "{} is not idempotent", strategy.name());
        assert_eq!(
            first.diagnostics(),
            second.diagnostics(),
            "{} accumulated diagnostics across calls",
            strategy.name()
        );
    }
}

#[test]
fn test_outcome_serializes_for_reporting() {
    let outcome = NaiveSearch.search("abab", "ab");
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["positions"], serde_json::json!([0, 2]));
    assert_eq!(json["diagnostics"]["comparisons"], 5);
    assert_eq!(json["diagnostics"]["hashes"], 0);
}
