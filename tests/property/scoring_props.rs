//! Scoring property tests.
//!
//! - Scores are bounded in [0, 1]
//! - Self match is exactly 1
//! - Empty strings score 0
//! - Reverse-only matches never exceed half
//! - Case folding does not change scores

use mailsuggest::{score, MAX_REVERSE_SCORE};
use proptest::prelude::*;

/// Generate address-like strings, mixed case.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9.@ <>-]{0,24}").unwrap()
}

/// Generate short queries, including empty.
fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z.@]{0,6}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: every score lies in [0, 1].
    #[test]
    fn prop_score_bounded(item in text_strategy(), query in query_strategy()) {
        let s = score(&item, &query);
        prop_assert!((0.0..=1.0).contains(&s), "score({:?}, {:?}) = {}", item, query, s);
    }

    /// Property: a non-empty string matches itself perfectly.
    #[test]
    fn prop_self_match_is_one(item in "[a-z@.]{1,20}") {
        prop_assert_eq!(score(&item, &item), 1.0);
    }

    /// Property: empty on either side never faults and scores zero.
    #[test]
    fn prop_empty_scores_zero(item in text_strategy()) {
        prop_assert_eq!(score(&item, ""), 0.0);
        prop_assert_eq!(score("", &item), 0.0);
    }

    /// Property: a prefix query always scores 1.
    #[test]
    fn prop_prefix_scores_one(item in "[a-z]{1,12}", cut in 1usize..12) {
        let cut = cut.min(item.len());
        prop_assert_eq!(score(&item, &item[..cut]), 1.0);
    }

    /// Property: when only the item is inside the query, the score is at most 0.5.
    #[test]
    fn prop_reverse_match_capped(
        prefix in "[a-z]{1,6}",
        item in "[a-z]{1,6}",
        suffix in "[a-z]{0,6}",
    ) {
        let query = format!("{}{}{}", prefix, item, suffix);
        let s = score(&item, &query);
        // query is strictly longer than item, so only the reverse rule can fire
        prop_assert!(s > 0.0 && s <= MAX_REVERSE_SCORE, "score({:?}, {:?}) = {}", item, query, s);
    }

    /// Property: scoring is case-insensitive.
    #[test]
    fn prop_case_insensitive(item in "[a-zA-Z@.]{0,16}", query in "[a-zA-Z]{0,4}") {
        prop_assert_eq!(
            score(&item, &query),
            score(&item.to_uppercase(), &query.to_lowercase())
        );
    }

    /// Property: scoring is deterministic.
    #[test]
    fn prop_score_deterministic(item in text_strategy(), query in query_strategy()) {
        prop_assert_eq!(score(&item, &query), score(&item, &query));
    }
}
