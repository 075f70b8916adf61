//! Ranking property tests.
//!
//! - Output length is min(distinct values, max)
//! - Output is sorted descending by score
//! - Rank indexes are 0..len
//! - Values are unique, first occurrence's score is kept
//! - Equal scores preserve first-seen order

use std::collections::HashMap;

use mailsuggest::{rank_suggestions, Candidate};
use proptest::prelude::*;

/// Candidates drawn from a small value pool so duplicates are common.
fn candidate_strategy() -> impl Strategy<Value = Candidate> {
    (
        prop::sample::select(vec!["ann", "bob", "anna", "hannah", "joanne", "bo", "nan", "x"]),
        prop::option::of(prop_oneof![Just(0.0), 0.01f64..5.0]),
    )
        .prop_map(|(value, score)| Candidate {
            value: value.to_string(),
            data: None,
            score,
        })
}

fn candidates_strategy() -> impl Strategy<Value = Vec<Candidate>> {
    prop::collection::vec(candidate_strategy(), 0..30)
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["", "an", "ann", "bo", "h", "nna", "zzz"]).prop_map(String::from)
}

/// Oracle: distinct values in first-seen order.
fn first_seen(candidates: &[Candidate]) -> Vec<String> {
    let mut seen = Vec::new();
    for c in candidates {
        if !seen.contains(&c.value) {
            seen.push(c.value.clone());
        }
    }
    seen
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: length is min(distinct values, max).
    #[test]
    fn prop_length_bounded(
        candidates in candidates_strategy(),
        query in query_strategy(),
        max in 0usize..12,
    ) {
        let distinct = first_seen(&candidates).len();
        let ranked = rank_suggestions(candidates, &query, max);
        prop_assert_eq!(ranked.len(), distinct.min(max));
    }

    /// Property: non-increasing scores, contiguous ranks, unique values.
    #[test]
    fn prop_sorted_indexed_unique(candidates in candidates_strategy(), query in query_strategy()) {
        let ranked = rank_suggestions(candidates, &query, 100);

        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        for (i, r) in ranked.iter().enumerate() {
            prop_assert_eq!(r.data, i);
        }
        let mut values: Vec<_> = ranked.iter().map(|r| r.value.clone()).collect();
        values.sort();
        values.dedup();
        prop_assert_eq!(values.len(), ranked.len());
    }

    /// Property: a supplied positive score on the first occurrence is what gets ranked.
    #[test]
    fn prop_first_supplied_score_kept(candidates in candidates_strategy(), query in query_strategy()) {
        let mut first: HashMap<String, Option<f64>> = HashMap::new();
        for c in &candidates {
            first.entry(c.value.clone()).or_insert(c.score);
        }

        let ranked = rank_suggestions(candidates, &query, 100);
        for r in &ranked {
            if let Some(Some(s)) = first.get(&r.value) {
                if *s > 0.0 {
                    prop_assert_eq!(r.score, *s);
                }
            }
        }
    }

    /// Property: ties keep first-seen order.
    #[test]
    fn prop_ties_stable(candidates in candidates_strategy(), query in query_strategy()) {
        let order = first_seen(&candidates);
        let position = |v: &str| order.iter().position(|o| o == v).unwrap();

        let ranked = rank_suggestions(candidates, &query, 100);
        for pair in ranked.windows(2) {
            if pair[0].score == pair[1].score {
                prop_assert!(position(&pair[0].value) < position(&pair[1].value));
            }
        }
    }

    /// Property: truncation keeps a prefix of the untruncated ranking.
    #[test]
    fn prop_truncation_is_prefix(
        candidates in candidates_strategy(),
        query in query_strategy(),
        max in 0usize..12,
    ) {
        let full = rank_suggestions(candidates.clone(), &query, usize::MAX);
        let cut = rank_suggestions(candidates, &query, max);
        prop_assert_eq!(&full[..cut.len()], &cut[..]);
    }
}
