// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for deduplication and ranking.
//!
//! Whatever the candidates, the output must hold at most `max` unique values,
//! sorted by score, numbered from zero.

#![no_main]

use std::collections::HashSet;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mailsuggest::{rank_suggestions, Candidate};

#[derive(Debug, Arbitrary)]
struct RankInput {
    candidates: Vec<(String, Option<f64>)>,
    query: String,
    max: u8,
}

fuzz_target!(|input: RankInput| {
    let max = input.max as usize;
    let distinct: HashSet<&str> = input.candidates.iter().map(|(v, _)| v.as_str()).collect();
    let distinct = distinct.len();

    let candidates: Vec<Candidate> = input
        .candidates
        .iter()
        .map(|(value, score)| Candidate {
            value: value.clone(),
            data: None,
            score: *score,
        })
        .collect();

    let ranked = rank_suggestions(candidates, &input.query, max);

    // INVARIANT 1: length is min(distinct, max)
    assert_eq!(ranked.len(), distinct.min(max));

    // INVARIANT 2: unique values
    let unique: HashSet<&str> = ranked.iter().map(|r| r.value.as_str()).collect();
    assert_eq!(unique.len(), ranked.len(), "duplicate values in output");

    // INVARIANT 3: sorted descending, contiguous ranks, no negative or NaN scores
    for (i, r) in ranked.iter().enumerate() {
        assert_eq!(r.data, i);
        assert!(r.score >= 0.0, "bad score {}", r.score);
    }
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
});
