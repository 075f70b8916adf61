// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for scoring and ranking.
//!
//! Debug-mode assertions that check the guarantees callers depend on:
//!
//! 1. **Zero-cost in release builds** (everything is `debug_assert!`)
//! 2. **Early failure detection** in tests and debug runs
//!
//! | Contract Function          | Guarantee                                   |
//! |----------------------------|---------------------------------------------|
//! | `check_score_bounds`       | Computed scores lie in `[0, 1]`             |
//! | `check_ranked_sorted`      | Output is non-increasing by score           |
//! | `check_ranks_contiguous`   | `data` reads `0, 1, 2, ...`                 |
//! | `check_values_unique`      | Each value appears at most once             |
//! | `check_ranked_output`      | All of the above plus `len <= max`          |
//!
//! # Usage
//!
//! ```ignore
//! let ranked = map.into_ranked(max);
//! check_ranked_output(&ranked, max); // no-op in release
//! ```

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::scoring::ranking::compare_scores;
use crate::scoring::{MAX_REVERSE_SCORE, REVERSE_MATCH_DIVISOR};
use crate::types::ScoredResult;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Reverse-containment matches must rank below a direct match at the same
/// relative position.
const _: () = {
    assert!(REVERSE_MATCH_DIVISOR > 1.0);
    assert!(MAX_REVERSE_SCORE < 1.0);
    assert!(MAX_REVERSE_SCORE > 0.0);
};

// ============================================================================
// SCORE CONTRACTS
// ============================================================================

/// Check that a computed score lies in `[0, 1]`.
///
/// Supplied scores are not bounded, so only call this on output of
/// [`crate::score`].
///
/// # Panics (debug builds only)
/// Panics if `score` is negative, above one, or NaN.
#[inline]
pub fn check_score_bounds(score: f64, item: &str, query: &str) {
    debug_assert!(
        (0.0..=1.0).contains(&score),
        "Contract violation: score({:?}, {:?}) = {} outside [0, 1]",
        item,
        query,
        score
    );
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check that ranked output is sorted by score, highest first.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order.
#[inline]
pub fn check_ranked_sorted(results: &[ScoredResult]) {
    for (i, pair) in results.windows(2).enumerate() {
        debug_assert!(
            compare_scores(pair[0].score, pair[1].score) != Ordering::Greater,
            "Contract violation: ranked[{}].score {} < ranked[{}].score {}",
            i,
            pair[0].score,
            i + 1,
            pair[1].score
        );
    }
}

/// Check that rank indexes are `0..len` in order.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_ranks_contiguous(results: &[ScoredResult]) {
    for (i, result) in results.iter().enumerate() {
        debug_assert_eq!(
            result.data, i,
            "Contract violation: ranked[{}] carries rank {}",
            i, result.data
        );
    }
}

/// Check that no value appears twice.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_values_unique(results: &[ScoredResult]) {
    if cfg!(debug_assertions) {
        let mut seen = HashSet::with_capacity(results.len());
        for result in results {
            debug_assert!(
                seen.insert(result.value.as_str()),
                "Contract violation: duplicate value {:?} in ranked output",
                result.value
            );
        }
    }
}

/// Every ranking contract at once.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_ranked_output(results: &[ScoredResult], max: usize) {
    debug_assert!(
        results.len() <= max,
        "Contract violation: {} results exceed max {}",
        results.len(),
        max
    );
    check_ranked_sorted(results);
    check_ranks_contiguous(results);
    check_values_unique(results);
}
