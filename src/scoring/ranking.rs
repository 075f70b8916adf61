// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering: how suggestions get sorted.
//!
//! Score is the only key. Higher first. Equal scores compare `Equal`, and the
//! ranker relies on a stable sort to keep them in insertion order, so the
//! first provider to offer a value also wins ties.

use std::cmp::Ordering;

/// Compare two scores for descending order.
///
/// Incomparable values (NaN) compare `Equal` so a stable sort leaves them
/// where they are. The ranker never produces NaN, but a caller-built list
/// might.
///
/// ```
/// use mailsuggest::compare_scores;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_scores(0.9, 0.1), Ordering::Less); // 0.9 sorts first
/// ```
#[inline]
pub fn compare_scores(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Stable descending sort of `(value, score)` pairs.
pub fn sort_by_score_desc<T>(entries: &mut [(T, f64)]) {
    entries.sort_by(|a, b| compare_scores(a.1, b.1));
}
