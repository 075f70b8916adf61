// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind suggestion relevance.
//!
//! Two strings, one number in `[0, 1]`. The score is one minus the match
//! position relative to the candidate length, so prefix matches score a full
//! 1.0 and matches buried deep in a short candidate score lowest.
//!
//! # Rules
//!
//! Both sides are case-folded first. Positions and lengths are in chars.
//!
//! | Case                         | Score                                   |
//! |------------------------------|-----------------------------------------|
//! | query found in item at `pos` | `(len(item) - pos) / len(item)`         |
//! | item found in query at `qpos`| `(len(query) - qpos) / (2 * len(query))`|
//! | neither, or either empty     | `0`                                     |
//!
//! The second row covers the user typing more than the stored fragment, e.g.
//! a candidate `lo` for the query `hello`.

use crate::contracts::check_score_bounds;
use crate::utils::{char_len, find_char_pos, fold_case};

/// Divisor applied to reverse-containment matches.
pub const REVERSE_MATCH_DIVISOR: f64 = 2.0;

/// Highest score a reverse-containment match can reach.
pub const MAX_REVERSE_SCORE: f64 = 1.0 / REVERSE_MATCH_DIVISOR;

/// Score returned when the strings are unrelated.
pub const NO_MATCH: f64 = 0.0;

/// Relevance of `item` for `query`, case-insensitive.
///
/// Never panics and never divides by zero: an empty `item` or `query`
/// scores [`NO_MATCH`].
///
/// ```
/// use mailsuggest::score;
///
/// assert_eq!(score("hello", "ell"), 0.8);
/// assert_eq!(score("lo", "hello"), 0.2);
/// assert_eq!(score("hello", ""), 0.0);
/// ```
pub fn score(item: &str, query: &str) -> f64 {
    let item = fold_case(item);
    let query = fold_case(query);
    let score = score_folded(&item, &query);
    check_score_bounds(score, &item, &query);
    score
}

/// [`score`] on strings that are already case-folded.
///
/// Lets a caller fold the query once and score many items against it.
pub fn score_folded(item: &str, query: &str) -> f64 {
    if item.is_empty() || query.is_empty() {
        return NO_MATCH;
    }

    if let Some(pos) = find_char_pos(item, query) {
        return direct_match_score(pos, char_len(item));
    }

    if let Some(qpos) = find_char_pos(query, item) {
        return reverse_match_score(qpos, char_len(query));
    }

    NO_MATCH
}

/// Query found inside the item at `pos`.
#[inline]
pub fn direct_match_score(pos: usize, item_len: usize) -> f64 {
    if item_len == 0 || pos >= item_len {
        return NO_MATCH;
    }
    (item_len - pos) as f64 / item_len as f64
}

/// Item found inside the query at `qpos`.
#[inline]
pub fn reverse_match_score(qpos: usize, query_len: usize) -> f64 {
    if query_len == 0 || qpos >= query_len {
        return NO_MATCH;
    }
    (query_len - qpos) as f64 / (REVERSE_MATCH_DIVISOR * query_len as f64)
}
