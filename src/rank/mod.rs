// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deduplicate, sort, truncate.
//!
//! `rank_suggestions` is the whole pipeline in one call: every candidate is
//! scored (or keeps its supplied score), collapsed by value with first-wins
//! semantics, stable-sorted descending, numbered from zero, and cut to `max`.
//!
//! The query is used as given. Stripping a trailing `*` is the caller's job
//! (see [`crate::utils::strip_wildcard`]); `Suggester` does it for you.

mod dedup;

pub use dedup::ScoreMap;

use tracing::trace;

use crate::scoring::score_folded;
use crate::types::{Candidate, ScoredResult};
use crate::utils::fold_case;

/// Result limit used when the caller does not pick one.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;

/// Score, deduplicate, and rank candidates for `query`.
///
/// A candidate's supplied score is used when it is positive (NaN counts as absent);
/// otherwise the score is computed with [`crate::score`]. The first candidate
/// for a given value decides its score.
///
/// Output has at most `max` entries, is non-increasing by score, and
/// carries rank indexes `0..len`. Empty input gives empty output.
///
/// ```
/// use mailsuggest::{rank_suggestions, Candidate};
///
/// let ranked = rank_suggestions(
///     vec![
///         Candidate::new("Bob <bob@example.com>"),
///         Candidate::new("bobby@example.com"),
///         Candidate::scored("Bob <bob@example.com>", 0.01),
///     ],
///     "bob",
///     10,
/// );
///
/// // the duplicate "Bob" is dropped; the tie at 1.0 keeps input order
/// assert_eq!(ranked.len(), 2);
/// assert_eq!(ranked[0].value, "Bob <bob@example.com>");
/// assert_eq!(ranked[0].data, 0);
/// assert_eq!(ranked[1].value, "bobby@example.com");
/// ```
pub fn rank_suggestions<I, C>(candidates: I, query: &str, max: usize) -> Vec<ScoredResult>
where
    I: IntoIterator<Item = C>,
    C: Into<Candidate>,
{
    let folded_query = fold_case(query);
    let candidates = candidates.into_iter();
    let mut map = ScoreMap::with_capacity(candidates.size_hint().0);

    for candidate in candidates {
        let candidate = candidate.into();
        map.insert_with(&candidate.value, || {
            candidate
                .supplied_score()
                .unwrap_or_else(|| score_folded(&fold_case(&candidate.value), &folded_query))
        });
    }

    trace!(query, distinct = map.len(), max, "ranking candidates");
    map.into_ranked(max)
}

/// [`rank_suggestions`] with [`DEFAULT_MAX_SUGGESTIONS`].
pub fn rank_suggestions_default<I, C>(candidates: I, query: &str) -> Vec<ScoredResult>
where
    I: IntoIterator<Item = C>,
    C: Into<Candidate>,
{
    rank_suggestions(candidates, query, DEFAULT_MAX_SUGGESTIONS)
}
