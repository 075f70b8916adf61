// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! First-wins deduplication of candidates by value.
//!
//! The same address often arrives twice: once from the current user, once
//! from an address book, maybe again from a second provider. Only the first
//! arrival counts. Its score (supplied or computed) is the one that gets
//! ranked, and its position decides ties.
//!
//! `ScoreMap` keys on `value` alone. Insertion order is kept alongside the
//! lookup table, so a stable sort over it reproduces input order for equal
//! scores.
//!
//! **Invariant**: Each value appears at most once in ranked output.

use std::collections::HashMap;

use crate::contracts::check_ranked_output;
use crate::scoring::ranking::sort_by_score_desc;
use crate::types::ScoredResult;

/// Insertion-ordered map from candidate value to score.
///
/// # Example
///
/// ```
/// use mailsuggest::ScoreMap;
///
/// let mut map = ScoreMap::new();
/// map.insert("ann@example.com", 0.4);
/// map.insert("bob@example.com", 0.9);
/// map.insert("ann@example.com", 1.0); // ignored, ann is already in
///
/// let ranked = map.into_ranked(10);
/// assert_eq!(ranked[0].value, "bob@example.com");
/// assert_eq!(ranked[1].score, 0.4);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ScoreMap {
    /// Entries in first-seen order.
    entries: Vec<(String, f64)>,
    /// Value -> index into `entries`.
    index: HashMap<String, usize>,
}

impl ScoreMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for roughly `capacity` distinct values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Record `value` with `score` unless it is already present.
    ///
    /// Returns `true` if the value was new.
    pub fn insert(&mut self, value: impl Into<String>, score: f64) -> bool {
        let value = value.into();
        if self.index.contains_key(&value) {
            return false;
        }
        self.index.insert(value.clone(), self.entries.len());
        self.entries.push((value, score));
        true
    }

    /// Insert `value` with a lazily computed score.
    ///
    /// `score` only runs when the value is new, so a duplicate costs a hash
    /// lookup instead of a substring search.
    pub fn insert_with(&mut self, value: &str, score: impl FnOnce() -> f64) -> bool {
        if self.index.contains_key(value) {
            return false;
        }
        self.insert(value, score())
    }

    /// Insert many `(value, score)` pairs, first occurrence wins.
    pub fn extend<S: Into<String>>(&mut self, pairs: impl IntoIterator<Item = (S, f64)>) {
        for (value, score) in pairs {
            self.insert(value, score);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.index.contains_key(value)
    }

    /// The retained score for `value`.
    pub fn score_of(&self, value: &str) -> Option<f64> {
        self.index.get(value).map(|&i| self.entries[i].1)
    }

    /// Values in first-seen order.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(v, _)| v.as_str())
    }

    /// Sort descending by score, assign rank indexes, keep the first `max`.
    ///
    /// Ties keep first-seen order.
    pub fn into_ranked(self, max: usize) -> Vec<ScoredResult> {
        let mut entries = self.entries;
        sort_by_score_desc(&mut entries);
        entries.truncate(max);

        let ranked: Vec<ScoredResult> = entries
            .into_iter()
            .enumerate()
            .map(|(rank, (value, score))| ScoredResult {
                value,
                data: rank,
                score,
            })
            .collect();

        check_ranked_output(&ranked, max);
        ranked
    }
}
