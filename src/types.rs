// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The values that flow through the suggestion pipeline.
//!
//! A `Candidate` goes in, a `ScoredResult` comes out. In between, candidates
//! are scored against the query, collapsed by `value`, and sorted.
//!
//! # Invariants
//!
//! - **Candidate**: `value` is the dedup key. Two candidates with the same
//!   `value` are the same suggestion, whatever their `data` or `score`.
//!
//! - **ScoredResult**: `data` is the zero-based rank, so a ranked list always
//!   reads `0, 1, 2, ...` from the front. The input meaning of `data` (an
//!   opaque payload) does not survive ranking.
//!
//! - **Scores**: non-negative, zero means "no match".

use serde::{Deserialize, Serialize};

/// A value eligible for suggestion.
///
/// `score` is an optional precomputed relevance. When it is absent (or
/// unusable, see [`Candidate::supplied_score`]) the ranker computes one
/// against the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Suggestion text, e.g. `Jane Doe <jane@example.com>`.
    pub value: String,
    /// Opaque payload carried by the provider. Ignored by ranking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Pre-supplied relevance score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Candidate {
    /// A raw candidate, scored later against the query.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            data: None,
            score: None,
        }
    }

    /// A candidate carrying its own score.
    pub fn scored(value: impl Into<String>, score: f64) -> Self {
        Self {
            value: value.into(),
            data: None,
            score: Some(score),
        }
    }

    /// Attach an opaque payload.
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// The supplied score, if it can be trusted as a ranking key.
    ///
    /// Zero, negative, and NaN scores count as absent, so the caller falls
    /// back to computing one. `f64::INFINITY` pins an entry to the top.
    #[inline]
    pub fn supplied_score(&self) -> Option<f64> {
        self.score.filter(|s| !s.is_nan() && *s > 0.0)
    }
}

impl From<&str> for Candidate {
    fn from(value: &str) -> Self {
        Candidate::new(value)
    }
}

impl From<String> for Candidate {
    fn from(value: String) -> Self {
        Candidate::new(value)
    }
}

/// One entry of a ranked suggestion list.
///
/// Serializes as `{ "value": ..., "data": <rank> }`. The score is kept for
/// display and tie inspection but stays off the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub value: String,
    /// Zero-based rank index.
    pub data: usize,
    #[serde(skip)]
    pub score: f64,
}

impl ScoredResult {
    /// Rank index of this result (alias for `data`).
    #[inline]
    pub fn rank(&self) -> usize {
        self.data
    }
}

/// The logged-in user, passed explicitly into suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub name: String,
    pub email: String,
}

impl CurrentUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Mailbox form used as the suggestion value: `Name <email>`.
    ///
    /// A blank name yields the bare address.
    pub fn address(&self) -> String {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() {
            email.to_string()
        } else {
            format!("{} <{}>", name, email)
        }
    }
}
