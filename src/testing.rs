// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::provider::SuggestionProvider;
use crate::types::{Candidate, CurrentUser};

/// Candidate list from plain values, none pre-scored.
pub fn make_candidates(values: &[&str]) -> Vec<Candidate> {
    values.iter().map(|v| Candidate::new(*v)).collect()
}

/// Candidate list with a distinct positive score each: the first value gets
/// the lowest score, the last gets the highest.
pub fn make_ascending_scored(count: usize) -> Vec<Candidate> {
    (0..count)
        .map(|i| Candidate::scored(format!("user{:03}@example.com", i), (i + 1) as f64))
        .collect()
}

/// A mailbox in `Name <local@example.com>` form.
pub fn make_address(name: &str) -> String {
    format!("{} <{}@example.com>", name, name.to_lowercase().replace(' ', "."))
}

/// Provider that returns a fixed list, ignoring the query.
pub struct FixedProvider {
    pub name: String,
    pub candidates: Vec<Candidate>,
}

impl FixedProvider {
    pub fn new(name: &str, candidates: Vec<Candidate>) -> Self {
        Self {
            name: name.to_string(),
            candidates,
        }
    }
}

impl SuggestionProvider for FixedProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn suggest(&self, _query: &str, _user: Option<&CurrentUser>, _max: usize) -> Vec<Candidate> {
        self.candidates.clone()
    }
}
