//! Shared test utilities and fixtures.

#![allow(dead_code)]

use mailsuggest::ScoredResult;

// Re-export canonical test utilities from mailsuggest::testing
pub use mailsuggest::testing::{make_address, make_ascending_scored, make_candidates, FixedProvider};

/// Team address book used across suggester tests.
pub const TEAM: &[&str] = &[
    "Jane Doe <jane.doe@example.com>",
    "Janet Rivers <janet@example.com>",
    "Bob Stone <bob@example.com>",
    "support@example.com",
    "Mary-Jane Watson <mj@example.org>",
];

/// Values of a ranked list, in order.
pub fn values(results: &[ScoredResult]) -> Vec<&str> {
    results.iter().map(|r| r.value.as_str()).collect()
}

/// Rank indexes of a ranked list, in order.
pub fn ranks(results: &[ScoredResult]) -> Vec<usize> {
    results.iter().map(|r| r.data).collect()
}

/// Float comparison with a fixed tolerance.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
