// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the scoring function.
//!
//! Any pair of strings must score in [0, 1] without panicking. Multi-byte
//! input, strings that change length when lowercased, and empty strings are
//! the interesting cases.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mailsuggest::score;

fuzz_target!(|input: (String, String)| {
    let (item, query) = input;
    let s = score(&item, &query);

    // INVARIANT 1: bounded
    assert!((0.0..=1.0).contains(&s), "score out of range: {}", s);

    // INVARIANT 2: empty strings never match
    if item.is_empty() || query.is_empty() {
        assert_eq!(s, 0.0);
    }
});
