// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Wildcard character users append to "search everything starting with".
pub const WILDCARD: char = '*';

/// Fold a string for case-insensitive comparison.
///
/// With the `unicode-normalization` feature the string is NFC-composed first,
/// so `"e\u{301}"` and `"é"` fold to the same thing:
/// - "Jane.Doe@Example.COM" → "jane.doe@example.com"
/// - "Rene\u{301}" → "rené"
///
/// Whitespace is left alone: addresses like `Jane Doe <jane@x>` match on
/// their exact spacing.
#[cfg(feature = "unicode-normalization")]
pub fn fold_case(value: &str) -> String {
    value.nfc().collect::<String>().to_lowercase()
}

/// Lowercase only. Assumes input is already composed.
#[cfg(not(feature = "unicode-normalization"))]
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Strip one trailing `*` from a query.
///
/// `"jan*"` → `"jan"`. Only the last character is considered; a query of
/// just `"*"` becomes empty.
pub fn strip_wildcard(query: &str) -> &str {
    query.strip_suffix(WILDCARD).unwrap_or(query)
}

/// Length in chars.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Find `needle` in `haystack`, returning the char (not byte) position.
///
/// An empty needle never matches. Scoring treats empty strings as "no
/// relation", and `str::find("")` would report a match at 0.
pub fn find_char_pos(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .find(needle)
        .map(|byte_pos| haystack[..byte_pos].chars().count())
}
