// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate sources.
//!
//! A provider turns a query into raw candidates. It does not rank, and it
//! does not need to deduplicate: the ranker collapses repeats and keeps the
//! first one it sees. Providers are handed to the suggester explicitly, in
//! the order their candidates should win ties.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SuggestError};
use crate::scoring::score_folded;
use crate::types::{Candidate, CurrentUser};
use crate::utils::fold_case;

/// Something that can offer address candidates for a query.
///
/// `max` is a hint. Returning more is allowed; the ranker truncates anyway.
pub trait SuggestionProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Raw candidates for `query` on behalf of `user`.
    fn suggest(&self, query: &str, user: Option<&CurrentUser>, max: usize) -> Vec<Candidate>;
}

impl<P: SuggestionProvider + ?Sized> SuggestionProvider for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn suggest(&self, query: &str, user: Option<&CurrentUser>, max: usize) -> Vec<Candidate> {
        (**self).suggest(query, user, max)
    }
}

/// An entry in a JSON address book: a bare string or a full candidate.
#[derive(Deserialize)]
#[serde(untagged)]
enum BookEntry {
    Address(String),
    Candidate(Candidate),
}

impl From<BookEntry> for Candidate {
    fn from(entry: BookEntry) -> Self {
        match entry {
            BookEntry::Address(value) => Candidate::new(value),
            BookEntry::Candidate(candidate) => candidate,
        }
    }
}

/// In-memory list of known addresses.
///
/// Offers every entry that relates to the query at all (non-zero score), in
/// book order, up to `max`.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    name: String,
    entries: Vec<Candidate>,
}

impl AddressBook {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Build from address strings.
    pub fn from_addresses<I, S>(name: impl Into<String>, addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            entries: addresses.into_iter().map(Candidate::new).collect(),
        }
    }

    /// Parse a JSON array whose items are strings or candidate objects.
    ///
    /// ```
    /// use mailsuggest::AddressBook;
    ///
    /// let book = AddressBook::from_json_str(
    ///     "team",
    ///     r#"["ann@example.com", {"value": "bob@example.com", "score": 0.7}]"#,
    /// ).unwrap();
    /// assert_eq!(book.len(), 2);
    /// ```
    pub fn from_json_str(name: impl Into<String>, raw: &str) -> Result<Self> {
        let entries: Vec<BookEntry> = serde_json::from_str(raw)?;
        let entries: Vec<Candidate> = entries.into_iter().map(Candidate::from).collect();

        if let Some(pos) = entries.iter().position(|c| c.value.trim().is_empty()) {
            return Err(SuggestError::invalid_input(format!(
                "address book entry {} has an empty value",
                pos
            )));
        }

        Ok(Self {
            name: name.into(),
            entries,
        })
    }

    /// Read and parse a JSON address book file. The book is named after the file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| SuggestError::io(path, e))?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "book".to_string());
        Self::from_json_str(name, &raw)
    }

    pub fn push(&mut self, candidate: impl Into<Candidate>) {
        self.entries.push(candidate.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SuggestionProvider for AddressBook {
    fn name(&self) -> &str {
        &self.name
    }

    fn suggest(&self, query: &str, _user: Option<&CurrentUser>, max: usize) -> Vec<Candidate> {
        let query = fold_case(query);
        self.entries
            .iter()
            .filter(|c| score_folded(&fold_case(&c.value), &query) > 0.0)
            .take(max)
            .cloned()
            .collect()
    }
}
