// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suggester configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config:
//!
//! ```json
//! { "max_results": 10, "include_current_user": true, "strip_wildcard": true }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SuggestError};
use crate::rank::DEFAULT_MAX_SUGGESTIONS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SuggestConfig {
    /// Maximum number of ranked suggestions returned.
    pub max_results: usize,
    /// Offer the current user's own address when it matches the query.
    pub include_current_user: bool,
    /// Drop one trailing `*` from the query before scoring.
    pub strip_wildcard: bool,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            max_results: DEFAULT_MAX_SUGGESTIONS,
            include_current_user: true,
            strip_wildcard: true,
        }
    }
}

impl SuggestConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: SuggestConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| SuggestError::io(path, e))?;
        Self::from_json_str(&raw)
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Reject values that would make every suggestion call return nothing.
    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(SuggestError::invalid_config(
                "max_results must be at least 1",
            ));
        }
        Ok(())
    }
}
