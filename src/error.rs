// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for everything around the ranking core.
//!
//! Scoring and ranking cannot fail. Loading configuration and address books
//! can, and those paths validate eagerly: a file either parses completely or
//! yields an error, never a half-filled value.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from configuration and candidate loading.
#[derive(Error, Debug)]
pub enum SuggestError {
    /// Reading a file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input was not valid JSON for the expected shape.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration parsed but holds a value we refuse to run with.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Candidate input parsed but is unusable.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for operations that may fail with `SuggestError`.
pub type Result<T> = std::result::Result<T, SuggestError>;

impl SuggestError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SuggestError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SuggestError::InvalidConfig(msg.into())
    }

    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        SuggestError::InvalidInput(msg.into())
    }
}
