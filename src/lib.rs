// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranked mail-address suggestions for recipient completion.
//!
//! Type a few letters into a To/CC field and get back the addresses most
//! likely meant, best first. The crate scores every candidate against the
//! query, collapses duplicates, and returns a short ordered list.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │ provider.rs │────▶│  suggest.rs  │────▶│     rank/        │
//! │ (Suggestion │     │ (Suggester,  │     │ (ScoreMap,       │
//! │  Provider)  │     │ current user)│     │ rank_suggestions)│
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!                                                   │
//!                                                   ▼
//!                     ┌─────────────────────────────────────────┐
//!                     │  scoring/ (score, compare_scores)       │
//!                     │  contracts.rs (debug-mode invariants)   │
//!                     └─────────────────────────────────────────┘
//! ```
//!
//! | Module      | Key items                                   |
//! |-------------|---------------------------------------------|
//! | `types`     | `Candidate`, `ScoredResult`, `CurrentUser`  |
//! | `scoring`   | `score`, `compare_scores`                   |
//! | `rank`      | `rank_suggestions`, `ScoreMap`              |
//! | `provider`  | `SuggestionProvider`, `AddressBook`         |
//! | `suggest`   | `Suggester`, `suggest_addresses`            |
//! | `config`    | `SuggestConfig`                             |
//!
//! # Usage
//!
//! ```
//! use mailsuggest::{rank_suggestions, Candidate};
//!
//! let ranked = rank_suggestions(
//!     vec![
//!         Candidate::new("Jane Doe <jane@example.com>"),
//!         Candidate::new("Bob <bob@example.com>"),
//!         Candidate::new("x.jane@example.org"),
//!     ],
//!     "jane",
//!     10,
//! );
//!
//! assert_eq!(ranked[0].value, "Jane Doe <jane@example.com>");
//! assert_eq!(ranked[1].value, "x.jane@example.org");
//! ```

// Module declarations
pub mod config;
pub mod contracts;
pub mod error;
pub mod provider;
mod rank;
mod scoring;
pub mod suggest;
pub mod testing;
mod types;
pub mod utils;

// Re-exports for public API
pub use config::SuggestConfig;
pub use error::{Result, SuggestError};
pub use provider::{AddressBook, SuggestionProvider};
pub use rank::{rank_suggestions, rank_suggestions_default, ScoreMap, DEFAULT_MAX_SUGGESTIONS};
pub use scoring::ranking::compare_scores;
pub use scoring::{
    direct_match_score, reverse_match_score, score, score_folded, MAX_REVERSE_SCORE, NO_MATCH,
    REVERSE_MATCH_DIVISOR,
};
pub use suggest::{suggest_addresses, Suggester};
pub use types::{Candidate, CurrentUser, ScoredResult};
pub use utils::strip_wildcard;
