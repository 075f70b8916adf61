// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how suggestions get their numbers.
//!
//! A direct match (query inside the candidate) always has a chance to beat a
//! reverse match (candidate inside the query), because reverse matches are
//! halved and top out at 0.5.

mod core;
pub mod ranking;

pub use core::*;
