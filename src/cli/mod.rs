// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the mailsuggest command-line interface.
//!
//! Two subcommands: `score` prints the relevance of one candidate for one
//! query, and `suggest` ranks an address book (file or stdin) against a
//! query the way a recipient field would.

pub mod display;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mailsuggest",
    about = "Ranked mail-address suggestions for recipient completion",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    ///
    /// MAILSUGGEST_LOG takes precedence when set, e.g. MAILSUGGEST_LOG=mailsuggest=debug
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one candidate against a query
    Score {
        /// Candidate value, e.g. "Jane Doe <jane@example.com>"
        item: String,

        /// Query as typed by the user
        query: String,
    },

    /// Rank address book entries for a query
    Suggest {
        /// Query as typed by the user (a trailing * is ignored)
        query: String,

        /// JSON address book: array of strings or {"value", "score"} objects.
        /// Reads stdin when omitted.
        #[arg(short, long)]
        book: Option<String>,

        /// Maximum number of suggestions (overrides the config file)
        #[arg(short, long)]
        limit: Option<usize>,

        /// JSON config file (max_results, include_current_user, strip_wildcard)
        #[arg(short, long)]
        config: Option<String>,

        /// Display name of the current user
        #[arg(long, requires = "user_email")]
        user_name: Option<String>,

        /// Mail address of the current user
        #[arg(long)]
        user_email: Option<String>,

        /// Print results as JSON ([{"value", "data"}]) instead of a table
        #[arg(long)]
        json: bool,
    },
}
