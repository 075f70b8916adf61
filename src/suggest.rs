// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Gather candidates, then rank them.
//!
//! ```text
//! query ──strip *──┬─▶ current user (if it matches) ─┐
//!                  ├─▶ provider 1 ───────────────────┤
//!                  └─▶ provider N ───────────────────┴─▶ rank_suggestions ─▶ results
//! ```
//!
//! Order matters: the current user is offered first and providers follow in
//! the order they were added. Since the ranker keeps the first occurrence of
//! a value and breaks ties by position, earlier sources win both.

use tracing::debug;

use crate::config::SuggestConfig;
use crate::provider::SuggestionProvider;
use crate::rank::rank_suggestions;
use crate::scoring::score;
use crate::types::{Candidate, CurrentUser, ScoredResult};
use crate::utils::strip_wildcard;

/// Suggestion entry point holding a config and an explicit provider list.
///
/// ```
/// use mailsuggest::{AddressBook, CurrentUser, Suggester};
///
/// let suggester = Suggester::default()
///     .with_provider(AddressBook::from_addresses("team", ["Ann <ann@example.com>"]));
/// let me = CurrentUser::new("Anders", "anders@example.com");
///
/// let results = suggester.suggest("an*", Some(&me));
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].data, 0);
/// ```
#[derive(Default)]
pub struct Suggester {
    config: SuggestConfig,
    providers: Vec<Box<dyn SuggestionProvider>>,
}

impl Suggester {
    pub fn new(config: SuggestConfig) -> Self {
        Self {
            config,
            providers: Vec::new(),
        }
    }

    /// Builder-style [`Suggester::add_provider`].
    pub fn with_provider(mut self, provider: impl SuggestionProvider + 'static) -> Self {
        self.add_provider(provider);
        self
    }

    /// Append a provider. Its candidates come after those already registered.
    pub fn add_provider(&mut self, provider: impl SuggestionProvider + 'static) {
        self.providers.push(Box::new(provider));
    }

    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    pub fn providers(&self) -> impl Iterator<Item = &dyn SuggestionProvider> + '_ {
        self.providers.iter().map(|p| p.as_ref())
    }

    /// Ranked suggestions for `query`, at most `config.max_results`.
    pub fn suggest(&self, query: &str, current_user: Option<&CurrentUser>) -> Vec<ScoredResult> {
        let query = if self.config.strip_wildcard {
            strip_wildcard(query)
        } else {
            query
        };
        let user = current_user.filter(|_| self.config.include_current_user);

        suggest_addresses(query, user, &self.providers, self.config.max_results)
    }
}

/// Collect candidates from the current user and `providers`, then rank them.
///
/// `query` is used as given (strip any wildcard first). The current user's
/// address is offered, pre-scored, only when it scores above zero.
pub fn suggest_addresses<P>(
    query: &str,
    current_user: Option<&CurrentUser>,
    providers: &[P],
    max: usize,
) -> Vec<ScoredResult>
where
    P: SuggestionProvider,
{
    let mut candidates = Vec::new();

    if let Some(user) = current_user {
        let address = user.address();
        let user_score = score(&address, query);
        debug!(address = %address, score = user_score, "scored current user");
        if user_score > 0.0 {
            candidates.push(Candidate::scored(address, user_score));
        }
    }

    for provider in providers {
        let found = provider.suggest(query, current_user, max);
        debug!(provider = provider.name(), count = found.len(), "provider candidates");
        candidates.extend(found);
    }

    let ranked = rank_suggestions(candidates, query, max);
    debug!(query, results = ranked.len(), "ranked suggestions");
    ranked
}
