//! Library selection strategies.
//!
//! Each strategy picks the next library to sign up and removes it from
//! the candidate pool, or returns `None` when nothing is left to pick.
//! A picked library is consumed whether or not it is admitted.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{CandidatePool, RankingCache, RunState};
use crate::config::ConfigError;
use crate::models::Library;
use crate::ranking::{RankingContext, RankingEngine};

/// Strategy for choosing the next library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickStrategy {
    /// Highest-ranked remaining library, from a periodically rebuilt ranking.
    #[default]
    Best,
    /// Uniformly random remaining library.
    Random,
}

impl FromStr for PickStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "best" => Ok(PickStrategy::Best),
            "random" => Ok(PickStrategy::Random),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Runtime-selectable library selection.
///
/// Holds what the best-ranked strategy needs to rebuild its ranking; the
/// ranking itself lives in [`RunState`] so that seed and steady-state
/// picks share it.
#[derive(Debug, Clone, Copy)]
pub struct Selector<'a> {
    libraries: &'a [Library],
    engine: &'a RankingEngine,
    refresh_every: Option<usize>,
}

impl<'a> Selector<'a> {
    /// Creates a selector.
    ///
    /// `refresh_every` is the number of picks served from a ranking before
    /// it is rebuilt; `None` ranks once per run.
    pub fn new(
        libraries: &'a [Library],
        engine: &'a RankingEngine,
        refresh_every: Option<usize>,
    ) -> Self {
        Self {
            libraries,
            engine,
            refresh_every: refresh_every.map(|n| n.max(1)),
        }
    }

    /// Picks with the given strategy.
    pub fn pick<R: Rng>(
        &self,
        strategy: PickStrategy,
        state: &mut RunState,
        rng: &mut R,
    ) -> Option<usize> {
        match strategy {
            PickStrategy::Best => self.pick_best(state),
            PickStrategy::Random => pick_random(&mut state.candidates, rng),
        }
    }

    /// Serves the next library from the cached ranking, rebuilding it from
    /// the current candidates when missing or stale.
    pub fn pick_best(&self, state: &mut RunState) -> Option<usize> {
        if state.candidates.is_empty() {
            return None;
        }

        let stale = match &state.ranking {
            None => true,
            Some(cache) => self.refresh_every.is_some_and(|n| cache.served() >= n),
        };
        if stale {
            let context = RankingContext::new(state.days_remaining, &state.claimed);
            let order = self
                .engine
                .rank(self.libraries, state.candidates.as_slice(), &context);
            tracing::trace!(
                candidates = order.len(),
                days_remaining = state.days_remaining,
                "rebuilt library ranking"
            );
            state.ranking = Some(RankingCache::new(order));
        }

        let cache = state.ranking.as_mut()?;
        // Entries may have been taken by a random pick since the rebuild.
        while let Some(index) = cache.advance() {
            if state.candidates.remove(index) {
                cache.mark_served();
                return Some(index);
            }
        }
        None
    }
}

/// Removes and returns a uniformly random candidate.
pub fn pick_random<R: Rng>(candidates: &mut CandidatePool, rng: &mut R) -> Option<usize> {
    if candidates.is_empty() {
        return None;
    }
    let slot = rng.random_range(0..candidates.len());
    Some(candidates.remove_slot(slot))
}
