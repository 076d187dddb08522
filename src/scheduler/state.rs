//! Per-run mutable state.

use super::{CandidatePool, ClaimedBooks};
use crate::models::{Book, Days, Problem};

/// Cached best-first ranking of the candidates.
///
/// Entries are served front to back. `served` counts picks since the
/// last rebuild and drives staleness.
#[derive(Debug, Clone)]
pub struct RankingCache {
    order: Vec<usize>,
    cursor: usize,
    served: usize,
}

impl RankingCache {
    /// Wraps a ranking, most desirable first.
    pub fn new(order: Vec<usize>) -> Self {
        Self {
            order,
            cursor: 0,
            served: 0,
        }
    }

    /// Picks served since the ranking was built.
    #[inline]
    pub fn served(&self) -> usize {
        self.served
    }

    /// Advances past the next entry and returns it.
    pub(crate) fn advance(&mut self) -> Option<usize> {
        let next = self.order.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(next)
    }

    pub(crate) fn mark_served(&mut self) {
        self.served += 1;
    }
}

/// Mutable state of a single scheduling run.
///
/// Created fresh for every restart and dropped once its solution has
/// been extracted.
#[derive(Debug, Clone)]
pub struct RunState {
    /// Days left in the budget. Never underflows.
    pub days_remaining: Days,
    /// Books already committed.
    pub claimed: ClaimedBooks,
    /// Libraries not picked yet.
    pub candidates: CandidatePool,
    /// Best-first ranking, built lazily by the best-ranked strategy.
    pub ranking: Option<RankingCache>,
}

impl RunState {
    /// Initial state for `problem`: full budget, nothing claimed, every
    /// library a candidate.
    pub fn new(problem: &Problem) -> Self {
        Self {
            days_remaining: problem.total_days(),
            claimed: ClaimedBooks::new(),
            candidates: CandidatePool::new(problem.library_count()),
            ranking: None,
        }
    }

    /// Days elapsed since the start of the run.
    pub fn current_day(&self, total_days: Days) -> Days {
        total_days.saturating_sub(self.days_remaining)
    }

    /// Charges a signup against the budget.
    pub(crate) fn charge(&mut self, signup_days: Days) {
        self.days_remaining = self.days_remaining.saturating_sub(signup_days);
    }

    pub(crate) fn claim(&mut self, books: &[Book]) {
        self.claimed.claim_all(books);
    }
}
