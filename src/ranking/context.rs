//! Ranking context for rule evaluation.

use crate::models::Days;
use crate::scheduler::ClaimedBooks;

/// Run state visible to ranking rules.
///
/// Borrowed from the scheduler for the duration of one ranking pass.
#[derive(Debug, Clone, Copy)]
pub struct RankingContext<'a> {
    /// Days left in the budget.
    pub days_remaining: Days,
    /// Books already claimed by earlier signups.
    pub claimed: &'a ClaimedBooks,
}

impl<'a> RankingContext<'a> {
    /// Creates a context.
    pub fn new(days_remaining: Days, claimed: &'a ClaimedBooks) -> Self {
        Self {
            days_remaining,
            claimed,
        }
    }
}
