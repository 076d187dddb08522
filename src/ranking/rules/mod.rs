//! Built-in ranking rules.
//!
//! # Score Convention
//! All rules return higher scores for more desirable libraries.

use super::{RankScore, RankingContext, RankingRule};
use crate::models::{sum_scores, Library};
use crate::scheduler::admit;

/// Static value.
///
/// `total_score / signup_days`, precomputed when the library is built.
/// Cheap, but blind to claimed books and to throughput.
#[derive(Debug, Clone, Copy)]
pub struct StaticValue;

impl RankingRule for StaticValue {
    fn name(&self) -> &'static str {
        "STATIC"
    }

    fn evaluate(&self, library: &Library, _context: &RankingContext<'_>) -> RankScore {
        library.static_value()
    }
}

/// Dynamic value.
///
/// `mean(admitted scores) * ship_rate / signup_days`: expected score
/// shipped per day, per day invested in signup, given the books the
/// library could still scan right now.
///
/// Infeasible libraries and libraries with nothing left to scan score 0.
/// Costs a full admission pass per library.
#[derive(Debug, Clone, Copy)]
pub struct DynamicValue;

impl RankingRule for DynamicValue {
    fn name(&self) -> &'static str {
        "DYNAMIC"
    }

    fn evaluate(&self, library: &Library, context: &RankingContext<'_>) -> RankScore {
        let admission = admit(library, context.claimed, context.days_remaining);
        let books = match admission.books() {
            Some(books) if !books.is_empty() => books,
            _ => return 0.0,
        };
        if library.signup_days() == 0 {
            return 0.0;
        }

        let total = sum_scores(books);
        let mean = total as f64 / books.len() as f64;
        mean * library.ship_rate() as f64 / library.signup_days() as f64
    }
}
