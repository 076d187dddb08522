//! Solution quality metrics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total score | Sum of distinct scanned book scores |
//! | Max score | Sum of distinct book scores offered by any library |
//! | Fraction | total / max (0.0..=1.0) |
//! | Remaining days | Budget left when the run terminated |

use serde::Serialize;
use std::fmt;

use crate::models::{Days, Solution};

/// Score summary of one solution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolutionScore {
    /// Realized score, each book counted once.
    pub total_score: u64,
    /// Best score reachable on this problem.
    pub max_score: u64,
    /// Days left in the budget when the run ended.
    pub days_remaining: Days,
}

impl SolutionScore {
    /// Scores `solution` against a precomputed maximum.
    pub fn with_max_score(max_score: u64, solution: &Solution, days_remaining: Days) -> Self {
        Self {
            total_score: solution.total_score(),
            max_score,
            days_remaining,
        }
    }

    /// Realized fraction of the maximum score.
    ///
    /// A problem with nothing to score counts as fully solved.
    pub fn fraction(&self) -> f64 {
        if self.max_score == 0 {
            1.0
        } else {
            self.total_score as f64 / self.max_score as f64
        }
    }

    /// Realized percentage of the maximum score.
    pub fn percentage(&self) -> f64 {
        self.fraction() * 100.0
    }
}

impl fmt::Display for SolutionScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Score: {} / {} ({:.2} %), Remaining Days: {}",
            self.total_score,
            self.max_score,
            self.percentage(),
            self.days_remaining
        )
    }
}
