//! Library ranking rules and rule engine.
//!
//! Ranks candidate libraries for the best-first selection strategy.
//!
//! # Usage
//!
//! ```
//! use book_scan::ranking::{rules, RankingEngine, TieBreaker};
//!
//! let engine = RankingEngine::new()
//!     .with_rule(rules::DynamicValue)
//!     .with_tie_breaker(rules::StaticValue)
//!     .with_final_tie_breaker(TieBreaker::ById);
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::RankingContext;
pub use engine::{RankingEngine, TieBreaker};

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::str::FromStr;

use crate::config::ConfigError;
use crate::models::Library;

/// Score returned by a ranking rule.
///
/// Higher scores = more desirable (signed up first).
pub type RankScore = f64;

/// A rule that evaluates how desirable it is to sign up a library next.
pub trait RankingRule: Send + Sync + Debug {
    /// Rule name (e.g., "STATIC").
    fn name(&self) -> &'static str;

    /// Evaluates a library under the current run state.
    ///
    /// Returns a score where higher = higher priority.
    fn evaluate(&self, library: &Library, context: &RankingContext<'_>) -> RankScore;
}

/// Which ranking the best-first strategy uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingStrategy {
    /// Precomputed `total_score / signup_days`.
    Static,
    /// Recomputed from the currently admissible books.
    #[default]
    Dynamic,
}

impl RankingStrategy {
    /// Builds the engine for this strategy.
    ///
    /// Dynamic ranking falls back to the static value on ties; both end
    /// with a by-id tie-breaker so rankings are deterministic.
    pub fn engine(self) -> RankingEngine {
        let engine = match self {
            RankingStrategy::Static => RankingEngine::new().with_rule(rules::StaticValue),
            RankingStrategy::Dynamic => RankingEngine::new()
                .with_rule(rules::DynamicValue)
                .with_tie_breaker(rules::StaticValue),
        };
        engine.with_final_tie_breaker(TieBreaker::ById)
    }
}

impl FromStr for RankingStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "static" => Ok(RankingStrategy::Static),
            "dynamic" => Ok(RankingStrategy::Dynamic),
            _ => Err(ConfigError::UnknownRanking(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ranking() {
        assert_eq!("static".parse::<RankingStrategy>().ok(), Some(RankingStrategy::Static));
        assert_eq!("Dynamic".parse::<RankingStrategy>().ok(), Some(RankingStrategy::Dynamic));
        assert!("fancy".parse::<RankingStrategy>().is_err());
    }

    #[test]
    fn test_engine_rule_names() {
        let names = RankingStrategy::Dynamic.engine().rule_names();
        assert_eq!(names, vec!["DYNAMIC", "STATIC"]);
        let names = RankingStrategy::Static.engine().rule_names();
        assert_eq!(names, vec!["STATIC"]);
    }
}
