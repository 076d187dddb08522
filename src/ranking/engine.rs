//! Rule engine for library ranking.
//!
//! Applies rules in sequence: the first rule orders the libraries, each
//! following rule only breaks ties left by the ones before it.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{RankScore, RankingContext, RankingRule};
use crate::models::Library;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Default)]
pub enum TieBreaker {
    /// Keep the input order (stable sort).
    #[default]
    InputOrder,
    /// Deterministic by library id (ascending).
    ById,
}

/// A composable rule engine for library ranking.
///
/// # Example
/// ```
/// use book_scan::ranking::{rules, RankingEngine};
///
/// let engine = RankingEngine::new().with_rule(rules::StaticValue);
/// assert_eq!(engine.rule_names(), vec!["STATIC"]);
/// ```
#[derive(Clone)]
pub struct RankingEngine {
    rules: Vec<Arc<dyn RankingRule>>,
    tie_breaker: TieBreaker,
}

impl RankingEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::InputOrder,
        }
    }

    /// Adds the primary rule.
    pub fn with_rule<R: RankingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a rule consulted only when all earlier rules tie.
    pub fn with_tie_breaker<R: RankingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Evaluates a single library and returns scores from each rule.
    pub fn evaluate(&self, library: &Library, context: &RankingContext<'_>) -> Vec<RankScore> {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(library, context))
            .collect()
    }

    /// Sorts the libraries at `candidates` (indices into `libraries`),
    /// most desirable first.
    ///
    /// Every rule is evaluated once per candidate; sorting works on the
    /// cached scores.
    pub fn rank(
        &self,
        libraries: &[Library],
        candidates: &[usize],
        context: &RankingContext<'_>,
    ) -> Vec<usize> {
        let mut keyed: Vec<(usize, Vec<RankScore>)> = candidates
            .iter()
            .map(|&idx| (idx, self.evaluate(&libraries[idx], context)))
            .collect();

        keyed.sort_by(|(a, ka), (b, kb)| {
            self.compare_scores(ka, kb)
                .then_with(|| self.compare_final(&libraries[*a], &libraries[*b]))
        });

        keyed.into_iter().map(|(idx, _)| idx).collect()
    }

    /// Lexicographic over rules, descending. `total_cmp` keeps the sort a
    /// total order even for scores that differ in the last bits.
    fn compare_scores(&self, a: &[RankScore], b: &[RankScore]) -> Ordering {
        a.iter()
            .zip(b)
            .map(|(sa, sb)| sb.total_cmp(sa))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    fn compare_final(&self, a: &Library, b: &Library) -> Ordering {
        match self.tie_breaker {
            TieBreaker::InputOrder => Ordering::Equal,
            TieBreaker::ById => a.id().cmp(&b.id()),
        }
    }
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RankingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RankingEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Book;
    use crate::ranking::rules;
    use crate::scheduler::ClaimedBooks;

    fn make_library(id: usize, signup: u32, rate: u32, scores: &[u64]) -> Library {
        let books = scores
            .iter()
            .enumerate()
            .map(|(i, &s)| Book::new(id * 100 + i, s))
            .collect();
        Library::new(id, signup, rate, books)
    }

    #[test]
    fn test_static_ordering() {
        let libs = vec![
            make_library(0, 4, 1, &[4]),  // 1.0
            make_library(1, 1, 1, &[9]),  // 9.0
            make_library(2, 2, 1, &[10]), // 5.0
        ];
        let claimed = ClaimedBooks::new();
        let ctx = RankingContext::new(10, &claimed);
        let engine = RankingEngine::new().with_rule(rules::StaticValue);

        assert_eq!(engine.rank(&libs, &[0, 1, 2], &ctx), vec![1, 2, 0]);
    }

    #[test]
    fn test_dynamic_differs_from_static() {
        // Static prefers 0 (20 / 2 = 10 vs 6 / 1 = 6), but with 3 days left
        // library 0 can only ship one book of 10 at rate 1.
        let libs = vec![make_library(0, 2, 1, &[10, 10]), make_library(1, 1, 2, &[3, 3])];
        let claimed = ClaimedBooks::new();
        let ctx = RankingContext::new(3, &claimed);

        let st = RankingEngine::new().with_rule(rules::StaticValue);
        let dy = RankingEngine::new().with_rule(rules::DynamicValue);
        assert_eq!(st.rank(&libs, &[0, 1], &ctx)[0], 0);
        // dynamic: lib0 = 10 * 1 / 2 = 5, lib1 = 3 * 2 / 1 = 6
        assert_eq!(dy.rank(&libs, &[0, 1], &ctx)[0], 1);
    }

    #[test]
    fn test_tie_breaker_rule() {
        // Same dynamic value (5 * 1 / 1), different static value.
        let libs = vec![make_library(0, 1, 1, &[5]), make_library(1, 1, 1, &[5, 5])];
        let claimed = ClaimedBooks::new();
        let ctx = RankingContext::new(2, &claimed);
        let engine = RankingEngine::new()
            .with_rule(rules::DynamicValue)
            .with_tie_breaker(rules::StaticValue);

        assert_eq!(engine.rank(&libs, &[0, 1], &ctx), vec![1, 0]);
    }

    #[test]
    fn test_by_id_tie_breaker() {
        let libs = vec![make_library(0, 1, 1, &[3]), make_library(1, 1, 1, &[3])];
        let claimed = ClaimedBooks::new();
        let ctx = RankingContext::new(5, &claimed);
        let engine = RankingEngine::new()
            .with_rule(rules::StaticValue)
            .with_final_tie_breaker(TieBreaker::ById);

        assert_eq!(engine.rank(&libs, &[1, 0], &ctx), vec![0, 1]);
    }

    #[test]
    fn test_input_order_kept_without_tie_breaker() {
        let libs = vec![make_library(0, 1, 1, &[3]), make_library(1, 1, 1, &[3])];
        let claimed = ClaimedBooks::new();
        let ctx = RankingContext::new(5, &claimed);
        let engine = RankingEngine::new().with_rule(rules::StaticValue);

        assert_eq!(engine.rank(&libs, &[1, 0], &ctx), vec![1, 0]);
    }

    #[test]
    fn test_near_tied_scores_rank_without_panic() {
        use rand::rngs::SmallRng;
        use rand::{Rng, SeedableRng};

        // Static values all lie within ~2e-8 of 1.0.
        let mut rng = SmallRng::seed_from_u64(11);
        let libs: Vec<Library> = (0..200)
            .map(|id| {
                let score = 2_000_000_000 + rng.random_range(0..40u64);
                Library::new(id, 2_000_000_000, 1, vec![Book::new(id, score)])
            })
            .collect();
        let candidates: Vec<usize> = (0..libs.len()).collect();
        let claimed = ClaimedBooks::new();
        let ctx = RankingContext::new(10, &claimed);
        let engine = RankingEngine::new()
            .with_rule(rules::StaticValue)
            .with_final_tie_breaker(TieBreaker::ById);

        let order = engine.rank(&libs, &candidates, &ctx);
        assert_eq!(order.len(), 200);
        for pair in order.windows(2) {
            let (a, b) = (&libs[pair[0]], &libs[pair[1]]);
            assert!(a.static_value() >= b.static_value());
            if a.static_value() == b.static_value() {
                assert!(a.id() < b.id());
            }
        }
    }

    #[test]
    fn test_empty_candidates() {
        let claimed = ClaimedBooks::new();
        let ctx = RankingContext::new(5, &claimed);
        let engine = RankingEngine::new().with_rule(rules::StaticValue);
        assert!(engine.rank(&[], &[], &ctx).is_empty());
    }

    #[test]
    fn test_evaluate_scores() {
        let lib = make_library(0, 2, 1, &[4, 2]);
        let claimed = ClaimedBooks::new();
        let ctx = RankingContext::new(10, &claimed);
        let engine = RankingEngine::new()
            .with_rule(rules::StaticValue)
            .with_rule(rules::DynamicValue);

        let scores = engine.evaluate(&lib, &ctx);
        assert_eq!(scores.len(), 2);
        assert!((scores[0] - 3.0).abs() < 1e-10);
        assert!((scores[1] - 1.5).abs() < 1e-10);
    }
}
