//! Greedy signup scheduler.
//!
//! # Algorithm
//!
//! 1. Pick a library with the seed strategy (first pick) or the pick
//!    strategy (every later pick). Stop if none is left or no days remain.
//! 2. Admit it. An infeasible library is dropped without charging days.
//! 3. If the admitted book set is non-empty, commit a signup starting on
//!    the current day and claim its books.
//! 4. Charge the library's signup days, even for an empty book set.
//! 5. Repeat.
//!
//! Every pick shrinks the candidate pool, so a run performs at most one
//! iteration per library.
//!
//! # Complexity
//! O(L * B) per ranking rebuild with dynamic ranking, where L = libraries
//! and B = books per library; O(B) per admission.

use rand::Rng;

use super::{admit, Admission, PickStrategy, RunState, Selector, SolutionScore};
use crate::config::SolverConfig;
use crate::models::{Days, Problem, Signup, Solution};
use crate::ranking::RankingEngine;

/// Result of one scheduling run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Committed signups, in commitment order.
    pub solution: Solution,
    /// Days left when the run terminated.
    pub days_remaining: Days,
    /// Score summary.
    pub score: SolutionScore,
}

/// Greedy pick-and-commit scheduler over a borrowed problem.
///
/// # Example
///
/// ```
/// use book_scan::config::SolverConfig;
/// use book_scan::models::{Book, Library, Problem};
/// use book_scan::scheduler::GreedySolver;
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let books = vec![Book::new(0, 5), Book::new(1, 3)];
/// let libraries = vec![Library::new(0, 2, 2, books.clone())];
/// let problem = Problem::new(6, books, libraries);
///
/// let solver = GreedySolver::new(&problem, &SolverConfig::default());
/// let outcome = solver.solve(&mut SmallRng::seed_from_u64(0));
/// assert_eq!(outcome.score.total_score, 8);
/// assert_eq!(outcome.days_remaining, 4);
/// ```
#[derive(Debug, Clone)]
pub struct GreedySolver<'p> {
    problem: &'p Problem,
    engine: RankingEngine,
    seed_strategy: PickStrategy,
    pick_strategy: PickStrategy,
    refresh_every: Option<usize>,
    max_score: u64,
}

impl<'p> GreedySolver<'p> {
    /// Creates a solver for `problem` configured by `config`.
    pub fn new(problem: &'p Problem, config: &SolverConfig) -> Self {
        Self {
            problem,
            engine: config.ranking.engine(),
            seed_strategy: config.seed_strategy,
            pick_strategy: config.pick_strategy,
            refresh_every: config.refresh_every,
            max_score: problem.max_score(),
        }
    }

    /// Runs the scheduling loop once from a fresh state.
    pub fn solve<R: Rng>(&self, rng: &mut R) -> RunOutcome {
        let mut state = RunState::new(self.problem);
        let solution = self.solve_from(&mut state, rng);
        let score = SolutionScore::with_max_score(self.max_score, &solution, state.days_remaining);

        RunOutcome {
            solution,
            days_remaining: state.days_remaining,
            score,
        }
    }

    /// Runs the scheduling loop on `state` until it terminates.
    pub fn solve_from<R: Rng>(&self, state: &mut RunState, rng: &mut R) -> Solution {
        let libraries = self.problem.libraries();
        let total_days = self.problem.total_days();
        let selector = Selector::new(libraries, &self.engine, self.refresh_every);
        let mut solution = Solution::new();
        let mut strategy = self.seed_strategy;

        while state.days_remaining > 0 {
            let Some(index) = selector.pick(strategy, state, rng) else {
                break;
            };
            strategy = self.pick_strategy;
            let library = &libraries[index];

            let books = match admit(library, &state.claimed, state.days_remaining) {
                Admission::Infeasible => {
                    tracing::debug!(
                        library = library.id(),
                        signup_days = library.signup_days(),
                        days_remaining = state.days_remaining,
                        "skipped infeasible library"
                    );
                    continue;
                }
                Admission::Admitted(books) => books,
            };

            if books.is_empty() {
                tracing::debug!(library = library.id(), "library has nothing left to scan");
            } else {
                let day = state.current_day(total_days);
                tracing::debug!(
                    library = library.id(),
                    day,
                    books = books.len(),
                    "committed signup"
                );
                state.claim(&books);
                solution.add_signup(Signup::new(library.id(), day, books));
            }
            state.charge(library.signup_days());
        }

        debug_assert!(solution.has_distinct_books());
        solution
    }
}
