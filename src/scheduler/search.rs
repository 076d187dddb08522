//! Restart search.
//!
//! Runs the greedy scheduler several times from fresh state and keeps the
//! run with the strictly highest score fraction; ties keep the earlier run.
//! Restarts only differ when a strategy draws from the random source.

use rand::Rng;

use super::{GreedySolver, RunOutcome, SearchError, SolutionScore};
use crate::config::SolverConfig;
use crate::models::Problem;

/// Progress reported after each completed run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchProgress {
    /// 1-based index of the run that just completed.
    pub iteration: usize,
    /// Total number of runs.
    pub total: usize,
    /// Score fraction of the run that just completed.
    pub run_fraction: f64,
    /// Best score fraction so far.
    pub best_fraction: f64,
}

/// Receives progress from a [`RestartSearch`].
pub trait SearchObserver {
    /// Called after every completed run.
    fn on_run_complete(&mut self, progress: &SearchProgress);
}

/// Logs progress through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn on_run_complete(&mut self, progress: &SearchProgress) {
        tracing::info!(
            "Ran iteration {} / {}. Best score is {:.2} %",
            progress.iteration,
            progress.total,
            progress.best_fraction * 100.0
        );
    }
}

impl<F: FnMut(&SearchProgress)> SearchObserver for F {
    fn on_run_complete(&mut self, progress: &SearchProgress) {
        self(progress)
    }
}

/// Best-of-N restart driver around a [`GreedySolver`].
///
/// # Example
///
/// ```
/// use book_scan::config::SolverConfig;
/// use book_scan::models::{Book, Library, Problem};
/// use book_scan::scheduler::RestartSearch;
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let books = vec![Book::new(0, 5), Book::new(1, 3)];
/// let libraries = vec![Library::new(0, 2, 2, books.clone())];
/// let problem = Problem::new(6, books, libraries);
///
/// let mut search = RestartSearch::new(&problem, &SolverConfig::default());
/// assert!(search.stats().is_err());
///
/// search.run(3, &mut SmallRng::seed_from_u64(0));
/// assert_eq!(search.stats().unwrap().total_score, 8);
/// ```
#[derive(Debug, Clone)]
pub struct RestartSearch<'p> {
    solver: GreedySolver<'p>,
    best: Option<RunOutcome>,
    best_iteration: usize,
    completed: usize,
}

impl<'p> RestartSearch<'p> {
    /// Creates a search over `problem`.
    pub fn new(problem: &'p Problem, config: &SolverConfig) -> Self {
        Self::with_solver(GreedySolver::new(problem, config))
    }

    /// Creates a search around an existing solver.
    pub fn with_solver(solver: GreedySolver<'p>) -> Self {
        Self {
            solver,
            best: None,
            best_iteration: 0,
            completed: 0,
        }
    }

    /// Runs `restarts` runs (at least one), logging progress.
    pub fn run<R: Rng>(&mut self, restarts: usize, rng: &mut R) -> Result<&RunOutcome, SearchError> {
        self.run_with_observer(restarts, rng, &mut LogObserver)
    }

    /// Runs `restarts` runs (at least one), reporting progress to `observer`.
    #[tracing::instrument(level = "info", skip(self, rng, observer))]
    pub fn run_with_observer<R: Rng, O: SearchObserver + ?Sized>(
        &mut self,
        restarts: usize,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<&RunOutcome, SearchError> {
        let total = restarts.max(1);

        for i in 0..total {
            let outcome = self.solver.solve(rng);
            self.completed += 1;
            let run_fraction = outcome.score.fraction();
            let improved = match &self.best {
                None => true,
                Some(best) => run_fraction > best.score.fraction(),
            };
            if improved {
                tracing::debug!(
                    iteration = i + 1,
                    score = outcome.score.total_score,
                    "new best solution"
                );
                self.best = Some(outcome);
                self.best_iteration = self.completed;
            }

            observer.on_run_complete(&SearchProgress {
                iteration: i + 1,
                total,
                run_fraction,
                best_fraction: self.best_fraction().unwrap_or(run_fraction),
            });
        }

        self.best()
    }

    /// Best run so far.
    pub fn best(&self) -> Result<&RunOutcome, SearchError> {
        self.best.as_ref().ok_or(SearchError::NotSolved)
    }

    /// Score summary of the best run so far.
    pub fn stats(&self) -> Result<SolutionScore, SearchError> {
        self.best().map(|outcome| outcome.score)
    }

    /// Consumes the search and returns the best run.
    pub fn into_best(self) -> Result<RunOutcome, SearchError> {
        self.best.ok_or(SearchError::NotSolved)
    }

    /// Number of runs completed across all calls.
    pub fn completed_runs(&self) -> usize {
        self.completed
    }

    /// Run count (1-based, across all calls) at which the best run was found.
    pub fn best_iteration(&self) -> Option<usize> {
        self.best.as_ref().map(|_| self.best_iteration)
    }

    fn best_fraction(&self) -> Option<f64> {
        self.best.as_ref().map(|b| b.score.fraction())
    }
}
