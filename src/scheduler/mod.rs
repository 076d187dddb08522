//! Greedy signup scheduling and restart search.
//!
//! # Algorithm
//!
//! `GreedySolver` repeatedly picks a library (best-ranked or random),
//! admits the best unclaimed books it can still ship, and commits a signup
//! until the day budget or the candidates run out. `RestartSearch` repeats
//! this from fresh state and keeps the best result.
//!
//! # Scoring
//!
//! `SolutionScore` reports the realized distinct score against the maximum
//! reachable score, plus the unused days.

mod admission;
mod err;
mod greedy;
mod kpi;
mod pool;
mod search;
mod selection;
mod state;

pub use admission::{admit, Admission, ClaimedBooks};
pub use err::SearchError;
pub use greedy::{GreedySolver, RunOutcome};
pub use kpi::SolutionScore;
pub use pool::CandidatePool;
pub use search::{LogObserver, RestartSearch, SearchObserver, SearchProgress};
pub use selection::{pick_random, PickStrategy, Selector};
pub use state::{RankingCache, RunState};
