//! Greedy library-signup scheduler.
//!
//! Given a day budget, a catalogue of scored books and a set of libraries
//! (each with a signup lead time and a daily shipping rate), chooses an
//! ordered sequence of library signups and the books each one ships, so as
//! to maximize the total score of distinct books scanned.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Book`, `Library`, `Problem`, `Signup`, `Solution`
//! - **`ranking`**: Rule-based library ranking (static and dynamic value)
//! - **`scheduler`**: Admission, selection, the greedy run and restart search
//! - **`validation`**: Input integrity checks (duplicate IDs, unknown books)
//! - **`io`**: Problem file parsing and submission writing
//! - **`config`**: Solver configuration
//!
//! # Example
//!
//! ```
//! use book_scan::config::SolverConfig;
//! use book_scan::io::parse_problem;
//! use book_scan::scheduler::RestartSearch;
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let problem = parse_problem("6 2 7\n1 2 3 6 5 4\n5 2 2\n0 1 2 3 4\n4 3 1\n0 2 3 5\n").unwrap();
//! let mut search = RestartSearch::new(&problem, &SolverConfig::default());
//! let best = search.run(1, &mut SmallRng::seed_from_u64(0)).unwrap();
//! assert_eq!(best.score.total_score, 21);
//! ```
//!
//! # References
//!
//! - Google Hash Code 2020 qualification round, "Book Scanning"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod io;
pub mod models;
pub mod ranking;
pub mod scheduler;
pub mod validation;
