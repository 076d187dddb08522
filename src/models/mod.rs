//! Catalogue and solution models.
//!
//! Provides the immutable description of a problem instance and the
//! output types produced by the scheduler.
//!
//! # Domain Mappings
//!
//! | book-scan | Set cover | Scheduling |
//! |-----------|-----------|------------|
//! | Book | Element (weighted) | Unit of work |
//! | Library | Subset | Resource with setup time |
//! | Signup | Chosen subset | Assignment |
//! | Solution | Cover | Schedule |

mod book;
mod library;
mod problem;
mod solution;

pub use book::{Book, BookId};
pub(crate) use book::sum_scores;
pub use library::{Library, LibraryId};
pub use problem::Problem;
pub use solution::{Signup, Solution};

/// Day counts and day offsets.
pub type Days = u32;
