//! Problem instance.
//!
//! The catalogue is built once and only read afterwards. Solvers borrow it
//! for the duration of a search.

use serde::Serialize;
use std::collections::HashSet;

use super::{sum_scores, Book, BookId, Days, Library, LibraryId};

/// A complete problem instance: day budget, book catalogue and libraries.
#[derive(Debug, Clone, Serialize)]
pub struct Problem {
    total_days: Days,
    books: Vec<Book>,
    libraries: Vec<Library>,
}

impl Problem {
    /// Creates a problem instance.
    ///
    /// No structural checks are done here; see
    /// [`validate_problem`](crate::validation::validate_problem).
    pub fn new(total_days: Days, books: Vec<Book>, libraries: Vec<Library>) -> Self {
        Self {
            total_days,
            books,
            libraries,
        }
    }

    /// Day budget.
    #[inline]
    pub fn total_days(&self) -> Days {
        self.total_days
    }

    /// Book catalogue.
    #[inline]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// All libraries, in input order.
    #[inline]
    pub fn libraries(&self) -> &[Library] {
        &self.libraries
    }

    /// Number of libraries.
    #[inline]
    pub fn library_count(&self) -> usize {
        self.libraries.len()
    }

    /// Finds a library by id.
    pub fn library(&self, id: LibraryId) -> Option<&Library> {
        match self.libraries.get(id) {
            Some(lib) if lib.id() == id => Some(lib),
            _ => self.libraries.iter().find(|l| l.id() == id),
        }
    }

    /// Highest score any solution could reach: the sum of every distinct
    /// book offered by at least one library.
    pub fn max_score(&self) -> u64 {
        let mut seen: HashSet<BookId> = HashSet::new();
        sum_scores(
            self.libraries
                .iter()
                .flat_map(|l| l.books())
                .filter(|b| seen.insert(b.id)),
        )
    }
}
