//! Book model.

use serde::{Deserialize, Serialize};

/// Book identifier (position in the catalogue).
pub type BookId = usize;

/// A book that can be scanned for its score.
///
/// A book's score is realized at most once per solution, no matter how
/// many libraries offer it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    /// Unique book identifier.
    pub id: BookId,
    /// Score gained when the book is scanned.
    pub score: u64,
}

impl Book {
    /// Creates a new book.
    pub fn new(id: BookId, score: u64) -> Self {
        Self { id, score }
    }
}

/// Sum of book scores, saturating at `u64::MAX`.
pub(crate) fn sum_scores<'a>(books: impl IntoIterator<Item = &'a Book>) -> u64 {
    books
        .into_iter()
        .fold(0u64, |total, book| total.saturating_add(book.score))
}
