//! Library admission.
//!
//! Decides which books a library would scan if it were signed up now.
//!
//! # Algorithm
//!
//! 1. `capacity = (days_remaining - signup_days) * ship_rate`. If the signup
//!    does not fit in the remaining days the library is infeasible.
//! 2. Drop every book that another signup already claimed.
//! 3. Keep the first `capacity` books of what is left. Books are stored in
//!    descending score order, so these are the best unclaimed ones.

use std::collections::HashSet;

use crate::models::{Book, BookId, Days, Library};

/// Books committed by earlier signups of the current run.
///
/// Grows monotonically within one run.
#[derive(Debug, Clone, Default)]
pub struct ClaimedBooks {
    ids: HashSet<BookId>,
}

impl ClaimedBooks {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the book is already claimed.
    #[inline]
    pub fn contains(&self, id: BookId) -> bool {
        self.ids.contains(&id)
    }

    /// Claims every book in `books`.
    pub fn claim_all(&mut self, books: &[Book]) {
        self.ids.extend(books.iter().map(|b| b.id));
    }

    /// Number of claimed books.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing has been claimed.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Outcome of admitting a library.
#[derive(Debug, Clone, PartialEq)]
pub enum Admission {
    /// Signup does not fit in the remaining days. No days are charged.
    Infeasible,
    /// Signup fits; these books would be scanned. May be empty.
    Admitted(Vec<Book>),
}

impl Admission {
    /// Books admitted, or `None` if infeasible.
    pub fn books(&self) -> Option<&[Book]> {
        match self {
            Admission::Infeasible => None,
            Admission::Admitted(books) => Some(books),
        }
    }
}

/// Computes the books `library` would scan with `days_remaining` left.
pub fn admit(library: &Library, claimed: &ClaimedBooks, days_remaining: Days) -> Admission {
    let Some(capacity) = library.capacity(days_remaining) else {
        return Admission::Infeasible;
    };
    let limit = usize::try_from(capacity).unwrap_or(usize::MAX);

    let books = library
        .books()
        .iter()
        .filter(|b| !claimed.contains(b.id))
        .take(limit)
        .copied()
        .collect();

    Admission::Admitted(books)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_library() -> Library {
        Library::new(
            0,
            2,
            1,
            vec![
                Book::new(0, 1),
                Book::new(1, 8),
                Book::new(2, 5),
                Book::new(3, 3),
            ],
        )
    }

    fn ids(books: &[Book]) -> Vec<usize> {
        books.iter().map(|b| b.id).collect()
    }

    #[test]
    fn test_admit_all_when_capacity_suffices() {
        let lib = Library::new(0, 2, 2, vec![Book::new(0, 5), Book::new(1, 3)]);
        let adm = admit(&lib, &ClaimedBooks::new(), 6);
        assert_eq!(adm.books().map(ids), Some(vec![0, 1]));
    }

    #[test]
    fn test_infeasible_when_signup_exceeds_days() {
        let lib = Library::new(0, 2, 2, vec![Book::new(0, 5), Book::new(1, 3)]);
        let adm = admit(&lib, &ClaimedBooks::new(), 1);
        assert_eq!(adm, Admission::Infeasible);
        assert!(adm.books().is_none());
    }

    #[test]
    fn test_truncates_to_highest_scores() {
        // capacity = (4 - 2) * 1 = 2
        let adm = admit(&sample_library(), &ClaimedBooks::new(), 4);
        assert_eq!(adm.books().map(ids), Some(vec![1, 2]));
    }

    #[test]
    fn test_skips_claimed_books() {
        let mut claimed = ClaimedBooks::new();
        claimed.claim_all(&[Book::new(1, 8)]);
        let adm = admit(&sample_library(), &claimed, 4);
        assert_eq!(adm.books().map(ids), Some(vec![2, 3]));
    }

    #[test]
    fn test_exact_fit_is_feasible_but_empty() {
        let adm = admit(&sample_library(), &ClaimedBooks::new(), 2);
        assert_eq!(adm, Admission::Admitted(vec![]));
        assert_eq!(adm.books().map(<[Book]>::len), Some(0));
    }

    #[test]
    fn test_everything_claimed_is_empty() {
        let lib = sample_library();
        let mut claimed = ClaimedBooks::new();
        claimed.claim_all(lib.books());
        assert_eq!(claimed.len(), 4);
        let adm = admit(&lib, &claimed, 100);
        assert_eq!(adm, Admission::Admitted(vec![]));
    }

    #[test]
    fn test_subset_size_is_min_of_capacity_and_unclaimed() {
        let lib = sample_library();
        let mut claimed = ClaimedBooks::new();
        claimed.claim_all(&[Book::new(0, 1)]);
        for days in 2..10 {
            let capacity = lib.capacity(days).unwrap() as usize;
            let taken = admit(&lib, &claimed, days);
            let expected: Vec<usize> = vec![1, 2, 3].into_iter().take(capacity).collect();
            assert_eq!(taken.books().map(ids), Some(expected));
        }
    }
}
