//! Solution model.
//!
//! A solution is the ordered list of library signups committed by one run
//! of the scheduler, in commitment order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::{sum_scores, Book, BookId, Days, LibraryId};

/// A committed decision to sign up a library and scan some of its books.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signup {
    /// Library being signed up.
    pub library_id: LibraryId,
    /// Day on which the signup starts (days elapsed at commit time).
    pub day: Days,
    /// Books scanned by this library, in shipping order.
    pub books: Vec<Book>,
}

/// Ordered list of signups.
///
/// Books are not deduplicated here; the scheduler guarantees that no book
/// appears in more than one signup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Signups in commitment order.
    pub signups: Vec<Signup>,
}

impl Signup {
    /// Creates a new signup.
    pub fn new(library_id: LibraryId, day: Days, books: Vec<Book>) -> Self {
        Self {
            library_id,
            day,
            books,
        }
    }

    /// Whether this signup scans no books.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a signup.
    pub fn add_signup(&mut self, signup: Signup) {
        self.signups.push(signup);
    }

    /// Signups that scan at least one book. Only these are emitted.
    pub fn non_empty_signups(&self) -> impl Iterator<Item = &Signup> {
        self.signups.iter().filter(|s| !s.is_empty())
    }

    /// Number of signups that scan at least one book.
    pub fn signup_count(&self) -> usize {
        self.non_empty_signups().count()
    }

    /// Whether the solution contains no emitted signup.
    pub fn is_empty(&self) -> bool {
        self.signup_count() == 0
    }

    /// Total score, counting each distinct book once.
    pub fn total_score(&self) -> u64 {
        let mut seen: HashSet<BookId> = HashSet::new();
        sum_scores(
            self.signups
                .iter()
                .flat_map(|s| s.books.iter())
                .filter(|b| seen.insert(b.id)),
        )
    }

    /// Whether no book appears in more than one place.
    pub fn has_distinct_books(&self) -> bool {
        let mut seen: HashSet<BookId> = HashSet::new();
        self.signups
            .iter()
            .flat_map(|s| s.books.iter())
            .all(|b| seen.insert(b.id))
    }
}

impl fmt::Display for Signup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.library_id, self.books.len())?;
        let mut first = true;
        for book in &self.books {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}", book.id)?;
            first = false;
        }
        writeln!(f)
    }
}

/// Submission format: signup count, then two lines per non-empty signup.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.signup_count())?;
        for signup in self.non_empty_signups() {
            write!(f, "{signup}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_solution() -> Solution {
        let mut s = Solution::new();
        s.add_signup(Signup::new(1, 0, vec![Book::new(5, 4), Book::new(0, 1)]));
        s.add_signup(Signup::new(0, 3, vec![]));
        s.add_signup(Signup::new(2, 5, vec![Book::new(3, 6)]));
        s
    }

    #[test]
    fn test_total_score() {
        assert_eq!(sample_solution().total_score(), 11);
    }

    #[test]
    fn test_total_score_counts_duplicates_once() {
        let mut s = Solution::new();
        s.add_signup(Signup::new(0, 0, vec![Book::new(1, 10)]));
        s.add_signup(Signup::new(1, 1, vec![Book::new(1, 10), Book::new(2, 1)]));
        assert_eq!(s.total_score(), 11);
        assert!(!s.has_distinct_books());
    }

    #[test]
    fn test_empty_signups_not_counted() {
        let s = sample_solution();
        assert_eq!(s.signups.len(), 3);
        assert_eq!(s.signup_count(), 2);
        assert!(!s.is_empty());
        assert!(Solution::new().is_empty());
    }

    #[test]
    fn test_display_skips_empty_signups() {
        let text = sample_solution().to_string();
        assert_eq!(text, "2\n1 2\n5 0\n2 1\n3\n");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample_solution()).unwrap();
        assert_eq!(json["signups"][0]["library_id"], 1);
        assert_eq!(json["signups"][2]["books"][0]["score"], 6);
    }
}
