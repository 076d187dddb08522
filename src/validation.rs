//! Input validation for problem instances.
//!
//! Checks structural integrity of the catalogue and libraries before
//! scheduling. Detects:
//! - Duplicate book or library IDs
//! - Libraries that take no time to sign up
//! - Library references to books missing from the catalogue
//! - Library books whose score disagrees with the catalogue
//! - A book listed twice by the same library

use std::collections::{HashMap, HashSet};
use thiserror::Error;

use crate::models::{BookId, Problem};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A library has `signup_days == 0`.
    ZeroSignup,
    /// A library references a book that isn't in the catalogue.
    UnknownBook,
    /// A library's copy of a book has a different score than the catalogue.
    ScoreMismatch,
    /// A library lists the same book more than once.
    DuplicateBook,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a problem instance.
///
/// Checks:
/// 1. No duplicate book IDs in the catalogue
/// 2. No duplicate library IDs
/// 3. Every library needs at least one signup day
/// 4. Every library book exists in the catalogue with the same score
/// 5. No library lists a book twice
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_problem(problem: &Problem) -> ValidationResult {
    let mut errors = Vec::new();

    let mut catalogue: HashMap<BookId, u64> = HashMap::new();
    for book in problem.books() {
        if catalogue.insert(book.id, book.score).is_some() {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate book ID: {}", book.id),
            ));
        }
    }

    let mut library_ids = HashSet::new();
    for lib in problem.libraries() {
        if !library_ids.insert(lib.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate library ID: {}", lib.id()),
            ));
        }

        if lib.signup_days() == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroSignup,
                format!("Library {} has zero signup days", lib.id()),
            ));
        }

        let mut listed = HashSet::new();
        for book in lib.books() {
            if !listed.insert(book.id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateBook,
                    format!("Library {} lists book {} more than once", lib.id(), book.id),
                ));
            }

            match catalogue.get(&book.id) {
                None => errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownBook,
                    format!("Library {} references unknown book {}", lib.id(), book.id),
                )),
                Some(&score) if score != book.score => errors.push(ValidationError::new(
                    ValidationErrorKind::ScoreMismatch,
                    format!(
                        "Library {} has book {} with score {}, catalogue says {}",
                        lib.id(),
                        book.id,
                        book.score,
                        score
                    ),
                )),
                Some(_) => {}
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Book, Library};

    fn sample_books() -> Vec<Book> {
        vec![Book::new(0, 5), Book::new(1, 3), Book::new(2, 8)]
    }

    fn has_kind(problem: &Problem, kind: ValidationErrorKind) -> bool {
        validate_problem(problem)
            .unwrap_err()
            .iter()
            .any(|e| e.kind == kind)
    }

    #[test]
    fn test_valid_problem() {
        let books = sample_books();
        let libraries = vec![
            Library::new(0, 2, 1, vec![books[0], books[1]]),
            Library::new(1, 1, 3, vec![books[1], books[2]]),
        ];
        assert!(validate_problem(&Problem::new(10, books, libraries)).is_ok());
    }

    #[test]
    fn test_duplicate_book_id() {
        let books = vec![Book::new(0, 5), Book::new(0, 5)];
        let problem = Problem::new(10, books, vec![]);
        assert!(has_kind(&problem, ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_duplicate_library_id() {
        let books = sample_books();
        let libraries = vec![
            Library::new(3, 1, 1, vec![books[0]]),
            Library::new(3, 1, 1, vec![books[1]]),
        ];
        let errors = validate_problem(&Problem::new(10, books, libraries)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("library")));
    }

    #[test]
    fn test_zero_signup() {
        let books = sample_books();
        let libraries = vec![Library::new(0, 0, 1, vec![books[0]])];
        assert!(has_kind(&Problem::new(10, books, libraries), ValidationErrorKind::ZeroSignup));
    }

    #[test]
    fn test_unknown_book() {
        let books = sample_books();
        let libraries = vec![Library::new(0, 1, 1, vec![Book::new(9, 1)])];
        assert!(has_kind(&Problem::new(10, books, libraries), ValidationErrorKind::UnknownBook));
    }

    #[test]
    fn test_score_mismatch() {
        let books = sample_books();
        let libraries = vec![Library::new(0, 1, 1, vec![Book::new(2, 1)])];
        assert!(has_kind(
            &Problem::new(10, books, libraries),
            ValidationErrorKind::ScoreMismatch
        ));
    }

    #[test]
    fn test_book_listed_twice() {
        let books = sample_books();
        let libraries = vec![Library::new(0, 1, 1, vec![books[1], books[1]])];
        assert!(has_kind(
            &Problem::new(10, books, libraries),
            ValidationErrorKind::DuplicateBook
        ));
    }

    #[test]
    fn test_multiple_errors() {
        let books = sample_books();
        let libraries = vec![Library::new(0, 0, 1, vec![Book::new(7, 1)])];
        let errors = validate_problem(&Problem::new(10, books, libraries)).unwrap_err();
        assert!(errors.len() >= 2);
        assert!(errors[0].to_string().contains("Library 0"));
    }
}
