//! Load errors.
//!
//! Parse errors carry the 1-based line number they were found on.

use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised while loading a problem instance.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file could not be read.
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The input ended before an expected line.
    #[error("line {line}: missing {expected}")]
    MissingLine { line: usize, expected: &'static str },
    /// A token is not a non-negative integer.
    #[error("line {line}: invalid integer '{token}'")]
    InvalidInteger { line: usize, token: String },
    /// A line has the wrong number of tokens.
    #[error("line {line}: expected {expected} values, found {found}")]
    TokenCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A library lists a book id outside the catalogue.
    #[error("line {line}: library {library} references unknown book {book}")]
    UnknownBook {
        line: usize,
        library: usize,
        book: usize,
    },
    /// The parsed instance failed validation.
    #[error("invalid problem: {}", summarize(.0))]
    Invalid(Vec<ValidationError>),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
