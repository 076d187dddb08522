//! Problem file parser.
//!
//! The input is line oriented:
//!
//! ```text
//! B L D          books, libraries, days
//! s0 s1 ...      B book scores
//! N T M          per library: book count, signup days, ship rate
//! b0 b1 ...      per library: N book ids
//! ```

use std::path::Path;
use std::str::FromStr;

use super::LoadError;
use crate::models::{Book, Library, Problem};
use crate::validation::validate_problem;

/// Reads and parses a problem file.
pub fn load_problem(path: impl AsRef<Path>) -> Result<Problem, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let problem = parse_problem(&text)?;
    tracing::debug!(
        path = %path.display(),
        books = problem.books().len(),
        libraries = problem.library_count(),
        days = problem.total_days(),
        "loaded problem"
    );
    Ok(problem)
}

/// Parses a problem from text.
///
/// Never returns a partially built problem: any malformed line or failed
/// validation check is an error.
pub fn parse_problem(text: &str) -> Result<Problem, LoadError> {
    let mut lines = Lines::new(text);

    let (line, header) = lines.next("header line")?;
    let [book_count, library_count, days] = fixed::<3>(line, header)?;
    let book_count: usize = parse_int(line, book_count)?;
    let library_count: usize = parse_int(line, library_count)?;
    let days: u32 = parse_int(line, days)?;

    let (line, text) = lines.next("book scores")?;
    let tokens = tokens_exact(line, text, book_count)?;
    let books = tokens
        .iter()
        .enumerate()
        .map(|(id, token)| parse_int(line, token).map(|score| Book::new(id, score)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut libraries = Vec::with_capacity(library_count);
    for id in 0..library_count {
        let (line, header) = lines.next("library header")?;
        let [count, signup, rate] = fixed::<3>(line, header)?;
        let count: usize = parse_int(line, count)?;
        let signup: u32 = parse_int(line, signup)?;
        let rate: u32 = parse_int(line, rate)?;

        let offered = match lines.next("library book ids") {
            Ok((line, text)) => parse_book_ids(line, text, count, id, &books)?,
            // An empty library may omit its (blank) id line at end of input.
            Err(_) if count == 0 => Vec::new(),
            Err(e) => return Err(e),
        };
        libraries.push(Library::new(id, signup, rate, offered));
    }

    let problem = Problem::new(days, books, libraries);
    validate_problem(&problem).map_err(LoadError::Invalid)?;
    Ok(problem)
}

fn parse_book_ids(
    line: usize,
    text: &str,
    count: usize,
    library: usize,
    catalogue: &[Book],
) -> Result<Vec<Book>, LoadError> {
    tokens_exact(line, text, count)?
        .into_iter()
        .map(|token| {
            let book: usize = parse_int(line, token)?;
            catalogue
                .get(book)
                .copied()
                .ok_or(LoadError::UnknownBook {
                    line,
                    library,
                    book,
                })
        })
        .collect()
}

/// Line cursor with 1-based numbering. Trailing blank lines are dropped.
struct Lines<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        let mut lines: Vec<&str> = text.lines().collect();
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        Self { lines, pos: 0 }
    }

    fn next(&mut self, expected: &'static str) -> Result<(usize, &'a str), LoadError> {
        let line = self.pos + 1;
        let text = self
            .lines
            .get(self.pos)
            .copied()
            .ok_or(LoadError::MissingLine { line, expected })?;
        self.pos += 1;
        Ok((line, text))
    }
}

fn tokens_exact(line: usize, text: &str, expected: usize) -> Result<Vec<&str>, LoadError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != expected {
        return Err(LoadError::TokenCount {
            line,
            expected,
            found: tokens.len(),
        });
    }
    Ok(tokens)
}

fn fixed<const N: usize>(line: usize, text: &str) -> Result<[&str; N], LoadError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.try_into().map_err(|tokens: Vec<&str>| LoadError::TokenCount {
        line,
        expected: N,
        found: tokens.len(),
    })
}

fn parse_int<T: FromStr>(line: usize, token: &str) -> Result<T, LoadError> {
    token.parse().map_err(|_| LoadError::InvalidInteger {
        line,
        token: token.to_string(),
    })
}
