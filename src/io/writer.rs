//! Submission writer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::models::Solution;

/// Output encoding for a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Signup count, then a `library_id book_count` line and a book id line
    /// per non-empty signup.
    #[default]
    Submission,
    /// Pretty-printed JSON of the full solution, empty signups included.
    Json,
}

/// Writes `solution` in submission format.
pub fn write_solution<W: Write>(solution: &Solution, writer: W) -> io::Result<()> {
    write_solution_as(solution, OutputFormat::Submission, writer)
}

/// Writes `solution` in the given format.
pub fn write_solution_as<W: Write>(
    solution: &Solution,
    format: OutputFormat,
    writer: W,
) -> io::Result<()> {
    let mut out = BufWriter::new(writer);
    match format {
        OutputFormat::Submission => write!(out, "{solution}")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, solution)?;
            writeln!(out)?;
        }
    }
    out.flush()
}

/// Creates (or truncates) `path` and writes `solution` in submission format.
pub fn save_solution(solution: &Solution, path: impl AsRef<Path>) -> io::Result<()> {
    save_solution_as(solution, OutputFormat::Submission, path)
}

/// Creates (or truncates) `path` and writes `solution` in the given format.
pub fn save_solution_as(
    solution: &Solution,
    format: OutputFormat,
    path: impl AsRef<Path>,
) -> io::Result<()> {
    let path = path.as_ref();
    write_solution_as(solution, format, File::create(path)?)?;
    tracing::debug!(
        path = %path.display(),
        signups = solution.signup_count(),
        ?format,
        "wrote solution"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Book, Signup};

    fn solution() -> Solution {
        let mut s = Solution::new();
        s.add_signup(Signup::new(0, 0, vec![Book::new(3, 6), Book::new(4, 5)]));
        s.add_signup(Signup::new(2, 2, vec![]));
        s.add_signup(Signup::new(1, 3, vec![Book::new(5, 4)]));
        s
    }

    #[test]
    fn test_submission_omits_empty_signups() {
        let mut buf = Vec::new();
        write_solution(&solution(), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "2\n0 2\n3 4\n1 1\n5\n");
    }

    #[test]
    fn test_empty_solution() {
        let mut buf = Vec::new();
        write_solution(&Solution::new(), &mut buf).unwrap();
        assert_eq!(buf, b"0\n");
    }

    #[test]
    fn test_json_output() {
        let mut buf = Vec::new();
        write_solution_as(&solution(), OutputFormat::Json, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let signups = value["signups"].as_array().unwrap();
        assert_eq!(signups.len(), 3);
        assert_eq!(signups[2]["day"], 3);
    }

    #[test]
    fn test_save_solution() {
        let path = std::env::temp_dir().join(format!("book-scan-writer-{}.txt", std::process::id()));
        save_solution(&solution(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(text.starts_with("2\n0 2\n"));
    }
}
