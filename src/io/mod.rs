//! Problem loading and solution writing.
//!
//! - **`parser`**: line-oriented problem files, validated on load
//! - **`writer`**: submission text and JSON output

mod err;
mod parser;
mod writer;

pub use err::LoadError;
pub use parser::{load_problem, parse_problem};
pub use writer::{save_solution, save_solution_as, write_solution, write_solution_as, OutputFormat};
