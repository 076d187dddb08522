//! Search errors.

use thiserror::Error;

/// Errors raised by the restart search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Results were requested before any run completed.
    #[error("not solved yet: no run has completed")]
    NotSolved,
}
