//! Solver configuration.
//!
//! Every field has a default, so a partial JSON document is a valid
//! configuration.
//!
//! ```
//! use book_scan::config::SolverConfig;
//! use book_scan::scheduler::PickStrategy;
//!
//! let cfg = SolverConfig::from_json_str(r#"{ "pick_strategy": "random", "restarts": 20 }"#).unwrap();
//! assert_eq!(cfg.pick_strategy, PickStrategy::Random);
//! assert_eq!(cfg.restarts(), 20);
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::ranking::RankingStrategy;
use crate::scheduler::PickStrategy;

/// Errors raised while building a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A pick strategy name was not recognized.
    #[error("unknown pick strategy '{0}' (expected 'best' or 'random')")]
    UnknownStrategy(String),
    /// A ranking name was not recognized.
    #[error("unknown ranking '{0}' (expected 'static' or 'dynamic')")]
    UnknownRanking(String),
    /// The configuration file could not be read.
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The configuration document is not valid JSON for this schema.
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Default number of picks served from a ranking before it is rebuilt.
pub const DEFAULT_REFRESH_EVERY: usize = 10;

/// Configuration for [`GreedySolver`](crate::scheduler::GreedySolver) and
/// [`RestartSearch`](crate::scheduler::RestartSearch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Strategy for the first pick of each run.
    pub seed_strategy: PickStrategy,
    /// Strategy for every later pick.
    pub pick_strategy: PickStrategy,
    /// Ranking used by the best-ranked strategy.
    pub ranking: RankingStrategy,
    /// Picks served before the ranking is rebuilt. `None` ranks once per run.
    pub refresh_every: Option<usize>,
    /// Number of restarts (clamped to at least 1).
    pub restarts: usize,
    /// Seed for the random source. `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            seed_strategy: PickStrategy::Best,
            pick_strategy: PickStrategy::Best,
            ranking: RankingStrategy::Dynamic,
            refresh_every: Some(DEFAULT_REFRESH_EVERY),
            restarts: 1,
            rng_seed: None,
        }
    }
}

impl SolverConfig {
    /// Parses a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Number of restarts to run.
    pub fn restarts(&self) -> usize {
        self.restarts.max(1)
    }

    /// Whether any pick can draw from the random source.
    pub fn is_randomized(&self) -> bool {
        self.seed_strategy == PickStrategy::Random || self.pick_strategy == PickStrategy::Random
    }
}
