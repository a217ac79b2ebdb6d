//! Error types for loading and running scenarios.
//!
//! The simulator itself never fails: control operations report whether
//! they did anything and failure of the content is a player state.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for scenario operations
pub type Result<T> = std::result::Result<T, ScenarioError>;

#[derive(Error, Debug)]
pub enum ScenarioError {
    /// Reading a scenario or walking a directory failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scenario file is not valid TOML or does not match the schema
    #[error("invalid scenario {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The media file referenced by a scenario could not be probed
    #[error("failed to probe content {path}: {reason}")]
    Probe { path: PathBuf, reason: String },

    /// A scenario path does not exist
    #[error("no such scenario path: {0}")]
    NotFound(PathBuf),

    /// An `expect` step did not hold
    #[error("expectation failed at step {step}: {detail}")]
    Expectation { step: usize, detail: String },
}
