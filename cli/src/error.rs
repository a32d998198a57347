//! Error types for the influence CLI.

use influence_core::{LoadError, ScoreError, TraversalError};
use thiserror::Error;

/// CLI result type alias.
pub type CliResult<T> = Result<T, CliError>;

/// Fatal errors: the process reports them and exits with failure.
#[derive(Error, Debug)]
pub enum CliError {
    /// Input graph could not be read.
    #[error("failed to load graph: {0}")]
    Load(#[from] LoadError),

    /// Writing the report failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Per-run errors: reported next to the score, the process still succeeds.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error(transparent)]
    Traversal(#[from] TraversalError),

    #[error(transparent)]
    Score(#[from] ScoreError),
}
