//! Error types for loading, traversal and scoring.

use std::path::PathBuf;

use thiserror::Error;

use crate::graph::NodeId;

/// Errors raised while reading an adjacency list.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file could not be opened.
    #[error("failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader failed (I/O mid-stream or invalid UTF-8).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A non-blank record that does not name two endpoints.
    #[error("line {line}: expected at least 2 fields, found {found}")]
    MalformedRecord { line: u64, found: usize },
}

/// Errors raised by a traversal before it starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraversalError {
    #[error("node '{0}' not present in graph")]
    NodeNotFound(NodeId),
}

/// Errors raised by the score aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Total distance is zero or not finite, so the ratio has no value.
    #[error("influence score undefined: total distance over {reachable} reachable node(s) is zero")]
    Undefined { reachable: usize },
}
