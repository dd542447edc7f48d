// Copyright 2025 ParBench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for result I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing benchmark results.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Filesystem operation failed
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path the operation was acting on.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Results could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A results file parsed but does not describe a run
    #[error("Invalid results in {path}: {reason}")]
    InvalidResults {
        /// File the record was read from.
        path: PathBuf,
        /// Why the record was rejected.
        reason: String,
    },
}

impl BenchError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for benchmark I/O operations.
pub type Result<T> = std::result::Result<T, BenchError>;
