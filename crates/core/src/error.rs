// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for ig-core operations.

use std::path::PathBuf;

use thiserror::Error;

/// All possible errors that can occur in ig-core operations.
///
/// Only the record store and the user-supplied build parameters can fail.
/// Anomalies inside individual records are resolved by skip/default rules
/// during the build and never surface here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read issue records from {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed issue records in {}: {reason}", path.display())]
    MalformedInput { path: PathBuf, reason: String },

    #[error("invalid date: '{0}'\n  hint: use ISO-8601, e.g. 2024-01-31 or 2024-01-31T12:00:00Z")]
    InvalidDate(String),

    #[error("unknown format '{0}'\n  hint: valid formats are: dot, json, tree")]
    UnknownFormat(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for ig-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
