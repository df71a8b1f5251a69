// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the igrs library.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] ig_core::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("cannot write {target}: {source}")]
    Output {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for igrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
