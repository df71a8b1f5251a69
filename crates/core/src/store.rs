// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loading issue records from disk.
//!
//! [`JsonFileStore`] reads either a JSON array of issues or JSON Lines (one
//! issue object per line). The shape is picked from the first non-blank
//! character: `[` means array, anything else means JSON Lines.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};
use crate::record::IssueRecord;

/// A source of issue records.
pub trait RecordStore {
    /// Loads every record, in source order.
    fn load(&self) -> Result<Vec<IssueRecord>>;
}

/// Issue records stored in a JSON or JSON Lines file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn malformed(&self, reason: impl Into<String>) -> Error {
        Error::MalformedInput {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }

    fn parse_array(&self, content: &str) -> Result<Vec<IssueRecord>> {
        serde_json::from_str(content).map_err(|e| self.malformed(e.to_string()))
    }

    fn parse_lines(&self, content: &str) -> Result<Vec<IssueRecord>> {
        let mut records = Vec::new();
        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(line)
                .map_err(|e| self.malformed(format!("line {}: {e}", i + 1)))?;
            records.push(record);
        }
        Ok(records)
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Result<Vec<IssueRecord>> {
        info!("loading issues from {}", self.path.display());

        let content = fs::read_to_string(&self.path).map_err(|source| Error::SourceUnavailable {
            path: self.path.clone(),
            source,
        })?;

        let records = match content.trim_start().chars().next() {
            None => return Err(self.malformed("file is empty")),
            Some('[') => self.parse_array(&content)?,
            Some(_) => self.parse_lines(&content)?,
        };

        info!("loaded {} issues", records.len());
        Ok(records)
    }
}

/// Records already held in memory.
impl RecordStore for Vec<IssueRecord> {
    fn load(&self) -> Result<Vec<IssueRecord>> {
        Ok(self.clone())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
