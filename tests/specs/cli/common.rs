// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Issue #1 (open, closed event) and #2 (closed, cross-references #1).
pub const TWO_ISSUES: &str = r#"[
  {"number": 1, "title": "First", "state": "open",
   "created_date": "2024-01-01T00:00:00Z",
   "events": [
     {"event_type": "closed", "author": "alice", "event_date": "2024-01-02T00:00:00Z"}
   ]},
  {"number": 2, "title": "Second", "state": "closed",
   "created_date": "2024-02-01T00:00:00Z",
   "events": [
     {"event_type": "cross-referenced", "author": "bob",
      "event_date": "2024-02-02T00:00:00Z", "comment": "see #1"}
   ]}
]"#;

/// An isolated directory holding issue exports. HOME and the config dir
/// point inside it so no user configuration leaks into a run.
pub struct Workspace {
    temp: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Workspace {
            temp: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Writes `content` to `name` and returns its path.
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn ig(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("ig");
        cmd.current_dir(self.temp.path())
            .env("HOME", self.temp.path())
            .env("XDG_CONFIG_HOME", self.temp.path().join(".config"))
            .env_remove("IG_CONFIG")
            .env_remove("IG_LOG");
        cmd
    }

    /// Runs `ig` and parses stdout as JSON.
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self.ig().args(args).output().unwrap();
        assert!(
            output.status.success(),
            "ig {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).unwrap()
    }
}

/// Node ids of a rendered JSON graph, as strings.
pub fn node_ids(doc: &serde_json::Value) -> Vec<String> {
    doc["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].to_string())
        .collect()
}
