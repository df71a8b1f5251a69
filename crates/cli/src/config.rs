// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Defaults for the build parameters can be kept in a TOML file:
//!
//! ```toml
//! issue_limit = 250
//! start_date = "2024-01-01"
//! end_date = "2024-06-30"
//! format = "json"
//! ```
//!
//! The file is found by, in order: the `--config` flag, `IG_CONFIG`, then
//! `<config dir>/issuegraph/config.toml`. Command-line flags override any
//! value read from the file.

use std::fs;
use std::path::{Path, PathBuf};

use ig_core::{BuildConfig, DateWindow, Format, DEFAULT_ISSUE_LIMIT};
use serde::{Deserialize, Serialize};

use crate::env;
use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "issuegraph";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Values read from the configuration file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub issue_limit: Option<usize>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub format: Option<Format>,
}

/// Build parameters given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub issue_limit: Option<usize>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    /// Finds and loads the configuration file, falling back to defaults when
    /// no file is configured and the default location has none.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Config::load(path);
        }
        if let Some(path) = env::config_path() {
            return Config::load(&path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Config::load(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Resolves the parameters for one build. Bounds are parsed here, once.
    pub fn build_config(&self, overrides: &Overrides) -> Result<BuildConfig> {
        let issue_limit = overrides
            .issue_limit
            .or(self.issue_limit)
            .unwrap_or(DEFAULT_ISSUE_LIMIT);
        let start = overrides.start_date.as_deref().or(self.start_date.as_deref());
        let end = overrides.end_date.as_deref().or(self.end_date.as_deref());
        let window = DateWindow::parse(start, end)?;
        Ok(BuildConfig::new(issue_limit, window))
    }
}

/// Default configuration file location, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
