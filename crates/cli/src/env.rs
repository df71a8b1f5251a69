// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! The variable name constants are generated by `build.rs` and live in the
//! [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns the `IG_LOG` filter directive if set and non-empty.
pub fn log_filter() -> Option<String> {
    std::env::var(vars::IG_LOG).ok().filter(|v| !v.is_empty())
}

/// Returns the value of `IG_CONFIG` if set and non-empty.
pub fn config_path() -> Option<PathBuf> {
    std::env::var(vars::IG_CONFIG)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
