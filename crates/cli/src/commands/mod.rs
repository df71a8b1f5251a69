// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod completion;
pub mod graph;
pub mod summary;

use std::path::Path;

use ig_core::{ActivityGraph, GraphBuilder, JsonFileStore, RecordStore};

use crate::cli::WindowArgs;
use crate::config::Config;
use crate::error::Result;

/// Loads the export at `file` and builds its graph.
///
/// Loading and parameter errors abort before any graph exists, so callers
/// never see a partial graph.
pub fn load_and_build(file: &Path, window: &WindowArgs, config: &Config) -> Result<ActivityGraph> {
    let build_config = config.build_config(&window.overrides())?;
    let store = JsonFileStore::new(file);
    build_from(&store, &build_config)
}

/// Builds a graph from any record store.
pub(crate) fn build_from(
    store: &dyn RecordStore,
    build_config: &ig_core::BuildConfig,
) -> Result<ActivityGraph> {
    let issues = store.load()?;
    Ok(GraphBuilder::new(*build_config).build(&issues))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
