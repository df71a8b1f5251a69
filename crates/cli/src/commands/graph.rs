// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use ig_core::{ActivityGraph, Format};

use crate::cli::WindowArgs;
use crate::config::Config;
use crate::error::{Error, Result};

use super::load_and_build;

pub fn run(
    file: &Path,
    window: &WindowArgs,
    format: Option<Format>,
    output: Option<&Path>,
    config: &Config,
) -> Result<()> {
    let graph = load_and_build(file, window, config)?;
    let format = format.or(config.format).unwrap_or_default();
    let rendered = render(&graph, format)?;

    match output {
        Some(path) => fs::write(path, rendered).map_err(|source| Error::Output {
            target: path.display().to_string(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&rendered)?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Renders the whole graph into memory so a failed render never leaves a
/// truncated file behind.
pub(crate) fn render(graph: &ActivityGraph, format: Format) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    format.renderer().render(graph, &mut buf)?;
    Ok(buf)
}

#[cfg(test)]
#[path = "graph_tests.rs"]
mod tests;
