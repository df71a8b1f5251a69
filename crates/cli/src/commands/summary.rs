// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::cli::WindowArgs;
use crate::config::Config;
use crate::error::Result;

use super::load_and_build;

pub fn run(file: &Path, window: &WindowArgs, json: bool, config: &Config) -> Result<()> {
    let summary = load_and_build(file, window, config)?.summary();
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }
    Ok(())
}
