// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! igrs - command-line front end for the issue activity graph.
//!
//! The graph engine lives in `ig-core`; this crate adds argument parsing,
//! the configuration file, logging setup and command dispatch for the `ig`
//! binary.
//!
//! ```rust,ignore
//! use clap::Parser;
//! use igrs::Cli;
//!
//! let cli = Cli::parse_from(["ig", "summary", "issues.json"]);
//! igrs::run(cli)?;
//! ```

mod cli;
mod commands;

pub mod config;
pub mod env;
pub mod error;
pub mod logging;

pub use cli::{Cli, Command, WindowArgs};
pub use config::{Config, Overrides};
pub use error::{Error, Result};

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process
/// execution. Logging is left to the caller.
pub fn run(cli: Cli) -> Result<()> {
    let config = config::Config::discover(cli.config.as_deref())?;
    tracing::debug!("config: {:?}", config);

    match cli.command {
        Command::Graph {
            file,
            window,
            format,
            output,
        } => commands::graph::run(&file, &window, format, output.as_deref(), &config),
        Command::Summary { file, window, json } => {
            commands::summary::run(&file, &window, json, &config)
        }
        Command::Completion { shell } => commands::completion::run(shell),
    }
}


#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
