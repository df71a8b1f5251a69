// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;
use ig_core::Format;

use crate::config::Overrides;

const QUICKSTART_HELP: &str = "\
Get started:
  ig graph issues.json                      Graph the first 100 issues as DOT
  ig graph issues.json -f tree -n 20        Outline the first 20 issues
  ig graph issues.json --start-date 2024-01-01 -o graph.dot
  ig summary issues.json                    Count nodes, edges and references";

#[derive(Parser)]
#[command(name = "ig", version)]
#[command(about = "Build activity graphs from issue-tracker exports")]
#[command(
    long_about = "Build activity graphs from issue-tracker exports.\n\n\
    Issues and their labeling, commenting, cross-referencing, opening and closing \
    events become nodes of a directed graph, bounded by an issue limit and an \
    optional date window."
)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Read defaults from this TOML file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the activity graph and render it
    #[command(after_help = "Examples:\n  \
        ig graph issues.json                         DOT to stdout\n  \
        ig graph issues.json -f json -o graph.json   JSON to a file\n  \
        ig graph issues.json --end-date 2024-01-31   Only activity up to Jan 31")]
    Graph {
        /// Issue export (JSON array or JSON Lines)
        file: PathBuf,

        #[command(flatten)]
        window: WindowArgs,

        /// Output format: dot, json, tree [default: dot]
        #[arg(long, short)]
        format: Option<Format>,

        /// Write to this file instead of stdout
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Build the activity graph and print node and edge counts
    Summary {
        /// Issue export (JSON array or JSON Lines)
        file: PathBuf,

        #[command(flatten)]
        window: WindowArgs,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Issue limit and date window flags shared by the build commands.
#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct WindowArgs {
    /// Number of issues to scan, in input order [default: 100]
    #[arg(long = "issue-limit", short = 'n', visible_alias = "issue_limit")]
    pub issue_limit: Option<usize>,

    /// Keep issues and events on or after this date (ISO-8601)
    #[arg(long = "start-date", visible_alias = "start_date", value_name = "DATE")]
    pub start_date: Option<String>,

    /// Keep issues and events on or before this date (ISO-8601)
    #[arg(long = "end-date", visible_alias = "end_date", value_name = "DATE")]
    pub end_date: Option<String>,
}

impl WindowArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            issue_limit: self.issue_limit,
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
