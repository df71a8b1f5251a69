// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ig-core: activity graph construction for issue-tracker exports
//!
//! This crate turns a date-filtered, limit-bounded stream of issue records
//! into a directed graph of issue and event nodes, resolving cross-issue
//! references along the way. It also provides the record store that loads
//! exports from disk and the renderers that draw finished graphs.
//!
//! ```rust,ignore
//! use ig_core::{BuildConfig, DateWindow, GraphBuilder, JsonFileStore, RecordStore};
//!
//! let issues = JsonFileStore::new("data/issues.json").load()?;
//! let window = DateWindow::parse(Some("2024-01-01"), None)?;
//! let graph = GraphBuilder::new(BuildConfig::new(100, window)).build(&issues);
//! ```

pub mod builder;
pub mod error;
pub mod event;
pub mod graph;
pub mod identity;
pub mod record;
pub mod render;
pub mod store;
pub mod summary;
pub mod window;

pub use builder::{build_graph, BuildConfig, BuildStats, GraphBuilder, DEFAULT_ISSUE_LIMIT};
pub use error::{Error, Result};
pub use event::EventKind;
pub use graph::{ActivityGraph, GraphEdge, GraphNode, NodeColor, NodeKind};
pub use identity::NodeId;
pub use record::{EventRecord, IssueRecord, IssueState};
pub use render::{DotRenderer, Format, JsonRenderer, Renderer, TreeRenderer};
pub use store::{JsonFileStore, RecordStore};
pub use summary::GraphSummary;
pub use window::DateWindow;
