// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Activity graph construction.
//!
//! The builder walks issues in input order and stops after `issue_limit`
//! issues have been visited, whether or not they survive filtering. For each
//! visited issue:
//!
//! 1. The creation date must fall inside the window, otherwise the issue and
//!    all of its events are skipped.
//! 2. The issue node is written (green when open, red otherwise).
//! 3. Each event of a recognized kind whose date falls inside the window gets
//!    a blue node and an `issue -> event` edge.
//! 4. A cross-reference event whose comment ends in `#<number>` also gets an
//!    `event -> issue` edge. The target need not exist: references to issues
//!    outside the scanned window, filtered out, or not yet visited stay as
//!    edges to undefined ids.
//!
//! Nothing in a record can make the build fail. Missing or unparseable
//! fields fall back to their defaults or cause the record to be skipped.

use tracing::{debug, info, trace};

use crate::event::EventKind;
use crate::graph::{ActivityGraph, GraphNode};
use crate::identity::{referenced_issue, NodeId};
use crate::record::{EventRecord, IssueRecord};
use crate::window::DateWindow;

/// Number of issues scanned when no limit is configured.
pub const DEFAULT_ISSUE_LIMIT: usize = 100;

/// Parameters for one build. Bounds are already normalized to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildConfig {
    /// Maximum number of input issues visited.
    pub issue_limit: usize,
    pub window: DateWindow,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            issue_limit: DEFAULT_ISSUE_LIMIT,
            window: DateWindow::unbounded(),
        }
    }
}

impl BuildConfig {
    pub fn new(issue_limit: usize, window: DateWindow) -> Self {
        BuildConfig {
            issue_limit,
            window,
        }
    }

    /// Sets the issue limit (builder pattern).
    pub fn with_limit(mut self, issue_limit: usize) -> Self {
        self.issue_limit = issue_limit;
        self
    }

    /// Sets the date window (builder pattern).
    pub fn with_window(mut self, window: DateWindow) -> Self {
        self.window = window;
        self
    }
}

/// Counters reported at the end of a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub visited: usize,
    pub issues_included: usize,
    pub issues_outside_window: usize,
    pub issues_without_number: usize,
    pub events_included: usize,
    pub events_unrecognized: usize,
    pub events_outside_window: usize,
    pub cross_references: usize,
    pub malformed_references: usize,
}

/// Builds one activity graph. A builder is consumed by [`GraphBuilder::build`];
/// start a new one for each run.
#[derive(Debug)]
pub struct GraphBuilder {
    config: BuildConfig,
    graph: ActivityGraph,
    stats: BuildStats,
}

impl GraphBuilder {
    pub fn new(config: BuildConfig) -> Self {
        GraphBuilder {
            config,
            graph: ActivityGraph::new(),
            stats: BuildStats::default(),
        }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Builds the graph for `issues`.
    pub fn build(self, issues: &[IssueRecord]) -> ActivityGraph {
        self.build_with_stats(issues).0
    }

    /// Builds the graph and returns the counters alongside it.
    pub fn build_with_stats(mut self, issues: &[IssueRecord]) -> (ActivityGraph, BuildStats) {
        info!(
            "building graph from {} issues (limit {}, window {})",
            issues.len(),
            self.config.issue_limit,
            self.config.window
        );

        for issue in issues.iter().take(self.config.issue_limit) {
            self.stats.visited += 1;
            self.add_issue(issue);
        }

        info!(
            "graph built: {} nodes, {} edges ({} of {} visited issues included)",
            self.graph.node_count(),
            self.graph.edge_count(),
            self.stats.issues_included,
            self.stats.visited
        );
        (self.graph, self.stats)
    }

    fn add_issue(&mut self, issue: &IssueRecord) {
        if !self.config.window.admits(issue.created_date.as_deref()) {
            debug!(
                "skipping issue {:?}: created_date {:?} outside window",
                issue.number, issue.created_date
            );
            self.stats.issues_outside_window += 1;
            return;
        }
        let Some(number) = issue.number else {
            debug!("skipping issue '{}': no issue number", issue.title);
            self.stats.issues_without_number += 1;
            return;
        };

        trace!("issue node {number}");
        self.graph.upsert_node(GraphNode::issue(
            number,
            issue.title.clone(),
            issue.state.is_open(),
        ));
        self.stats.issues_included += 1;

        for event in &issue.events {
            self.add_event(number, event);
        }
    }

    fn add_event(&mut self, number: i64, event: &EventRecord) {
        let Some(kind) = event.event_type.as_deref().and_then(EventKind::classify) else {
            trace!("issue {number}: ignoring event type {:?}", event.event_type);
            self.stats.events_unrecognized += 1;
            return;
        };
        if !self.config.window.admits(Some(&event.event_date)) {
            debug!(
                "issue {number}: skipping {kind} event dated {:?}",
                event.event_date
            );
            self.stats.events_outside_window += 1;
            return;
        }

        let id = NodeId::event(number, kind.as_str(), &event.event_date);
        let label = format!("{kind} by {} on {}", event.author, event.event_date);
        trace!("event node {id}");
        self.graph.upsert_node(GraphNode::event(id.clone(), kind, label));
        self.graph.add_edge(NodeId::issue(number), id.clone());
        self.stats.events_included += 1;

        if kind == EventKind::CrossReferenced {
            self.add_cross_reference(id, event.comment.as_deref());
        }
    }

    fn add_cross_reference(&mut self, from: NodeId, comment: Option<&str>) {
        match comment.and_then(referenced_issue) {
            Some(target) => {
                trace!("cross-reference {from} -> {target}");
                self.graph.add_edge(from, NodeId::issue(target));
                self.stats.cross_references += 1;
            }
            None => {
                debug!("{from}: no issue reference in comment {comment:?}");
                self.stats.malformed_references += 1;
            }
        }
    }
}

/// Builds a graph in one call.
pub fn build_graph(issues: &[IssueRecord], config: BuildConfig) -> ActivityGraph {
    GraphBuilder::new(config).build(issues)
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
