// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregate counts over a finished activity graph.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::event::EventKind;
use crate::graph::ActivityGraph;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub issues: usize,
    pub open_issues: usize,
    pub events: usize,
    pub edges: usize,
    /// Ids referenced by an edge but never defined as a node.
    pub dangling: usize,
    /// Event node count per kind. Kinds with no nodes are omitted.
    pub by_kind: BTreeMap<EventKind, usize>,
}

impl GraphSummary {
    pub fn of(graph: &ActivityGraph) -> Self {
        let mut summary = GraphSummary {
            edges: graph.edge_count(),
            dangling: graph.dangling_targets().len(),
            ..GraphSummary::default()
        };
        for node in graph.issue_nodes() {
            summary.issues += 1;
            if node.color == crate::graph::NodeColor::Green {
                summary.open_issues += 1;
            }
        }
        for kind in graph.event_nodes().filter_map(|n| n.event) {
            summary.events += 1;
            *summary.by_kind.entry(kind).or_default() += 1;
        }
        summary
    }
}

impl fmt::Display for GraphSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Issues: {} ({} open, {} closed)",
            self.issues,
            self.open_issues,
            self.issues - self.open_issues
        )?;
        writeln!(f, "Events: {}", self.events)?;
        for (kind, count) in &self.by_kind {
            writeln!(f, "  {kind}: {count}")?;
        }
        writeln!(f, "Edges: {}", self.edges)?;
        write!(f, "Dangling references: {}", self.dangling)
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
