// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The activity graph: typed nodes keyed by [`NodeId`] and directed edges.
//!
//! Nodes keep their first-insertion position. Writing a node whose id is
//! already present replaces its attributes wholesale (later writes win, no
//! merge). Edges are kept in insertion order and duplicates are not
//! suppressed.
//!
//! Edges may point at ids that have no node. A cross-reference to an issue
//! outside the scanned window produces such an edge; renderers are expected
//! to cope (see [`ActivityGraph::dangling_targets`]).

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;

use crate::event::EventKind;
use crate::identity::NodeId;
use crate::summary::GraphSummary;

/// Whether a node stands for an issue or for one of its events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Issue,
    Event,
}

/// Display color of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeColor {
    /// Open issue.
    Green,
    /// Closed issue.
    Red,
    /// Event.
    Blue,
}

impl NodeColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeColor::Green => "green",
            NodeColor::Red => "red",
            NodeColor::Blue => "blue",
        }
    }
}

impl fmt::Display for NodeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A node with its display attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub label: String,
    pub color: NodeColor,
    /// Set on event nodes only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<EventKind>,
}

impl GraphNode {
    /// An issue node, green when open and red otherwise.
    pub fn issue(number: i64, title: impl Into<String>, open: bool) -> Self {
        GraphNode {
            id: NodeId::issue(number),
            kind: NodeKind::Issue,
            label: title.into(),
            color: if open { NodeColor::Green } else { NodeColor::Red },
            event: None,
        }
    }

    /// An event node, always blue.
    pub fn event(id: NodeId, kind: EventKind, label: impl Into<String>) -> Self {
        GraphNode {
            id,
            kind: NodeKind::Event,
            label: label.into(),
            color: NodeColor::Blue,
            event: Some(kind),
        }
    }
}

/// A directed edge between two node ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GraphEdge {
    pub from: NodeId,
    pub to: NodeId,
}

/// Nodes and edges produced by one build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityGraph {
    nodes: Vec<GraphNode>,
    index: HashMap<NodeId, usize>,
    edges: Vec<GraphEdge>,
}

impl ActivityGraph {
    pub fn new() -> Self {
        ActivityGraph::default()
    }

    /// Inserts a node, or overwrites the attributes of the node with the same
    /// id. Returns true if the id was new.
    pub fn upsert_node(&mut self, node: GraphNode) -> bool {
        if let Some(&slot) = self.index.get(&node.id) {
            self.nodes[slot] = node;
            return false;
        }
        self.index.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);
        true
    }

    /// Appends a directed edge. Neither endpoint needs to exist yet.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.edges.push(GraphEdge { from, to });
    }

    pub fn node(&self, id: &NodeId) -> Option<&GraphNode> {
        self.index.get(id).map(|&slot| &self.nodes[slot])
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    /// Nodes in first-insertion order.
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Edges in insertion order, duplicates included.
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn issue_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(|n| n.kind == NodeKind::Issue)
    }

    pub fn event_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(|n| n.kind == NodeKind::Event)
    }

    /// Targets of the edges leaving `id`, in insertion order.
    pub fn successors<'a>(&'a self, id: &'a NodeId) -> impl Iterator<Item = &'a NodeId> + 'a {
        self.edges.iter().filter(move |e| &e.from == id).map(|e| &e.to)
    }

    /// Edge endpoints that have no node definition, first-seen order, each
    /// listed once.
    pub fn dangling_targets(&self) -> Vec<&NodeId> {
        let mut seen = HashSet::new();
        self.edges
            .iter()
            .flat_map(|e| [&e.from, &e.to])
            .filter(|id| !self.contains(id) && seen.insert(*id))
            .collect()
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary::of(self)
    }
}

#[cfg(test)]
#[path = "graph_tests.rs"]
mod tests;
