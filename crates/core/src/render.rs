// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formats for a finished activity graph.
//!
//! Every renderer accepts edges to ids that have no node: DOT draws them as
//! dashed placeholders, JSON lists them under `dangling`, and the tree marks
//! them `(not in graph)`.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{ActivityGraph, GraphEdge, GraphNode, NodeColor};
use crate::identity::NodeId;

/// Draws a graph onto a writer.
pub trait Renderer {
    fn render(&self, graph: &ActivityGraph, out: &mut dyn Write) -> Result<()>;
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Dot,
    Json,
    Tree,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Dot => "dot",
            Format::Json => "json",
            Format::Tree => "tree",
        }
    }

    pub fn renderer(&self) -> Box<dyn Renderer> {
        match self {
            Format::Dot => Box::new(DotRenderer),
            Format::Json => Box::new(JsonRenderer),
            Format::Tree => Box::new(TreeRenderer),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dot" | "graphviz" => Ok(Format::Dot),
            "json" => Ok(Format::Json),
            "tree" | "text" => Ok(Format::Tree),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// Graphviz DOT output.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotRenderer;

impl DotRenderer {
    fn quote(text: &str) -> String {
        let mut quoted = String::with_capacity(text.len() + 2);
        quoted.push('"');
        for c in text.chars() {
            match c {
                '"' => quoted.push_str("\\\""),
                '\\' => quoted.push_str("\\\\"),
                '\n' => quoted.push_str("\\n"),
                _ => quoted.push(c),
            }
        }
        quoted.push('"');
        quoted
    }
}

impl Renderer for DotRenderer {
    fn render(&self, graph: &ActivityGraph, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "digraph activity {{")?;
        writeln!(out, "  node [style=filled, fontsize=8];")?;
        for node in graph.nodes() {
            writeln!(
                out,
                "  {} [label={}, fillcolor={}];",
                Self::quote(&node.id.to_string()),
                Self::quote(&node.label),
                node.color
            )?;
        }
        for id in graph.dangling_targets() {
            let name = Self::quote(&id.to_string());
            writeln!(out, "  {name} [label={name}, style=dashed];")?;
        }
        for edge in graph.edges() {
            writeln!(
                out,
                "  {} -> {};",
                Self::quote(&edge.from.to_string()),
                Self::quote(&edge.to.to_string())
            )?;
        }
        writeln!(out, "}}")?;
        Ok(())
    }
}

/// Pretty-printed JSON output.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonGraph<'a> {
    nodes: &'a [GraphNode],
    edges: &'a [GraphEdge],
    dangling: Vec<&'a NodeId>,
}

impl Renderer for JsonRenderer {
    fn render(&self, graph: &ActivityGraph, out: &mut dyn Write) -> Result<()> {
        let doc = JsonGraph {
            nodes: graph.nodes(),
            edges: graph.edges(),
            dangling: graph.dangling_targets(),
        };
        serde_json::to_writer_pretty(&mut *out, &doc)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Indented text outline: each issue, its events, and the issues those
/// events reference.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeRenderer;

impl TreeRenderer {
    fn describe(graph: &ActivityGraph, id: &NodeId) -> String {
        match (graph.node(id), id.as_issue()) {
            (Some(node), Some(number)) => {
                let state = if node.color == NodeColor::Green {
                    "open"
                } else {
                    "closed"
                };
                format!("#{number} {} [{state}]", node.label)
            }
            (Some(node), None) => node.label.clone(),
            (None, Some(number)) => format!("#{number} (not in graph)"),
            (None, None) => format!("{id} (not in graph)"),
        }
    }
}

impl Renderer for TreeRenderer {
    fn render(&self, graph: &ActivityGraph, out: &mut dyn Write) -> Result<()> {
        for issue in graph.issue_nodes() {
            writeln!(out, "{}", Self::describe(graph, &issue.id))?;

            let children: Vec<_> = graph.successors(&issue.id).collect();
            for (i, child) in children.iter().enumerate() {
                let last = i + 1 == children.len();
                let (branch, indent) = if last {
                    ("└── ", "    ")
                } else {
                    ("├── ", "│   ")
                };
                writeln!(out, "{branch}{}", Self::describe(graph, child))?;

                // event -> referenced issue; issues are never expanded here
                if child.is_issue() {
                    continue;
                }
                let refs: Vec<_> = graph.successors(child).collect();
                for (j, target) in refs.iter().enumerate() {
                    let sub = if j + 1 == refs.len() { "└── " } else { "├── " };
                    writeln!(out, "{indent}{sub}{}", Self::describe(graph, target))?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
