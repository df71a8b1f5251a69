// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Node identities for the activity graph.
//!
//! Issues are keyed by their number. Event occurrences are keyed by
//! `{issue}_{type}_{raw date}`, so two events of the same type on the same
//! issue with the same literal date (including two `"unknown"` dates) share
//! one node. Downstream consumers rely on that dedup-by-date behavior.

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;

use std::fmt;

use serde::Serialize;

/// Separator between the parts of an event key.
const EVENT_KEY_DELIMITER: char = '_';

/// A graph node key.
///
/// The two variants never compare equal, so issue `1` and an event key that
/// happens to read `"1"` stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum NodeId {
    Issue(i64),
    Event(String),
}

impl NodeId {
    pub fn issue(number: i64) -> Self {
        NodeId::Issue(number)
    }

    /// Derives the key of one event occurrence on an issue.
    pub fn event(issue_number: i64, event_type: &str, raw_date: &str) -> Self {
        NodeId::Event(format!(
            "{issue_number}{EVENT_KEY_DELIMITER}{event_type}{EVENT_KEY_DELIMITER}{raw_date}"
        ))
    }

    /// Returns the issue number if this is an issue key.
    pub fn as_issue(&self) -> Option<i64> {
        match self {
            NodeId::Issue(n) => Some(*n),
            NodeId::Event(_) => None,
        }
    }

    pub fn is_issue(&self) -> bool {
        matches!(self, NodeId::Issue(_))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Issue(n) => write!(f, "{n}"),
            NodeId::Event(key) => write!(f, "{key}"),
        }
    }
}

impl From<i64> for NodeId {
    fn from(number: i64) -> Self {
        NodeId::Issue(number)
    }
}

/// Extracts the issue number a cross-reference comment points at.
///
/// The reference is whatever follows the last `#`. It must be non-empty and
/// all ASCII digits. Comments with no `#`, trailing text after the number, or
/// numbers too large for an issue key yield `None`.
pub fn referenced_issue(comment: &str) -> Option<i64> {
    let (_, tail) = comment.rsplit_once('#')?;
    if tail.is_empty() || !tail.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    tail.parse().ok()
}
