// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Classification of raw event types into the kinds the activity graph shows.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Event kinds that participate in the activity graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    /// A label was applied.
    Labeled,
    /// A comment was posted.
    Commented,
    /// Another issue was mentioned; the comment names it as `#<number>`.
    CrossReferenced,
    /// The issue was closed.
    Closed,
    /// The issue was opened.
    Opened,
}

impl EventKind {
    /// Every recognized kind, in display order.
    pub const ALL: [EventKind; 5] = [
        EventKind::Labeled,
        EventKind::Commented,
        EventKind::CrossReferenced,
        EventKind::Closed,
        EventKind::Opened,
    ];

    /// Returns the string representation used by issue-tracker exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Labeled => "labeled",
            EventKind::Commented => "commented",
            EventKind::CrossReferenced => "cross-referenced",
            EventKind::Closed => "closed",
            EventKind::Opened => "opened",
        }
    }

    /// Maps a raw event type to a graph kind.
    ///
    /// Matching is exact. Anything else (`reopened`, `assigned`, `Labeled`,
    /// ...) returns `None` and the event is left out of the graph.
    pub fn classify(raw: &str) -> Option<EventKind> {
        EventKind::ALL.into_iter().find(|kind| kind.as_str() == raw)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
