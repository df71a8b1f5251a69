// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue and event records as loaded from an issue-tracker export.
//!
//! Records are read-only inputs to the graph build. Every field a real export
//! may omit carries a documented default so a sparse record still loads:
//!
//! | field          | default      |
//! |----------------|--------------|
//! | `title`        | `"No Title"` |
//! | `state`        | open         |
//! | `events`       | empty        |
//! | `event_date`   | `"unknown"`  |
//! | `author`       | `"unknown"`  |
//!
//! An explicit JSON `null` is treated the same as an absent key, except for
//! `state`: a present state is compared to `"open"`, so `null` is closed.
//!
//! A field holding the wrong JSON type degrades the same way a missing one
//! does. Scalars in text fields are kept as their JSON text, a non-integer
//! `number` drops the issue from the build, and array elements that do not
//! fit are skipped. Only a record that is not an object fails to load.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

/// Placeholder used for event dates and authors the source did not provide.
pub const UNKNOWN: &str = "unknown";

/// Title used when an issue has none.
pub const NO_TITLE: &str = "No Title";

/// Lifecycle state of an issue.
///
/// Only the literal `"open"` is open; any other state text is closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueState {
    #[default]
    Open,
    Closed,
}

impl IssueState {
    /// Returns the string representation used in exports and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, IssueState::Open)
    }
}

impl From<&str> for IssueState {
    fn from(s: &str) -> Self {
        if s == "open" {
            IssueState::Open
        } else {
            IssueState::Closed
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for IssueState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // absent keys never reach here; they take the Open default
        match Value::deserialize(deserializer)? {
            Value::String(raw) => Ok(IssueState::from(raw.as_str())),
            _ => Ok(IssueState::Closed),
        }
    }
}

/// A tracked issue together with its lifecycle events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueRecord {
    /// Issue number, unique within one export. Records without one cannot be
    /// placed in the graph.
    #[serde(default, deserialize_with = "number_or_none")]
    pub number: Option<i64>,
    #[serde(default = "default_title", deserialize_with = "title_or_default")]
    pub title: String,
    #[serde(default)]
    pub state: IssueState,
    /// Raw creation timestamp, parsed lazily by the date window.
    #[serde(default, deserialize_with = "text_or_none")]
    pub created_date: Option<String>,
    /// Events in the order the source recorded them.
    #[serde(default, deserialize_with = "vec_or_default")]
    pub events: Vec<EventRecord>,
    #[serde(default, deserialize_with = "text_or_none", skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<String>,
    #[serde(default, deserialize_with = "text_or_none", skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(default, deserialize_with = "text_or_none", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "vec_or_default", skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

impl IssueRecord {
    /// Creates an open issue with no events.
    pub fn new(number: i64, title: impl Into<String>) -> Self {
        IssueRecord {
            number: Some(number),
            title: title.into(),
            state: IssueState::Open,
            created_date: None,
            events: Vec::new(),
            updated_date: None,
            creator: None,
            url: None,
            labels: Vec::new(),
        }
    }

    /// Sets the state (builder pattern).
    pub fn with_state(mut self, state: IssueState) -> Self {
        self.state = state;
        self
    }

    /// Sets the raw creation date (builder pattern).
    pub fn created(mut self, date: impl Into<String>) -> Self {
        self.created_date = Some(date.into());
        self
    }

    /// Appends an event (builder pattern).
    pub fn with_event(mut self, event: EventRecord) -> Self {
        self.events.push(event);
        self
    }
}

/// A single occurrence in an issue's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Raw event kind, e.g. `labeled` or `cross-referenced`.
    #[serde(default, deserialize_with = "text_or_none")]
    pub event_type: Option<String>,
    /// Raw event timestamp. Kept verbatim since it is part of the event's
    /// node identity.
    #[serde(default = "default_unknown", deserialize_with = "unknown_or_default")]
    pub event_date: String,
    #[serde(default = "default_unknown", deserialize_with = "unknown_or_default")]
    pub author: String,
    #[serde(default, deserialize_with = "text_or_none", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Free text. Cross-reference events carry the referenced issue here as
    /// a trailing `#<number>`.
    #[serde(default, deserialize_with = "text_or_none", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl EventRecord {
    /// Creates an event of the given type with unknown date and author.
    pub fn new(event_type: impl Into<String>) -> Self {
        EventRecord {
            event_type: Some(event_type.into()),
            event_date: default_unknown(),
            author: default_unknown(),
            label: None,
            comment: None,
        }
    }

    /// Sets the raw event date (builder pattern).
    pub fn on(mut self, date: impl Into<String>) -> Self {
        self.event_date = date.into();
        self
    }

    /// Sets the author (builder pattern).
    pub fn by(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Sets the comment text (builder pattern).
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Sets the label (builder pattern).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

fn default_title() -> String {
    NO_TITLE.to_string()
}

fn default_unknown() -> String {
    UNKNOWN.to_string()
}

/// JSON text of a scalar. Objects, arrays and `null` have none.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => None,
        other => {
            debug!("ignoring non-scalar value {other}");
            None
        }
    }
}

fn text_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

fn title_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(text_or_none(deserializer)?.unwrap_or_else(default_title))
}

fn unknown_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(text_or_none(deserializer)?.unwrap_or_else(default_unknown))
}

fn number_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(n) if n.is_i64() => Ok(n.as_i64()),
        other => {
            debug!("ignoring issue number {other}: not an integer");
            Ok(None)
        }
    }
}

fn vec_or_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            debug!("ignoring {other}: expected an array");
            return Ok(Vec::new());
        }
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                debug!("skipping array element: {e}");
                None
            }
        })
        .collect())
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
