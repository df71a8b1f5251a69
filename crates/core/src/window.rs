// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Date window filtering on a single UTC timeline.
//!
//! Exports mix timezone-aware timestamps (`2024-01-02T00:00:00Z`,
//! `2024-01-02T09:00:00+05:00`) with naive ones (`2024-01-02T00:00:00`,
//! `2024-01-02`). Naive values are read as UTC. Window bounds go through the
//! same parser once, when the window is built, and never change afterwards.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{Error, Result};

const AWARE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses a timestamp in any of the accepted ISO-8601 shapes into UTC.
///
/// Returns `None` for anything unparseable, including the `"unknown"`
/// placeholder and empty strings.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in AWARE_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// An optional, inclusive `[start, end]` range on the UTC timeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateWindow {
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
}

impl DateWindow {
    /// A window with neither bound set. Every parseable timestamp passes.
    pub fn unbounded() -> Self {
        DateWindow::default()
    }

    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        DateWindow { start, end }
    }

    /// Builds a window from user-supplied bound text.
    ///
    /// Unlike record timestamps, a bound that does not parse is an error.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self> {
        let bound = |raw: Option<&str>| -> Result<Option<DateTime<Utc>>> {
            raw.map(|s| parse_timestamp(s).ok_or_else(|| Error::InvalidDate(s.to_string())))
                .transpose()
        };
        Ok(DateWindow {
            start: bound(start)?,
            end: bound(end)?,
        })
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Returns true if `ts` lies within both bounds (inclusive).
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.start.map_or(true, |start| ts >= start) && self.end.map_or(true, |end| ts <= end)
    }

    /// Parses a raw record timestamp and tests it against the window.
    ///
    /// Absent or unparseable timestamps never pass.
    pub fn admits(&self, raw: Option<&str>) -> bool {
        raw.and_then(parse_timestamp)
            .is_some_and(|ts| self.contains(ts))
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unbounded() {
            return write!(f, "unbounded");
        }
        let show = |b: Option<DateTime<Utc>>| b.map_or("*".to_string(), |d| d.to_rfc3339());
        write!(f, "[{}, {}]", show(self.start), show(self.end))
    }
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
