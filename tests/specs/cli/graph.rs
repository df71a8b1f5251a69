// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `ig graph` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use yare::parameterized;

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn graph_two_issues_unbounded() {
    let ws = Workspace::new();
    ws.file("issues.json", TWO_ISSUES);

    let doc = ws.json(&["graph", "issues.json", "--issue-limit", "10", "-f", "json"]);

    assert_eq!(doc["nodes"].as_array().unwrap().len(), 4);
    assert_eq!(
        doc["edges"],
        serde_json::json!([
            {"from": 1, "to": "1_closed_2024-01-02T00:00:00Z"},
            {"from": 2, "to": "2_cross-referenced_2024-02-02T00:00:00Z"},
            {"from": "2_cross-referenced_2024-02-02T00:00:00Z", "to": 1}
        ])
    );
    assert_eq!(doc["dangling"], serde_json::json!([]));
}

#[test]
fn graph_end_date_drops_later_issue() {
    let ws = Workspace::new();
    ws.file("issues.json", TWO_ISSUES);

    let doc = ws.json(&[
        "graph",
        "issues.json",
        "--end-date",
        "2024-01-31",
        "-f",
        "json",
    ]);

    assert_eq!(
        node_ids(&doc),
        vec!["1", "\"1_closed_2024-01-02T00:00:00Z\""]
    );
    assert_eq!(doc["edges"].as_array().unwrap().len(), 1);
}

#[test]
fn graph_ignores_unrecognized_event() {
    let ws = Workspace::new();
    ws.file(
        "issues.json",
        r#"[{"number": 7, "title": "Bounce", "created_date": "2024-01-01",
             "events": [{"event_type": "reopened", "event_date": "2024-01-02"}]}]"#,
    );

    let doc = ws.json(&["graph", "issues.json", "-f", "json"]);
    assert_eq!(node_ids(&doc), vec!["7"]);
    assert_eq!(doc["edges"], serde_json::json!([]));
}

#[test]
fn graph_limit_one_of_five() {
    let ws = Workspace::new();
    let issues: Vec<_> = (1..=5)
        .map(|n| serde_json::json!({"number": n, "title": format!("Issue {n}"), "created_date": "2024-01-01"}))
        .collect();
    ws.file("issues.json", &serde_json::to_string(&issues).unwrap());

    let doc = ws.json(&["graph", "issues.json", "-n", "1", "-f", "json"]);
    assert_eq!(node_ids(&doc), vec!["1"]);
}

// =============================================================================
// Output formats
// =============================================================================

#[test]
fn graph_defaults_to_dot() {
    let ws = Workspace::new();
    ws.file("issues.json", TWO_ISSUES);

    ws.ig()
        .args(["graph", "issues.json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("digraph activity {"))
        .stdout(predicate::str::contains("\"1\" [label=\"First\", fillcolor=green];"))
        .stdout(predicate::str::contains("\"2\" [label=\"Second\", fillcolor=red];"))
        .stdout(predicate::str::contains(
            "\"2_cross-referenced_2024-02-02T00:00:00Z\" -> \"1\";",
        ));
}

#[test]
fn graph_tree_output() {
    let ws = Workspace::new();
    ws.file("issues.json", TWO_ISSUES);

    let output = ws
        .ig()
        .args(["graph", "issues.json", "--format", "tree"])
        .output()
        .unwrap();
    assert!(output.status.success());
    similar_asserts::assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "\
#1 First [open]
└── closed by alice on 2024-01-02T00:00:00Z
#2 Second [closed]
└── cross-referenced by bob on 2024-02-02T00:00:00Z
    └── #1 First [open]
"
    );
}

#[test]
fn graph_writes_output_file() {
    let ws = Workspace::new();
    ws.file("issues.json", TWO_ISSUES);

    ws.ig()
        .args(["graph", "issues.json", "-o", "graph.dot"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(ws.path().join("graph.dot")).unwrap();
    assert!(written.starts_with("digraph activity {"));
}

#[test]
fn graph_dangling_reference_is_marked() {
    let ws = Workspace::new();
    ws.file("issues.json", TWO_ISSUES);

    // only issue #2 is inside the window, so #1 is referenced but absent
    let doc = ws.json(&[
        "graph",
        "issues.json",
        "--start-date",
        "2024-02-01",
        "-f",
        "json",
    ]);
    assert_eq!(doc["dangling"], serde_json::json!([1]));

    ws.ig()
        .args(["graph", "issues.json", "--start-date", "2024-02-01", "-f", "tree"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 (not in graph)"));
}

#[test]
fn graph_is_deterministic() {
    let ws = Workspace::new();
    ws.file("issues.json", TWO_ISSUES);

    let first = ws.ig().args(["graph", "issues.json"]).output().unwrap();
    let second = ws.ig().args(["graph", "issues.json"]).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

// =============================================================================
// Input shapes and configuration
// =============================================================================

#[test]
fn graph_reads_json_lines() {
    let ws = Workspace::new();
    ws.file(
        "issues.jsonl",
        "{\"number\": 1, \"created_date\": \"2024-01-01\"}\n\n{\"number\": 2, \"created_date\": \"2024-01-02\"}\n",
    );

    let doc = ws.json(&["graph", "issues.jsonl", "-f", "json"]);
    assert_eq!(node_ids(&doc), vec!["1", "2"]);
}

#[test]
fn graph_uses_config_file_defaults() {
    let ws = Workspace::new();
    ws.file("issues.json", TWO_ISSUES);
    ws.file("ig.toml", "end_date = \"2024-01-31\"\nformat = \"json\"\n");

    let doc = ws.json(&["graph", "issues.json", "--config", "ig.toml"]);
    assert_eq!(doc["nodes"].as_array().unwrap().len(), 2);
}

#[test]
fn graph_reads_default_config_location() {
    let ws = Workspace::new();
    ws.file("issues.json", TWO_ISSUES);
    std::fs::create_dir_all(ws.path().join(".config/issuegraph")).unwrap();
    ws.file(".config/issuegraph/config.toml", "format = \"tree\"\n");

    ws.ig()
        .args(["graph", "issues.json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("#1 First [open]"));
}

#[test]
fn graph_flags_beat_config_file() {
    let ws = Workspace::new();
    ws.file("issues.json", TWO_ISSUES);
    ws.file("ig.toml", "issue_limit = 1\nformat = \"tree\"\n");

    let doc = ws.json(&[
        "graph",
        "issues.json",
        "--config",
        "ig.toml",
        "-n",
        "10",
        "-f",
        "json",
    ]);
    assert_eq!(doc["nodes"].as_array().unwrap().len(), 4);
}

#[test]
fn graph_verbose_logs_to_stderr_only() {
    let ws = Workspace::new();
    ws.file("issues.json", TWO_ISSUES);

    let output = ws
        .ig()
        .args(["graph", "issues.json", "-f", "json", "-v"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("graph built"));
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["nodes"].as_array().unwrap().len(), 4);
}

#[test]
fn graph_tolerates_mistyped_records() {
    let ws = Workspace::new();
    ws.file(
        "issues.json",
        r#"[
          {"number": 1, "title": "good", "created_date": "2024-01-01"},
          {"number": 2, "title": 42, "state": null, "created_date": "2024-01-02",
           "events": [{"event_type": "labeled", "event_date": "2024-01-03", "label": {"name": "bug"}}]},
          {"number": "3", "title": "text number", "created_date": "2024-01-04"}
        ]"#,
    );

    ws.ig()
        .args(["graph", "issues.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"1\" [label=\"good\", fillcolor=green];"))
        .stdout(predicate::str::contains("\"2\" [label=\"42\", fillcolor=red];"))
        .stdout(predicate::str::contains("text number").not());
}

#[test]
fn graph_window_reads_compact_offsets() {
    let ws = Workspace::new();
    ws.file(
        "issues.json",
        r#"[{"number": 1, "title": "East", "created_date": "2024-01-02T09:00:00+0500"}]"#,
    );

    let doc = ws.json(&[
        "graph",
        "issues.json",
        "--start-date",
        "2024-01-02T04:00:00Z",
        "--end-date",
        "2024-01-02T04:00:00Z",
        "-f",
        "json",
    ]);
    assert_eq!(node_ids(&doc), vec!["1"]);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn graph_missing_file_fails() {
    let ws = Workspace::new();

    ws.ig()
        .args(["graph", "nope.json"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error: cannot read issue records"));
}

#[parameterized(
    truncated = { "[{\"number\": 1}" },
    empty = { "" },
    csv = { "number,title\n1,a\n" },
)]
fn graph_malformed_file_fails(content: &str) {
    let ws = Workspace::new();
    ws.file("issues.json", content);

    ws.ig()
        .args(["graph", "issues.json"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("malformed issue records"));
}

#[test]
fn graph_invalid_date_fails() {
    let ws = Workspace::new();
    ws.file("issues.json", TWO_ISSUES);

    ws.ig()
        .args(["graph", "issues.json", "--start-date", "31/01/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date: '31/01/2024'"));
}

#[test]
fn graph_unknown_format_fails() {
    let ws = Workspace::new();
    ws.file("issues.json", TWO_ISSUES);

    ws.ig()
        .args(["graph", "issues.json", "--format", "png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("png"));
}

#[test]
fn graph_bad_config_fails() {
    let ws = Workspace::new();
    ws.file("issues.json", TWO_ISSUES);
    ws.file("ig.toml", "colour = \"blue\"\n");

    ws.ig()
        .args(["graph", "issues.json", "--config", "ig.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config error"));
}
