//! SQL command specs
//!
//! Verify exec and query run inside the lease and leave it free afterwards.

use crate::prelude::*;

#[test]
fn exec_then_query_round_trips() {
    let project = Project::empty();

    project
        .fz()
        .args([
            "exec",
            "CREATE TABLE users (name TEXT); INSERT INTO users (name) VALUES ('alice'), ('bob');",
        ])
        .passes()
        .stdout_has("2 row(s) changed");

    project
        .fz()
        .args(["query", "SELECT name, length(name) FROM users ORDER BY name"])
        .passes()
        .stdout_has("alice\t5\nbob\t3\n");
}

#[test]
fn lease_is_cleared_after_exec() {
    let project = Project::empty();

    project.fz().args(["exec", "CREATE TABLE t (x)"]).passes();

    assert_eq!(project.lease_contents().trim(), "null");
}

#[test]
fn query_as_json() {
    let project = Project::empty();
    project
        .fz()
        .args(["exec", "CREATE TABLE t (x, y); INSERT INTO t VALUES (1, NULL);"])
        .passes();

    let out = project
        .fz()
        .args(["query", "SELECT x, y FROM t", "--format", "json"])
        .passes()
        .stdout();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json, serde_json::json!([[1, null]]));
}

#[test]
fn bad_sql_fails_and_releases() {
    let project = Project::empty();

    project
        .fz()
        .args(["exec", "CREATE TABLEE oops"])
        .fails()
        .stderr_has("error:");

    assert_eq!(project.lease_contents().trim(), "null");
}

#[test]
fn stale_lease_is_reclaimed() {
    let project = Project::empty();
    project.lease_held_by(BOB, LONG_AGO);

    project.fz().args(["exec", "CREATE TABLE t (x)"]).passes();

    assert_eq!(project.lease_contents().trim(), "null");
}
