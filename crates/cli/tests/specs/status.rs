//! Lease status specs
//!
//! Verify how the current holder is reported.

use crate::prelude::*;

#[test]
fn status_reports_free_lease() {
    let project = Project::empty();

    project
        .fz()
        .args(["status"])
        .passes()
        .stdout_has("Lease is free")
        .stdout_has("stock.db-lease.json");
}

#[test]
fn status_names_other_holder() {
    let project = Project::empty();
    project.lease_held_by(BOB, FAR_FUTURE);

    project
        .fz()
        .args(["status"])
        .passes()
        .stdout_has("Lease held by bob@host2")
        .stdout_has("Expires: 2099-01-01")
        .stdout_lacks("(you)");
}

#[test]
fn status_marks_own_lease() {
    let project = Project::empty();
    project.lease_held_by(ALICE, FAR_FUTURE);

    project
        .fz()
        .args(["status"])
        .passes()
        .stdout_has("Lease held by alice@host1 (you)");
}

#[test]
fn status_flags_stale_lease() {
    let project = Project::empty();
    project.lease_held_by(BOB, LONG_AGO);

    project.fz().args(["status"]).passes().stdout_has("Expired:");
}

#[test]
fn status_as_json() {
    let project = Project::empty();
    project.lease_held_by(BOB, FAR_FUTURE);

    let out = project
        .fz()
        .args(["status", "--format", "json"])
        .passes()
        .stdout();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["holder"], "bob@host2");
    assert_eq!(json["expired"], false);
    assert_eq!(json["mine"], false);
}

#[test]
fn status_does_not_create_files() {
    let project = Project::empty();

    project.fz().args(["status"]).passes();

    assert!(!project.lease_file().exists());
    assert!(!project.database().exists());
}

#[test]
fn identity_flag_wins_over_environment() {
    let project = Project::empty();
    project.lease_held_by(BOB, FAR_FUTURE);

    project
        .fz()
        .args(["--identity", BOB, "status"])
        .passes()
        .stdout_has("Lease held by bob@host2 (you)");
}
