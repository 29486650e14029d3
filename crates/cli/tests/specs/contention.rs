//! Contention specs
//!
//! Verify that a fresh lease held elsewhere turns other clients away.

use crate::prelude::*;

#[test]
fn busy_database_exits_with_status_two() {
    let project = Project::empty();
    project.lease_held_by(BOB, FAR_FUTURE);

    project
        .fz()
        .args(["exec", "CREATE TABLE t (x)"])
        .exits_with(2)
        .stderr_has("error: database busy")
        .stderr_has("Lease is held by 'bob@host2'")
        .stderr_has("Gave up after 2 attempts");
}

#[test]
fn busy_database_is_left_untouched() {
    let project = Project::empty();
    project.lease_held_by(BOB, FAR_FUTURE);
    let before = project.lease_contents();

    project.fz().args(["query", "SELECT 1"]).exits_with(2);

    assert_eq!(project.lease_contents(), before);
    assert!(!project.database().exists());
}

#[test]
fn identity_flag_overrides_environment() {
    let project = Project::empty();
    project.lease_held_by(BOB, FAR_FUTURE);

    // Same identity as the holder, so the lease is renewed rather than contended
    project
        .fz()
        .args(["--identity", BOB, "query", "SELECT 1"])
        .passes()
        .stdout_has("1");
}
