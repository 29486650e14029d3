//! Hold specs
//!
//! Verify a hold takes the lease and gives it back.

use crate::prelude::*;

#[test]
fn hold_acquires_and_releases() {
    let project = Project::empty();

    project
        .fz()
        .args(["hold", "--seconds", "0"])
        .passes()
        .stdout_has("Holding lease as alice@host1")
        .stdout_has("Released lease");

    assert_eq!(project.lease_contents().trim(), "null");
}

#[test]
fn hold_waits_out_a_busy_lease() {
    let project = Project::empty();
    project.lease_held_by(BOB, FAR_FUTURE);

    project
        .fz()
        .args(["hold", "--seconds", "0"])
        .exits_with(2)
        .stderr_has("database busy");
}
