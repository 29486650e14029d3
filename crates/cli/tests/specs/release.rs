//! Release specs
//!
//! Verify only the holder can clear the lease.

use crate::prelude::*;

#[test]
fn release_clears_own_lease() {
    let project = Project::empty();
    project.lease_held_by(ALICE, FAR_FUTURE);

    project
        .fz()
        .args(["release"])
        .passes()
        .stdout_has("Released lease for alice@host1");

    assert_eq!(project.lease_contents().trim(), "null");
}

#[test]
fn release_without_lease_is_a_no_op() {
    let project = Project::empty();

    project.fz().args(["release"]).passes().stdout_has("No lease held");
}

#[test]
fn release_leaves_other_holder_alone() {
    let project = Project::empty();
    project.lease_held_by(BOB, FAR_FUTURE);
    let before = project.lease_contents();

    project
        .fz()
        .args(["release"])
        .passes()
        .stdout_has("held by bob@host2");

    assert_eq!(project.lease_contents(), before);
}
