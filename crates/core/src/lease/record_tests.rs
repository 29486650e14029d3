// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::TimeZone;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
}

#[test]
fn issue_sets_expiry_to_now_plus_ttl() {
    let record = LeaseRecord::issue(Identity::new("alice@host1"), t0(), Duration::from_secs(30));
    assert_eq!(record.holder, Identity::new("alice@host1"));
    assert_eq!((record.expiry - t0()).num_seconds(), 30);
}

#[test]
fn expiry_boundary_is_inclusive() {
    let record = LeaseRecord::issue(Identity::new("alice@host1"), t0(), Duration::from_secs(30));
    let at_expiry = record.expiry;

    assert!(!record.is_expired_at(at_expiry - chrono::Duration::milliseconds(1)));
    assert!(record.is_expired_at(at_expiry));
    assert!(record.is_expired_at(at_expiry + chrono::Duration::seconds(1)));
}

#[test]
fn remaining_counts_down_to_none() {
    let record = LeaseRecord::issue(Identity::new("alice@host1"), t0(), Duration::from_secs(30));

    assert_eq!(record.remaining(t0()), Some(Duration::from_secs(30)));
    assert_eq!(
        record.remaining(t0() + chrono::Duration::seconds(20)),
        Some(Duration::from_secs(10))
    );
    assert_eq!(record.remaining(record.expiry), None);
}

#[test]
fn json_form_is_holder_and_rfc3339_expiry() {
    let record = LeaseRecord::issue(Identity::new("alice@host1"), t0(), Duration::from_secs(30));
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["holder"], "alice@host1");
    assert_eq!(json["expiry"], "2026-03-01T09:00:30Z");

    let back: LeaseRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, record);
}
