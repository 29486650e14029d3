// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::sync::atomic::{AtomicU64, Ordering};

#[test]
fn records_open_and_close() {
    let provider = FakeConnectionProvider::new();

    let first = provider.open().unwrap();
    let second = provider.open().unwrap();
    assert_eq!(provider.open_connections(), 2);

    provider.close(first).unwrap();
    provider.close(second).unwrap();

    assert_eq!(
        provider.calls(),
        vec![
            DatabaseCall::Open { id: 1 },
            DatabaseCall::Open { id: 2 },
            DatabaseCall::Close { id: 1 },
            DatabaseCall::Close { id: 2 },
        ]
    );
    assert_eq!(provider.open_connections(), 0);
}

#[test]
fn failing_open_is_recorded() {
    let provider = FakeConnectionProvider::new();
    provider.set_fail_open(Some("disk gone"));

    let err = provider.open().unwrap_err();
    assert!(err.to_string().contains("disk gone"));
    assert_eq!(provider.calls(), vec![DatabaseCall::OpenFailed]);
    assert_eq!(provider.open_connections(), 0);
}

#[test]
fn failing_close_still_counts_as_closed() {
    let provider = FakeConnectionProvider::new();
    provider.set_fail_close(Some("flush failed"));

    let connection = provider.open().unwrap();
    assert!(provider.close(connection).is_err());
    assert_eq!(provider.open_connections(), 0);
}

#[test]
fn close_hook_sees_connection() {
    let seen = Arc::new(AtomicU64::new(0));
    let seen_by_hook = Arc::clone(&seen);
    let provider = FakeConnectionProvider::new()
        .with_close_hook(move |conn| seen_by_hook.store(conn.id, Ordering::SeqCst));

    let connection = provider.open().unwrap();
    provider.close(connection).unwrap();

    assert_eq!(seen.load(Ordering::SeqCst), 1);
}
