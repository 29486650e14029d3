// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::thread;

#[test]
fn new_token_is_not_cancelled() {
    let token = CancelToken::new();
    assert!(!token.is_cancelled());
}

#[test]
fn cancel_is_visible_through_clones() {
    let token = CancelToken::new();
    let other = token.clone();
    other.cancel();
    assert!(token.is_cancelled());
}

#[test]
fn wait_times_out_without_cancel() {
    let token = CancelToken::new();
    assert!(!token.wait_timeout(Duration::from_millis(10)));
}

#[test]
fn wait_returns_immediately_when_already_cancelled() {
    let token = CancelToken::new();
    token.cancel();

    let start = Instant::now();
    assert!(token.wait_timeout(Duration::from_secs(30)));
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[test]
fn cancel_from_another_thread_wakes_waiter() {
    let token = CancelToken::new();
    let remote = token.clone();

    let handle = thread::spawn(move || {
        thread::sleep(Duration::from_millis(20));
        remote.cancel();
    });

    let start = Instant::now();
    assert!(token.wait_timeout(Duration::from_secs(30)));
    assert!(start.elapsed() < Duration::from_secs(10));
    handle.join().unwrap();
}

#[test]
fn unrepresentable_timeout_waits_for_cancel() {
    let token = CancelToken::new();
    let remote = token.clone();

    let handle = thread::spawn(move || {
        thread::sleep(Duration::from_millis(20));
        remote.cancel();
    });

    assert!(token.wait_timeout(Duration::MAX));
    handle.join().unwrap();
}

#[test]
fn unrepresentable_timeout_with_cancelled_token_returns_at_once() {
    let token = CancelToken::new();
    token.cancel();
    assert!(token.wait_timeout(Duration::from_secs(u64::MAX)));
}
