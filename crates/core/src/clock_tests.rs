// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::TimeZone;

#[test]
fn system_clock_returns_increasing_time() {
    let clock = SystemClock;
    let t1 = clock.now();
    std::thread::sleep(Duration::from_millis(2));
    let t2 = clock.now();
    assert!(t2 > t1);
}

#[test]
fn system_clock_pause_returns_early_when_cancelled() {
    let clock = SystemClock;
    let cancel = CancelToken::new();
    cancel.cancel();

    let start = std::time::Instant::now();
    let result = clock.pause(Duration::from_secs(30), &cancel);

    assert_eq!(result, Err(Cancelled));
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[test]
fn fake_clock_can_be_advanced() {
    let clock = FakeClock::new();
    let t1 = clock.now();
    clock.advance(Duration::from_secs(60));
    let t2 = clock.now();
    assert_eq!((t2 - t1).num_seconds(), 60);
}

#[test]
fn fake_clock_is_cloneable_and_shared() {
    let clock1 = FakeClock::new();
    let clock2 = clock1.clone();
    let t1 = clock1.now();
    clock2.advance(Duration::from_secs(30));
    let t2 = clock1.now();
    assert_eq!((t2 - t1).num_seconds(), 30);
}

#[test]
fn fake_clock_pause_advances_virtual_time() {
    let start = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
    let clock = FakeClock::at(start);

    clock.pause(Duration::from_secs(2), &CancelToken::new()).unwrap();
    clock.pause(Duration::from_secs(3), &CancelToken::new()).unwrap();

    assert_eq!((clock.now() - start).num_seconds(), 5);
    assert_eq!(
        clock.pauses(),
        vec![Duration::from_secs(2), Duration::from_secs(3)]
    );
}

#[test]
fn fake_clock_pause_refuses_when_cancelled() {
    let start = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
    let clock = FakeClock::at(start);
    let cancel = CancelToken::new();
    cancel.cancel();

    assert_eq!(clock.pause(Duration::from_secs(1), &cancel), Err(Cancelled));
    assert_eq!(clock.now(), start);
    assert!(clock.pauses().is_empty());
}

#[test]
fn shift_saturates_instead_of_overflowing() {
    let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(shift(start, Duration::MAX), DateTime::<Utc>::MAX_UTC);
}
