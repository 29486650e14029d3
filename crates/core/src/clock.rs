// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable time handling
//!
//! Lease expiry is compared across machines, so the clock speaks wall-clock
//! UTC rather than monotonic instants. The clock also owns the pause between
//! acquisition polls so that tests can run retry loops in virtual time.

use crate::cancel::{CancelToken, Cancelled};
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A clock that provides the current time and can pause the caller
pub trait Clock: Clone + Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Block for `duration`, returning early with `Cancelled` if the token fires.
    fn pause(&self, duration: Duration, cancel: &CancelToken) -> Result<(), Cancelled>;
}

/// Real system clock
#[derive(Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn pause(&self, duration: Duration, cancel: &CancelToken) -> Result<(), Cancelled> {
        if cancel.wait_timeout(duration) {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Fake clock for testing with controllable time
///
/// `pause` advances the clock instead of sleeping.
#[derive(Clone, Debug)]
pub struct FakeClock {
    current: Arc<Mutex<DateTime<Utc>>>,
    pauses: Arc<Mutex<Vec<Duration>>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Create a clock frozen at the given instant
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            current: Arc::new(Mutex::new(instant)),
            pauses: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Advance the clock by the given duration
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = shift(*current, duration);
    }

    /// Set the clock to a specific instant
    pub fn set(&self, instant: DateTime<Utc>) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = instant;
    }

    /// Every pause requested so far, in order
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn pause(&self, duration: Duration, cancel: &CancelToken) -> Result<(), Cancelled> {
        if cancel.is_cancelled() {
            return Err(Cancelled);
        }
        self.pauses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(duration);
        self.advance(duration);
        Ok(())
    }
}

/// Add a std duration to a UTC timestamp, saturating at the far future
pub fn shift(instant: DateTime<Utc>, duration: Duration) -> DateTime<Utc> {
    chrono::Duration::from_std(duration)
        .ok()
        .and_then(|d| instant.checked_add_signed(d))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
