// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cooperative cancellation for blocking waits

use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Returned when a wait was interrupted by its cancel token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation cancelled")]
pub struct Cancelled;

/// Shared flag that wakes any thread waiting on it once set
///
/// Clones observe the same flag. Cancellation is permanent.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the token and wake all waiters
    pub fn cancel(&self) {
        let (flag, wake) = &*self.inner;
        *flag.lock().unwrap_or_else(|e| e.into_inner()) = true;
        wake.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        *self.inner.0.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Wait up to `timeout`. Returns true if the token fired.
    ///
    /// A timeout too large to represent as an instant waits for the token alone.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let (flag, wake) = &*self.inner;
        let deadline = Instant::now().checked_add(timeout);
        let mut cancelled = flag.lock().unwrap_or_else(|e| e.into_inner());

        // Loop to absorb spurious wakeups
        while !*cancelled {
            cancelled = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        break;
                    }
                    wake.wait_timeout(cancelled, deadline - now)
                        .unwrap_or_else(|e| e.into_inner())
                        .0
                }
                None => wake.wait(cancelled).unwrap_or_else(|e| e.into_inner()),
            };
        }

        *cancelled
    }
}

#[cfg(test)]
#[path = "cancel_tests.rs"]
mod tests;
