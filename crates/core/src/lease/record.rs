// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted lease record

use crate::clock::shift;
use crate::identity::Identity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Who holds the lease and until when
///
/// The absent state (nobody holds the lease) is `Option::<LeaseRecord>::None`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseRecord {
    pub holder: Identity,
    pub expiry: DateTime<Utc>,
}

impl LeaseRecord {
    /// Issue a fresh record valid for `ttl` from `now`
    pub fn issue(holder: Identity, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            holder,
            expiry: shift(now, ttl),
        }
    }

    /// A record is expired once `now` reaches its expiry (inclusive)
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expiry
    }

    pub fn is_held_by(&self, identity: &Identity) -> bool {
        &self.holder == identity
    }

    /// Time left before expiry, or `None` if already expired
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        if self.is_expired_at(now) {
            return None;
        }
        (self.expiry - now).to_std().ok()
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
