// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lease state machine
//!
//! Classifies the stored record relative to one caller and decides what an
//! acquire or release should write. The caller performs the actual write.

use super::event::LeaseEvent;
use super::record::LeaseRecord;
use crate::identity::Identity;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// The stored lease as seen by one caller at one instant
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeaseState {
    /// Nobody holds the lease
    Free,
    /// Another identity holds an unexpired lease
    HeldFresh {
        holder: Identity,
        expiry: DateTime<Utc>,
    },
    /// Another identity's lease has expired
    HeldStale {
        holder: Identity,
        expiry: DateTime<Utc>,
    },
    /// The caller holds the lease, expired or not
    HeldBySelf { expiry: DateTime<Utc> },
}

/// What a transition wants done to the store
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreWrite {
    Untouched,
    Set(LeaseRecord),
    Clear,
}

/// Result of a pure lease decision
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub write: StoreWrite,
    pub events: Vec<LeaseEvent>,
}

impl Transition {
    fn untouched(events: Vec<LeaseEvent>) -> Self {
        Self {
            write: StoreWrite::Untouched,
            events,
        }
    }
}

impl LeaseState {
    pub fn classify(record: Option<&LeaseRecord>, caller: &Identity, now: DateTime<Utc>) -> Self {
        match record {
            None => LeaseState::Free,
            Some(record) if record.is_held_by(caller) => LeaseState::HeldBySelf {
                expiry: record.expiry,
            },
            Some(record) if record.is_expired_at(now) => LeaseState::HeldStale {
                holder: record.holder.clone(),
                expiry: record.expiry,
            },
            Some(record) => LeaseState::HeldFresh {
                holder: record.holder.clone(),
                expiry: record.expiry,
            },
        }
    }

    /// Whether an acquire by the classifying caller may write now
    pub fn is_available(&self) -> bool {
        !matches!(self, LeaseState::HeldFresh { .. })
    }

    /// Get the recorded holder other than the caller, if any
    pub fn other_holder(&self) -> Option<&Identity> {
        match self {
            LeaseState::HeldFresh { holder, .. } | LeaseState::HeldStale { holder, .. } => {
                Some(holder)
            }
            LeaseState::Free | LeaseState::HeldBySelf { .. } => None,
        }
    }

    /// Decide an acquisition attempt by `caller`
    pub fn on_acquire(&self, caller: &Identity, now: DateTime<Utc>, ttl: Duration) -> Transition {
        let record = LeaseRecord::issue(caller.clone(), now, ttl);
        let expiry = record.expiry;

        let event = match self {
            LeaseState::Free => LeaseEvent::Acquired {
                holder: caller.clone(),
                expiry,
            },
            LeaseState::HeldBySelf { .. } => LeaseEvent::Renewed {
                holder: caller.clone(),
                expiry,
            },
            LeaseState::HeldStale { holder, .. } => LeaseEvent::Reclaimed {
                previous_holder: holder.clone(),
                holder: caller.clone(),
                expiry,
            },
            LeaseState::HeldFresh { holder, expiry } => {
                return Transition::untouched(vec![LeaseEvent::Denied {
                    requester: caller.clone(),
                    holder: holder.clone(),
                    expiry: *expiry,
                }]);
            }
        };

        Transition {
            write: StoreWrite::Set(record),
            events: vec![event],
        }
    }

    /// Decide a release by `caller`
    ///
    /// Only the recorded holder may clear the lease, even when another
    /// identity's record has gone stale.
    pub fn on_release(&self, caller: &Identity) -> Transition {
        match self {
            LeaseState::Free => Transition::untouched(Vec::new()),
            LeaseState::HeldBySelf { .. } => Transition {
                write: StoreWrite::Clear,
                events: vec![LeaseEvent::Released {
                    holder: caller.clone(),
                }],
            },
            LeaseState::HeldFresh { holder, .. } | LeaseState::HeldStale { holder, .. } => {
                Transition::untouched(vec![LeaseEvent::Lost {
                    requester: caller.clone(),
                    holder: holder.clone(),
                }])
            }
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
