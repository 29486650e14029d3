// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lease manager
//!
//! Drives reads and compare-and-swap writes against the lease store around
//! the pure decisions in `fz_core::lease`. Runs entirely on the calling
//! thread; the only blocking point is the pause between polls.

use crate::error::LeaseError;
use chrono::{DateTime, Utc};
use fz_core::{
    CancelToken, Clock, Identity, LeaseEvent, LeaseRecord, LeaseState, RetryPolicy, StoreWrite,
};
use fz_storage::LeaseStore;
use std::time::Duration;

/// Re-reads allowed when the record changes underneath a release
const RELEASE_ATTEMPTS: u32 = 3;

/// What a release call found
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Our record was cleared
    Released,
    /// Nobody held the lease
    NotHeld,
    /// Another identity is recorded as holder; nothing was written
    Lost { holder: Identity },
}

/// Snapshot of the stored lease for diagnostics
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeaseStatus {
    Free,
    Held {
        holder: Identity,
        expiry: DateTime<Utc>,
        expired: bool,
    },
}

/// Coordinates exclusive access to one lease store
#[derive(Clone, Debug)]
pub struct LeaseManager<S, C> {
    store: S,
    clock: C,
    ttl: Duration,
}

impl<S: LeaseStore, C: Clock> LeaseManager<S, C> {
    pub fn new(store: S, clock: C, ttl: Duration) -> Self {
        Self { store, clock, ttl }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Acquire or renew the lease for `identity`, polling per `policy`
    pub fn acquire(
        &self,
        identity: &Identity,
        policy: &RetryPolicy,
    ) -> Result<LeaseRecord, LeaseError> {
        self.acquire_with_cancel(identity, policy, &CancelToken::new())
    }

    /// Like [`acquire`](Self::acquire), stopping early when `cancel` fires
    ///
    /// Never writes unless the lease is taken. A denied poll is followed by a
    /// pause, so exhausting `n` attempts waits `n * retry_delay` in total.
    pub fn acquire_with_cancel(
        &self,
        identity: &Identity,
        policy: &RetryPolicy,
        cancel: &CancelToken,
    ) -> Result<LeaseRecord, LeaseError> {
        let span = tracing::info_span!(
            "lease.acquire",
            %identity,
            store = %self.store.location(),
            max_attempts = policy.max_attempts,
        );
        let _guard = span.enter();

        let mut holder = None;
        for attempt in 1..=policy.max_attempts {
            if cancel.is_cancelled() {
                tracing::info!(attempt, "acquire cancelled");
                return Err(LeaseError::Cancelled);
            }

            let current = self.store.read()?;
            let now = self.clock.now();
            let state = LeaseState::classify(current.as_ref(), identity, now);
            let transition = state.on_acquire(identity, now, self.ttl);

            if let StoreWrite::Set(record) = transition.write {
                if self.store.compare_and_swap(current.as_ref(), Some(&record))? {
                    log_events(&transition.events);
                    return Ok(record);
                }
                // Another writer got in between our read and write
                tracing::debug!(attempt, "lease changed during acquire, re-reading");
                continue;
            }

            log_events(&transition.events);
            holder = state.other_holder().cloned();
            if let Err(cancelled) = self.clock.pause(policy.retry_delay, cancel) {
                tracing::info!(attempt, "acquire cancelled while waiting");
                return Err(cancelled.into());
            }
        }

        tracing::warn!(
            holder = holder.as_ref().map(Identity::as_str),
            attempts = policy.max_attempts,
            "gave up waiting for lease"
        );
        Err(LeaseError::Timeout {
            holder,
            attempts: policy.max_attempts,
        })
    }

    /// Extend our own lease by a full TTL; fails if anyone else holds it fresh
    pub fn renew(&self, identity: &Identity) -> Result<LeaseRecord, LeaseError> {
        self.acquire(identity, &RetryPolicy::once())
    }

    /// Give up the lease if `identity` holds it
    ///
    /// Clearing only happens for the recorded holder; anything else leaves the
    /// store untouched.
    pub fn release(&self, identity: &Identity) -> Result<ReleaseOutcome, LeaseError> {
        let span = tracing::info_span!("lease.release", %identity, store = %self.store.location());
        let _guard = span.enter();

        for attempt in 1..=RELEASE_ATTEMPTS {
            let current = self.store.read()?;
            let state = LeaseState::classify(current.as_ref(), identity, self.clock.now());
            let transition = state.on_release(identity);

            match transition.write {
                StoreWrite::Clear => {
                    if !self.store.compare_and_swap(current.as_ref(), None)? {
                        tracing::debug!(attempt, "lease changed during release, re-reading");
                        continue;
                    }
                    log_events(&transition.events);
                    return Ok(ReleaseOutcome::Released);
                }
                StoreWrite::Set(_) | StoreWrite::Untouched => {
                    log_events(&transition.events);
                    return Ok(match state.other_holder() {
                        Some(holder) => ReleaseOutcome::Lost {
                            holder: holder.clone(),
                        },
                        None => ReleaseOutcome::NotHeld,
                    });
                }
            }
        }

        tracing::warn!(attempts = RELEASE_ATTEMPTS, "lease kept changing during release");
        Err(LeaseError::Contended {
            attempts: RELEASE_ATTEMPTS,
        })
    }

    /// Whether `identity` currently holds an unexpired lease
    pub fn is_held(&self, identity: &Identity) -> Result<bool, LeaseError> {
        let current = self.store.read()?;
        Ok(current
            .map(|record| record.is_held_by(identity) && !record.is_expired_at(self.clock.now()))
            .unwrap_or(false))
    }

    /// Who holds the lease right now, if anyone
    pub fn status(&self) -> Result<LeaseStatus, LeaseError> {
        Ok(match self.store.read()? {
            None => LeaseStatus::Free,
            Some(record) => LeaseStatus::Held {
                expired: record.is_expired_at(self.clock.now()),
                holder: record.holder,
                expiry: record.expiry,
            },
        })
    }
}

fn log_events(events: &[LeaseEvent]) {
    for event in events {
        event.log();
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
