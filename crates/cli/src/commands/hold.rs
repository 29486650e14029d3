// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fz hold` - Take the lease and keep it for a while
//!
//! Useful for maintenance windows: other clients see the database as busy
//! until the hold ends or is interrupted.

use super::Context;
use crate::error::lease_failure;
use anyhow::Result;
use clap::Args;
use fz_core::Clock;
use fz_engine::{ReleaseOutcome, SharedDatabase};
use std::time::{Duration, Instant};

/// Shortest gap between renewals, for very short TTLs
const MIN_RENEW_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Args)]
pub struct HoldArgs {
    /// How long to hold the lease
    #[arg(long, default_value_t = 60)]
    pub seconds: u64,
}

pub fn handle(args: HoldArgs, ctx: &Context) -> Result<()> {
    let db = ctx.database()?;
    let lease_path = ctx.lease_path()?;

    let lease = db
        .manager()
        .acquire_with_cancel(db.identity(), &db.config().retry, &ctx.cancel)
        .map_err(|e| lease_failure(e, &lease_path))?;
    println!(
        "Holding lease as {} for {}s (expires {})",
        db.identity(),
        args.seconds,
        lease.expiry.to_rfc3339()
    );

    let held = keep_renewed(&db, Duration::from_secs(args.seconds), ctx);
    let released = db.release();
    held?;

    match released.map_err(|e| lease_failure(e, &lease_path))? {
        ReleaseOutcome::Released => println!("Released lease"),
        ReleaseOutcome::NotHeld => println!("Lease was already free"),
        ReleaseOutcome::Lost { holder } => println!("Lease was taken over by {}", holder),
    }
    Ok(())
}

/// Renew every half TTL until `duration` passes or Ctrl-C
///
/// A duration too long to schedule holds until Ctrl-C.
fn keep_renewed(db: &SharedDatabase, duration: Duration, ctx: &Context) -> Result<()> {
    let manager = db.manager();
    let interval = (manager.ttl() / 2).max(MIN_RENEW_INTERVAL);
    let deadline = Instant::now().checked_add(duration);

    loop {
        let wait = match next_wait(deadline, Instant::now(), interval) {
            Some(wait) => wait,
            None => return Ok(()),
        };
        if manager.clock().pause(wait, &ctx.cancel).is_err() {
            println!("Interrupted");
            return Ok(());
        }
        if deadline.map_or(true, |deadline| Instant::now() < deadline) {
            let renewed = manager.renew(db.identity())?;
            tracing::info!(expiry = %renewed.expiry, "lease renewed");
        }
    }
}

/// How long to sleep before the next renewal, or `None` once the hold is over
fn next_wait(deadline: Option<Instant>, now: Instant, interval: Duration) -> Option<Duration> {
    match deadline {
        None => Some(interval),
        Some(deadline) if now >= deadline => None,
        Some(deadline) => Some(interval.min(deadline - now)),
    }
}

#[cfg(test)]
#[path = "hold_tests.rs"]
mod tests;
