// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fz release` - Give up the lease held by this identity

use super::Context;
use crate::error::lease_failure;
use anyhow::Result;
use fz_engine::ReleaseOutcome;

pub fn handle(ctx: &Context) -> Result<()> {
    let db = ctx.database()?;
    let outcome = db
        .release()
        .map_err(|e| lease_failure(e, &ctx.lease_path().unwrap_or_default()))?;

    match outcome {
        ReleaseOutcome::Released => println!("Released lease for {}", db.identity()),
        ReleaseOutcome::NotHeld => println!("No lease held"),
        ReleaseOutcome::Lost { holder } => {
            println!("Lease is held by {}, not {}; left untouched", holder, db.identity())
        }
    }
    Ok(())
}
