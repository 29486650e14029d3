// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fz exec` - Run statements while holding the lease

use super::Context;
use crate::error::session_failure;
use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct ExecArgs {
    /// SQL statements, separated by `;`
    pub sql: String,
}

pub fn handle(args: ExecArgs, ctx: &Context) -> Result<()> {
    let db = ctx.database()?;
    let session = db
        .session_with_cancel(&ctx.cancel)
        .map_err(|e| session_failure(e, &ctx.lease_path().unwrap_or_default()))?;

    session.execute_batch(&args.sql)?;
    // Rows touched by the last statement in the batch
    let changed = session.connection()?.changes();
    session.close()?;

    println!("{} row(s) changed", changed);
    Ok(())
}
