// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fz status` - Show who holds the lease

use super::Context;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;
use fz_core::Identity;
use fz_engine::LeaseStatus;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Args)]
pub struct StatusArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
pub struct StatusView {
    pub database: PathBuf,
    pub lease: PathBuf,
    pub holder: Option<String>,
    pub expiry: Option<String>,
    pub expired: bool,
    /// Whether the holder is the identity running this command
    pub mine: bool,
}

impl StatusView {
    pub fn new(status: LeaseStatus, me: &Identity, database: PathBuf, lease: PathBuf) -> Self {
        match status {
            LeaseStatus::Free => Self {
                database,
                lease,
                holder: None,
                expiry: None,
                expired: false,
                mine: false,
            },
            LeaseStatus::Held {
                holder,
                expiry,
                expired,
            } => Self {
                database,
                lease,
                mine: &holder == me,
                holder: Some(holder.to_string()),
                expiry: Some(expiry.to_rfc3339()),
                expired,
            },
        }
    }
}

impl fmt::Display for StatusView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.holder, &self.expiry) {
            (Some(holder), Some(expiry)) => {
                let you = if self.mine { " (you)" } else { "" };
                writeln!(f, "Lease held by {}{}", holder, you)?;
                if self.expired {
                    writeln!(f, "  Expired: {} (stale, the next acquire reclaims it)", expiry)?;
                } else {
                    writeln!(f, "  Expires: {}", expiry)?;
                }
            }
            _ => writeln!(f, "Lease is free")?,
        }
        writeln!(f, "  Database: {}", self.database.display())?;
        write!(f, "  Lease file: {}", self.lease.display())
    }
}

pub fn handle(args: StatusArgs, ctx: &Context) -> Result<()> {
    let db = ctx.database()?;
    let status = db.lease_status()?;
    let view = StatusView::new(
        status,
        db.identity(),
        db.database_path().to_path_buf(),
        ctx.lease_path()?,
    );
    output::print(&view, args.format);
    Ok(())
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
