// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fz query` - Read rows while holding the lease

use super::Context;
use crate::error::session_failure;
use crate::output::{cell_json, cell_text, OutputFormat};
use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct QueryArgs {
    /// A single SELECT statement
    pub sql: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn handle(args: QueryArgs, ctx: &Context) -> Result<()> {
    let db = ctx.database()?;
    let rows = db
        .session_with_cancel(&ctx.cancel)
        .map_err(|e| session_failure(e, &ctx.lease_path().unwrap_or_default()))
        .and_then(|session| {
            let rows = session.query_rows(&args.sql, [])?;
            session.close()?;
            Ok(rows)
        })?;

    match args.format {
        OutputFormat::Text => {
            for row in &rows {
                let cells: Vec<String> = row.iter().map(cell_text).collect();
                println!("{}", cells.join("\t"));
            }
        }
        OutputFormat::Json => {
            let json: Vec<Vec<serde_json::Value>> = rows
                .iter()
                .map(|row| row.iter().map(cell_json).collect())
                .collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}
