// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fz config` - Show the effective configuration

use super::Context;
use anyhow::Result;

pub fn handle(ctx: &Context) -> Result<()> {
    print!("{}", ctx.config.to_toml()?);
    Ok(())
}
