// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod config;
pub mod exec;
pub mod hold;
pub mod query;
pub mod release;
pub mod status;

use anyhow::Result;
use fz_core::{CancelToken, Config, Identity};
use fz_engine::SharedDatabase;
use std::path::PathBuf;

/// Everything a command needs, resolved from flags, environment and config file
pub struct Context {
    pub config: Config,
    pub identity: Identity,
    /// Fired by Ctrl-C
    pub cancel: CancelToken,
}

impl Context {
    pub fn database(&self) -> Result<SharedDatabase> {
        Ok(SharedDatabase::open(
            self.config.clone(),
            self.identity.clone(),
        )?)
    }

    pub fn lease_path(&self) -> Result<PathBuf> {
        Ok(self.config.lease_path()?)
    }
}
