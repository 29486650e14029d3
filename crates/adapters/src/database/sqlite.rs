// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite connections via rusqlite

use super::{ConnectionProvider, DatabaseError};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Opens SQLite connections to a single database file
#[derive(Clone, Debug)]
pub struct SqliteProvider {
    path: PathBuf,
    busy_timeout: Duration,
}

impl SqliteProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout: Duration::from_secs(5),
        }
    }

    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConnectionProvider for SqliteProvider {
    type Connection = Connection;

    fn open(&self) -> Result<Connection, DatabaseError> {
        let open_error = |source| DatabaseError::Open {
            path: self.path.clone(),
            source,
        };
        let connection = Connection::open(&self.path).map_err(open_error)?;
        connection
            .busy_timeout(self.busy_timeout)
            .map_err(open_error)?;
        Ok(connection)
    }

    fn close(&self, connection: Connection) -> Result<(), DatabaseError> {
        connection
            .close()
            .map_err(|(_, source)| DatabaseError::Close(source))
    }

    fn describe(&self) -> String {
        format!("sqlite:{}", self.path.display())
    }
}

#[cfg(test)]
#[path = "sqlite_tests.rs"]
mod tests;
