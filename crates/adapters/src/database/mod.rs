// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Database connection adapters

mod sqlite;

pub use sqlite::SqliteProvider;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{DatabaseCall, FakeConnection, FakeConnectionProvider};

use std::path::PathBuf;
use thiserror::Error;

/// Errors from database operations
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("failed to open database {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },
    #[error("query failed: {0}")]
    Query(#[from] rusqlite::Error),
    #[error("failed to close database: {0}")]
    Close(#[source] rusqlite::Error),
    #[error("database unavailable: {0}")]
    Unavailable(String),
}

/// Opens and closes connections to the embedded database
///
/// Only sequences when connections exist; what runs on them is up to the caller.
pub trait ConnectionProvider: Send + Sync {
    type Connection;

    fn open(&self) -> Result<Self::Connection, DatabaseError>;

    fn close(&self, connection: Self::Connection) -> Result<(), DatabaseError>;

    /// Where connections point, for logs and errors
    fn describe(&self) -> String;
}
