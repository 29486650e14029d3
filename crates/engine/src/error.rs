// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for lease management and database sessions

use fz_adapters::DatabaseError;
use fz_core::{Cancelled, Identity};
use fz_storage::StoreError;
use thiserror::Error;

/// Errors that can occur acquiring or releasing the lease
#[derive(Debug, Error)]
pub enum LeaseError {
    /// Every attempt found the lease held elsewhere
    #[error(
        "database busy: lease held by {} after {attempts} attempts",
        .holder.as_ref().map_or("an unknown holder", Identity::as_str)
    )]
    Timeout {
        holder: Option<Identity>,
        attempts: u32,
    },
    /// The record changed under every release attempt
    #[error("lease record kept changing during release after {attempts} attempts")]
    Contended { attempts: u32 },
    #[error("lease acquisition cancelled")]
    Cancelled,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<Cancelled> for LeaseError {
    fn from(_: Cancelled) -> Self {
        LeaseError::Cancelled
    }
}

/// Errors that can occur inside a database session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Lease(#[from] LeaseError),
    #[error(transparent)]
    Database(#[from] DatabaseError),
    #[error("session already closed")]
    Closed,
}

impl From<rusqlite::Error> for SessionError {
    fn from(e: rusqlite::Error) -> Self {
        SessionError::Database(DatabaseError::Query(e))
    }
}

impl SessionError {
    /// Whether this failed because someone else holds the lease
    pub fn is_busy(&self) -> bool {
        matches!(self, SessionError::Lease(LeaseError::Timeout { .. }))
    }
}
