// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lease store contract

use fz_core::LeaseRecord;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur reading or replacing the lease record
///
/// None of these are retried internally.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("lease store {} unavailable: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("lease store {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode lease record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Whole-record read/replace surface for the shared lease state
///
/// `None` is the absent state. Coordination lives above this trait; the only
/// conditional operation is `compare_and_swap`.
pub trait LeaseStore: Send + Sync {
    /// Current state; a location that was never written reads as `None`
    fn read(&self) -> Result<Option<LeaseRecord>, StoreError>;

    /// Replace the state unconditionally
    fn write(&self, record: Option<&LeaseRecord>) -> Result<(), StoreError>;

    /// Replace the state with `new` only if it still equals `expected`
    ///
    /// Returns false, leaving the store untouched, when someone else changed it.
    fn compare_and_swap(
        &self,
        expected: Option<&LeaseRecord>,
        new: Option<&LeaseRecord>,
    ) -> Result<bool, StoreError>;

    /// Human-readable location for diagnostics
    fn location(&self) -> String;
}

impl<S: LeaseStore + ?Sized> LeaseStore for Arc<S> {
    fn read(&self) -> Result<Option<LeaseRecord>, StoreError> {
        (**self).read()
    }

    fn write(&self, record: Option<&LeaseRecord>) -> Result<(), StoreError> {
        (**self).write(record)
    }

    fn compare_and_swap(
        &self,
        expected: Option<&LeaseRecord>,
        new: Option<&LeaseRecord>,
    ) -> Result<bool, StoreError> {
        (**self).compare_and_swap(expected, new)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
