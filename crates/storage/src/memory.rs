// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process lease store
//!
//! Coordinates threads of a single process and stands in for the shared file
//! in tests. Clones share state.

use crate::store::{LeaseStore, StoreError};
use fz_core::LeaseRecord;
use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct MemoryState {
    record: Option<LeaseRecord>,
    writes: u64,
    unavailable: bool,
    /// Applied one per compare-and-swap, as if another process raced us
    interference: VecDeque<Option<LeaseRecord>>,
}

#[derive(Clone, Debug, Default)]
pub struct MemoryLeaseStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryLeaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a record already in place
    pub fn with_record(record: LeaseRecord) -> Self {
        let store = Self::new();
        store.lock().record = Some(record);
        store
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Current contents without going through the trait
    pub fn snapshot(&self) -> Option<LeaseRecord> {
        self.lock().record.clone()
    }

    /// Number of successful writes so far
    pub fn writes(&self) -> u64 {
        self.lock().writes
    }

    /// Make every operation fail as if the shared medium were unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.lock().unavailable = unavailable;
    }

    /// Overwrite the record right before a compare-and-swap runs
    ///
    /// Calls queue up: each later swap consumes the next queued record.
    pub fn interfere_before_next_swap(&self, record: Option<LeaseRecord>) {
        self.lock().interference.push_back(record);
    }
}

fn unreachable_error() -> StoreError {
    StoreError::Io {
        path: PathBuf::from("memory"),
        source: io::Error::new(io::ErrorKind::NotConnected, "store marked unavailable"),
    }
}

impl LeaseStore for MemoryLeaseStore {
    fn read(&self) -> Result<Option<LeaseRecord>, StoreError> {
        let state = self.lock();
        if state.unavailable {
            return Err(unreachable_error());
        }
        Ok(state.record.clone())
    }

    fn write(&self, record: Option<&LeaseRecord>) -> Result<(), StoreError> {
        let mut state = self.lock();
        if state.unavailable {
            return Err(unreachable_error());
        }
        state.record = record.cloned();
        state.writes += 1;
        Ok(())
    }

    fn compare_and_swap(
        &self,
        expected: Option<&LeaseRecord>,
        new: Option<&LeaseRecord>,
    ) -> Result<bool, StoreError> {
        let mut state = self.lock();
        if state.unavailable {
            return Err(unreachable_error());
        }
        if let Some(raced) = state.interference.pop_front() {
            state.record = raced;
            state.writes += 1;
        }
        if state.record.as_ref() != expected {
            return Ok(false);
        }
        state.record = new.cloned();
        state.writes += 1;
        Ok(true)
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
