// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake connection provider for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ConnectionProvider, DatabaseError};
use std::sync::{Arc, Mutex};

/// Recorded provider call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseCall {
    Open { id: u64 },
    OpenFailed,
    Close { id: u64 },
}

/// Connection handed out by [`FakeConnectionProvider`]
#[derive(Debug, PartialEq, Eq)]
pub struct FakeConnection {
    pub id: u64,
}

type CloseHook = Arc<dyn Fn(&FakeConnection) + Send + Sync>;

#[derive(Default)]
struct FakeState {
    calls: Vec<DatabaseCall>,
    next_id: u64,
    fail_open: Option<String>,
    fail_close: Option<String>,
}

/// Fake connection provider for testing
///
/// Clones share the same call log.
#[derive(Clone, Default)]
pub struct FakeConnectionProvider {
    state: Arc<Mutex<FakeState>>,
    close_hook: Option<CloseHook>,
}

impl FakeConnectionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `hook` while each connection is being closed
    pub fn with_close_hook(mut self, hook: impl Fn(&FakeConnection) + Send + Sync + 'static) -> Self {
        self.close_hook = Some(Arc::new(hook));
        self
    }

    /// Make the next opens fail with the given reason (None to succeed again)
    pub fn set_fail_open(&self, reason: Option<&str>) {
        self.lock().fail_open = reason.map(str::to_string);
    }

    /// Make closes fail with the given reason (None to succeed again)
    pub fn set_fail_close(&self, reason: Option<&str>) {
        self.lock().fail_close = reason.map(str::to_string);
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<DatabaseCall> {
        self.lock().calls.clone()
    }

    /// Connections opened and not yet closed
    pub fn open_connections(&self) -> usize {
        let state = self.lock();
        let opened = state
            .calls
            .iter()
            .filter(|c| matches!(c, DatabaseCall::Open { .. }))
            .count();
        let closed = state
            .calls
            .iter()
            .filter(|c| matches!(c, DatabaseCall::Close { .. }))
            .count();
        opened - closed
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ConnectionProvider for FakeConnectionProvider {
    type Connection = FakeConnection;

    fn open(&self) -> Result<FakeConnection, DatabaseError> {
        let mut state = self.lock();
        if let Some(reason) = state.fail_open.clone() {
            state.calls.push(DatabaseCall::OpenFailed);
            return Err(DatabaseError::Unavailable(reason));
        }
        state.next_id += 1;
        let id = state.next_id;
        state.calls.push(DatabaseCall::Open { id });
        Ok(FakeConnection { id })
    }

    fn close(&self, connection: FakeConnection) -> Result<(), DatabaseError> {
        if let Some(hook) = &self.close_hook {
            hook(&connection);
        }
        let mut state = self.lock();
        state.calls.push(DatabaseCall::Close { id: connection.id });
        match state.fail_close.clone() {
            Some(reason) => Err(DatabaseError::Unavailable(reason)),
            None => Ok(()),
        }
    }

    fn describe(&self) -> String {
        "fake".to_string()
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
