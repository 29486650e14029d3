// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::database::{ConnectionProvider, DatabaseError};

/// Wrapper that adds tracing to any ConnectionProvider
#[derive(Clone)]
pub struct TracedConnectionProvider<P> {
    inner: P,
}

impl<P> TracedConnectionProvider<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: ConnectionProvider> ConnectionProvider for TracedConnectionProvider<P> {
    type Connection = P::Connection;

    fn open(&self) -> Result<P::Connection, DatabaseError> {
        let span = tracing::info_span!("db.open", db = %self.inner.describe());
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.open();
        let elapsed = start.elapsed();

        match &result {
            Ok(_) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "connection opened"),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "open failed"
            ),
        }

        result
    }

    fn close(&self, connection: P::Connection) -> Result<(), DatabaseError> {
        let span = tracing::info_span!("db.close", db = %self.inner.describe());
        let _guard = span.enter();

        let result = self.inner.close(connection);

        match &result {
            Ok(()) => tracing::debug!("connection closed"),
            Err(e) => tracing::error!(error = %e, "close failed"),
        }

        result
    }

    fn describe(&self) -> String {
        self.inner.describe()
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
