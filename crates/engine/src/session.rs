// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scoped database session
//!
//! Couples lease possession to an open connection. The connection only
//! exists while the lease is held, and leaving the scope closes the
//! connection before releasing the lease, on every exit path.

use crate::error::{LeaseError, SessionError};
use crate::manager::{LeaseManager, ReleaseOutcome};
use fz_adapters::ConnectionProvider;
use fz_core::{CancelToken, Clock, Identity, LeaseRecord, RetryPolicy};
use fz_storage::LeaseStore;
use rusqlite::types::{FromSql, Value};
use rusqlite::Params;

/// One result row, column values in select order
pub type Row = Vec<Value>;

/// An open connection backed by a held lease
pub struct DatabaseSession<'a, S, C, P>
where
    S: LeaseStore,
    C: Clock,
    P: ConnectionProvider,
{
    manager: &'a LeaseManager<S, C>,
    provider: &'a P,
    identity: Identity,
    lease: LeaseRecord,
    connection: Option<P::Connection>,
    closed: bool,
}

impl<'a, S, C, P> DatabaseSession<'a, S, C, P>
where
    S: LeaseStore,
    C: Clock,
    P: ConnectionProvider,
{
    /// Acquire the lease, then open a connection
    pub fn open(
        manager: &'a LeaseManager<S, C>,
        provider: &'a P,
        identity: &Identity,
        policy: &RetryPolicy,
    ) -> Result<Self, SessionError> {
        Self::open_with_cancel(manager, provider, identity, policy, &CancelToken::new())
    }

    /// Like [`open`](Self::open), giving up the lease wait when `cancel` fires
    pub fn open_with_cancel(
        manager: &'a LeaseManager<S, C>,
        provider: &'a P,
        identity: &Identity,
        policy: &RetryPolicy,
        cancel: &CancelToken,
    ) -> Result<Self, SessionError> {
        let span = tracing::info_span!("session.open", %identity, db = %provider.describe());
        let _guard = span.enter();

        let lease = manager.acquire_with_cancel(identity, policy, cancel)?;

        let connection = match provider.open() {
            Ok(connection) => connection,
            Err(e) => {
                tracing::error!(error = %e, "connection failed, releasing lease");
                if let Err(release_err) = manager.release(identity) {
                    tracing::error!(error = %release_err, "failed to release lease");
                }
                return Err(e.into());
            }
        };

        tracing::info!(expiry = %lease.expiry, "session opened");
        Ok(Self {
            manager,
            provider,
            identity: identity.clone(),
            lease,
            connection: Some(connection),
            closed: false,
        })
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// The lease as last written by this session
    pub fn lease(&self) -> &LeaseRecord {
        &self.lease
    }

    /// Raw access to the underlying connection
    pub fn connection(&self) -> Result<&P::Connection, SessionError> {
        self.connection.as_ref().ok_or(SessionError::Closed)
    }

    pub fn connection_mut(&mut self) -> Result<&mut P::Connection, SessionError> {
        self.connection.as_mut().ok_or(SessionError::Closed)
    }

    /// Push the lease expiry out by a full TTL
    pub fn renew(&mut self) -> Result<&LeaseRecord, LeaseError> {
        self.lease = self.manager.renew(&self.identity)?;
        Ok(&self.lease)
    }

    /// Close the connection, then release the lease
    ///
    /// A close error is reported ahead of a release error; release is still
    /// attempted either way.
    pub fn close(mut self) -> Result<(), SessionError> {
        self.finish()
    }

    fn finish(&mut self) -> Result<(), SessionError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        let span = tracing::info_span!("session.close", identity = %self.identity);
        let _guard = span.enter();

        let closed = match self.connection.take() {
            Some(connection) => self.provider.close(connection),
            None => Ok(()),
        };
        let released = self.manager.release(&self.identity);

        closed?;
        match released? {
            ReleaseOutcome::Released => tracing::info!("session closed"),
            ReleaseOutcome::NotHeld => tracing::warn!("session closed with no lease recorded"),
            ReleaseOutcome::Lost { holder } => {
                tracing::warn!(%holder, "session closed after losing its lease")
            }
        }
        Ok(())
    }
}

/// SQLite helpers
impl<S, C, P> DatabaseSession<'_, S, C, P>
where
    S: LeaseStore,
    C: Clock,
    P: ConnectionProvider<Connection = rusqlite::Connection>,
{
    /// Run one statement, returning the number of rows changed
    pub fn execute(&self, sql: &str, params: impl Params) -> Result<usize, SessionError> {
        Ok(self.connection()?.execute(sql, params)?)
    }

    /// Run several `;`-separated statements without parameters
    pub fn execute_batch(&self, sql: &str) -> Result<(), SessionError> {
        Ok(self.connection()?.execute_batch(sql)?)
    }

    /// Collect every row of a query
    pub fn query_rows(&self, sql: &str, params: impl Params) -> Result<Vec<Row>, SessionError> {
        let connection = self.connection()?;
        let mut statement = connection.prepare(sql)?;
        let columns = statement.column_count();
        let rows = statement.query_map(params, |row| {
            (0..columns)
                .map(|i| row.get::<_, Value>(i))
                .collect::<Result<Row, _>>()
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// First column of the first row
    pub fn query_scalar<T: FromSql>(
        &self,
        sql: &str,
        params: impl Params,
    ) -> Result<T, SessionError> {
        Ok(self.connection()?.query_row(sql, params, |row| row.get(0))?)
    }

    /// Run `f` in a transaction, committing only if it succeeds
    pub fn transaction<T, E>(
        &mut self,
        f: impl FnOnce(&rusqlite::Transaction<'_>) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<SessionError>,
    {
        let connection = self.connection_mut()?;
        let tx = connection.transaction().map_err(SessionError::from)?;
        let value = f(&tx)?;
        tx.commit().map_err(SessionError::from)?;
        Ok(value)
    }
}

impl<S, C, P> Drop for DatabaseSession<'_, S, C, P>
where
    S: LeaseStore,
    C: Clock,
    P: ConnectionProvider,
{
    fn drop(&mut self) {
        if let Err(e) = self.finish() {
            tracing::error!(identity = %self.identity, error = %e, "failed to close session");
        }
    }
}

/// Run `f` inside a session, closing it however `f` exits
///
/// An error from `f` takes precedence over an error from closing.
pub fn with_session<S, C, P, T, E>(
    manager: &LeaseManager<S, C>,
    provider: &P,
    identity: &Identity,
    policy: &RetryPolicy,
    f: impl FnOnce(&mut DatabaseSession<'_, S, C, P>) -> Result<T, E>,
) -> Result<T, E>
where
    S: LeaseStore,
    C: Clock,
    P: ConnectionProvider,
    E: From<SessionError>,
{
    let mut session = DatabaseSession::open(manager, provider, identity, policy)?;
    let result = f(&mut session);
    let closed = session.close();
    let value = result?;
    closed?;
    Ok(value)
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
