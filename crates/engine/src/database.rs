// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Database handle
//!
//! Bundles everything a caller needs to work on one shared database: the
//! file path, the lease store next to it, who we are, and how long to wait.

use crate::error::{LeaseError, SessionError};
use crate::manager::{LeaseManager, LeaseStatus, ReleaseOutcome};
use crate::session::{self, DatabaseSession};
use fz_adapters::{ConnectionProvider, SqliteProvider, TracedConnectionProvider};
use fz_core::{CancelToken, Clock, Config, ConfigError, Identity, SystemClock};
use fz_storage::{FileLeaseStore, LeaseStore};
use std::path::{Path, PathBuf};

/// SQLite database guarded by a lease file on shared storage
pub type SharedDatabase =
    Database<FileLeaseStore, SystemClock, TracedConnectionProvider<SqliteProvider>>;

/// Handle to one leased database
pub struct Database<S, C, P> {
    config: Config,
    path: PathBuf,
    identity: Identity,
    manager: LeaseManager<S, C>,
    provider: P,
}

impl SharedDatabase {
    /// Open the handle described by `config` on behalf of `identity`
    ///
    /// Nothing touches the shared storage until a session is requested.
    pub fn open(config: Config, identity: Identity) -> Result<Self, ConfigError> {
        let path = config.database_path()?.to_path_buf();
        let store = FileLeaseStore::for_database(&path, &config.lease_suffix);
        let provider = TracedConnectionProvider::new(
            SqliteProvider::new(&path).with_busy_timeout(config.sqlite.busy_timeout),
        );
        tracing::debug!(
            database = %path.display(),
            lease = %store.path().display(),
            %identity,
            "database handle ready"
        );
        Self::from_parts(config, identity, store, SystemClock, provider)
    }
}

impl<S, C, P> Database<S, C, P>
where
    S: LeaseStore,
    C: Clock,
    P: ConnectionProvider,
{
    /// Assemble a handle from explicit collaborators
    pub fn from_parts(
        config: Config,
        identity: Identity,
        store: S,
        clock: C,
        provider: P,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let path = config.database_path()?.to_path_buf();
        let manager = LeaseManager::new(store, clock, config.lease.ttl);
        Ok(Self {
            config,
            path,
            identity,
            manager,
            provider,
        })
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn database_path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn manager(&self) -> &LeaseManager<S, C> {
        &self.manager
    }

    /// Open a session with the configured retry policy
    pub fn session(&self) -> Result<DatabaseSession<'_, S, C, P>, SessionError> {
        DatabaseSession::open(
            &self.manager,
            &self.provider,
            &self.identity,
            &self.config.retry,
        )
    }

    /// Open a session, abandoning the wait when `cancel` fires
    pub fn session_with_cancel(
        &self,
        cancel: &CancelToken,
    ) -> Result<DatabaseSession<'_, S, C, P>, SessionError> {
        DatabaseSession::open_with_cancel(
            &self.manager,
            &self.provider,
            &self.identity,
            &self.config.retry,
            cancel,
        )
    }

    /// Run `f` inside a session that is closed on every exit path
    pub fn with_session<T, E>(
        &self,
        f: impl FnOnce(&mut DatabaseSession<'_, S, C, P>) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<SessionError>,
    {
        session::with_session(
            &self.manager,
            &self.provider,
            &self.identity,
            &self.config.retry,
            f,
        )
    }

    pub fn lease_status(&self) -> Result<LeaseStatus, LeaseError> {
        self.manager.status()
    }

    /// Drop our lease without going through a session
    pub fn release(&self) -> Result<ReleaseOutcome, LeaseError> {
        self.manager.release(&self.identity)
    }
}

#[cfg(test)]
#[path = "database_tests.rs"]
mod tests;
