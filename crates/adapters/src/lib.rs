// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for the collaborators around the lease core:
//! database connections and caller identity

pub mod database;
pub mod identity;
pub mod traced;

pub use database::{ConnectionProvider, DatabaseError, SqliteProvider};
pub use identity::{EnvIdentity, IdentityProvider, StaticIdentity};
pub use traced::TracedConnectionProvider;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use database::{DatabaseCall, FakeConnection, FakeConnectionProvider};
