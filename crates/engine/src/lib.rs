// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Fuzed lease engine
//!
//! Exclusive access to a shared single-writer database through a lease
//! recorded next to it.

mod database;
mod error;
mod manager;
pub mod session;

pub use database::{Database, SharedDatabase};
pub use error::{LeaseError, SessionError};
pub use manager::{LeaseManager, LeaseStatus, ReleaseOutcome};
pub use session::{with_session, DatabaseSession, Row};
