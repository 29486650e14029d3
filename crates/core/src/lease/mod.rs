// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lease model for exclusive, time-bounded database access
//!
//! This module provides:
//! - **LeaseRecord** - Persisted holder + expiry
//! - **LeaseState** - Classification of a record from one caller's point of view
//! - **LeaseEvent** - Observable outcomes of acquire/release decisions
//!
//! Everything here is pure: no I/O, time is passed in.

pub mod event;
pub mod record;
pub mod state;

pub use event::LeaseEvent;
pub use record::LeaseRecord;
pub use state::{LeaseState, StoreWrite, Transition};
