// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fz-core: Core types for lease-guarded database access
//!
//! This crate provides:
//! - The lease record and the pure acquire/release state machine
//! - Caller identity
//! - Clock and cancellation abstractions for testable waiting
//! - TOML configuration

pub mod cancel;
pub mod clock;
pub mod config;
pub mod identity;
pub mod lease;

// Re-exports
pub use cancel::{CancelToken, Cancelled};
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{Config, ConfigError, LeaseConfig, RetryPolicy, RetryPreset, SqliteConfig};
pub use identity::Identity;
pub use lease::{LeaseEvent, LeaseRecord, LeaseState, StoreWrite, Transition};
