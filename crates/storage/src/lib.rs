// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Durable read/replace access to the shared lease record

mod file;
mod memory;
mod store;

pub use file::FileLeaseStore;
pub use memory::MemoryLeaseStore;
pub use store::{LeaseStore, StoreError};
