// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Caller identity used to attribute lease ownership

use serde::{Deserialize, Serialize};

/// Opaque name for a caller's execution context, conventionally `user@host`
///
/// Only ever compared for equality; the contents are never parsed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(pub String);

impl Identity {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build the conventional `user@host` form
    pub fn compose(user: &str, host: &str) -> Self {
        Self(format!("{}@{}", user, host))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Identity {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
