// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Identity providers
//!
//! Resolve the identity recorded as lease holder for this process.

use fz_core::Identity;

/// Environment variable that overrides the derived identity
pub const IDENTITY_ENV: &str = "FUZED_IDENTITY";

const UNKNOWN: &str = "unknown";

/// Source of the caller's identity
pub trait IdentityProvider: Send + Sync {
    fn identity(&self) -> Identity;
}

/// Derives `user@host` from the process environment
#[derive(Clone, Debug, Default)]
pub struct EnvIdentity;

impl EnvIdentity {
    pub fn new() -> Self {
        Self
    }

    /// Resolve using `lookup` in place of the process environment
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Identity {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(explicit) = present(IDENTITY_ENV) {
            return Identity::new(explicit.trim());
        }

        let user = present("USER")
            .or_else(|| present("USERNAME"))
            .unwrap_or_else(|| UNKNOWN.to_string());
        let host = present("HOSTNAME")
            .or_else(|| present("COMPUTERNAME"))
            .or_else(hostname_file)
            .unwrap_or_else(|| UNKNOWN.to_string());

        Identity::compose(user.trim(), host.trim())
    }
}

/// Most shells do not export HOSTNAME, so fall back to the system file
fn hostname_file() -> Option<String> {
    std::fs::read_to_string("/etc/hostname")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl IdentityProvider for EnvIdentity {
    fn identity(&self) -> Identity {
        let identity = Self::resolve(|key| std::env::var(key).ok());
        tracing::debug!(%identity, "resolved identity");
        identity
    }
}

/// Always answers with the same identity
#[derive(Clone, Debug)]
pub struct StaticIdentity(Identity);

impl StaticIdentity {
    pub fn new(identity: impl Into<Identity>) -> Self {
        Self(identity.into())
    }
}

impl IdentityProvider for StaticIdentity {
    fn identity(&self) -> Identity {
        self.0.clone()
    }
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
