// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loaded from `config.toml`
//!
//! ```toml
//! database_path = "/srv/share/fuzed.db"
//! lease_suffix = "-lease.json"
//!
//! [lease]
//! ttl = "30s"
//!
//! [retry]
//! preset = "patient"   # or "brisk"
//! max_attempts = 30
//! retry_delay = "1s"
//!
//! [sqlite]
//! busy_timeout = "5s"
//! ```

mod retry;

pub use retry::{RetryPolicy, RetryPreset};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Directory name under the platform config dir
pub const APP_DIR: &str = "fuzed";

/// Default suffix appended to the database path to locate the lease file
pub const DEFAULT_LEASE_SUFFIX: &str = "-lease.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to render config: {0}")]
    Render(#[from] toml::ser::Error),
    #[error("no database path configured")]
    MissingDatabase,
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Lease timing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LeaseConfig {
    /// How long a lease stays valid without renewal
    #[serde(with = "humantime_serde")]
    pub ttl: Duration,
}

impl Default for LeaseConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(30),
        }
    }
}

/// SQLite connection settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SqliteConfig {
    /// How long SQLite itself waits on its own file locks
    #[serde(with = "humantime_serde")]
    pub busy_timeout: Duration,
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            busy_timeout: Duration::from_secs(5),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
    pub lease_suffix: String,
    pub lease: LeaseConfig,
    pub retry: RetryPolicy,
    pub sqlite: SqliteConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: None,
            lease_suffix: DEFAULT_LEASE_SUFFIX.to_string(),
            lease: LeaseConfig::default(),
            retry: RetryPolicy::default(),
            sqlite: SqliteConfig::default(),
        }
    }
}

impl Config {
    /// Platform default location, e.g. `~/.config/fuzed/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load a config file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lease.ttl.is_zero() {
            return Err(ConfigError::Invalid("lease.ttl must be positive".to_string()));
        }
        if self.retry.max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "retry.max_attempts must be at least 1".to_string(),
            ));
        }
        if self.lease_suffix.is_empty() {
            return Err(ConfigError::Invalid(
                "lease_suffix must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_database(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = Some(path.into());
        self
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.lease.ttl = ttl;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn database_path(&self) -> Result<&Path, ConfigError> {
        self.database_path
            .as_deref()
            .ok_or(ConfigError::MissingDatabase)
    }

    /// Where the lease for the configured database lives
    pub fn lease_path(&self) -> Result<PathBuf, ConfigError> {
        Ok(lease_path_for(self.database_path()?, &self.lease_suffix))
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Derive the lease location from the database location
///
/// Every client pointed at the same database path finds the same lease.
pub fn lease_path_for(database: &Path, suffix: &str) -> PathBuf {
    let mut raw = database.as_os_str().to_os_string();
    raw.push(suffix);
    PathBuf::from(raw)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
