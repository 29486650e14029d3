// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Polling policy for lease acquisition

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Named polling presets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetryPreset {
    /// 30 polls, 1s apart
    Patient,
    /// 5 polls, 2s apart
    Brisk,
}

/// How long to keep polling a lease held by someone else
///
/// Total worst-case wait is roughly `max_attempts * retry_delay`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RetrySection", into = "RetrySection")]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub retry_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, retry_delay: Duration) -> Self {
        Self {
            max_attempts,
            retry_delay,
        }
    }

    pub fn patient() -> Self {
        Self::new(30, Duration::from_secs(1))
    }

    pub fn brisk() -> Self {
        Self::new(5, Duration::from_secs(2))
    }

    /// Try exactly once, never pause
    pub fn once() -> Self {
        Self::new(1, Duration::ZERO)
    }

    pub fn from_preset(preset: RetryPreset) -> Self {
        match preset {
            RetryPreset::Patient => Self::patient(),
            RetryPreset::Brisk => Self::brisk(),
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Upper bound on time spent pausing; every denied poll is followed by a pause
    pub fn max_wait(&self) -> Duration {
        self.retry_delay.saturating_mul(self.max_attempts)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::patient()
    }
}

/// On-disk form of `[retry]`: a preset with optional per-field overrides
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RetrySection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    preset: Option<RetryPreset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_attempts: Option<u32>,
    #[serde(
        default,
        with = "humantime_serde",
        skip_serializing_if = "Option::is_none"
    )]
    retry_delay: Option<Duration>,
}

impl From<RetrySection> for RetryPolicy {
    fn from(section: RetrySection) -> Self {
        let base = RetryPolicy::from_preset(section.preset.unwrap_or(RetryPreset::Patient));
        RetryPolicy {
            max_attempts: section.max_attempts.unwrap_or(base.max_attempts),
            retry_delay: section.retry_delay.unwrap_or(base.retry_delay),
        }
    }
}

impl From<RetryPolicy> for RetrySection {
    fn from(policy: RetryPolicy) -> Self {
        RetrySection {
            preset: None,
            max_attempts: Some(policy.max_attempts),
            retry_delay: Some(policy.retry_delay),
        }
    }
}

#[cfg(test)]
#[path = "retry_tests.rs"]
mod tests;
