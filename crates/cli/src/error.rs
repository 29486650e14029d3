// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Lease failures are the errors an operator can act on, so they get their
//! own message, hints and exit status. Everything else is printed as-is.

use fz_core::Identity;
use fz_engine::{LeaseError, SessionError};
use std::fmt;
use std::path::Path;

/// Exit status when another identity holds the lease
pub const EXIT_BUSY: u8 = 2;

/// Exit status when the user interrupted a wait
pub const EXIT_CANCELLED: u8 = 130;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct CliError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Process exit status
    pub exit_code: u8,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            exit_code: 1,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_exit_code(mut self, code: u8) -> Self {
        self.exit_code = code;
        self
    }

    /// Another identity kept the lease for every attempt
    pub fn database_busy(holder: Option<&Identity>, attempts: u32, lease: &Path) -> Self {
        let holder = holder.map_or("an unknown holder", Identity::as_str);
        CliError::new("database busy")
            .with_context(format!("Lease is held by '{}'", holder))
            .with_context(format!("Gave up after {} attempts", attempts))
            .with_context(format!("Lease file: {}", lease.display()))
            .with_suggestion("Retry once the holder has finished")
            .with_suggestion("Check who holds it: fz status")
            .with_suggestion("Wait longer with [retry] max_attempts in the config file")
            .with_exit_code(EXIT_BUSY)
    }

    /// Release kept losing the race against other writers of the lease file
    pub fn release_contended(attempts: u32, lease: &Path) -> Self {
        CliError::new("lease file kept changing during release")
            .with_context(format!("Gave up after {} attempts", attempts))
            .with_context(format!("Lease file: {}", lease.display()))
            .with_suggestion("Run the command again")
            .with_suggestion("Check who holds it: fz status")
    }

    pub fn cancelled() -> Self {
        CliError::new("interrupted while waiting for the lease").with_exit_code(EXIT_CANCELLED)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CliError {}

/// Turn a lease failure into the error shown to the operator
pub fn lease_failure(err: LeaseError, lease: &Path) -> anyhow::Error {
    match err {
        LeaseError::Timeout { holder, attempts } => {
            CliError::database_busy(holder.as_ref(), attempts, lease).into()
        }
        LeaseError::Contended { attempts } => CliError::release_contended(attempts, lease).into(),
        LeaseError::Cancelled => CliError::cancelled().into(),
        other => other.into(),
    }
}

/// Like [`lease_failure`] for errors raised while opening a session
pub fn session_failure(err: SessionError, lease: &Path) -> anyhow::Error {
    match err {
        SessionError::Lease(err) => lease_failure(err, lease),
        other => other.into(),
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
