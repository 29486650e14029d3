// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI specs

#![allow(dead_code)]

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ALICE: &str = "alice@host1";
pub const BOB: &str = "bob@host2";

/// Far enough ahead that a record never goes stale during a test
pub const FAR_FUTURE: &str = "2099-01-01T00:00:00Z";
pub const LONG_AGO: &str = "2000-01-01T00:00:00Z";

/// A scratch directory holding a database, its lease file and a config
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Config pointing at `stock.db` with short polling so contention specs stay fast
    pub fn empty() -> Self {
        let project = Self {
            dir: TempDir::new().unwrap(),
        };
        project.file(
            "config.toml",
            &format!(
                "database_path = \"{}\"\n\n[retry]\nmax_attempts = 2\nretry_delay = \"50ms\"\n",
                project.database().display()
            ),
        );
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn database(&self) -> PathBuf {
        self.path().join("stock.db")
    }

    pub fn lease_file(&self) -> PathBuf {
        self.path().join("stock.db-lease.json")
    }

    pub fn file(&self, rel: &str, content: &str) {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path().join(rel)).unwrap()
    }

    /// Write a lease record as another client would have
    pub fn lease_held_by(&self, holder: &str, expiry: &str) {
        self.file(
            "stock.db-lease.json",
            &format!("{{\"holder\": \"{}\", \"expiry\": \"{}\"}}\n", holder, expiry),
        );
    }

    pub fn lease_contents(&self) -> String {
        fs::read_to_string(self.lease_file()).unwrap()
    }

    /// Run fz as alice
    pub fn fz(&self) -> Cli {
        self.fz_as(ALICE)
    }

    pub fn fz_as(&self, identity: &str) -> Cli {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_fz"));
        cmd.current_dir(self.path())
            .env("FUZED_CONFIG", self.path().join("config.toml"))
            .env("FUZED_IDENTITY", identity)
            .env_remove("RUST_LOG");
        Cli { cmd }
    }
}

pub struct Cli {
    cmd: Command,
}

impl Cli {
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        self.cmd.args(args);
        self
    }

    pub fn passes(mut self) -> Outcome {
        Outcome(self.cmd.assert().success())
    }

    pub fn fails(mut self) -> Outcome {
        Outcome(self.cmd.assert().failure())
    }

    pub fn exits_with(mut self, code: i32) -> Outcome {
        Outcome(self.cmd.assert().code(code))
    }
}

pub struct Outcome(Assert);

impl Outcome {
    pub fn stdout_has(self, expected: &str) -> Self {
        Outcome(self.0.stdout(predicate::str::contains(expected)))
    }

    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        Outcome(self.0.stdout(predicate::str::contains(unexpected).not()))
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        Outcome(self.0.stderr(predicate::str::contains(expected)))
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.0.get_output().stdout).to_string()
    }
}
