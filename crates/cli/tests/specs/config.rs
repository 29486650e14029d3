//! Configuration specs
//!
//! Verify config loading, overrides and validation.

use crate::prelude::*;

#[test]
fn config_prints_effective_values() {
    let project = Project::empty();

    project
        .fz()
        .args(["config"])
        .passes()
        .stdout_has("stock.db")
        .stdout_has("max_attempts = 2")
        .stdout_has("retry_delay = \"50ms\"")
        .stdout_has("ttl = \"30s\"");
}

#[test]
fn database_flag_overrides_config() {
    let project = Project::empty();

    project
        .fz()
        .args(["--database", "other.db", "config"])
        .passes()
        .stdout_has("database_path = \"other.db\"");
}

#[test]
fn missing_database_is_reported() {
    let project = Project::empty();
    project.file("config.toml", "[lease]\nttl = \"10s\"\n");

    project
        .fz()
        .args(["status"])
        .fails()
        .stderr_has("no database path configured");
}

#[test]
fn invalid_retry_is_rejected() {
    let project = Project::empty();
    project.file(
        "config.toml",
        "database_path = \"stock.db\"\n[retry]\nmax_attempts = 0\n",
    );

    project
        .fz()
        .args(["status"])
        .fails()
        .stderr_has("retry.max_attempts must be at least 1");
}

#[test]
fn unknown_keys_are_rejected() {
    let project = Project::empty();
    project.file("config.toml", "databse_path = \"typo.db\"\n");

    project
        .fz()
        .args(["config"])
        .fails()
        .stderr_has("failed to parse config");
}

#[test]
fn explicit_config_must_exist() {
    let project = Project::empty();

    project
        .fz()
        .args(["--config", "missing.toml", "config"])
        .fails()
        .stderr_has("failed to read config");
}
