// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fz - lease-guarded access to a shared SQLite database

mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use commands::{config, exec, hold, query, release, status, Context};
use error::CliError;
use fz_adapters::{EnvIdentity, IdentityProvider, StaticIdentity};
use fz_core::{CancelToken, Config};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "fz",
    version,
    about = "Fuzed - one writer at a time for a SQLite file on shared storage"
)]
struct Cli {
    /// Config file (default: <config dir>/fuzed/config.toml)
    #[arg(long, global = true, env = "FUZED_CONFIG")]
    config: Option<PathBuf>,

    /// Database file, overriding the config file
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    /// Identity recorded as lease holder (default: user@host)
    #[arg(long, global = true)]
    identity: Option<String>,

    /// More logging on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show who holds the lease
    Status(status::StatusArgs),
    /// Run statements while holding the lease
    Exec(exec::ExecArgs),
    /// Run a query while holding the lease
    Query(query::QueryArgs),
    /// Take the lease and keep it renewed for a while
    Hold(hold::HoldArgs),
    /// Release the lease if this identity holds it
    Release,
    /// Print the effective configuration
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(database) = cli.database {
        config = config.with_database(database);
    }
    config.validate()?;

    let identity = identity_provider(cli.identity).identity();

    let cancel = CancelToken::new();
    let on_interrupt = cancel.clone();
    ctrlc::set_handler(move || {
        tracing::info!("interrupt received");
        on_interrupt.cancel();
    })?;

    let ctx = Context {
        config,
        identity,
        cancel,
    };

    match cli.command {
        Commands::Status(args) => status::handle(args, &ctx),
        Commands::Exec(args) => exec::handle(args, &ctx),
        Commands::Query(args) => query::handle(args, &ctx),
        Commands::Hold(args) => hold::handle(args, &ctx),
        Commands::Release => release::handle(&ctx),
        Commands::Config => config::handle(&ctx),
    }
}

/// `--identity` wins over anything derived from the environment
fn identity_provider(explicit: Option<String>) -> Box<dyn IdentityProvider> {
    match explicit {
        Some(id) => Box::new(StaticIdentity::new(id.as_str())),
        None => Box::new(EnvIdentity::new()),
    }
}

/// An explicit config file must exist; the default location is optional
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => Config::load(path)?,
        None => match Config::default_path() {
            Some(path) => Config::load_or_default(&path)?,
            None => Config::default(),
        },
    };
    Ok(config)
}

fn report(err: &anyhow::Error) -> ExitCode {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        eprint!("{}", cli_err);
        return ExitCode::from(cli_err.exit_code);
    }
    eprintln!("error: {:#}", err);
    ExitCode::FAILURE
}

fn setup_logging(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
