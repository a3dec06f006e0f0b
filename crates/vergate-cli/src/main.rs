//! # vergate
//!
//! Detect the platform API version and report which features it supports.
//!
//! ## Usage
//!
//! ```bash
//! # List features against the version in VERGATE_PLATFORM_VERSION
//! VERGATE_PLATFORM_VERSION=11.1.2.4 vergate features
//!
//! # Fail with an operator-facing message if a feature is missing
//! vergate --platform-version 11.1.1 check outline-xml-export
//!
//! # Run with custom config
//! vergate --config /path/to/vergate.toml show
//! ```

mod commands;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vergate_core::{ambient, VersionGate};

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "vergate", version, about)]
struct Cli {
    /// Configuration file (default: search standard locations).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Platform version, taking precedence over every configured source.
    #[arg(long, global = true)]
    platform_version: Option<String>,

    #[command(subcommand)]
    command: commands::Command,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => config::Config::from_file(path)?,
        None => config::Config::load()?,
    };

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Comparing two literal versions needs no platform.
    if let commands::Command::Compare { left, right } = &cli.command {
        return Ok(commands::compare(left, right).into());
    }

    // No fallback version: an unknown platform aborts here.
    let probe = config.probe(cli.platform_version.as_deref());
    ambient::init_from_probe(&probe).context("Failed to determine platform version")?;
    let gate = VersionGate::current()?;

    tracing::debug!("Running {:?} against {}", cli.command, gate.version());

    Ok(commands::run(cli.command, gate)?.into())
}
