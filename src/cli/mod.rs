//! Command-line interface.

pub mod completions;
pub mod list;
pub mod output;
pub mod providers;
pub mod seed;
pub mod select;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::config::Config;
use crate::core::constants;
use crate::core::env::Environment;
use crate::core::rotation::Rotation;
use crate::error::Result;

/// Keyrotor - Deterministic credential rotation for CI pipelines.
#[derive(Parser)]
#[command(
    name = "keyrotor",
    about = "Deterministic credential rotation for CI pipelines",
    version,
    after_help = "Same run, same key. Next run, next key."
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a keyrotor config file (default: .keyrotor.toml if present)
    #[arg(long, global = true, env = constants::CONFIG_ENV)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Which pool to rotate over.
#[derive(Args, Debug, Clone, Default)]
pub struct PoolArgs {
    /// Provider profile (built-in or from config)
    #[arg(short, long)]
    pub provider: Option<String>,

    /// Variable prefix to scan (default: the provider's prefix)
    #[arg(long)]
    pub prefix: Option<String>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Select one credential and publish it to later steps
    Select {
        #[command(flatten)]
        pool: PoolArgs,

        /// Use a fixed seed instead of deriving one (any integer, wraps modulo 2^64)
        #[arg(long, value_parser = parse_seed, allow_negative_numbers = true)]
        seed: Option<u64>,

        /// Export the chosen value under this name (default: the prefix)
        #[arg(long, value_name = "NAME")]
        export_as: Option<String>,

        /// Output name recording which variable was chosen
        #[arg(long, value_name = "NAME")]
        output_name: Option<String>,

        /// Treat an empty pool as a skip instead of a failure
        #[arg(long, env = "KEYROTOR_ALLOW_MISSING")]
        allow_missing: bool,

        /// Show the selection without writing to any CI channel
        #[arg(long)]
        dry_run: bool,
    },

    /// List candidate variables in rotation order (names only)
    List {
        #[command(flatten)]
        pool: PoolArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the derived seed and where it came from
    Seed {
        /// Use a fixed seed instead of deriving one (any integer, wraps modulo 2^64)
        #[arg(long, value_parser = parse_seed, allow_negative_numbers = true)]
        seed: Option<u64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List available provider profiles
    Providers {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Parse `--seed` with the same integer rule as `ROTATION_SEED`.
fn parse_seed(value: &str) -> std::result::Result<u64, String> {
    crate::core::seed::parse_integer(value)
        .ok_or_else(|| format!("'{}' is not a base-10 integer", value))
}

/// Build a rotation for the pool arguments, resolving the provider.
pub(crate) fn rotation(config: &Config, pool: &PoolArgs) -> Result<Rotation> {
    let provider = config.provider(pool.provider.as_deref())?;
    Ok(Rotation::new(provider).with_prefix(pool.prefix.clone()))
}

/// Execute a command.
pub fn execute(command: Command, config_path: Option<PathBuf>) -> Result<()> {
    use Command::*;

    let load = || Config::load(config_path.as_deref());

    match command {
        Select {
            pool,
            seed,
            export_as,
            output_name,
            allow_missing,
            dry_run,
        } => select::execute(
            &load()?,
            &Environment::capture(),
            select::Options {
                pool,
                seed,
                export_as,
                output_name,
                allow_missing,
                dry_run,
            },
        ),
        List { pool, json } => list::execute(&load()?, &Environment::capture(), &pool, json),
        Seed { seed, json } => seed::execute(&Environment::capture(), seed, json),
        Providers { json } => providers::execute(&load()?, json),
        Completions { shell } => completions::execute(shell),
    }
}
