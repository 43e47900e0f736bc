//! Keyrotor - Deterministic credential rotation for CI pipelines.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keyrotor::cli::output;
use keyrotor::cli::{execute, Cli};
use keyrotor::core::constants;
use keyrotor::error::{ConfigError, Error, RotationError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("keyrotor=debug")
        } else {
            EnvFilter::new("keyrotor=warn")
        }
    });

    let json = std::env::var(constants::LOG_FORMAT_ENV).is_ok_and(|f| f == "json");

    // stdout is reserved for workflow commands
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    if let Err(e) = execute(cli.command, cli.config) {
        let error_msg = e.to_string();
        let suggestion = match &e {
            Error::Rotation(RotationError::EmptyPool { .. }) => {
                Some("pass --allow-missing to skip instead of failing")
            }
            Error::Config(ConfigError::UnknownProvider(_)) => Some("run: keyrotor providers"),
            Error::Rotation(RotationError::Sink { .. }) => {
                Some("check that GITHUB_ENV and GITHUB_OUTPUT point at writable files")
            }
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
