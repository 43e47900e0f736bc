//! Seed command.
//!
//! Explains the seed a `select` in this environment would use.

use crate::cli::output;
use crate::core::context::RotationContext;
use crate::core::env::Environment;
use crate::core::seed::{self, SeedSource};
use crate::error::Result;

/// Print the derived seed.
///
/// Plain output is the seed alone on stdout, with details on stderr.
pub fn execute(env: &Environment, explicit: Option<u64>, json: bool) -> Result<()> {
    let derivation = seed::derive(&RotationContext::from_env(env, explicit));

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&derivation).unwrap_or_else(|_| "{}".to_string())
        );
        return Ok(());
    }

    println!("{}", derivation.seed);
    match derivation.source {
        SeedSource::Explicit => output::kv("source:", "explicit --seed"),
        SeedSource::Override => output::kv("source:", "ROTATION_SEED"),
        SeedSource::Context {
            base,
            jitter,
            signals,
        } => {
            output::kv("source:", "run context");
            output::kv("signals:", signals);
            output::kv("base:", base);
            output::kv("jitter:", jitter);
        }
    }
    Ok(())
}
