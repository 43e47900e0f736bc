//! Select command.
//!
//! The rotation step itself: pick one credential, mask it, export it to later
//! steps and record which variable was used.

use tracing::info;

use crate::cli::{output, PoolArgs};
use crate::core::config::Config;
use crate::core::env::Environment;
use crate::core::rotation::Outcome;
use crate::core::selector::MissingPolicy;
use crate::core::sink::{GithubActions, RecordingSink};
use crate::error::Result;

/// Arguments of `keyrotor select`.
#[derive(Debug, Default)]
pub struct Options {
    pub pool: PoolArgs,
    pub seed: Option<u64>,
    pub export_as: Option<String>,
    pub output_name: Option<String>,
    pub allow_missing: bool,
    pub dry_run: bool,
}

/// Run the rotation and publish the result.
pub fn execute(config: &Config, env: &Environment, opts: Options) -> Result<()> {
    let rotation = super::rotation(config, &opts.pool)?;

    let output_name = opts
        .output_name
        .or_else(|| rotation.provider().output_name.clone())
        .or_else(|| config.defaults.output_name.clone());
    let missing = MissingPolicy::from_flag(opts.allow_missing || config.defaults.allow_missing);

    let rotation = rotation
        .with_seed(opts.seed)
        .with_export_as(opts.export_as)
        .with_output_name(output_name)
        .with_missing(missing);

    info!(
        provider = %rotation.provider().name,
        prefix = rotation.prefix(),
        dry_run = opts.dry_run,
        "selecting credential"
    );

    let outcome = if opts.dry_run {
        let mut sink = RecordingSink::new();
        let outcome = rotation.run(env, &mut sink)?;
        if let Some(name) = outcome.chosen_name() {
            println!("{}", name);
        }
        outcome
    } else {
        let mut sink = GithubActions::from_env(env);
        rotation.run(env, &mut sink)?
    };

    report(&outcome);
    Ok(())
}

fn report(outcome: &Outcome) {
    match &outcome.message {
        Some(message) => output::success(message),
        None => output::warn(&format!(
            "no candidates for {}, skipping",
            output::key(&outcome.prefix)
        )),
    }
}
