//! List command.
//!
//! Shows the candidate pool in rotation order. Values are never printed.

use serde::Serialize;

use crate::cli::{output, PoolArgs};
use crate::core::candidate::CandidateEntry;
use crate::core::config::Config;
use crate::core::constants::NON_NUMERIC_TIER;
use crate::core::discovery;
use crate::core::env::Environment;
use crate::error::Result;

#[derive(Serialize)]
struct Row<'a> {
    index: usize,
    name: &'a str,
    /// `None` for the trailing non-numeric tier
    tier: Option<u64>,
}

fn rows(candidates: &[CandidateEntry]) -> Vec<Row<'_>> {
    candidates
        .iter()
        .enumerate()
        .map(|(index, c)| Row {
            index,
            name: c.name(),
            tier: (c.tier() != NON_NUMERIC_TIER).then_some(c.tier()),
        })
        .collect()
}

/// List candidate variable names for a pool.
pub fn execute(config: &Config, env: &Environment, pool: &PoolArgs, json: bool) -> Result<()> {
    let rotation = super::rotation(config, pool)?;
    rotation.validate()?;

    let candidates = discovery::discover(rotation.prefix(), env);

    if json {
        let rows = rows(&candidates);
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).unwrap_or_else(|_| "[]".to_string())
        );
        return Ok(());
    }

    if candidates.is_empty() {
        output::dimmed(&format!("no candidates for {}", rotation.prefix()));
        return Ok(());
    }

    for row in rows(&candidates) {
        let tier = row
            .tier
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{}\t{}\t{}", row.index, row.name, tier);
    }
    Ok(())
}
