//! Providers command.

use crate::core::config::Config;
use crate::error::Result;

/// List built-in and configured provider profiles.
pub fn execute(config: &Config, json: bool) -> Result<()> {
    let providers = config.providers();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&providers).unwrap_or_else(|_| "[]".to_string())
        );
        return Ok(());
    }

    for p in &providers {
        match &p.description {
            Some(desc) => println!("{}\t{}\t{}", p.name, p.prefix, desc),
            None => println!("{}\t{}", p.name, p.prefix),
        }
    }
    Ok(())
}
