//! Candidate discovery.
//!
//! Scans an environment snapshot for the variables that make up a candidate
//! pool and returns them in a stable order:
//!
//! 1. `PREFIX` itself (tier 0)
//! 2. `PREFIX_<n>` for numeric suffixes, by the value of `n` (`_2` before `_10`)
//! 3. any other `PREFIX_<suffix>`, by full name
//!
//! Numeric suffixes express an intended priority list. Anything else
//! (`PREFIX_LEGACY`) is still a candidate but cannot shift that list.

use tracing::debug;

use crate::core::candidate::CandidateEntry;
use crate::core::constants::{EXACT_TIER, NON_NUMERIC_TIER};
use crate::core::env::Environment;
use crate::core::types::Tier;

/// Sort tier for a variable name, or `None` if it is not part of the pool.
///
/// # Arguments
///
/// * `prefix` - Pool prefix (e.g., `OPENAI_API_KEY`)
/// * `name` - Environment variable name
pub fn tier(prefix: &str, name: &str) -> Option<Tier> {
    if name == prefix {
        return Some(EXACT_TIER);
    }

    let suffix = name.strip_prefix(prefix)?.strip_prefix('_')?;
    if !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()) {
        // Digit runs too long for u64 fall through to the last tier
        return Some(suffix.parse().unwrap_or(NON_NUMERIC_TIER));
    }

    Some(NON_NUMERIC_TIER)
}

/// Discover all non-empty candidates for `prefix`, sorted by `(tier, name)`.
///
/// Returns an empty list when nothing matches; callers decide whether that
/// is fatal.
pub fn discover(prefix: &str, env: &Environment) -> Vec<CandidateEntry> {
    let mut candidates: Vec<CandidateEntry> = env
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .filter_map(|(name, value)| {
            tier(prefix, name)
                .map(|tier| CandidateEntry::new(name.to_string(), value.to_string(), tier))
        })
        .collect();

    candidates.sort();

    debug!(
        prefix,
        found = candidates.len(),
        names = ?candidates.iter().map(CandidateEntry::name).collect::<Vec<_>>(),
        "discovered candidates"
    );

    candidates
}
