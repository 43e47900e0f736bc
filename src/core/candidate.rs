//! Candidate type.
//!
//! One discovered secret: its variable name, its value, and its sort key.

use std::cmp::Ordering;
use zeroize::Zeroizing;

use crate::core::types::{Tier, VarName};

/// A secret found in the environment under the rotation prefix.
///
/// The value is wiped from memory on drop and never shown by `Debug`.
#[derive(Clone)]
pub struct CandidateEntry {
    name: VarName,
    value: Zeroizing<String>,
    tier: Tier,
}

impl CandidateEntry {
    /// Create a candidate from a variable name, its value and its tier
    pub fn new(name: VarName, value: String, tier: Tier) -> Self {
        Self {
            name,
            value: Zeroizing::new(value),
            tier,
        }
    }

    /// Source variable name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Secret value. Never log this.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Sort tier
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Total-order sort key: `(tier, name)`
    pub fn sort_key(&self) -> (Tier, &str) {
        (self.tier, &self.name)
    }
}

impl PartialEq for CandidateEntry {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for CandidateEntry {}

impl PartialOrd for CandidateEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CandidateEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl std::fmt::Debug for CandidateEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CandidateEntry")
            .field("name", &self.name)
            .field("value", &"<redacted>")
            .field("tier", &self.tier)
            .finish()
    }
}

impl std::fmt::Display for CandidateEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
