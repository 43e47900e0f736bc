//! Candidate selection and publication.

use tracing::{debug, info};

use crate::core::candidate::CandidateEntry;
use crate::core::constants::PRESENT_OUTPUT_NAME;
use crate::core::sink::OutputSink;
use crate::core::types::Seed;
use crate::error::{Result, RotationError};

/// What to do when the candidate pool is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Empty pool is a hard failure.
    #[default]
    Fail,
    /// Empty pool yields an absent selection with `key_present=false`.
    Allow,
}

impl MissingPolicy {
    pub fn from_flag(allow_missing: bool) -> Self {
        if allow_missing {
            Self::Allow
        } else {
            Self::Fail
        }
    }
}

/// The chosen candidate and where it sat in the pool.
#[derive(Debug, Clone)]
pub struct SelectionResult {
    pub chosen: CandidateEntry,
    /// Zero-based position, always `seed % pool_size`.
    pub index: usize,
    pub pool_size: usize,
}

/// Where the chosen value and audit records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publication {
    /// Environment variable later steps read the secret from.
    pub export_as: String,
    /// Step output naming the chosen source variable.
    pub output_name: String,
}

/// Index into a pool of `len` candidates.
///
/// # Panics
///
/// Panics if `len` is zero.
pub fn index_for(seed: Seed, len: usize) -> usize {
    (seed % len as u64) as usize
}

/// Pick the candidate at `seed % len`.
///
/// # Errors
///
/// Returns `RotationError::NoCandidates` for an empty list under
/// `MissingPolicy::Fail`.
pub fn select(
    mut candidates: Vec<CandidateEntry>,
    seed: Seed,
    policy: MissingPolicy,
) -> Result<Option<SelectionResult>> {
    if candidates.is_empty() {
        return match policy {
            MissingPolicy::Allow => {
                debug!("empty pool allowed, nothing selected");
                Ok(None)
            }
            MissingPolicy::Fail => Err(RotationError::NoCandidates.into()),
        };
    }

    let pool_size = candidates.len();
    let index = index_for(seed, pool_size);
    let chosen = candidates.swap_remove(index);

    debug!(index, pool_size, name = chosen.name(), "selected candidate");

    Ok(Some(SelectionResult {
        chosen,
        index,
        pool_size,
    }))
}

/// Publish a selection through `sink`.
///
/// Present: mask, export, record the source name, record `key_present=true`.
/// Absent: record `key_present=false` only.
pub fn publish(
    selection: Option<&SelectionResult>,
    publication: &Publication,
    sink: &mut dyn OutputSink,
) -> Result<()> {
    match selection {
        Some(result) => {
            sink.mask(result.chosen.value())?;
            sink.export_env(&publication.export_as, result.chosen.value())?;
            sink.set_output(&publication.output_name, result.chosen.name())?;
            sink.set_output(PRESENT_OUTPUT_NAME, "true")?;
            info!(
                source = result.chosen.name(),
                export_as = %publication.export_as,
                "published selection"
            );
        }
        None => {
            sink.set_output(PRESENT_OUTPUT_NAME, "false")?;
            info!("published absent selection");
        }
    }
    Ok(())
}
