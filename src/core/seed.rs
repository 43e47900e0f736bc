//! Seed derivation.
//!
//! Produces the 64-bit seed that picks a candidate. Sources, in priority
//! order:
//!
//! 1. an explicit seed from the caller, used verbatim
//! 2. the `ROTATION_SEED` override, parsed or hashed, used verbatim
//! 3. the wrapping sum of every present context signal, plus a jitter term
//!    drawn from a generator seeded with that sum
//!
//! Every present signal shifts the sum, so a retry (new attempt number) or a
//! second workflow sharing the run id lands on a different seed. The jitter
//! breaks up small-modulus aliasing between consecutive run numbers. The
//! whole derivation is a pure function of the context.
//!
//! This is load distribution, not a security boundary.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::core::constants::JITTER_MAX;
use crate::core::context::RotationContext;
use crate::core::types::Seed;

/// Where a derived seed came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeedSource {
    /// Caller-supplied seed.
    Explicit,
    /// `ROTATION_SEED` override.
    Override,
    /// Mixed from context signals.
    Context {
        /// Wrapping sum of the present signals.
        base: Seed,
        /// Pseudo-random offset in `0..=JITTER_MAX`.
        jitter: u64,
        /// How many signals were present.
        signals: usize,
    },
}

/// A derived seed with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedDerivation {
    pub seed: Seed,
    pub source: SeedSource,
}

/// Parse a base-10 integer, reduced modulo 2^64.
///
/// Accepts an optional sign followed by ASCII digits, with surrounding
/// whitespace. Negatives and values of any length wrap, so `-1` is
/// `u64::MAX` and `2^128 + 7` is `7`. Returns `None` for anything else.
pub fn parse_integer(value: &str) -> Option<u64> {
    let text = value.trim();
    if let Ok(n) = text.parse::<i128>() {
        return Some(n as u64);
    }

    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let folded = digits.bytes().fold(0u64, |acc, b| {
        acc.wrapping_mul(10).wrapping_add(u64::from(b - b'0'))
    });
    Some(if negative { folded.wrapping_neg() } else { folded })
}

/// Map any signal string into the 64-bit seed space.
///
/// Base-10 integers map to their value modulo 2^64 (see [`parse_integer`]).
/// Anything else maps to the first 8 bytes of its SHA-256 digest, read
/// big-endian.
pub fn to_u64(value: &str) -> u64 {
    parse_integer(value).unwrap_or_else(|| {
        let digest = Sha256::digest(value.as_bytes());
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest[..8]);
        u64::from_be_bytes(head)
    })
}

/// Deterministic jitter for a base seed, in `0..=JITTER_MAX`.
///
/// ChaCha8 output is stable across platforms and releases, so the same base
/// always yields the same jitter.
pub fn jitter(base: Seed) -> u64 {
    let mut rng = ChaCha8Rng::seed_from_u64(base);
    rng.gen_range(0..=JITTER_MAX)
}

/// Derive the rotation seed for a context.
pub fn derive(ctx: &RotationContext) -> SeedDerivation {
    if let Some(seed) = ctx.explicit_seed {
        debug!(seed, "using explicit seed");
        return SeedDerivation {
            seed,
            source: SeedSource::Explicit,
        };
    }

    if let Some(raw) = ctx.seed_override.as_deref() {
        let seed = to_u64(raw);
        debug!(seed, "using seed override");
        return SeedDerivation {
            seed,
            source: SeedSource::Override,
        };
    }

    let present: Vec<&str> = ctx.signals().into_iter().flatten().collect();
    let base = present
        .iter()
        .fold(0u64, |acc, signal| acc.wrapping_add(to_u64(signal)));
    let jitter = jitter(base);
    let seed = base.wrapping_add(jitter);

    debug!(
        base,
        jitter,
        signals = present.len(),
        seed,
        "derived seed from context"
    );

    SeedDerivation {
        seed,
        source: SeedSource::Context {
            base,
            jitter,
            signals: present.len(),
        },
    }
}
