//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// An environment variable name (e.g., OPENAI_API_KEY_2).
pub type VarName = String;

/// Sort tier of a candidate; lower tiers come first.
pub type Tier = u64;

/// The 64-bit value that indexes into a candidate pool.
pub type Seed = u64;
