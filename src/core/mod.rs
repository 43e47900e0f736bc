//! Core library components.
//!
//! This module contains the rotation logic: candidate discovery, seed
//! derivation, selection, and the output channels selections are published to.

pub mod candidate;
pub mod config;
pub mod constants;
pub mod context;
pub mod discovery;
pub mod env;
pub mod provider;
pub mod rotation;
pub mod seed;
pub mod selector;
pub mod sink;
pub mod types;
pub mod validation;
