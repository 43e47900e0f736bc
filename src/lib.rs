//! Keyrotor - Deterministic credential rotation for CI pipelines.
//!
//! Picks one secret from a pool of interchangeable ones (`API_KEY`,
//! `API_KEY_2`, ...) on every workflow step. The pick is reproducible within
//! a run and moves between reruns, attempts, workflows and jobs.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── select        # Rotate and publish
//! │   ├── list          # Show the candidate pool
//! │   ├── seed          # Explain the derived seed
//! │   ├── providers     # Show provider profiles
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── env           # Environment snapshot
//!     ├── context       # Seeding signals
//!     ├── discovery     # Candidate discovery and ordering
//!     ├── seed          # Seed derivation
//!     ├── selector      # Selection and publication
//!     ├── sink          # CI output channels
//!     ├── provider      # Provider profiles
//!     ├── config        # .keyrotor.toml management
//!     └── rotation      # The rotation engine
//! ```
//!
//! # Example
//!
//! ```
//! use keyrotor::core::env::Environment;
//! use keyrotor::core::provider::Provider;
//! use keyrotor::core::rotation::Rotation;
//! use keyrotor::core::sink::RecordingSink;
//!
//! let env: Environment = [("API_KEY", "primary"), ("API_KEY_2", "secondary")]
//!     .into_iter()
//!     .collect();
//! let mut sink = RecordingSink::new();
//!
//! let outcome = Rotation::new(Provider::new("generic", "API_KEY"))
//!     .with_seed(Some(1))
//!     .run(&env, &mut sink)
//!     .unwrap();
//!
//! assert_eq!(outcome.chosen_name(), Some("API_KEY_2"));
//! assert_eq!(sink.output("key_present"), Some("true"));
//! ```

pub mod cli;
pub mod core;
pub mod error;
