//! Constants used throughout keyrotor.
//!
//! Centralizes environment variable names and default values.

/// Configuration file name (.keyrotor.toml).
pub const CONFIG_FILE: &str = ".keyrotor.toml";

/// Environment variable pointing at an alternate configuration file.
pub const CONFIG_ENV: &str = "KEYROTOR_CONFIG";

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "KEYROTOR_LOG";

/// Set to `json` for newline-delimited JSON logs on stderr.
pub const LOG_FORMAT_ENV: &str = "KEYROTOR_LOG_FORMAT";

/// Free-form seed override, parsed as an integer or hashed.
pub const SEED_OVERRIDE_ENV: &str = "ROTATION_SEED";

/// Execution-context signals mixed into the base seed.
pub const RUN_ID_ENV: &str = "GITHUB_RUN_ID";
pub const RUN_NUMBER_ENV: &str = "GITHUB_RUN_NUMBER";
pub const RUN_SHA_ENV: &str = "GITHUB_SHA";
pub const RUN_ATTEMPT_ENV: &str = "GITHUB_RUN_ATTEMPT";
pub const WORKFLOW_ENV: &str = "GITHUB_WORKFLOW";
pub const JOB_ENV: &str = "GITHUB_JOB";

/// Environment-propagation file for later steps.
pub const GITHUB_ENV_FILE: &str = "GITHUB_ENV";

/// Step output file.
pub const GITHUB_OUTPUT_FILE: &str = "GITHUB_OUTPUT";

/// Workflow command instructing the log collector to redact a value.
pub const MASK_COMMAND: &str = "::add-mask::";

/// Default output name recording which variable was chosen.
pub const DEFAULT_OUTPUT_NAME: &str = "selected_key_name";

/// Output name of the presence flag.
pub const PRESENT_OUTPUT_NAME: &str = "key_present";

/// Sort tier of the variable named exactly as the prefix.
pub const EXACT_TIER: u64 = 0;

/// Sort tier of candidates whose suffix is not a plain number.
///
/// Always sorts after every numeric suffix.
pub const NON_NUMERIC_TIER: u64 = u64::MAX;

/// Inclusive upper bound of the jitter added to context-derived seeds.
pub const JITTER_MAX: u64 = 1_000_000;
