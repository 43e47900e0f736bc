//! Execution-context signals used for seeding.

use crate::core::constants;
use crate::core::env::Environment;

/// Read-only snapshot of everything seed derivation may look at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RotationContext {
    /// Caller-supplied seed; bypasses everything else.
    pub explicit_seed: Option<u64>,
    /// Free-form override, parsed as an integer or hashed.
    pub seed_override: Option<String>,
    pub run_id: Option<String>,
    pub run_number: Option<String>,
    pub run_sha: Option<String>,
    pub run_attempt: Option<String>,
    pub workflow: Option<String>,
    pub job: Option<String>,
}

impl RotationContext {
    /// Build a context from an environment snapshot.
    ///
    /// Blank variables count as absent.
    pub fn from_env(env: &Environment, explicit_seed: Option<u64>) -> Self {
        let read = |name: &str| env.get(name).map(str::to_string);

        Self {
            explicit_seed,
            seed_override: read(constants::SEED_OVERRIDE_ENV),
            run_id: read(constants::RUN_ID_ENV),
            run_number: read(constants::RUN_NUMBER_ENV),
            run_sha: read(constants::RUN_SHA_ENV),
            run_attempt: read(constants::RUN_ATTEMPT_ENV),
            workflow: read(constants::WORKFLOW_ENV),
            job: read(constants::JOB_ENV),
        }
    }

    /// Context signals mixed into the base seed, in a fixed order.
    pub fn signals(&self) -> [Option<&str>; 6] {
        [
            self.run_id.as_deref(),
            self.run_number.as_deref(),
            self.run_sha.as_deref(),
            self.run_attempt.as_deref(),
            self.workflow.as_deref(),
            self.job.as_deref(),
        ]
    }
}
