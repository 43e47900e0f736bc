//! Rotation engine.
//!
//! One engine for every secret family: a [`Rotation`] carries the provider
//! profile plus per-invocation overrides, and [`Rotation::run`] performs
//! discovery, seed derivation, selection and publication in sequence.

use tracing::{debug, info};

use crate::core::constants::DEFAULT_OUTPUT_NAME;
use crate::core::context::RotationContext;
use crate::core::discovery;
use crate::core::env::Environment;
use crate::core::provider::{MessageVars, Provider};
use crate::core::seed::{self, SeedDerivation};
use crate::core::selector::{self, MissingPolicy, Publication, SelectionResult};
use crate::core::sink::OutputSink;
use crate::core::validation;
use crate::error::{Error, Result, RotationError};

/// A configured rotation request.
#[derive(Debug, Clone)]
pub struct Rotation {
    provider: Provider,
    prefix: Option<String>,
    explicit_seed: Option<u64>,
    export_as: Option<String>,
    output_name: Option<String>,
    missing: MissingPolicy,
}

/// Result of a rotation run.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub prefix: String,
    pub derivation: SeedDerivation,
    /// `None` only when the pool was empty and missing was allowed.
    pub selection: Option<SelectionResult>,
    pub publication: Publication,
    /// Rendered provider success line, when something was selected.
    pub message: Option<String>,
}

impl Outcome {
    /// Whether a candidate was selected.
    pub fn present(&self) -> bool {
        self.selection.is_some()
    }

    /// Name of the chosen source variable.
    pub fn chosen_name(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.chosen.name())
    }
}

impl Rotation {
    /// Rotation for a provider with all defaults.
    pub fn new(provider: Provider) -> Self {
        Self {
            provider,
            prefix: None,
            explicit_seed: None,
            export_as: None,
            output_name: None,
            missing: MissingPolicy::Fail,
        }
    }

    /// Scan `prefix` instead of the provider's.
    pub fn with_prefix(mut self, prefix: Option<String>) -> Self {
        self.prefix = prefix;
        self
    }

    /// Use a fixed seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.explicit_seed = seed;
        self
    }

    /// Export the chosen value under `name`.
    pub fn with_export_as(mut self, name: Option<String>) -> Self {
        self.export_as = name;
        self
    }

    /// Record the chosen variable under output `name`.
    pub fn with_output_name(mut self, name: Option<String>) -> Self {
        self.output_name = name;
        self
    }

    pub fn with_missing(mut self, policy: MissingPolicy) -> Self {
        self.missing = policy;
        self
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    /// Effective prefix: override, else the provider's.
    pub fn prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or(&self.provider.prefix)
    }

    /// Effective export target and output name.
    ///
    /// Export target falls back to the provider's, then the prefix. Output
    /// name falls back to the provider's, then `selected_key_name`.
    pub fn publication(&self) -> Publication {
        Publication {
            export_as: self
                .export_as
                .clone()
                .or_else(|| self.provider.export_as.clone())
                .unwrap_or_else(|| self.prefix().to_string()),
            output_name: self
                .output_name
                .clone()
                .or_else(|| self.provider.output_name.clone())
                .unwrap_or_else(|| DEFAULT_OUTPUT_NAME.to_string()),
        }
    }

    /// Validate every name that ends up in a CI channel.
    pub fn validate(&self) -> Result<()> {
        let publication = self.publication();
        validation::validate_var_name("prefix", self.prefix())?;
        validation::validate_var_name("export target", &publication.export_as)?;
        validation::validate_output_name(&publication.output_name)?;
        Ok(())
    }

    /// Rotation context for `env`, carrying this request's explicit seed.
    pub fn context(&self, env: &Environment) -> RotationContext {
        RotationContext::from_env(env, self.explicit_seed)
    }

    /// Discover, derive and select without publishing anything.
    ///
    /// # Errors
    ///
    /// Returns `RotationError::EmptyPool` with the provider's message when
    /// nothing is found and missing is not allowed.
    pub fn plan(&self, env: &Environment) -> Result<Outcome> {
        self.validate()?;

        let prefix = self.prefix().to_string();
        let publication = self.publication();
        let candidates = discovery::discover(&prefix, env);
        let derivation = seed::derive(&self.context(env));

        debug!(
            prefix = %prefix,
            pool = candidates.len(),
            seed = derivation.seed,
            "planning rotation"
        );

        let selection = match selector::select(candidates, derivation.seed, self.missing) {
            Ok(selection) => selection,
            Err(Error::Rotation(RotationError::NoCandidates)) => {
                return Err(RotationError::EmptyPool {
                    message: self.provider.missing_message(&prefix),
                    prefix,
                }
                .into());
            }
            Err(e) => return Err(e),
        };

        let message = selection.as_ref().map(|s| {
            self.provider.success_message(&MessageVars {
                prefix: &prefix,
                name: s.chosen.name(),
                index: s.index + 1,
                count: s.pool_size,
                target: &publication.export_as,
            })
        });

        Ok(Outcome {
            prefix,
            derivation,
            selection,
            publication,
            message,
        })
    }

    /// Plan, then publish through `sink`.
    pub fn run(&self, env: &Environment, sink: &mut dyn OutputSink) -> Result<Outcome> {
        let outcome = self.plan(env)?;
        selector::publish(outcome.selection.as_ref(), &outcome.publication, sink)?;

        info!(
            prefix = %outcome.prefix,
            present = outcome.present(),
            chosen = outcome.chosen_name().unwrap_or("-"),
            "rotation complete"
        );
        Ok(outcome)
    }
}
