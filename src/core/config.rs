//! Configuration file management.
//!
//! Handles reading and validating the optional `.keyrotor.toml` file. The
//! file is never required: without it, built-in providers and defaults apply.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::provider::{Provider, DEFAULT_PROVIDER};
use crate::core::validation;
use crate::error::{ConfigError, Result};

/// Project configuration stored in `.keyrotor.toml`
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Defaults applied when the CLI leaves a setting unspecified
    #[serde(default)]
    pub defaults: Defaults,
    /// Custom provider profiles keyed by name
    #[serde(default)]
    pub providers: BTreeMap<String, Provider>,
}

/// Defaults section of the configuration
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Provider used when `--provider` is not given
    #[serde(default)]
    pub provider: Option<String>,
    /// Treat an empty pool as a skip instead of a failure
    #[serde(default)]
    pub allow_missing: bool,
    /// Output name recording the chosen variable
    #[serde(default)]
    pub output_name: Option<String>,
}

impl Config {
    /// Path to the configuration file in the current directory
    pub fn default_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load configuration.
    ///
    /// With an explicit `path` the file must exist. Without one,
    /// `.keyrotor.toml` in the current directory is used if present and
    /// defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse`, or a
    /// validation error for bad provider prefixes.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let p = Self::default_path();
                if !p.exists() {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                p
            }
        };

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadFile {
            path: path.clone(),
            source,
        })?;
        Self::parse(&contents, &path)
    }

    /// Parse configuration text; `path` is only used in error messages.
    pub fn parse(contents: &str, path: &Path) -> Result<Self> {
        let mut config: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        for (name, provider) in config.providers.iter_mut() {
            provider.name = name.clone();
        }

        debug!(providers = config.providers.len(), "config loaded");

        config.validate()?;
        Ok(config)
    }

    /// Validate provider prefixes and default names
    pub fn validate(&self) -> Result<()> {
        for provider in self.providers.values() {
            validation::validate_var_name("prefix", &provider.prefix)?;
            if let Some(target) = &provider.export_as {
                validation::validate_var_name("export target", target)?;
            }
            if let Some(output) = &provider.output_name {
                validation::validate_output_name(output)?;
            }
        }
        if let Some(output) = &self.defaults.output_name {
            validation::validate_output_name(output)?;
        }
        Ok(())
    }

    /// Resolve a provider by name, falling back to the configured default.
    ///
    /// Configured profiles take precedence over built-ins of the same name.
    pub fn provider(&self, name: Option<&str>) -> Result<Provider> {
        let name = name
            .or(self.defaults.provider.as_deref())
            .unwrap_or(DEFAULT_PROVIDER);

        match self.providers.get(name) {
            Some(provider) => Ok(provider.clone()),
            None => Provider::builtin(name),
        }
    }

    /// Every available provider, configured ones replacing built-ins.
    pub fn providers(&self) -> Vec<Provider> {
        let mut all: BTreeMap<String, Provider> = Provider::builtins()
            .into_iter()
            .map(|p| (p.name.clone(), p))
            .collect();
        all.extend(self.providers.clone());
        all.into_values().collect()
    }
}
