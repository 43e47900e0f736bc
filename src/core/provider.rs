//! Provider profiles.
//!
//! A provider is plain configuration for the one rotation engine: which
//! prefix to scan and how to word its messages. Built-in profiles cover the
//! common API key families; `.keyrotor.toml` can add or replace them.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default message when no candidate exists.
pub const DEFAULT_MISSING_MESSAGE: &str =
    "no candidates found for {prefix}: set {prefix} or {prefix}_<n> to a non-empty value";

/// Default message after a successful selection.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "selected {name} ({index} of {count}) as {target}";

/// Name of the provider used when none is given.
pub const DEFAULT_PROVIDER: &str = "generic";

/// Secret family settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    /// Profile name; filled from the table key when loaded from config.
    #[serde(default)]
    pub name: String,
    /// Variable prefix of the candidate pool.
    pub prefix: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Template for the empty-pool error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_message: Option<String>,
    /// Template for the success line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_message: Option<String>,
    /// Default export target; the prefix when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_as: Option<String>,
    /// Default output name for the chosen variable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_name: Option<String>,
}

/// Values substituted into message templates.
#[derive(Debug, Default, Clone, Copy)]
pub struct MessageVars<'a> {
    pub prefix: &'a str,
    pub name: &'a str,
    /// One-based position of the chosen candidate.
    pub index: usize,
    pub count: usize,
    pub target: &'a str,
}

/// Substitute `{prefix}`, `{name}`, `{index}`, `{count}` and `{target}`.
pub fn render(template: &str, vars: &MessageVars<'_>) -> String {
    template
        .replace("{prefix}", vars.prefix)
        .replace("{name}", vars.name)
        .replace("{index}", &vars.index.to_string())
        .replace("{count}", &vars.count.to_string())
        .replace("{target}", vars.target)
}

impl Provider {
    /// Minimal profile for a prefix.
    pub fn new(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
            description: None,
            missing_message: None,
            success_message: None,
            export_as: None,
            output_name: None,
        }
    }

    fn described(name: &str, prefix: &str, description: &str, family: &str) -> Self {
        Self {
            description: Some(description.to_string()),
            missing_message: Some(format!(
                "no {} API key found: set {{prefix}} or {{prefix}}_<n> in the job environment",
                family
            )),
            ..Self::new(name, prefix)
        }
    }

    /// All built-in profiles.
    pub fn builtins() -> Vec<Self> {
        vec![
            Self {
                description: Some("any pool of interchangeable secrets".to_string()),
                ..Self::new(DEFAULT_PROVIDER, "API_KEY")
            },
            Self::described("openai", "OPENAI_API_KEY", "OpenAI API keys", "OpenAI"),
            Self::described(
                "anthropic",
                "ANTHROPIC_API_KEY",
                "Anthropic API keys",
                "Anthropic",
            ),
            Self::described("gemini", "GEMINI_API_KEY", "Google Gemini API keys", "Gemini"),
        ]
    }

    /// Look up a built-in profile.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownProvider` if no built-in has that name.
    pub fn builtin(name: &str) -> Result<Self> {
        Self::builtins()
            .into_iter()
            .find(|p| p.name == name)
            .ok_or_else(|| ConfigError::UnknownProvider(name.to_string()).into())
    }

    /// Rendered empty-pool message. Always names the prefix.
    pub fn missing_message(&self, prefix: &str) -> String {
        let template = self
            .missing_message
            .as_deref()
            .unwrap_or(DEFAULT_MISSING_MESSAGE);
        let message = render(
            template,
            &MessageVars {
                prefix,
                ..Default::default()
            },
        );
        if message.contains(prefix) {
            message
        } else {
            format!("{} (prefix: {})", message, prefix)
        }
    }

    /// Rendered success line.
    pub fn success_message(&self, vars: &MessageVars<'_>) -> String {
        let template = self
            .success_message
            .as_deref()
            .unwrap_or(DEFAULT_SUCCESS_MESSAGE);
        render(template, vars)
    }
}
