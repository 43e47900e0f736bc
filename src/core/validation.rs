//! Input validation for keyrotor operations.
//!
//! Validates prefixes, export targets and output names before anything is
//! written to a CI channel.

use crate::error::{Result, ValidationError};

/// Validate an environment variable name (prefix or export target).
///
/// Names must be valid environment variable names:
/// - Only ASCII letters, digits, and underscore
/// - Cannot start with a digit
/// - Cannot be empty
///
/// # Arguments
///
/// * `kind` - What the name is used for (for error messages)
/// * `name` - The name to validate
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_var_name(kind: &'static str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName(kind).into());
    }

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidName {
            kind,
            name: name.to_string(),
            reason: "cannot start with a digit".to_string(),
        }
        .into());
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' {
            return Err(ValidationError::InvalidName {
                kind,
                name: name.to_string(),
                reason: format!(
                    "invalid character '{}' at position {}. Only letters, digits, and underscore are allowed",
                    ch,
                    i + 1
                ),
            }
            .into());
        }
    }

    Ok(())
}

/// Validate a step output name.
///
/// Output names may also contain `-`, but never `=` or whitespace, which
/// would corrupt the `NAME=VALUE` record.
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_output_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName("output name").into());
    }

    if let Some((i, ch)) = name
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_alphanumeric() && *c != '_' && *c != '-')
    {
        return Err(ValidationError::InvalidName {
            kind: "output name",
            name: name.to_string(),
            reason: format!("invalid character '{}' at position {}", ch.escape_debug(), i + 1),
        }
        .into());
    }

    Ok(())
}
