//! Environment snapshot.
//!
//! All process environment reads happen once, in [`Environment::capture`].
//! Everything downstream takes the snapshot as a read-only parameter, so the
//! rotation logic can be tested without touching the real environment.

use std::collections::BTreeMap;
use tracing::debug;

/// Immutable name → value view of the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Snapshot the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped; to the
    /// rest of the tool they look unset.
    pub fn capture() -> Self {
        let mut skipped = 0usize;
        let vars: BTreeMap<String, String> = std::env::vars_os()
            .filter_map(|(name, value)| match (name.into_string(), value.into_string()) {
                (Ok(name), Ok(value)) => Some((name, value)),
                _ => {
                    skipped += 1;
                    None
                }
            })
            .collect();

        debug!(vars = vars.len(), skipped, "captured environment");
        Self { vars }
    }

    /// Raw value of a variable, including empty strings.
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Value of a variable, treating empty or whitespace-only values as unset.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.raw(name).filter(|v| !v.trim().is_empty())
    }

    /// Iterate over all variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of captured variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the snapshot holds no variables.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Environment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
