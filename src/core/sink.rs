//! Output channels.
//!
//! The selector never touches files or stdout itself. It publishes through an
//! [`OutputSink`]:
//!
//! - [`GithubActions`] appends to the files named by `GITHUB_ENV` and
//!   `GITHUB_OUTPUT`, falling back to stdout when they are unset
//! - [`RecordingSink`] keeps everything in memory (dry runs and tests)

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::core::constants;
use crate::core::env::Environment;
use crate::error::{Result, RotationError};

/// Append-only destination for rotation side effects.
///
/// Every call writes one self-contained record; calls are idempotent and
/// their relative order does not matter to the CI host.
pub trait OutputSink {
    /// Ask the log collector to redact `value` from all later output.
    fn mask(&mut self, value: &str) -> Result<()>;

    /// Make `value` available to later steps as environment variable `name`.
    fn export_env(&mut self, name: &str, value: &str) -> Result<()>;

    /// Record a non-sensitive step output.
    fn set_output(&mut self, name: &str, value: &str) -> Result<()>;
}

/// Render one `NAME=VALUE` record.
///
/// Multi-line values use the heredoc form with a delimiter that does not
/// occur in the value.
pub fn format_record(name: &str, value: &str) -> String {
    if !value.contains('\n') && !value.contains('\r') {
        return format!("{}={}\n", name, value);
    }

    let mut delimiter = String::from("KEYROTOR_EOF");
    let mut n = 0u32;
    while value.contains(&delimiter) {
        n += 1;
        delimiter = format!("KEYROTOR_EOF_{}", n);
    }
    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}

/// GitHub Actions workflow-command sink.
pub struct GithubActions<W: Write> {
    env_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    stdout: W,
}

impl GithubActions<std::io::Stdout> {
    /// Sink using the channel files named in `env`, writing to process stdout.
    pub fn from_env(env: &Environment) -> Self {
        Self::new(
            env.get(constants::GITHUB_ENV_FILE).map(PathBuf::from),
            env.get(constants::GITHUB_OUTPUT_FILE).map(PathBuf::from),
            std::io::stdout(),
        )
    }
}

impl<W: Write> GithubActions<W> {
    /// Create a sink with explicit channel files and stdout writer.
    pub fn new(env_file: Option<PathBuf>, output_file: Option<PathBuf>, stdout: W) -> Self {
        debug!(
            env_file = ?env_file,
            output_file = ?output_file,
            "configured github actions sink"
        );
        Self {
            env_file,
            output_file,
            stdout,
        }
    }

    /// Consume the sink and return the stdout writer.
    pub fn into_stdout(self) -> W {
        self.stdout
    }

    fn append(&mut self, channel: &'static str, file: Option<&Path>, record: &str) -> Result<()> {
        match file {
            Some(path) => {
                trace!(channel, path = %path.display(), "appending record");
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .and_then(|mut f| f.write_all(record.as_bytes()))
                    .map_err(|source| RotationError::Sink {
                        channel,
                        path: path.to_path_buf(),
                        source,
                    })?;
            }
            None => {
                trace!(channel, "channel file unset, writing to stdout");
                self.stdout.write_all(record.as_bytes())?;
                self.stdout.flush()?;
            }
        }
        Ok(())
    }
}

impl<W: Write> OutputSink for GithubActions<W> {
    fn mask(&mut self, value: &str) -> Result<()> {
        // The collector matches masks per line
        let mut directives = String::new();
        for line in value.lines().filter(|l| !l.trim().is_empty()) {
            directives.push_str(constants::MASK_COMMAND);
            directives.push_str(line);
            directives.push('\n');
        }
        self.stdout.write_all(directives.as_bytes())?;
        self.stdout.flush()?;
        Ok(())
    }

    fn export_env(&mut self, name: &str, value: &str) -> Result<()> {
        let record = format_record(name, value);
        let file = self.env_file.clone();
        self.append("env", file.as_deref(), &record)
    }

    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        let record = format_record(name, value);
        let file = self.output_file.clone();
        self.append("output", file.as_deref(), &record)
    }
}

/// In-memory sink.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingSink {
    pub masked: Vec<String>,
    pub exported: Vec<(String, String)>,
    pub outputs: Vec<(String, String)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of the last output recorded under `name`.
    pub fn output(&self, name: &str) -> Option<&str> {
        self.outputs
            .iter()
            .rev()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

impl OutputSink for RecordingSink {
    fn mask(&mut self, value: &str) -> Result<()> {
        self.masked.push(value.to_string());
        Ok(())
    }

    fn export_env(&mut self, name: &str, value: &str) -> Result<()> {
        self.exported.push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        self.outputs.push((name.to_string(), value.to_string()));
        Ok(())
    }
}
