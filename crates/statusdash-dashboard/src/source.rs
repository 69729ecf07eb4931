//! Status collector data source
//!
//! Runs the external collector and parses its stdout into a [`Snapshot`].

use statusdash_core::{CollectorConfig, FetchError, Snapshot};
use std::process::Command;
use std::time::Instant;
use tracing::debug;

/// Anything that can produce a fresh snapshot.
///
/// Fetching is synchronous; the poller moves it onto the blocking pool.
pub trait SnapshotFetcher: Send + Sync + 'static {
    fn fetch(&self) -> Result<Snapshot, FetchError>;
}

/// Snapshot source backed by an external collector process
#[derive(Debug, Clone)]
pub struct CommandSource {
    command: String,
    args: Vec<String>,
}

impl CommandSource {
    /// Create a source that runs `command` with no arguments
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
        }
    }

    /// Create a source from the collector section of the configuration
    pub fn from_config(config: &CollectorConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
        }
    }

    /// Command line for log messages
    pub fn describe(&self) -> String {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl SnapshotFetcher for CommandSource {
    fn fetch(&self) -> Result<Snapshot, FetchError> {
        let started = Instant::now();
        let output = Command::new(&self.command)
            .args(&self.args)
            .output()
            .map_err(|e| {
                FetchError::ProcessFailed(format!("failed to execute {}: {}", self.command, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            return Err(FetchError::ProcessFailed(if stderr.is_empty() {
                format!("{} exited with {}", self.command, output.status)
            } else {
                format!("{} exited with {}: {}", self.command, output.status, stderr)
            }));
        }

        let snapshot = Snapshot::from_json(&output.stdout)?;
        debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            services = snapshot.services.len(),
            "fetched snapshot"
        );
        Ok(snapshot)
    }
}
