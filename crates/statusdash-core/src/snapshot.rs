//! Snapshot model
//!
//! One point-in-time status document as emitted by the status collector.
//! Field names follow the collector's JSON keys. Missing fields and fields
//! that arrive as `null` take their default value.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// A complete status snapshot of the service fleet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    /// Collector timestamp, displayed verbatim
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: String,
    /// Compose project name
    #[serde(deserialize_with = "null_as_default")]
    pub project: String,
    /// Container network name
    #[serde(deserialize_with = "null_as_default")]
    pub network: String,
    #[serde(deserialize_with = "null_as_default")]
    pub services: Vec<Service>,
    #[serde(deserialize_with = "null_as_default")]
    pub ports: Vec<Port>,
    #[serde(deserialize_with = "null_as_default")]
    pub modules: Vec<Module>,
    /// Storage directories keyed by well-known storage key
    #[serde(deserialize_with = "null_as_default")]
    pub storage: HashMap<String, DirInfo>,
    /// Named volumes keyed by well-known volume key
    #[serde(deserialize_with = "null_as_default")]
    pub volumes: HashMap<String, VolumeInfo>,
    #[serde(deserialize_with = "null_as_default")]
    pub users: UserStats,
    /// Container resource usage keyed by service name
    #[serde(deserialize_with = "null_as_default")]
    pub stats: HashMap<String, ContainerStats>,
    #[serde(deserialize_with = "null_as_default")]
    pub build: BuildInfo,
}

impl Snapshot {
    /// Parse a snapshot from the collector's JSON output
    pub fn from_json(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Number of modules in this snapshot
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Module at `index`, if any
    pub fn module(&self, index: usize) -> Option<&Module> {
        self.modules.get(index)
    }

    /// Resource stats for a service, looked up by service name
    pub fn stats_for(&self, service: &Service) -> Option<&ContainerStats> {
        self.stats.get(&service.name)
    }
}

/// A single container service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    /// Stable container name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Display label
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    /// Container state token ("running", "exited", "restarting", ...)
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    /// Health token ("healthy", "unhealthy", ...) or free text
    #[serde(deserialize_with = "null_as_default")]
    pub health: String,
    /// Container start time, ISO-8601 (may be empty)
    #[serde(deserialize_with = "null_as_default")]
    pub started_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    /// Exit code as reported by the runtime; empty or "0" means no failure
    #[serde(deserialize_with = "null_as_default")]
    pub exit_code: String,
}

impl Service {
    /// Whether this service stopped with a meaningful (non-zero) exit code
    pub fn exited_with_error(&self) -> bool {
        self.status != "running" && !self.exit_code.is_empty() && self.exit_code != "0"
    }
}

/// Container resource usage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerStats {
    /// CPU usage percentage
    #[serde(deserialize_with = "null_as_default")]
    pub cpu: f64,
    /// Memory usage formatted as "<used> / <total>"
    #[serde(deserialize_with = "null_as_default")]
    pub memory: String,
    #[serde(deserialize_with = "null_as_default")]
    pub memory_percent: f64,
}

impl ContainerStats {
    /// The "used" half of the memory string
    pub fn memory_used(&self) -> &str {
        self.memory.split(" / ").next().unwrap_or_default()
    }
}

/// An exposed port and whether it answered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Port {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Port label (number or "host:port")
    #[serde(deserialize_with = "null_as_default")]
    pub port: String,
    #[serde(deserialize_with = "null_as_default")]
    pub reachable: bool,
}

/// Host directory backing some storage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub exists: bool,
    /// Human-readable size ("1.2G")
    #[serde(deserialize_with = "null_as_default")]
    pub size: String,
}

/// Named container volume
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub exists: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub mountpoint: String,
}

/// Installed add-on module
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Module {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
}

/// Game account statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserStats {
    #[serde(deserialize_with = "null_as_default")]
    pub accounts: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub online: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub characters: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub active7d: i64,
}

/// Where the reported commit hash came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitSource {
    /// Read from the image's labels
    ImageLabel,
    /// Read from a local source checkout
    SourceTree,
    Other,
}

/// Build metadata of the running images
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub variant: String,
    #[serde(deserialize_with = "null_as_default")]
    pub repo: String,
    #[serde(deserialize_with = "null_as_default")]
    pub branch: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub commit: String,
    #[serde(deserialize_with = "null_as_default")]
    pub commit_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub commit_source: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source_path: String,
}

impl BuildInfo {
    /// Parsed provenance of `commit`
    pub fn commit_source(&self) -> CommitSource {
        match self.commit_source.as_str() {
            "image-label" => CommitSource::ImageLabel,
            "source-tree" => CommitSource::SourceTree,
            _ => CommitSource::Other,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
