//! Configuration management for statusdash
//!
//! Settings live in a TOML file (`statusdash.toml` in the working directory
//! by default). Every field has a default, so an empty or missing file yields
//! the stock AzerothCore-style layout.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::{Result, StatusDashError};

/// File looked up in the working directory when no config path is given
pub const DEFAULT_CONFIG_FILE: &str = "statusdash.toml";

/// Top-level dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashConfig {
    /// Seconds between background snapshot polls
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,

    /// External status collector
    #[serde(default)]
    pub collector: CollectorConfig,

    /// Fixed ordering and curated panel contents
    #[serde(default)]
    pub layout: LayoutConfig,
}

/// How to invoke the status collector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectorConfig {
    /// Executable to run
    #[serde(default = "default_collector_command")]
    pub command: String,

    /// Arguments passed to the executable (none by default)
    #[serde(default)]
    pub args: Vec<String>,
}

/// Constants that shape the composed dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Long-running services, shown first and in this order
    #[serde(default = "default_persistent_services")]
    pub persistent_services: Vec<String>,

    /// Draw a glyph between table columns
    #[serde(default)]
    pub column_separators: bool,

    /// Storage keys shown in the Storage panel, in display order
    #[serde(default = "default_storage_entries")]
    pub storage_entries: Vec<PanelEntry>,

    /// Volume keys shown in the Volumes panel, in display order
    #[serde(default = "default_volume_entries")]
    pub volume_entries: Vec<PanelEntry>,
}

/// A snapshot map key and the label it is displayed under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelEntry {
    pub key: String,
    pub label: String,
}

impl PanelEntry {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

// Default value providers
fn default_refresh_secs() -> u64 {
    5
}

fn default_collector_command() -> String {
    "./scripts/bash/statusjson.sh".to_string()
}

fn default_persistent_services() -> Vec<String> {
    [
        "ac-mysql",
        "ac-db-guard",
        "ac-authserver",
        "ac-worldserver",
        "ac-phpmyadmin",
        "ac-keira3",
        "ac-backup",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_storage_entries() -> Vec<PanelEntry> {
    vec![
        PanelEntry::new("storage", "Storage"),
        PanelEntry::new("local_storage", "Local Storage"),
        PanelEntry::new("client_data", "Client Data"),
        PanelEntry::new("modules", "Modules"),
        PanelEntry::new("local_modules", "Local Modules"),
    ]
}

fn default_volume_entries() -> Vec<PanelEntry> {
    vec![
        PanelEntry::new("client_cache", "Client Cache"),
        PanelEntry::new("mysql_data", "MySQL Data"),
    ]
}

impl DashConfig {
    /// Load configuration from an explicit file; the file must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            StatusDashError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Load `statusdash.toml` from `dir` or use defaults
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let config_path = dir.join(DEFAULT_CONFIG_FILE);

        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "loading configuration");
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| StatusDashError::Config(format!("Failed to parse config file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| StatusDashError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Reject settings the dashboard cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.refresh_secs == 0 {
            return Err(StatusDashError::Config(
                "refresh_secs must be at least 1".to_string(),
            ));
        }
        if self.collector.command.trim().is_empty() {
            return Err(StatusDashError::Config(
                "collector.command must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Poll interval as a `Duration`
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_secs)
    }
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            refresh_secs: default_refresh_secs(),
            collector: CollectorConfig::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            command: default_collector_command(),
            args: Vec::new(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            persistent_services: default_persistent_services(),
            column_separators: false,
            storage_entries: default_storage_entries(),
            volume_entries: default_volume_entries(),
        }
    }
}
