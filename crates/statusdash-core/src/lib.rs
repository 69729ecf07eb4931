//! # statusdash-core
//!
//! Core types for the statusdash fleet dashboard.
//!
//! - [`Snapshot`] and its parts: the typed form of one status collector
//!   document
//! - [`StatusDashError`] / [`FetchError`]: the unified error types
//! - [`DashConfig`]: TOML configuration (poll interval, collector command,
//!   fixed service order, curated storage and volume keys)

mod config;
mod error;
mod snapshot;

pub use config::{CollectorConfig, DashConfig, LayoutConfig, PanelEntry, DEFAULT_CONFIG_FILE};
pub use error::{FetchError, Result, StatusDashError};
pub use snapshot::{
    BuildInfo, CommitSource, ContainerStats, DirInfo, Module, Port, Service, Snapshot, UserStats,
    VolumeInfo,
};
