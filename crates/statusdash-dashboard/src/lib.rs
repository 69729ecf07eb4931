//! # statusdash-dashboard
//!
//! Live terminal dashboard for a fleet of containerized services.
//!
//! A background poller re-runs the status collector on a fixed interval and
//! hands each new [`Snapshot`](statusdash_core::Snapshot) to the UI loop
//! through a single-slot handoff. The UI loop owns all state, merges key,
//! resize and snapshot inputs, and redraws once per input that changes what
//! is on screen.
//!
//! ## Usage
//!
//! ```bash
//! statusdash                     # run the dashboard
//! statusdash -i 10 dashboard     # poll every 10 seconds
//! ```
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────┬ Build ────────┬ Users ────────┐
//! │ Host: ...    │ Branch: main  │  Accounts: 12 │
//! ├ Services ────────────────┬ Ports ───────────┤
//! │ Service  Status  Health  │ Port  Number  Up │
//! ├ Modules ┬ Controls ┬ Storage ─────────────────┤
//! │         ├ Module   ├ Volumes ─────────────────┤
//! └─────────┴──────────┴──────────────────────────┘
//! ```

mod error;

pub use error::{FetchError, Result, StatusDashError};

pub mod format;
pub mod host;
pub mod partition;
pub mod poller;
pub mod source;
pub mod widgets;

pub use host::HostInfo;
pub use partition::partition;
pub use poller::{handoff, spawn_poller, HandoffReceiver, HandoffSender, Offer};
pub use source::{CommandSource, SnapshotFetcher};

mod app;
mod event;
mod run;
mod terminal;
mod ui;

pub use app::{App, Control};
pub use event::Input;
pub use run::{fetch_once, run, run_with_source};
pub use ui::{compose, DashboardLayout, DashboardView, RenderContext};
