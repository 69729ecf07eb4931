//! Dashboard errors use the unified statusdash error type:
//! - `Dashboard(String)` for terminal setup, drawing and event stream failures
//! - `Fetch(FetchError)` for the startup snapshot fetch

pub use statusdash_core::{FetchError, Result, StatusDashError};
