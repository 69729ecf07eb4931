//! Unified error types for statusdash

use thiserror::Error;

/// Failure to obtain a snapshot from the status collector.
///
/// Callers treat both variants the same way (the fetch produced nothing);
/// the split only matters for diagnostics.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The collector could not be started or exited non-zero
    #[error("status collector failed: {0}")]
    ProcessFailed(String),

    /// The collector output is not a valid snapshot document
    #[error("status collector output is not a valid snapshot: {0}")]
    ParseFailed(#[from] serde_json::Error),
}

/// Unified error type for all statusdash operations
#[derive(Error, Debug)]
pub enum StatusDashError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Configuration error: {0}")]
    Config(String),

    // Terminal setup, rendering and event stream errors
    #[error("Dashboard error: {0}")]
    Dashboard(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias using StatusDashError
pub type Result<T> = std::result::Result<T, StatusDashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_is_transparent() {
        let err: StatusDashError = FetchError::ProcessFailed("exit status: 2".to_string()).into();
        assert_eq!(err.to_string(), "status collector failed: exit status: 2");
    }

    #[test]
    fn test_parse_failure_converts_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = FetchError::from(serde_err);
        assert!(matches!(err, FetchError::ParseFailed(_)));
        assert!(err.to_string().starts_with("status collector output"));
    }
}
