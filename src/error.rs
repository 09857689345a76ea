//! Error types for Rentscope.
//!
//! The binary boundary uses `color_eyre` for human-readable reports; library
//! code returns `RentscopeError` so callers can match on the failure kind.

use thiserror::Error;

/// Unified error type for the statistics dashboard.
#[derive(Debug, Error)]
pub enum RentscopeError {
    /// Terminal setup, teardown, or drawing failed.
    #[error("terminal I/O error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The crossterm event stream ended or produced an error.
    #[error("event stream error: {message}")]
    EventStream {
        /// Description of what went wrong while reading input events
        message: String,
    },

    /// Serializing the mock datasets for `--dump-stats` failed.
    #[error("dataset serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<std::convert::Infallible> for RentscopeError {
    fn from(err: std::convert::Infallible) -> Self {
        match err {}
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RentscopeError>;

// ============================================================================
// Tests
// ============================================================================
