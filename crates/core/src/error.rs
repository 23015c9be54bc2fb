//! Error types for Heartbeat core

use thiserror::Error;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?} ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Notification delivery errors
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Failed to write notification: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for notification operations
pub type NotifyResult<T> = Result<T, NotifyError>;
