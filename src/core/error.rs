//! Error types for the logger system

use std::sync::Arc;

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Receives failures that the logger absorbs instead of returning.
pub type ErrorCallback = Arc<dyn Fn(&LoggerError) + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The native side rejected a call
    #[error("bridge {operation} failed: {message}")]
    BridgeRejected { operation: String, message: String },

    /// No native side is reachable
    #[error("bridge unavailable: {0}")]
    BridgeUnavailable(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Channel send error
    #[error("Failed to queue bridge command for the worker")]
    ChannelSend,

    /// Dispatcher already stopped
    #[error("Bridge dispatcher already stopped")]
    LoggerStopped,

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create a bridge rejection error
    pub fn bridge_rejected(operation: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::BridgeRejected {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

/// Format a failure the way the error channel prints it.
pub fn error_channel_line(error: &LoggerError) -> String {
    format!("[Logger] {}", error)
}

/// The default error channel: stderr.
pub fn stderr_error_callback() -> ErrorCallback {
    Arc::new(|error: &LoggerError| eprintln!("{}", error_channel_line(error)))
}
