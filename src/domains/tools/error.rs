//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur during tool dispatch and upstream fetches.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not in the registry.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// One or more required arguments are absent or empty. Every missing
    /// name is reported so the caller can correct them in one round trip.
    #[error("Missing required arguments: {}", .0.join(", "))]
    MissingArguments(Vec<String>),

    /// An argument value has the wrong shape for its declared type.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    /// The upstream API answered with a non-success status.
    #[error("Upstream request failed with status {status}: {message}")]
    UpstreamStatus { status: u16, message: String },

    /// The upstream request failed at the transport level.
    #[error("Upstream request failed: {0}")]
    Transport(String),

    /// The response body could not be decoded into the expected shape.
    #[error("Response decoding failed: {0}")]
    Decode(String),
}

impl ToolError {
    /// Create an invalid-argument error.
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error was caused by the caller's request rather than
    /// an upstream or internal failure.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownTool(_) | Self::MissingArguments(_) | Self::InvalidArgument { .. }
        )
    }
}
