//! Error types for the window toolkit
//!
//! The interaction core itself never fails: geometry is clamped and misses
//! are ordinary results. These errors only surface at the host boundary.

use crate::types::WindowId;

/// Errors that can occur at the toolkit's host-facing API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// Window with the given ID was not found
    WindowNotFound(WindowId),

    /// A surface cannot have a zero or oversized dimension
    InvalidSurface {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// An operation was attempted that is not valid in the current state
    InvalidOperation {
        /// The operation that was attempted
        op: &'static str,
        /// Why the operation failed
        reason: &'static str,
    },

    /// JSON serialization or deserialization failed
    SerializationError(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WindowNotFound(id) => write!(f, "window not found: {}", id),
            Self::InvalidSurface { width, height } => {
                write!(f, "invalid surface size {}x{}", width, height)
            }
            Self::InvalidOperation { op, reason } => {
                write!(f, "invalid operation '{}': {}", op, reason)
            }
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

impl From<serde_json::Error> for DesktopError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Result type alias for toolkit operations
pub type DesktopResult<T> = Result<T, DesktopError>;
