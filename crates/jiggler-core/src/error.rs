//! Core error types for jiggler-core.
//!
//! Failures are classified at the boundary of each external call (position
//! query, display query, relative move) so that callers can tell them apart
//! without string matching. Every error is fatal to the jiggle loop.

use thiserror::Error;

/// Core error type for jiggler-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Input-simulation failures
    #[error(transparent)]
    Pointer(#[from] PointerError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Writing a status line to the console failed
    #[error("failed to write status line: {0}")]
    Report(#[from] std::io::Error),
}

/// Errors raised by a [`Pointer`](crate::pointer::Pointer) backend.
#[derive(Error, Debug)]
pub enum PointerError {
    /// The input backend could not be reached (no display, no session).
    #[error("input backend unavailable: {0}")]
    Unavailable(String),

    /// Reading the cursor coordinates failed
    #[error("failed to read pointer position: {0}")]
    Position(String),

    /// Reading the main display dimensions failed
    #[error("failed to read display size: {0}")]
    DisplaySize(String),

    /// A relative move was rejected
    #[error("failed to move pointer by ({dx}, {dy}): {message}")]
    Move { dx: i32, dy: i32, message: String },

    /// The cursor sat on a screen corner while the fail-safe was armed
    #[error("fail-safe triggered from mouse moving to a corner of the screen ({x}, {y})")]
    FailSafe { x: i32, y: i32 },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl From<enigo::NewConError> for PointerError {
    fn from(err: enigo::NewConError) -> Self {
        PointerError::Unavailable(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
