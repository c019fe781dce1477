//! Errors raised while building controls
//!
//! Controls never fail once they exist. The only failures are configuration
//! mistakes caught at construction.

use thiserror::Error;

/// Control construction errors
#[derive(Debug, Error)]
pub enum ControlError {
    /// A selectable strip was given fewer than two items
    #[error("selectable strip requires at least 2 items, got {0}")]
    InsufficientItems(usize),

    /// Configuration values out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed
    #[error("Configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result alias for control construction
pub type Result<T> = std::result::Result<T, ControlError>;
