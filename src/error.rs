//! Error types for navigation content loading.

use thiserror::Error;

/// Result type for navigation operations.
pub type Result<T> = std::result::Result<T, NavError>;

/// Errors that can occur while loading the navigation tree.
///
/// Rendering itself never fails; these only surface at config load time.
#[derive(Error, Debug)]
pub enum NavError {
    #[error("Failed to parse navigation data: {0}")]
    Parse(String),

    #[error("Invalid navigation data: {0}")]
    Invalid(String),
}

impl From<serde_json::Error> for NavError {
    fn from(e: serde_json::Error) -> Self {
        NavError::Parse(e.to_string())
    }
}
