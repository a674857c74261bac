//! Error types for Tripboard core operations.
//!
//! Store operations themselves are total and never return these. Errors only
//! arise at the edges: parsing user-supplied names and decoding JSON payloads
//! handed to the store by external collaborators.

use thiserror::Error;

/// Result type alias for Tripboard operations.
pub type Result<T> = std::result::Result<T, TripboardError>;

/// Core error type for Tripboard operations.
#[derive(Debug, Error)]
pub enum TripboardError {
    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON encoding or decoding error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for TripboardError {
    fn from(err: serde_json::Error) -> Self {
        TripboardError::Serialization(err.to_string())
    }
}
