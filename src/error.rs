use thiserror::Error;

use crate::recipes::RecipeError;

/// Failure kinds surfaced by the tracker.
///
/// Storage failures are absorbed by [`crate::core::store::StateStore`] and only
/// travel as far as the medium boundary; validation failures are raised by
/// [`crate::core::validate`] before any value reaches the document.
#[derive(Debug, Error)]
pub enum HealthError {
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Network(#[from] RecipeError),
}

impl HealthError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Error code used in the JSON error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::StorageUnavailable(_) => "storage_unavailable",
            Self::Validation(_) => "validation_error",
            Self::Network(_) => "network_error",
        }
    }
}

impl From<rusqlite::Error> for HealthError {
    fn from(err: rusqlite::Error) -> Self {
        Self::StorageUnavailable(err.to_string())
    }
}
