use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure reported by an auth or data-store collaborator.
#[derive(Error, Debug)]
pub enum CollaboratorError {
    #[error("Request failed: {message} {location}")]
    Request {
        message: String,
        location: ErrorLocation,
    },

    /// Unique-constraint violation, e.g. a duplicate association
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },
}

impl CollaboratorError {
    #[track_caller]
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The collaborator's message without source location.
    pub fn message(&self) -> &str {
        match self {
            Self::Request { message, .. }
            | Self::Conflict { message, .. }
            | Self::NotFound { message, .. }
            | Self::Unauthorized { message, .. } => message,
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

pub type Result<T> = std::result::Result<T, CollaboratorError>;
