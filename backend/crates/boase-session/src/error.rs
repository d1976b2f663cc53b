use crate::CollaboratorError;

use boase_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors surfaced by the session coordinator.
///
/// The fetch variants are never returned from loads; they are rendered with
/// [`SessionError::user_message`] into the snapshot's error fields.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Could not resolve the signed-in user: {message} {location}")]
    AuthFetch {
        message: String,
        location: ErrorLocation,
    },

    #[error("Could not load profile: {message} {location}")]
    ProfileFetch {
        message: String,
        location: ErrorLocation,
    },

    #[error("Could not load skills: {message} {location}")]
    SkillsFetch {
        message: String,
        location: ErrorLocation,
    },

    #[error("Could not load teams: {message} {location}")]
    TeamsFetch {
        message: String,
        location: ErrorLocation,
    },

    #[error("Sign-out failed: {message} {location}")]
    SignOut {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to save profile: {message} {location}")]
    ProfileSave {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to update skills: {message} {location}")]
    SkillUpdate {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to create team: {message} {location}")]
    TeamCreate {
        message: String,
        location: ErrorLocation,
    },

    #[error("Team membership failed: {message} {location}")]
    TeamMembership {
        message: String,
        location: ErrorLocation,
    },

    #[error("No signed-in user {location}")]
    NoIdentity { location: ErrorLocation },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },
}

impl SessionError {
    #[track_caller]
    pub fn auth_fetch(source: &CollaboratorError) -> Self {
        Self::AuthFetch {
            message: source.message().to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn profile_fetch(message: impl Into<String>) -> Self {
        Self::ProfileFetch {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn skills_fetch(source: &CollaboratorError) -> Self {
        Self::SkillsFetch {
            message: source.message().to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn teams_fetch(source: &CollaboratorError) -> Self {
        Self::TeamsFetch {
            message: source.message().to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn sign_out(source: &CollaboratorError) -> Self {
        Self::SignOut {
            message: source.message().to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn profile_save(source: &CollaboratorError) -> Self {
        Self::ProfileSave {
            message: source.message().to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn skill_update(source: &CollaboratorError) -> Self {
        Self::SkillUpdate {
            message: source.message().to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn team_create(source: &CollaboratorError) -> Self {
        Self::TeamCreate {
            message: source.message().to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn team_membership(message: impl Into<String>) -> Self {
        Self::TeamMembership {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_identity() -> Self {
        Self::NoIdentity {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Human-readable text for the UI layer (no source location).
    pub fn user_message(&self) -> String {
        match self {
            Self::AuthFetch { message, .. } => {
                format!("Could not resolve the signed-in user: {message}")
            }
            Self::ProfileFetch { message, .. } => format!("Could not load profile: {message}"),
            Self::SkillsFetch { message, .. } => format!("Could not load skills: {message}"),
            Self::TeamsFetch { message, .. } => format!("Could not load teams: {message}"),
            Self::SignOut { message, .. } => format!("Sign-out failed: {message}"),
            Self::ProfileSave { message, .. } => format!("Failed to save profile: {message}"),
            Self::SkillUpdate { message, .. } => format!("Failed to update skills: {message}"),
            Self::TeamCreate { message, .. } => format!("Failed to create team: {message}"),
            Self::TeamMembership { message, .. } => message.clone(),
            Self::NoIdentity { .. } => "User not found. Please log in again.".to_string(),
            Self::Validation { message, .. } => message.clone(),
        }
    }
}

impl From<CoreError> for SessionError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        Self::validation(err.user_message())
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
