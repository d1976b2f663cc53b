use boase_session::CollaboratorError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// PostgREST code for a unique-constraint violation.
pub const UNIQUE_VIOLATION: &str = "23505";

/// Errors from the Supabase REST and auth endpoints.
#[derive(Error, Debug)]
pub enum SupabaseError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (status: {status}, code: {code}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Not signed in {location}")]
    NotSignedIn { location: ErrorLocation },

    #[error("Supabase client configuration error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },
}

impl SupabaseError {
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        SupabaseError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        SupabaseError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        SupabaseError::Api {
            status,
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_signed_in() -> Self {
        SupabaseError::NotSignedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn config(message: impl Into<String>) -> Self {
        SupabaseError::Config {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message without the source location.
    pub fn message(&self) -> String {
        match self {
            Self::Http { message, .. }
            | Self::Api { message, .. }
            | Self::Json { message, .. }
            | Self::Config { message, .. } => message.clone(),
            Self::NotSignedIn { .. } => "not signed in".to_string(),
        }
    }
}

impl From<reqwest::Error> for SupabaseError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        SupabaseError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for SupabaseError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        SupabaseError::from_json(err)
    }
}

impl From<SupabaseError> for CollaboratorError {
    #[track_caller]
    fn from(err: SupabaseError) -> Self {
        let message = err.message();
        match err {
            SupabaseError::Api { ref code, .. } if code == UNIQUE_VIOLATION => {
                CollaboratorError::conflict(message)
            }
            SupabaseError::Api {
                status: 401 | 403, ..
            }
            | SupabaseError::NotSignedIn { .. } => CollaboratorError::unauthorized(message),
            SupabaseError::Api { status: 404, .. } => CollaboratorError::not_found(message),
            _ => CollaboratorError::request(message),
        }
    }
}

pub type Result<T> = std::result::Result<T, SupabaseError>;
