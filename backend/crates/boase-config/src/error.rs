use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    /// A setting is missing or out of range. `section` names the part of
    /// `config.toml` it belongs to.
    #[error("Invalid {section} setting: {message} {location}")]
    Invalid {
        section: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Config directory or file resolution failed.
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::invalid("config", message.into())
    }

    /// `[supabase]`: project URL, anon key, timeout or event buffer.
    #[track_caller]
    pub fn supabase<S: Into<String>>(message: S) -> Self {
        Self::invalid("supabase", message.into())
    }

    /// `[logging]`
    #[track_caller]
    pub fn logging<S: Into<String>>(message: S) -> Self {
        Self::invalid("logging", message.into())
    }

    #[track_caller]
    fn invalid(section: &'static str, message: String) -> Self {
        Self::Invalid {
            section,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The `config.toml` section the error belongs to, if any.
    pub fn section(&self) -> Option<&'static str> {
        match self {
            Self::Invalid { section, .. } => Some(section),
            Self::Io { .. } | Self::Toml { .. } => None,
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
