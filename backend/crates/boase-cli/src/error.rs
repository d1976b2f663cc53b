use boase_config::ConfigError;
use boase_session::SessionError;
use boase_supabase::SupabaseError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Supabase error: {0}")]
    Supabase(#[from] SupabaseError),

    #[error("{}", .0.user_message())]
    Session(#[from] SessionError),

    /// A load settled with an error recorded in the session snapshot
    #[error("{message}")]
    Load { message: String },

    #[error("Missing credentials: {message}")]
    Credentials { message: String },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
