//! Supabase-backed collaborators for the profile session.
//!
//! [`SupabaseClient`] talks to GoTrue (`/auth/v1`) and PostgREST
//! (`/rest/v1`) and implements both [`boase_session::AuthProvider`] and
//! [`boase_session::DataStore`].

pub(crate) mod auth;
pub mod auth_session;
pub(crate) mod client;
pub mod error;
pub(crate) mod rows;
pub(crate) mod store;

#[cfg(test)]
mod tests;

pub use auth_session::{AuthSession, AuthUser};
pub use client::SupabaseClient;
pub use error::{Result as SupabaseResult, SupabaseError};
