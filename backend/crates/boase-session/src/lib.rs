//! Profile session coordination.
//!
//! [`ProfileSessionCoordinator`] follows the authenticated identity and keeps
//! the user's profile, selected skills and team memberships consistent with
//! it. Results that arrive for an identity that is no longer current are
//! dropped.

pub mod auth_provider;
pub mod collaborator_error;
pub mod coordinator;
pub mod data_store;
pub mod error;
pub mod load_ticket;
pub mod profile_actions;
pub mod session_phase;
pub mod session_snapshot;
pub mod skill_actions;
pub mod team_actions;


pub use auth_provider::AuthProvider;
pub use collaborator_error::{CollaboratorError, Result as CollaboratorResult};
pub use coordinator::ProfileSessionCoordinator;
pub use data_store::DataStore;
pub use error::{Result as SessionResult, SessionError};
pub use session_phase::{ProfilePhase, SessionPhase};
pub use session_snapshot::SessionSnapshot;
