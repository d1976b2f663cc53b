use crate::CollaboratorResult;

use boase_core::{AuthEvent, Identity};

use async_trait::async_trait;
use tokio::sync::broadcast;

/// Source of the authenticated identity.
///
/// Dropping the receiver returned by [`AuthProvider::subscribe`] ends the
/// subscription.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Identity of the current session, `None` when signed out.
    async fn current_identity(&self) -> CollaboratorResult<Option<Identity>>;

    /// Feed of identity-change events.
    fn subscribe(&self) -> broadcast::Receiver<AuthEvent>;

    async fn sign_out(&self) -> CollaboratorResult<()>;
}
