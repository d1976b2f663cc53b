use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated user as reported by the auth provider.
///
/// The provider owns this record; we only keep a read-only copy for as long
/// as the session lasts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

impl Identity {
    pub fn new(id: Uuid, email: Option<String>) -> Self {
        Self { id, email }
    }
}
