use serde::Serialize;
use uuid::Uuid;

/// Where the coordinator is in resolving who is signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    Uninitialized,
    ResolvingIdentity,
    NoIdentity,
    IdentityKnown,
}

/// Load progress for the current identity's profile, skills and teams.
///
/// Carries the identity the data belongs to so a repeated load for the same
/// user can be skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "user_id", rename_all = "snake_case")]
pub enum ProfilePhase {
    #[default]
    Unloaded,
    Loading(Uuid),
    Loaded(Uuid),
}

impl ProfilePhase {
    /// True if a load for `user_id` is in flight or finished.
    pub fn covers(&self, user_id: Uuid) -> bool {
        matches!(self, Self::Loading(id) | Self::Loaded(id) if *id == user_id)
    }
}
