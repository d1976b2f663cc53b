use crate::Identity;

use serde::{Deserialize, Serialize};

/// Identity-change notification published by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "identity", rename_all = "snake_case")]
pub enum AuthEvent {
    SignedIn(Identity),
    UserUpdated(Identity),
    TokenRefreshed(Identity),
    SignedOut,
}

impl AuthEvent {
    /// Identity carried by the event, `None` for sign-out.
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::SignedIn(identity)
            | Self::UserUpdated(identity)
            | Self::TokenRefreshed(identity) => Some(identity),
            Self::SignedOut => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SignedIn(_) => "signed_in",
            Self::UserUpdated(_) => "user_updated",
            Self::TokenRefreshed(_) => "token_refreshed",
            Self::SignedOut => "signed_out",
        }
    }
}
