//! Profile record - one row per identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Presentational and social-link fields for a user.
///
/// Rows are created by the backend on first sign-in, so every field except
/// the id may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub twitter_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub instagram_url: Option<String>,
    #[serde(default)]
    pub discord_url: Option<String>,
    #[serde(default)]
    pub phone_whatsapp: Option<String>,
    #[serde(default)]
    pub tiktok_url: Option<String>,
    #[serde(default)]
    pub telegram_url: Option<String>,
    #[serde(default)]
    pub facebook_url: Option<String>,
    /// Ticker-style handle, e.g. "$ALICE"
    #[serde(default)]
    pub dollar_handle: Option<String>,
    #[serde(default)]
    pub token_name: Option<String>,
    /// Free-form supply text as entered by the user ("1,000,000")
    #[serde(default)]
    pub supply: Option<String>,
    /// NULL in older rows; treated as not seen
    #[serde(default, deserialize_with = "null_as_false")]
    pub has_seen_welcome_card: bool,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// A profile row with nothing filled in yet.
    pub fn empty(id: Uuid) -> Self {
        Self {
            id,
            username: None,
            display_name: None,
            full_name: None,
            bio: None,
            avatar_url: None,
            website_url: None,
            twitter_url: None,
            linkedin_url: None,
            github_url: None,
            instagram_url: None,
            discord_url: None,
            phone_whatsapp: None,
            tiktok_url: None,
            telegram_url: None,
            facebook_url: None,
            dollar_handle: None,
            token_name: None,
            supply: None,
            has_seen_welcome_card: false,
            updated_at: None,
        }
    }

    /// Name to show in navigation: display name, then username.
    pub fn display_label(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.username.as_deref().filter(|s| !s.trim().is_empty()))
    }

    pub fn belongs_to(&self, user_id: Uuid) -> bool {
        self.id == user_id
    }
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
