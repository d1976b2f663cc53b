use crate::Profile;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Partial profile write. `None` fields are left untouched by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_whatsapp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiktok_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dollar_handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supply: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_seen_welcome_card: Option<bool>,
}

impl ProfileUpdate {
    /// Update that only marks the welcome card as dismissed.
    pub fn welcome_card_seen() -> Self {
        Self {
            has_seen_welcome_card: Some(true),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the set fields onto an existing profile.
    pub fn apply_to(&self, profile: &mut Profile) {
        fn set(target: &mut Option<String>, value: &Option<String>) {
            if let Some(v) = value {
                *target = Some(v.clone());
            }
        }

        set(&mut profile.username, &self.username);
        set(&mut profile.display_name, &self.display_name);
        set(&mut profile.full_name, &self.full_name);
        set(&mut profile.bio, &self.bio);
        set(&mut profile.avatar_url, &self.avatar_url);
        set(&mut profile.website_url, &self.website_url);
        set(&mut profile.twitter_url, &self.twitter_url);
        set(&mut profile.linkedin_url, &self.linkedin_url);
        set(&mut profile.github_url, &self.github_url);
        set(&mut profile.instagram_url, &self.instagram_url);
        set(&mut profile.discord_url, &self.discord_url);
        set(&mut profile.phone_whatsapp, &self.phone_whatsapp);
        set(&mut profile.tiktok_url, &self.tiktok_url);
        set(&mut profile.telegram_url, &self.telegram_url);
        set(&mut profile.facebook_url, &self.facebook_url);
        set(&mut profile.dollar_handle, &self.dollar_handle);
        set(&mut profile.token_name, &self.token_name);
        set(&mut profile.supply, &self.supply);

        if let Some(seen) = self.has_seen_welcome_card {
            profile.has_seen_welcome_card = seen;
        }
        profile.updated_at = Some(Utc::now());
    }
}
