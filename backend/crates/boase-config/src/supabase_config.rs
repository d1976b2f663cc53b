use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_EVENT_BUFFER_SIZE, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SUPABASE_URL, MAX_EVENT_BUFFER_SIZE, MAX_REQUEST_TIMEOUT_SECS, MIN_EVENT_BUFFER_SIZE,
    MIN_REQUEST_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Connection settings for the hosted Supabase project.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SupabaseConfig {
    /// Project URL, e.g. "https://abcd.supabase.co"
    pub url: String,
    /// Public anon key sent as `apikey` on every request
    pub anon_key: Option<String>,
    pub request_timeout_secs: u64,
    /// Capacity of the auth event channel
    pub event_buffer_size: usize,
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_SUPABASE_URL),
            anon_key: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            event_buffer_size: DEFAULT_EVENT_BUFFER_SIZE,
        }
    }
}

impl SupabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::supabase(format!(
                "supabase.url must start with http:// or https://, got '{}'",
                self.url
            )));
        }

        match self.anon_key.as_deref() {
            Some(key) if !key.trim().is_empty() => {}
            _ => {
                return Err(ConfigError::supabase(
                    "supabase.anon_key is required (set BOASE_SUPABASE_ANON_KEY)",
                ));
            }
        }

        if !(MIN_REQUEST_TIMEOUT_SECS..=MAX_REQUEST_TIMEOUT_SECS)
            .contains(&self.request_timeout_secs)
        {
            return Err(ConfigError::supabase(format!(
                "supabase.request_timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        if !(MIN_EVENT_BUFFER_SIZE..=MAX_EVENT_BUFFER_SIZE).contains(&self.event_buffer_size) {
            return Err(ConfigError::supabase(format!(
                "supabase.event_buffer_size must be {}-{}, got {}",
                MIN_EVENT_BUFFER_SIZE, MAX_EVENT_BUFFER_SIZE, self.event_buffer_size
            )));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Project URL without trailing slash.
    pub fn base_url(&self) -> &str {
        self.url.trim().trim_end_matches('/')
    }
}
