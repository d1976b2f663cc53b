use crate::{AuthSession, SupabaseError, SupabaseResult};

use boase_config::{DEFAULT_EVENT_BUFFER_SIZE, SupabaseConfig};
use boase_core::AuthEvent;

use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::{RwLock, broadcast};

pub(crate) const AUTH_PATH: &str = "/auth/v1";
pub(crate) const REST_PATH: &str = "/rest/v1";

/// HTTP client for a Supabase project (GoTrue auth + PostgREST).
#[derive(Debug)]
pub struct SupabaseClient {
    pub base_url: String,
    anon_key: String,
    client: ReqwestClient,
    pub(crate) session: RwLock<Option<AuthSession>>,
    pub(crate) events: broadcast::Sender<AuthEvent>,
}

impl SupabaseClient {
    /// Create a client with default HTTP settings.
    ///
    /// # Arguments
    /// * `base_url` - Project URL (e.g., "https://abcd.supabase.co")
    /// * `anon_key` - Public anon key
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self::with_client(
            ReqwestClient::new(),
            base_url,
            anon_key,
            DEFAULT_EVENT_BUFFER_SIZE,
        )
    }

    /// Create a client from validated configuration.
    pub fn from_config(config: &SupabaseConfig) -> SupabaseResult<Self> {
        let anon_key = config
            .anon_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| SupabaseError::config("anon key is not configured"))?;

        let client = ReqwestClient::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self::with_client(
            client,
            config.base_url(),
            anon_key,
            config.event_buffer_size,
        ))
    }

    fn with_client(
        client: ReqwestClient,
        base_url: &str,
        anon_key: &str,
        event_buffer_size: usize,
    ) -> Self {
        let (events, _) = broadcast::channel(event_buffer_size.max(1));
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            client,
            session: RwLock::new(None),
            events,
        }
    }

    /// Current session, if signed in.
    pub async fn session(&self) -> Option<AuthSession> {
        self.session.read().await.clone()
    }

    pub async fn is_signed_in(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Build a request carrying the anon key and, when signed in, the user's
    /// access token.
    pub(crate) async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let bearer = match self.session.read().await.as_ref() {
            Some(session) => session.access_token.clone(),
            None => self.anon_key.clone(),
        };

        self.client
            .request(method, &url)
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", bearer))
    }

    /// Send the request and return the raw body, mapping error statuses.
    pub(crate) async fn execute_text(&self, req: RequestBuilder) -> SupabaseResult<String> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        Ok(body)
    }

    pub(crate) async fn execute_json<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> SupabaseResult<T> {
        let body = self.execute_text(req).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub(crate) async fn execute_empty(&self, req: RequestBuilder) -> SupabaseResult<()> {
        self.execute_text(req).await.map(|_| ())
    }

    pub(crate) fn publish(&self, event: AuthEvent) {
        log::debug!("Publishing auth event {}", event.as_str());
        // no subscribers is fine
        let _ = self.events.send(event);
    }
}

/// Build an API error from a GoTrue or PostgREST error body.
///
/// PostgREST sends `{code, message}`; GoTrue sends `{error, error_description}`
/// or `{code, msg}` with a numeric code.
#[track_caller]
pub(crate) fn api_error(status: u16, body: &str) -> SupabaseError {
    let json: Value = serde_json::from_str(body).unwrap_or(Value::Null);

    let code = ["code", "error_code", "error"]
        .iter()
        .find_map(|key| match json.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
        .unwrap_or_else(|| status.to_string());

    let message = ["message", "msg", "error_description", "error"]
        .iter()
        .find_map(|key| json.get(key).and_then(Value::as_str))
        .map(String::from)
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                format!("HTTP {}", status)
            } else {
                body.trim().to_string()
            }
        });

    SupabaseError::api(status, code, message)
}
