use crate::client::AUTH_PATH;
use crate::rows::{PasswordGrant, RefreshGrant};
use crate::{AuthSession, SupabaseClient, SupabaseError, SupabaseResult};

use boase_core::{AuthEvent, Identity};
use boase_session::{AuthProvider, CollaboratorResult};

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Method;
use tokio::sync::broadcast;

/// Refresh tokens this close to expiry before using them.
const REFRESH_MARGIN_SECS: i64 = 60;

impl SupabaseClient {
    /// Email/password sign-in. Stores the session and publishes `SignedIn`.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> SupabaseResult<Identity> {
        let req = self
            .request(
                Method::POST,
                &format!("{}/token?grant_type=password", AUTH_PATH),
            )
            .await
            .json(&PasswordGrant { email, password });
        let session: AuthSession = self.execute_json(req).await?;

        let identity = session.identity();
        *self.session.write().await = Some(session);
        log::info!("Signed in as {}", identity.id);

        self.publish(AuthEvent::SignedIn(identity.clone()));
        Ok(identity)
    }

    /// Exchange the stored refresh token for a new session.
    pub async fn refresh_session(&self) -> SupabaseResult<Identity> {
        let refresh_token = self
            .session
            .read()
            .await
            .as_ref()
            .map(|session| session.refresh_token.clone())
            .ok_or_else(SupabaseError::not_signed_in)?;

        let req = self
            .request(
                Method::POST,
                &format!("{}/token?grant_type=refresh_token", AUTH_PATH),
            )
            .await
            .json(&RefreshGrant {
                refresh_token: &refresh_token,
            });
        let session: AuthSession = self.execute_json(req).await?;

        let identity = session.identity();
        *self.session.write().await = Some(session);
        log::debug!("Refreshed session for {}", identity.id);

        self.publish(AuthEvent::TokenRefreshed(identity.clone()));
        Ok(identity)
    }

    /// Refresh the session if the access token is about to expire.
    pub async fn ensure_fresh_session(&self) -> SupabaseResult<()> {
        let now = Utc::now().timestamp();
        let expiring = self
            .session
            .read()
            .await
            .as_ref()
            .is_some_and(|session| session.expires_within(now, REFRESH_MARGIN_SECS));

        if expiring {
            self.refresh_session().await?;
        }
        Ok(())
    }

    /// Adopt a previously issued session (e.g. one persisted by the caller).
    pub async fn restore_session(&self, session: AuthSession) -> Identity {
        let identity = session.identity();
        *self.session.write().await = Some(session);
        log::info!("Restored session for {}", identity.id);

        self.publish(AuthEvent::SignedIn(identity.clone()));
        identity
    }

    /// The user behind the current access token; `None` when signed out or
    /// the token is rejected.
    pub async fn fetch_user(&self) -> SupabaseResult<Option<Identity>> {
        if !self.is_signed_in().await {
            return Ok(None);
        }

        let req = self
            .request(Method::GET, &format!("{}/user", AUTH_PATH))
            .await;

        match self.execute_json::<crate::AuthUser>(req).await {
            Ok(user) => Ok(Some(user.into())),
            Err(e) if e.status() == Some(401) => {
                log::debug!("Access token rejected, treating as signed out");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Revoke the session. Local state is cleared and `SignedOut` published
    /// even if the request fails.
    pub async fn logout(&self) -> SupabaseResult<()> {
        let result = if self.is_signed_in().await {
            let req = self
                .request(Method::POST, &format!("{}/logout", AUTH_PATH))
                .await;
            self.execute_empty(req).await
        } else {
            Ok(())
        };

        *self.session.write().await = None;
        log::info!("Signed out");
        self.publish(AuthEvent::SignedOut);

        result
    }
}

#[async_trait]
impl AuthProvider for SupabaseClient {
    async fn current_identity(&self) -> CollaboratorResult<Option<Identity>> {
        Ok(self.fetch_user().await?)
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }

    async fn sign_out(&self) -> CollaboratorResult<()> {
        Ok(self.logout().await?)
    }
}
