use crate::{ProfileSessionCoordinator, SessionError, SessionResult};

use boase_core::{Profile, ProfileUpdate};

impl ProfileSessionCoordinator {
    /// Upsert the given fields for the current user and cache the stored row.
    pub async fn save_profile(&self, update: ProfileUpdate) -> SessionResult<Profile> {
        if update.is_empty() {
            return Err(SessionError::validation("Nothing to save."));
        }

        let ticket = self.begin_mutation().await?;

        match self.store().upsert_profile(ticket.user_id, &update).await {
            Ok(profile) => {
                let stored = profile.clone();
                self.finish_mutation(ticket, move |state| {
                    state.profile = Some(stored);
                    state.profile_error = None;
                    state.success_message = Some("Profile updated successfully!".to_string());
                })
                .await;
                log::info!("Saved profile for {}", ticket.user_id);
                Ok(profile)
            }
            Err(e) => {
                let err = SessionError::profile_save(&e);
                log::warn!("{}", err);
                self.finish_mutation(ticket, |_| {}).await;
                Err(err)
            }
        }
    }

    /// Remember that the user has seen the welcome card.
    pub async fn dismiss_welcome_card(&self) -> SessionResult<()> {
        let ticket = self.begin_mutation().await?;

        match self
            .store()
            .upsert_profile(ticket.user_id, &ProfileUpdate::welcome_card_seen())
            .await
        {
            Ok(profile) => {
                self.finish_mutation(ticket, move |state| {
                    state.profile = Some(profile);
                })
                .await;
                Ok(())
            }
            Err(e) => {
                let err = SessionError::profile_save(&e);
                log::warn!("{}", err);
                self.finish_mutation(ticket, |_| {}).await;
                Err(err)
            }
        }
    }
}
