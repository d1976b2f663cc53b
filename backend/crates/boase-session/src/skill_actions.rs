use crate::load_ticket::LoadTicket;
use crate::{ProfileSessionCoordinator, SessionError, SessionResult};

use boase_core::{Skill, USER_DEFINED_CATEGORY};

use uuid::Uuid;

impl ProfileSessionCoordinator {
    /// Flip the selection of `skill_id`; returns whether it is now selected.
    ///
    /// Last write wins: the association is removed or inserted directly.
    pub async fn toggle_skill(&self, skill_id: Uuid) -> SessionResult<bool> {
        let (ticket, selected) = self
            .begin_mutation_with(|state| state.is_skill_selected(skill_id))
            .await?;

        self.write_skill_selection(ticket, skill_id, !selected)
            .await
    }

    /// Select a skill by name, creating it in the catalog if needed.
    ///
    /// Matching is case-insensitive against the full catalog, which is
    /// fetched first if it is not loaded.
    pub async fn add_custom_skill(&self, name: &str) -> SessionResult<Skill> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::validation("Please enter a skill name."));
        }

        let catalog = self.loaded_catalog().await?;

        if let Some(skill) = catalog.into_iter().find(|skill| skill.matches_name(name)) {
            let (ticket, selected) = self
                .begin_mutation_with(|state| state.is_skill_selected(skill.id))
                .await?;
            if selected {
                self.finish_mutation(ticket, |_| {}).await;
            } else {
                self.write_skill_selection(ticket, skill.id, true).await?;
            }
            return Ok(skill);
        }

        let ticket = self.begin_mutation().await?;

        let skill = match self.store().create_skill(name, USER_DEFINED_CATEGORY).await {
            Ok(skill) => skill,
            Err(e) => {
                let err = SessionError::skill_update(&e);
                log::warn!("{}", err);
                self.finish_mutation(ticket, |_| {}).await;
                return Err(err);
            }
        };

        let created = skill.clone();
        self.apply(ticket, move |state| state.insert_catalog_skill(created))
            .await;

        match self.store().add_user_skill(ticket.user_id, skill.id).await {
            Ok(()) => {
                self.finish_mutation(ticket, |state| state.select_skill(skill.id))
                    .await;
                log::info!("Added custom skill '{}' for {}", skill.name, ticket.user_id);
                Ok(skill)
            }
            Err(e) => {
                let err = SessionError::skill_update(&e);
                log::warn!("{}", err);
                self.finish_mutation(ticket, |state| {
                    state.skill_catalog.retain(|s| s.id != skill.id);
                })
                .await;
                Err(err)
            }
        }
    }

    /// The cached catalog, or a fresh copy when the cache is empty or its
    /// last fetch failed.
    async fn loaded_catalog(&self) -> SessionResult<Vec<Skill>> {
        let Some(ticket) = self.current_ticket().await else {
            return Err(SessionError::no_identity());
        };

        let snapshot = self.snapshot().await;
        if !snapshot.skill_catalog.is_empty() && snapshot.skills_error.is_none() {
            return Ok(snapshot.skill_catalog);
        }

        log::debug!("Skill catalog not loaded, fetching before matching");
        let skills = self.store().list_skills().await.map_err(|e| {
            let err = SessionError::skills_fetch(&e);
            log::warn!("{}", err);
            err
        })?;

        let fresh = skills.clone();
        self.apply(ticket, move |state| state.set_skill_catalog(fresh))
            .await;
        Ok(skills)
    }

    /// Insert or remove the association and finish the mutation.
    async fn write_skill_selection(
        &self,
        ticket: LoadTicket,
        skill_id: Uuid,
        select: bool,
    ) -> SessionResult<bool> {
        let result = if select {
            match self.store().add_user_skill(ticket.user_id, skill_id).await {
                Ok(()) => Ok(()),
                Err(e) if e.is_conflict() => {
                    log::debug!("Skill {} was already selected", skill_id);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        } else {
            self.store().remove_user_skill(ticket.user_id, skill_id).await
        };

        match result {
            Ok(()) => {
                self.finish_mutation(ticket, |state| {
                    if select {
                        state.select_skill(skill_id);
                    } else {
                        state.deselect_skill(skill_id);
                    }
                })
                .await;
                Ok(select)
            }
            Err(e) => {
                let err = SessionError::skill_update(&e);
                log::warn!("{}", err);
                self.finish_mutation(ticket, |_| {}).await;
                Err(err)
            }
        }
    }
}
