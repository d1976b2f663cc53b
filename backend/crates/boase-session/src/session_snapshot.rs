use crate::{ProfilePhase, SessionPhase};

use boase_core::{Identity, Profile, Skill, Team};

use std::collections::BTreeSet;

use serde::Serialize;
use uuid::Uuid;

/// Point-in-time copy of everything the coordinator exposes to views.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub profile_phase: ProfilePhase,
    pub identity: Option<Identity>,

    pub profile: Option<Profile>,
    pub profile_loading: bool,
    pub profile_error: Option<String>,

    /// Global catalog, kept across identity changes
    pub skill_catalog: Vec<Skill>,
    pub selected_skills: Vec<Skill>,
    pub selected_skill_ids: BTreeSet<Uuid>,
    pub skills_loading: bool,
    pub skills_error: Option<String>,

    pub teams: Vec<Team>,
    pub teams_loading: bool,
    pub teams_error: Option<String>,

    pub auth_error: Option<String>,
    pub saving: bool,
    pub success_message: Option<String>,
}

impl SessionSnapshot {
    pub fn is_loading(&self) -> bool {
        self.profile_loading || self.skills_loading || self.teams_loading
    }

    /// Welcome card shows until the user dismisses it once.
    pub fn show_welcome_card(&self) -> bool {
        self.profile
            .as_ref()
            .is_some_and(|profile| !profile.has_seen_welcome_card)
    }

    pub fn user_id(&self) -> Option<Uuid> {
        self.identity.as_ref().map(|identity| identity.id)
    }

    pub fn is_skill_selected(&self, skill_id: Uuid) -> bool {
        self.selected_skill_ids.contains(&skill_id)
    }

    /// Drop everything tied to the previous identity and adopt `identity`.
    ///
    /// The skill catalog and any identity-resolution error survive.
    pub(crate) fn reset_for(&mut self, identity: Option<Identity>) {
        self.phase = if identity.is_some() {
            SessionPhase::IdentityKnown
        } else {
            SessionPhase::NoIdentity
        };
        self.identity = identity;
        self.profile_phase = ProfilePhase::Unloaded;

        self.profile = None;
        self.profile_loading = false;
        self.profile_error = None;

        self.selected_skills.clear();
        self.selected_skill_ids.clear();
        self.skills_loading = false;
        self.skills_error = None;

        self.teams.clear();
        self.teams_loading = false;
        self.teams_error = None;

        self.saving = false;
        self.success_message = None;
    }

    /// True if any of `ids` is absent from the cached catalog.
    pub(crate) fn has_unknown_skills(&self, ids: &[Uuid]) -> bool {
        ids.iter()
            .any(|id| !self.skill_catalog.iter().any(|skill| skill.id == *id))
    }

    /// Replace the catalog and re-resolve the selection against it.
    pub(crate) fn set_skill_catalog(&mut self, skills: Vec<Skill>) {
        self.skill_catalog = skills;
        self.resolve_selected_skills();
    }

    /// Add a skill to the catalog, keeping it ordered by name.
    pub(crate) fn insert_catalog_skill(&mut self, skill: Skill) {
        let key = skill.name.to_lowercase();
        let at = self
            .skill_catalog
            .partition_point(|existing| existing.name.to_lowercase() <= key);
        self.skill_catalog.insert(at, skill);
    }

    pub(crate) fn set_selected_skill_ids(&mut self, ids: impl IntoIterator<Item = Uuid>) {
        self.selected_skill_ids = ids.into_iter().collect();
        self.resolve_selected_skills();
    }

    pub(crate) fn select_skill(&mut self, skill_id: Uuid) {
        self.selected_skill_ids.insert(skill_id);
        self.resolve_selected_skills();
    }

    pub(crate) fn deselect_skill(&mut self, skill_id: Uuid) {
        self.selected_skill_ids.remove(&skill_id);
        self.resolve_selected_skills();
    }

    /// Selected skills in catalog order; ids missing from the catalog are skipped.
    fn resolve_selected_skills(&mut self) {
        self.selected_skills = self
            .skill_catalog
            .iter()
            .filter(|skill| self.selected_skill_ids.contains(&skill.id))
            .cloned()
            .collect();
    }
}
