use crate::CollaboratorResult;

use boase_core::{NewTeam, Profile, ProfileUpdate, Skill, Team, TeamRole};

use async_trait::async_trait;
use uuid::Uuid;

/// Typed access to the hosted tables the session reads and writes.
#[async_trait]
pub trait DataStore: Send + Sync {
    async fn get_profile(&self, user_id: Uuid) -> CollaboratorResult<Option<Profile>>;

    /// Insert-or-merge the given fields and return the stored row.
    async fn upsert_profile(
        &self,
        user_id: Uuid,
        update: &ProfileUpdate,
    ) -> CollaboratorResult<Profile>;

    /// Full skill catalog.
    async fn list_skills(&self) -> CollaboratorResult<Vec<Skill>>;

    /// Ids of the skills the user has selected.
    async fn list_user_skills(&self, user_id: Uuid) -> CollaboratorResult<Vec<Uuid>>;

    /// Fails with `CollaboratorError::Conflict` if already associated.
    async fn add_user_skill(&self, user_id: Uuid, skill_id: Uuid) -> CollaboratorResult<()>;

    async fn remove_user_skill(&self, user_id: Uuid, skill_id: Uuid) -> CollaboratorResult<()>;

    async fn create_skill(&self, name: &str, category: &str) -> CollaboratorResult<Skill>;

    /// Teams the user is a member of.
    async fn list_user_teams(&self, user_id: Uuid) -> CollaboratorResult<Vec<Team>>;

    async fn list_teams(&self) -> CollaboratorResult<Vec<Team>>;

    async fn create_team(&self, team: &NewTeam) -> CollaboratorResult<Team>;

    async fn add_team_membership(
        &self,
        user_id: Uuid,
        team_id: Uuid,
        role: TeamRole,
    ) -> CollaboratorResult<()>;
}
