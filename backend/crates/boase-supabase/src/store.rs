use crate::client::REST_PATH;
use crate::rows::{MembershipInsert, MembershipRow, SkillInsert, UserSkillInsert, UserSkillRow};
use crate::{SupabaseClient, SupabaseError, SupabaseResult};

use boase_core::{NewTeam, Profile, ProfileUpdate, Skill, Team, TeamRole};
use boase_session::{CollaboratorResult, DataStore};

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Method;
use serde_json::Value;
use uuid::Uuid;

const TEAM_COLUMNS: &str = "id,name,slug,icon_name,color_scheme";
const SKILL_COLUMNS: &str = "id,name,category,description";

const PREFER_REPRESENTATION: &str = "return=representation";
const PREFER_MINIMAL: &str = "return=minimal";
const PREFER_UPSERT: &str = "resolution=merge-duplicates,return=representation";

impl SupabaseClient {
    async fn select<T: serde::de::DeserializeOwned>(&self, query: &str) -> SupabaseResult<Vec<T>> {
        let req = self
            .request(Method::GET, &format!("{}/{}", REST_PATH, query))
            .await;
        self.execute_json(req).await
    }

    /// POST returning the inserted rows.
    async fn insert_returning<T, B>(&self, table: &str, prefer: &str, body: &B) -> SupabaseResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let req = self
            .request(Method::POST, &format!("{}/{}", REST_PATH, table))
            .await
            .header("Prefer", prefer)
            .json(body);
        let mut rows: Vec<T> = self.execute_json(req).await?;

        if rows.is_empty() {
            return Err(SupabaseError::api(
                200,
                "EMPTY",
                format!("insert into {} returned no rows", table),
            ));
        }
        Ok(rows.swap_remove(0))
    }

    async fn insert<B: serde::Serialize + ?Sized>(&self, table: &str, body: &B) -> SupabaseResult<()> {
        let req = self
            .request(Method::POST, &format!("{}/{}", REST_PATH, table))
            .await
            .header("Prefer", PREFER_MINIMAL)
            .json(body);
        self.execute_empty(req).await
    }

    /// Profile body for an upsert: the set fields plus the key and a fresh timestamp.
    fn profile_upsert_body(user_id: Uuid, update: &ProfileUpdate) -> SupabaseResult<Value> {
        let mut body = serde_json::to_value(update)?;
        if let Value::Object(fields) = &mut body {
            fields.insert("id".to_string(), Value::String(user_id.to_string()));
            fields.insert(
                "updated_at".to_string(),
                Value::String(Utc::now().to_rfc3339()),
            );
        }
        Ok(body)
    }
}

#[async_trait]
impl DataStore for SupabaseClient {
    async fn get_profile(&self, user_id: Uuid) -> CollaboratorResult<Option<Profile>> {
        let mut rows: Vec<Profile> = self
            .select(&format!("profiles?select=*&id=eq.{}", user_id))
            .await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }

    async fn upsert_profile(
        &self,
        user_id: Uuid,
        update: &ProfileUpdate,
    ) -> CollaboratorResult<Profile> {
        let body = Self::profile_upsert_body(user_id, update)?;
        Ok(self
            .insert_returning("profiles?on_conflict=id", PREFER_UPSERT, &body)
            .await?)
    }

    async fn list_skills(&self) -> CollaboratorResult<Vec<Skill>> {
        Ok(self
            .select(&format!("skills?select={}&order=name.asc", SKILL_COLUMNS))
            .await?)
    }

    async fn list_user_skills(&self, user_id: Uuid) -> CollaboratorResult<Vec<Uuid>> {
        let rows: Vec<UserSkillRow> = self
            .select(&format!("user_skills?select=skill_id&user_id=eq.{}", user_id))
            .await?;
        Ok(rows.into_iter().map(|row| row.skill_id).collect())
    }

    async fn add_user_skill(&self, user_id: Uuid, skill_id: Uuid) -> CollaboratorResult<()> {
        Ok(self
            .insert("user_skills", &UserSkillInsert { user_id, skill_id })
            .await?)
    }

    async fn remove_user_skill(&self, user_id: Uuid, skill_id: Uuid) -> CollaboratorResult<()> {
        let req = self
            .request(
                Method::DELETE,
                &format!(
                    "{}/user_skills?user_id=eq.{}&skill_id=eq.{}",
                    REST_PATH, user_id, skill_id
                ),
            )
            .await;
        Ok(self.execute_empty(req).await?)
    }

    async fn create_skill(&self, name: &str, category: &str) -> CollaboratorResult<Skill> {
        Ok(self
            .insert_returning(
                "skills",
                PREFER_REPRESENTATION,
                &SkillInsert { name, category },
            )
            .await?)
    }

    async fn list_user_teams(&self, user_id: Uuid) -> CollaboratorResult<Vec<Team>> {
        let rows: Vec<MembershipRow> = self
            .select(&format!(
                "user_team_memberships?select=teams({})&user_id=eq.{}",
                TEAM_COLUMNS, user_id
            ))
            .await?;
        Ok(rows.into_iter().filter_map(|row| row.teams).collect())
    }

    async fn list_teams(&self) -> CollaboratorResult<Vec<Team>> {
        Ok(self
            .select(&format!("teams?select={}&order=name.asc", TEAM_COLUMNS))
            .await?)
    }

    async fn create_team(&self, team: &NewTeam) -> CollaboratorResult<Team> {
        Ok(self
            .insert_returning("teams", PREFER_REPRESENTATION, team)
            .await?)
    }

    async fn add_team_membership(
        &self,
        user_id: Uuid,
        team_id: Uuid,
        role: TeamRole,
    ) -> CollaboratorResult<()> {
        let row = MembershipInsert {
            user_id,
            team_id,
            role: role.as_str(),
        };
        Ok(self.insert("user_team_memberships", &row).await?)
    }
}
