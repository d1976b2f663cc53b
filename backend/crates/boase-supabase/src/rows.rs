//! Row shapes for PostgREST responses that don't map 1:1 onto core models.

use boase_core::Team;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub(crate) struct UserSkillRow {
    pub skill_id: Uuid,
}

/// Membership row with the team embedded via `teams(...)`.
#[derive(Debug, Deserialize)]
pub(crate) struct MembershipRow {
    #[serde(default)]
    pub teams: Option<Team>,
}

#[derive(Debug, Serialize)]
pub(crate) struct UserSkillInsert {
    pub user_id: Uuid,
    pub skill_id: Uuid,
}

#[derive(Debug, Serialize)]
pub(crate) struct SkillInsert<'a> {
    pub name: &'a str,
    pub category: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct MembershipInsert {
    pub user_id: Uuid,
    pub team_id: Uuid,
    pub role: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct PasswordGrant<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RefreshGrant<'a> {
    pub refresh_token: &'a str,
}
