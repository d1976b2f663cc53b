pub mod auth_event;
pub mod color_scheme;
pub mod identity;
pub mod new_team;
pub mod profile;
pub mod profile_update;
pub mod skill;
pub mod team;
pub mod team_role;
