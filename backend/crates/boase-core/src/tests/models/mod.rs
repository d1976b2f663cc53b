mod auth_event;
mod new_team;
mod profile;
mod team;
mod team_role;
