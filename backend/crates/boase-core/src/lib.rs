pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::auth_event::AuthEvent;
pub use models::color_scheme::ColorScheme;
pub use models::identity::Identity;
pub use models::new_team::{NewTeam, slugify};
pub use models::profile::Profile;
pub use models::profile_update::ProfileUpdate;
pub use models::skill::{Skill, USER_DEFINED_CATEGORY};
pub use models::team::Team;
pub use models::team_role::TeamRole;
