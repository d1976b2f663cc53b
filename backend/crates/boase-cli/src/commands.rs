use crate::{
    profile_commands::ProfileCommands, skill_commands::SkillCommands,
    team_commands::TeamCommands,
};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Profile operations
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Skill selection
    Skills {
        #[command(subcommand)]
        action: SkillCommands,
    },

    /// Team membership
    Teams {
        #[command(subcommand)]
        action: TeamCommands,
    },

    /// Revoke the session
    Logout,
}
