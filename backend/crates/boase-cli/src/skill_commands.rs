use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand, Debug)]
pub enum SkillCommands {
    /// Show the skill catalog and your selection
    List,
    /// Select or deselect a skill
    Toggle {
        /// Skill ID (UUID)
        id: Uuid,
    },
    /// Select a skill by name, creating it if it doesn't exist
    Add {
        /// Skill name
        name: String,
    },
}
