use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand, Debug)]
pub enum TeamCommands {
    /// Teams you belong to
    List,
    /// Teams you can join
    Joinable,
    /// Join a team as a member
    Join {
        /// Team ID (UUID)
        id: Uuid,
    },
    /// Create a team and become its admin
    Create {
        /// Team name
        name: String,
    },
}
