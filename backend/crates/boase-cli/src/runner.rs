use crate::commands::Commands;
use crate::profile_commands::ProfileCommands;
use crate::skill_commands::SkillCommands;
use crate::team_commands::TeamCommands;
use crate::{CliError, CliResult};

use boase_session::{ProfileSessionCoordinator, SessionSnapshot};

use serde::Serialize;
use serde_json::{Value, json};

/// Run one command against a mounted coordinator and return its JSON output.
pub async fn execute(
    command: Commands,
    coordinator: &ProfileSessionCoordinator,
) -> CliResult<Value> {
    match command {
        Commands::Profile { action } => match action {
            ProfileCommands::Show => {
                let snapshot = loaded(coordinator).await;
                fail_on(snapshot.profile_error.as_deref())?;
                Ok(json!({
                    "profile": snapshot.profile,
                    "show_welcome_card": snapshot.show_welcome_card(),
                }))
            }
            ProfileCommands::Update(args) => {
                let profile = coordinator.save_profile(args.into()).await?;
                to_json(&profile)
            }
            ProfileCommands::DismissWelcome => {
                coordinator.dismiss_welcome_card().await?;
                Ok(json!({ "show_welcome_card": false }))
            }
        },

        Commands::Skills { action } => match action {
            SkillCommands::List => {
                let snapshot = loaded(coordinator).await;
                fail_on(snapshot.skills_error.as_deref())?;
                Ok(json!({
                    "catalog": snapshot.skill_catalog,
                    "selected": snapshot.selected_skills,
                }))
            }
            SkillCommands::Toggle { id } => {
                let selected = coordinator.toggle_skill(id).await?;
                Ok(json!({ "skill_id": id, "selected": selected }))
            }
            SkillCommands::Add { name } => {
                let skill = coordinator.add_custom_skill(&name).await?;
                to_json(&skill)
            }
        },

        Commands::Teams { action } => match action {
            TeamCommands::List => {
                let snapshot = loaded(coordinator).await;
                fail_on(snapshot.teams_error.as_deref())?;
                to_json(&snapshot.teams)
            }
            TeamCommands::Joinable => {
                let teams = coordinator.joinable_teams().await?;
                to_json(&teams)
            }
            TeamCommands::Join { id } => {
                coordinator.join_team(id).await?;
                Ok(json!({ "team_id": id, "joined": true }))
            }
            TeamCommands::Create { name } => {
                let team = coordinator.create_team(&name).await?;
                to_json(&team)
            }
        },

        Commands::Logout => {
            coordinator.sign_out().await?;
            Ok(json!({ "signed_out": true }))
        }
    }
}

/// Serialize command output.
pub fn render(value: &Value, pretty: bool) -> CliResult<String> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(output)
}

async fn loaded(coordinator: &ProfileSessionCoordinator) -> SessionSnapshot {
    coordinator.load().await;
    coordinator.snapshot().await
}

fn fail_on(error: Option<&str>) -> CliResult<()> {
    match error {
        Some(message) => Err(CliError::Load {
            message: message.to_string(),
        }),
        None => Ok(()),
    }
}

fn to_json<T: Serialize>(value: &T) -> CliResult<Value> {
    Ok(serde_json::to_value(value)?)
}
