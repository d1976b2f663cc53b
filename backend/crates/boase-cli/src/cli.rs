use crate::commands::Commands;
use crate::{CliError, CliResult};

use clap::Parser;

#[derive(Parser)]
#[command(name = "boase")]
#[command(about = "Profile, skills and teams for a boase account")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Account email
    #[arg(long, global = true, env = "BOASE_EMAIL")]
    pub email: Option<String>,

    /// Account password
    #[arg(long, global = true, env = "BOASE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

impl Cli {
    /// Email and password, both required.
    pub fn credentials(&self) -> CliResult<(&str, &str)> {
        let email = self
            .email
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| CliError::Credentials {
                message: "pass --email or set BOASE_EMAIL".to_string(),
            })?;
        let password = self
            .password
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| CliError::Credentials {
                message: "pass --password or set BOASE_PASSWORD".to_string(),
            })?;

        Ok((email, password))
    }
}
