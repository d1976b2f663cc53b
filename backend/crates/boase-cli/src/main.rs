//! boase - profile session CLI
//!
//! Signs in against the configured Supabase project and runs one command
//! through the profile session coordinator, printing JSON.
//!
//! # Examples
//!
//! ```bash
//! # Show your profile
//! BOASE_EMAIL=alice@example.com BOASE_PASSWORD=... boase profile show --pretty
//!
//! # Select a skill by name
//! boase skills add "Rust"
//!
//! # Create a team
//! boase teams create "Design Crew"
//! ```

use boase_cli::{Cli, CliResult, logger, runner};
use boase_config::Config;
use boase_session::ProfileSessionCoordinator;
use boase_supabase::SupabaseClient;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<String> {
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let (email, password) = cli.credentials()?;
    let client = Arc::new(SupabaseClient::from_config(&config.supabase)?);
    client.sign_in_with_password(email, password).await?;

    let coordinator = ProfileSessionCoordinator::new(client.clone(), client.clone());
    coordinator.mount().await;

    let result = runner::execute(cli.command, &coordinator).await;
    coordinator.unmount();

    runner::render(&result?, cli.pretty)
}
