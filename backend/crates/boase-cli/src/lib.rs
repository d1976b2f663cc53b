//! boase-cli library
//!
//! Command definitions and the dispatcher that runs them against a
//! [`boase_session::ProfileSessionCoordinator`].

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod profile_commands;
pub mod runner;
pub mod skill_commands;
pub mod team_commands;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use error::{CliError, Result as CliResult};
