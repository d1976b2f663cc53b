mod profile_commands;
mod runner;
