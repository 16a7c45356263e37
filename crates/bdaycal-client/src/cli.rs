//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::RunConfig;

/// bdaycal - import birthdays into Google Calendar
#[derive(Debug, Parser)]
#[command(name = "bdaycal")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the Google Cloud Console credentials JSON
    #[arg(long, default_value = "credentials.json")]
    pub credentials: PathBuf,

    /// Path to the cached token file
    #[arg(long, default_value = "token.json")]
    pub token: PathBuf,

    /// Path to the birthday list
    #[arg(long, default_value = "birthdays.txt")]
    pub birthdays: PathBuf,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the interactive Google authorization flow
    Auth {
        /// Re-authorize even if a cached token exists
        #[arg(long)]
        force: bool,
    },
    /// Import the birthday list (the default when no subcommand is given)
    Import,
}

impl Cli {
    /// Builds the run configuration from the CLI flags.
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            credentials_path: self.credentials.clone(),
            token_path: self.token.clone(),
            birthdays_path: self.birthdays.clone(),
            ..RunConfig::default()
        }
    }
}
