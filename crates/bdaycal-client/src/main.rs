//! bdaycal CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use bdaycal_client::cli::{Cli, Command};
use bdaycal_client::error::ClientResult;
use bdaycal_core::{init_tracing, TracingConfig, TracingOutputFormat};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(tracing_config(cli.debug)) {
        eprintln!("warning: {}", e);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Debug mode gets the verbose CLI preset; otherwise only warnings show.
fn tracing_config(debug: bool) -> TracingConfig {
    if debug {
        TracingConfig::cli_debug()
    } else {
        TracingConfig::default()
            .with_level(Level::WARN)
            .with_format(TracingOutputFormat::Compact)
    }
}

async fn run(cli: Cli) -> ClientResult<()> {
    let config = cli.run_config();

    match cli.command {
        Some(Command::Auth { force }) => bdaycal_client::commands::auth::run(&config, force).await,
        // Import is the default when no subcommand is given
        Some(Command::Import) | None => bdaycal_client::commands::import::run(&config).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_selects_verbose_preset() {
        let config = tracing_config(true);
        assert_eq!(config.default_level, Level::DEBUG);
        assert_eq!(config.output_format, TracingOutputFormat::Compact);
    }

    #[test]
    fn default_is_warnings_only() {
        let config = tracing_config(false);
        assert_eq!(config.default_level, Level::WARN);
        assert_eq!(config.output_format, TracingOutputFormat::Compact);
    }
}
