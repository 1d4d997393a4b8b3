//! OpenChat markup CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use openchat_cli::{Cli, execute};
use openchat_common::{AppResult, Config, init_tracing};
use tracing::{debug, error};

fn load_config(cli: &Cli) -> AppResult<Config> {
    match &cli.config {
        Some(path) => Config::from_file(path),
        None => Config::load(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("openchat: {err}");
            return ExitCode::from(err.exit_code());
        }
    };

    // Initialize tracing
    init_tracing(&config.logging);
    debug!(command = ?cli.command, "Running command");

    match execute(&cli.command, &config, std::io::stdin().lock()) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, code = err.error_code(), "Command failed");
            eprintln!("openchat: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
