//! fin - user identity sync CLI
//!
//! # Examples
//!
//! ```bash
//! # Resolve (find or create) a signed-in principal
//! fin resolve --subject user_2abc --email jane@x.com --first-name Jane --last-name Doe
//!
//! # Look a user up without creating anything
//! fin lookup --email jane@x.com --pretty
//! ```

use fin_cli::{Cli, CliError, Result as CliResult, logger, render, run};
use fin_config::Config;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match execute(&cli).await {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error [{}]: {}", e.error_code(), e);
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: &Cli) -> CliResult<String> {
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(log_dir).map_err(|e| {
            CliError::logger(format!(
                "Failed to create log directory {}: {}",
                log_dir.display(),
                e
            ))
        })?;
    }

    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;
    config.log_summary();

    let value = run(cli, &config).await?;
    render(&value, cli.pretty)
}
