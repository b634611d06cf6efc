//! Miyabi command-line entry point.

use clap::Parser;
use miyabi::Settings;
use miyabi::cli::{Cli, Commands, handle_check_command, handle_generate_command};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { text, image, mime } => {
            let settings = Settings::load(cli.config.as_deref())?;
            info!(model = %settings.model(), "Generating tanka");

            let result = handle_generate_command(&settings, &text, image.as_deref(), mime).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);

            Ok(if result.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Check { yomis, lines } => {
            let report = handle_check_command(&yomis, lines.as_deref())?;
            println!("{}", report);

            Ok(if report.is_valid() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
