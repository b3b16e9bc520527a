use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    asc::{AppStoreConnectClient, Credentials},
    config::Settings,
    deepl::DeeplClient,
    pipeline::{Pipeline, PipelineKind, RunOutcome, StopReason},
    prompt::TerminalPrompter,
};

#[derive(Parser, Debug)]
#[command(
    name = "asc-translate",
    version,
    about = "Translate App Store changelogs and descriptions with DeepL",
    long_about = None
)]
pub struct Cli {
    /// Path to config.ini
    #[arg(short, long, global = true, default_value = "config.ini")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Commands {
    /// Translate and update the "What's New" text of a pre-release version (default)
    Changelog,
    /// Translate and update the app description of a pre-release version
    Description,
}

impl Commands {
    fn kind(self) -> PipelineKind {
        match self {
            Commands::Changelog => PipelineKind::Changelog,
            Commands::Description => PipelineKind::Description,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Commands::Changelog => "changelog",
            Commands::Description => "description",
        }
    }
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let command = cli.command.unwrap_or(Commands::Changelog);

    println!("Given arguments:");
    println!("config {}", cli.config.display());
    println!("verbose {}", cli.verbose);
    println!("command {}", command.name());

    let kind = command.kind();
    let settings = Settings::load(&cli.config, kind)?;

    let deepl = DeeplClient::new(settings.deepl.auth_key.clone())?;
    let credentials = Credentials::from_settings(&settings.app_store_connect)?;
    let asc = AppStoreConnectClient::new(credentials)?;
    let prompter = TerminalPrompter::new();

    let pipeline = Pipeline::new(kind, &asc, &deepl, &prompter, &settings.text);
    match pipeline.run().await? {
        RunOutcome::Completed(report) => {
            info!(
                updated = report.updated.len(),
                skipped = report.skipped.len(),
                failed = report.failed.len(),
                "run finished"
            );
        }
        RunOutcome::Stopped(reason @ (StopReason::LocalizationsDeclined | StopReason::TextDeclined)) => {
            println!("Aborted");
            info!(?reason, "run stopped by operator");
        }
        RunOutcome::Stopped(reason) => info!(?reason, "nothing to update"),
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
