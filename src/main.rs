//! wiki-excerpt command line host
//!
//! This is the main entry point for the application.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wiki_excerpt::{
    config::{OutgoingSettings, SettingsManager, SettingsUpdate, YamlSettingsStore},
    host::{title_from_path, ConsoleNotifier, FileSink, StdinPrompt, StdoutSink, TextSink},
    network::HttpClient,
    ExcerptService, Outcome, Settings, WikipediaApi,
};

#[derive(Parser)]
#[command(name = "wiki-excerpt", version, about = "Insert Wikipedia excerpts into text")]
struct Cli {
    /// Path to the settings file
    #[arg(short, long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a search term (prompts when none is given)
    Search {
        term: Option<String>,
        #[command(flatten)]
        target: Target,
    },
    /// Look up the title of a file (its name without extension)
    Title {
        file: PathBuf,
        #[command(flatten)]
        target: Target,
    },
    /// Show or change settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Args)]
struct Target {
    /// Insert into this file instead of printing
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Line of the output file to insert before (1-based)
    #[arg(short, long, requires = "output")]
    line: Option<usize>,
}

impl Target {
    fn sink(&self) -> Box<dyn TextSink> {
        match self.output {
            Some(ref path) => Box::new(FileSink::new(path, self.line)),
            None => Box::new(StdoutSink),
        }
    }
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective settings
    Show,
    /// Change one field and save
    Set { field: String, value: String },
    /// Save the default settings
    Reset,
    /// Print the settings file location
    Path,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting wiki-excerpt v{}", wiki_excerpt::VERSION);

    let cli = Cli::parse();

    // Load configuration
    let store = YamlSettingsStore::locate(cli.settings.clone())?;
    let settings_path = store.path().to_path_buf();
    let mut manager = SettingsManager::load(Box::new(store))?;

    match cli.command {
        Commands::Search { term, target } => {
            let service = build_service()?;
            let settings = effective_settings(manager.settings());
            let sink = target.sink();

            let outcome = match term {
                Some(term) => {
                    service
                        .resolve_and_format(&term, &settings, sink.as_ref())
                        .await
                }
                None => {
                    service
                        .run_with_prompt(&StdinPrompt::default(), &settings, sink.as_ref())
                        .await
                }
            };
            Ok(exit_code(&outcome))
        }
        Commands::Title { file, target } => {
            let term = title_from_path(&file)
                .ok_or_else(|| anyhow!("{} has no usable title", file.display()))?;
            let service = build_service()?;
            let settings = effective_settings(manager.settings());
            let sink = target.sink();

            let outcome = service
                .resolve_and_format(&term, &settings, sink.as_ref())
                .await;
            Ok(exit_code(&outcome))
        }
        Commands::Config { action } => {
            match action {
                ConfigAction::Show => {
                    print!("{}", serde_yaml::to_string(&effective_settings(manager.settings()))?);
                }
                ConfigAction::Set { field, value } => {
                    let update = SettingsUpdate::parse(&field, &value)?;
                    manager.update(update)?;
                    info!("Saved settings to {}", settings_path.display());
                }
                ConfigAction::Reset => {
                    manager.reset()?;
                    info!("Saved default settings to {}", settings_path.display());
                }
                ConfigAction::Path => println!("{}", settings_path.display()),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Stored settings with environment overrides, which are never saved
fn effective_settings(stored: &Settings) -> Settings {
    let mut settings = stored.clone();
    settings.merge_env();
    settings
}

fn build_service() -> Result<ExcerptService> {
    let mut outgoing = OutgoingSettings::default();
    outgoing.merge_env();

    let client = HttpClient::with_settings(&outgoing)?;
    let api = WikipediaApi::new(client).with_api_base(outgoing.api_base.clone());

    Ok(ExcerptService::new(Arc::new(api), Arc::new(ConsoleNotifier)))
}

fn exit_code(outcome: &Outcome) -> ExitCode {
    match outcome {
        Outcome::Inserted(_) | Outcome::Cancelled => ExitCode::SUCCESS,
        Outcome::Failed(_) => ExitCode::FAILURE,
    }
}
