mod config;
mod terminal;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use docforge_client::RecognitionClient;
use docforge_controller::render::{hit_view, stats_view, upload_view};
use docforge_controller::DocumentController;
use docforge_core::{MemoryNotifier, SelectedFile};

use config::Config;
use terminal::TerminalNotifier;

#[derive(Parser)]
#[command(name = "docforge")]
#[command(about = "DocForge — terminal client for the document-recognition service")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a document and print the extracted text
    Upload {
        /// Path of the PNG, JPG, or PDF to upload
        file: PathBuf,
    },
    /// Search stored documents
    Search {
        /// Query text
        query: String,
    },
    /// Show document counts by type
    Stats,
    /// Launch the interactive terminal UI
    Ui,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();

    tracing::debug!(
        base_url = %config.base_url,
        timeout_secs = config.timeout_secs,
        "Loaded configuration"
    );

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .context("failed to build HTTP client")?;
    let client = RecognitionClient::new()
        .with_base_url(&config.base_url)
        .with_http_client(http);

    match cli.command {
        Commands::Upload { file } => {
            let mut controller = DocumentController::new(client, Arc::new(TerminalNotifier));

            let bytes = tokio::fs::read(&file)
                .await
                .with_context(|| format!("failed to read {}", file.display()))?;
            let media_type = mime_guess::from_path(&file)
                .first_raw()
                .unwrap_or("application/octet-stream");
            let filename = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.display().to_string());

            controller
                .select_file(SelectedFile::new(filename, media_type, bytes))
                .await?;
            controller.upload().await?;

            if let Some(result) = controller.state().upload() {
                let view = upload_view(result);
                println!("{}", view.extracted_text);
                for row in &view.metadata_rows {
                    println!("{}", row);
                }
            }
        }
        Commands::Search { query } => {
            let mut controller = DocumentController::new(client, Arc::new(TerminalNotifier));

            controller.search(&query).await?;
            for hit in controller.state().results() {
                let view = hit_view(hit);
                println!("[{}] {}", view.id, view.file);
                println!("    {}", view.excerpt);
            }
        }
        Commands::Stats => {
            let mut controller = DocumentController::new(client, Arc::new(TerminalNotifier));

            controller.fetch_stats().await?;
            if let Some(snapshot) = controller.state().stats() {
                let view = stats_view(snapshot);
                println!("Total documents: {}", view.total);
                for row in &view.type_rows {
                    println!("{}", row);
                }
            }
        }
        Commands::Ui => {
            let notifier = Arc::new(MemoryNotifier::new());
            let controller = DocumentController::new(client, notifier.clone());
            tui::run_ui(controller, notifier).await?;
        }
    }

    Ok(())
}
