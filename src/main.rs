use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use callwarden::analysis::model::AnalysisResult;
use callwarden::analysis::normalize::normalize;
use callwarden::client::AnalyzerClient;
use callwarden::report::synthesize::synthesize;
use callwarden::report::{export, terminal};
use callwarden::scoring::tier::classify;

mod config;

/// Callwarden: scam-call risk analysis and reporting.
///
/// Uploads a recorded call to the analysis backend, classifies the returned
/// risk score into a tier, and renders a complete report to the terminal
/// or a flat text file.
#[derive(Parser)]
#[command(name = "callwarden", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a call recording and analyze it
    Analyze {
        /// Path to the audio file
        audio: PathBuf,

        /// Language hint as an ISO code (e.g. "hi"); auto-detect when omitted
        #[arg(long)]
        language: Option<String>,

        /// Also write the flat report to this path
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Re-render a report from a saved analysis JSON (offline)
    Inspect {
        /// Path to the saved analysis result JSON
        result: PathBuf,

        /// Also write the flat report to this path
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Write the flat report document from a saved analysis JSON
    Export {
        /// Path to the saved analysis result JSON
        result: PathBuf,

        /// Output path (defaults to the suggested filename)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Check that the analysis backend is up
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("callwarden=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            audio,
            language,
            export,
        } => {
            let config = config::Config::load()?;
            config.require_api_key()?;
            let client = AnalyzerClient::new(&config.api_url, &config.api_key)?;

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
            spinner.set_message(format!("Analyzing {}...", audio.display()));
            spinner.enable_steady_tick(Duration::from_millis(80));

            let result = match client.analyze(&audio, language.as_deref()).await {
                Ok(result) => {
                    spinner.finish_and_clear();
                    result
                }
                Err(err) => {
                    spinner.finish_and_clear();
                    eprintln!("{}", err.user_message().red());
                    std::process::exit(1);
                }
            };

            info!(score = result.risk_score, "analysis complete");
            render(&result, export.as_deref())?;
        }

        Commands::Inspect { result, export } => {
            let result = load_result(&result)?;
            render(&result, export.as_deref())?;
        }

        Commands::Export { result, out } => {
            let result = load_result(&result)?;
            let normalized = normalize(&result);
            let assessment = classify(normalized.risk_score);
            let report = synthesize(&normalized, &assessment);

            let path = out.unwrap_or_else(|| PathBuf::from(export::suggested_filename(&report)));
            std::fs::write(&path, export::render_flat(&report))
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("Report written to {}", path.display());
        }

        Commands::Health => {
            let config = config::Config::load()?;
            let client = AnalyzerClient::new(&config.api_url, &config.api_key)?;
            match client.health().await {
                Ok(health) => println!("Backend is {} at {}", health.status, config.api_url),
                Err(err) => {
                    eprintln!("{}", err.user_message().red());
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn load_result(path: &Path) -> Result<AnalysisResult> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&json).context("Failed to parse analysis result JSON")
}

/// Run the pure core on one record and render it: normalize, classify,
/// synthesize, display, optionally export.
fn render(result: &AnalysisResult, export_path: Option<&Path>) -> Result<()> {
    let normalized = normalize(result);
    let assessment = classify(normalized.risk_score);
    let report = synthesize(&normalized, &assessment);

    terminal::display_report(&report, &assessment);

    if let Some(path) = export_path {
        std::fs::write(path, export::render_flat(&report))
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        println!("Report exported to {}", path.display());
    }
    Ok(())
}
