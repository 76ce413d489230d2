//! Faqbot server
//!
//! Main entry point for the faqbot HTTP backend: answers questions from a
//! static Q&A dataset by keyword overlap, falling back to a local LLM when
//! no record matches.

mod routes;
mod state;


use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use faqbot_core::{config::AppConfig, logging, AppResult};
use faqbot_dataset::DatasetStore;
use faqbot_llm::create_client;
use faqbot_prompt::DEFAULT_TEMPLATE;

use crate::state::AppState;

/// Faqbot - FAQ chatbot backend with keyword matching and LLM fallback
#[derive(Parser, Debug)]
#[command(name = "faqbot")]
#[command(about = "FAQ chatbot backend with keyword matching and LLM fallback", long_about = None)]
#[command(version)]
struct Cli {
    /// Socket address to bind the HTTP server to
    #[arg(short, long, env = "FAQBOT_BIND")]
    bind: Option<String>,

    /// Path to config file
    #[arg(short, long, env = "FAQBOT_CONFIG")]
    config: Option<PathBuf>,

    /// Path to the dataset JSON file
    #[arg(short, long, env = "FAQBOT_DATASET")]
    dataset: Option<PathBuf>,

    /// Directory for uploaded attachment files
    #[arg(short, long, env = "FAQBOT_UPLOAD_DIR")]
    upload_dir: Option<PathBuf>,

    /// LLM provider for fallback answers
    #[arg(short, long, env = "FAQBOT_PROVIDER")]
    provider: Option<String>,

    /// Model identifier passed to the generation service
    #[arg(short, long, env = "FAQBOT_MODEL")]
    model: Option<String>,

    /// Base URL of the generation service
    #[arg(short, long, env = "FAQBOT_ENDPOINT")]
    endpoint: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    no_color: bool,
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load base configuration from file and environment
    let config = AppConfig::load()?;

    // Apply CLI overrides
    let config = config.with_overrides(
        cli.bind,
        cli.config,
        cli.dataset,
        cli.upload_dir,
        cli.provider,
        cli.model,
        cli.endpoint,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("Faqbot server starting");
    tracing::debug!("Dataset: {:?}", config.dataset_file);
    tracing::debug!("Upload dir: {:?}", config.upload_dir);
    tracing::debug!("Provider: {}", config.provider);
    tracing::debug!("Model: {}", config.model);

    config.validate()?;

    // A missing or malformed dataset is fatal: better to die at startup than
    // to silently serve fallback-only answers.
    let dataset = match DatasetStore::load(&config.dataset_file) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!("{}", e);
            return Err(e);
        }
    };

    config.ensure_upload_dir()?;

    let llm = create_client(
        &config.provider,
        &config.endpoint,
        Duration::from_secs(config.llm_timeout_secs),
    )?;

    let state = AppState {
        dataset,
        llm,
        model: config.model.clone(),
        prompt_template: config
            .prompt_template
            .clone()
            .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string()),
        upload_dir: config.upload_dir.clone(),
    };

    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    tracing::info!("Listening on http://{}", config.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
