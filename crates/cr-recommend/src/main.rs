use std::{
    io::Read,
    path::{Path, PathBuf},
    sync::Arc,
};

use clap::{Parser, Subcommand};
use cr_common::{
    CareerId,
    api::RecommendRequest,
    catalog::{CatalogError, InMemoryCatalog},
    config::{RecommenderConfig, load_config_from_env},
    db::{DbPoolError, PgCatalog, create_pool_from_url},
    logging::{init_tracing_subscriber, install_tracing_panic_hook},
    matching::{RecommendError, Recommender},
    run_id,
};
use dotenvy::dotenv;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Parser)]
#[command(name = "cr-recommend", about = "Career recommendations from a skill catalog")]
struct Cli {
    /// JSON catalog document (takes precedence over DATABASE_URL)
    #[arg(long, env = "CR_CATALOG_PATH")]
    catalog: Option<PathBuf>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Run one recommendation request
    Recommend {
        /// Request JSON file; stdin when omitted or "-"
        #[arg(long)]
        request: Option<PathBuf>,
    },
    /// List every course for a career, Beginner first
    Roadmap {
        #[arg(long)]
        career_id: CareerId,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("no catalog configured: pass --catalog or set DATABASE_URL")]
    NoCatalog,
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Pool(#[from] DbPoolError),
    #[error("failed to read request: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid request json: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Recommend(#[from] RecommendError),
}

fn build_recommender(cli: &Cli, config: RecommenderConfig) -> Result<Recommender, CliError> {
    if let Some(path) = &cli.catalog {
        let catalog = InMemoryCatalog::from_json_file(path)?;
        return Ok(Recommender::from_catalog(Arc::new(catalog), config));
    }

    match cli.database_url.as_deref() {
        Some(url) => {
            let pool = create_pool_from_url(url)?;
            Ok(Recommender::from_catalog(
                Arc::new(PgCatalog::new(pool)),
                config,
            ))
        }
        None => Err(CliError::NoCatalog),
    }
}

fn read_request(path: Option<&Path>) -> Result<RecommendRequest, CliError> {
    let raw = match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&raw)?)
}

async fn execute(cli: &Cli, recommender: &Recommender) -> Result<String, CliError> {
    let output = match &cli.command {
        Command::Recommend { request } => {
            let request = read_request(request.as_deref())?;
            let response = recommender.recommend(&request).await?;
            serde_json::to_string_pretty(&response)?
        }
        Command::Roadmap { career_id } => {
            let courses = recommender.roadmap(*career_id).await?;
            serde_json::to_string_pretty(&serde_json::json!({
                "career_id": career_id,
                "courses": courses,
            }))?
        }
    };
    Ok(output)
}

async fn run() -> Result<(), CliError> {
    dotenv().ok();
    init_tracing_subscriber(env!("CARGO_PKG_NAME"));
    install_tracing_panic_hook(env!("CARGO_PKG_NAME"));

    let cli = Cli::parse();
    let config = load_config_from_env();
    info!(run_id = run_id::get(), ?config, "cr-recommend starting");

    let recommender = build_recommender(&cli, config)?;
    let output = execute(&cli, &recommender).await?;
    println!("{output}");
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "cr-recommend failed");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
