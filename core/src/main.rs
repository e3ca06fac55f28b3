use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use docvec::config::Config;
use docvec::error::Error;
use docvec::pipeline::Vectorizer;
use docvec::providers::embeddings::{GeminiEmbeddingModel, DEFAULT_API_URL, DEFAULT_MODEL};
use docvec::vector_store::postgres::PostgresChunkStore;

/// Ingest PDF/DOCX files into Postgres as embedded paragraph chunks.
///
/// Requires `GEMINI_API_KEY` and `DATABASE_URL` in the environment (a `.env`
/// file is honored).
#[derive(Parser, Debug)]
#[command(name = "docvec", version)]
struct Cli {
    /// Files to process, in order
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Embedding model name
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => {
            info!("all files processed and stored");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    let config = Config::from_env()?;
    let store = PostgresChunkStore::connect(&config.database_url).await?;
    let model = GeminiEmbeddingModel::new(
        config.gemini_api_key,
        DEFAULT_API_URL.to_string(),
        cli.model,
    );

    // The store handle is cloned so the pool is released on every exit path.
    let pool_handle = store.clone();
    let outcome = process_all(store, model, &cli.files).await;
    pool_handle.close().await;
    outcome
}

async fn process_all(
    store: PostgresChunkStore,
    model: GeminiEmbeddingModel,
    files: &[PathBuf],
) -> Result<(), Error> {
    let vectorizer = Vectorizer::init(store, model).await?;
    info!("vectorizer initialized");

    for file in files {
        match vectorizer.process_file(file).await {
            Ok(chunks) => info!(file = %file.display(), chunks, "file processed"),
            Err(e) => {
                error!(file = %file.display(), "failed to process file: {e}");
                return Err(e);
            }
        }
    }
    Ok(())
}
