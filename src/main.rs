use dotenvy::dotenv;
mod application;
mod domain;
mod infrastructure;
mod utils;

use crate::application::handlers::{ConsoleHandler, run_console};
use crate::application::services::RecordService;
use crate::domain::{ProfileRecord, Record, TaskRecord};
use crate::infrastructure::config::{AppConfig, RecordKind};
use crate::infrastructure::repositories::JsonRecordRepository;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{error, info};

async fn run_app<R: Record>(file_path: PathBuf) -> anyhow::Result<()> {
    let repo = Arc::new(JsonRecordRepository::<R>::open(file_path).await);
    info!("Using {} store at {}", R::KIND, repo.file_path().display());

    let mut handler = ConsoleHandler::new(RecordService::new(repo));
    println!("Managing {} records. Type 'help' for commands.", R::KIND);
    run_console(
        &mut handler,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = AppConfig::from_env()?;
    utils::setup_logging(config.log_level)?;

    let result = match config.kind {
        RecordKind::Task => run_app::<TaskRecord>(config.file_path).await,
        RecordKind::Profile => run_app::<ProfileRecord>(config.file_path).await,
    };

    if let Err(e) = &result {
        error!("Error running formbook: {}", e);
    }
    result
}
