//! CLI command implementations

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::db::Database;
use crate::http_server::HttpServer;
use crate::quotes::seed as seed_file;
use crate::quotes::{QuoteService, QuoteStore, SqliteQuoteStore};
use crate::telemetry;

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command to completion
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::io_error(format!("Failed to start runtime: {}", e)))?;

    runtime.block_on(run_command(cli.command))
}

/// Dispatch a parsed command
pub async fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config } => {
            let config = Config::load(&config)?;
            telemetry::init(config.log_format);
            serve(config).await
        }
        Command::Seed { file, config } => {
            let config = Config::load(&config)?;
            telemetry::init(config.log_format);
            seed(&config, &file).await.map(|_| ())
        }
    }
}

/// Boot the store and serve HTTP until shutdown
pub async fn serve(config: Config) -> CliResult<()> {
    let api_key = config.api_key()?;
    let store = open_store(&config).await?;
    let service = Arc::new(QuoteService::new(Arc::new(store), api_key));

    info!(
        database = %config.database_path,
        addr = %config.http.socket_addr(),
        "Starting quotes-api"
    );

    HttpServer::with_config(config.http, service)
        .start()
        .await
        .map_err(|e| CliError::serve_failed(e.to_string()))
}

/// Import a seed file in one transaction; returns the number imported
pub async fn seed(config: &Config, file: &Path) -> CliResult<usize> {
    let content = fs::read_to_string(file).map_err(|e| {
        CliError::io_error(format!("Failed to read {}: {}", file.display(), e))
    })?;
    let quotes = seed_file::parse(&content);

    let store = open_store(config).await?;
    let imported = store
        .import(&quotes)
        .await
        .map_err(|e| CliError::seed_failed(e.to_string()))?;

    info!(file = %file.display(), imported, "Seed complete");
    Ok(imported)
}

async fn open_store(config: &Config) -> CliResult<SqliteQuoteStore> {
    let db = Database::connect(&config.database_path)
        .await
        .map_err(|e| CliError::boot_failed(e.to_string()))?;

    Ok(SqliteQuoteStore::new(db.pool().clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::errors::CliErrorCode;

    fn config(database: &Path) -> Config {
        Config {
            database_path: database.to_str().unwrap().to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_seed_imports_file() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("quotes.db");
        let config = config(&db_path);

        let file = dir.path().join("quotes.txt");
        fs::write(
            &file,
            "\"Stay hungry, stay foolish.\" ~ steve jobs\nnot a quote\n\"Less is more.\" ~ Ludwig Mies\n",
        )
        .unwrap();

        let imported = seed(&config, &file).await.unwrap();
        assert_eq!(imported, 2);

        let db = Database::connect(db_path.to_str().unwrap()).await.unwrap();
        let store = SqliteQuoteStore::new(db.pool().clone());
        let found = store.list_by_author("Steve Jobs").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].quote, "Stay hungry, stay foolish.");
    }

    #[tokio::test]
    async fn test_seed_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir.path().join("quotes.db"));

        let err = seed(&config, &dir.path().join("absent.txt"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), CliErrorCode::IoError);
    }

    #[tokio::test]
    async fn test_serve_requires_api_key() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir.path().join("quotes.db"));

        let err = serve(config).await.unwrap_err();
        assert_eq!(err.code(), CliErrorCode::ConfigError);
    }
}
