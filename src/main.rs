//! ESPI Store
//!
//! Connects to the configured database, applies migrations and prints a
//! JSON summary of the stored resources.
//! Reads configuration from TOML file (~/.config/espi-store/config.toml).

use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use espi_store::config::LoggingSection;
use espi_store::shared::errors::{AppError, InfraError};
use espi_store::{default_config_path, init_database, AppConfig, IngestionService, SeaOrmRepositoryProvider};

fn init_tracing(logging: &LoggingSection) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = default_config_path();
    let (app_cfg, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg.with_env_overrides(), None),
        Err(e) => (AppConfig::default().with_env_overrides(), Some(e)),
    };
    init_tracing(&app_cfg.logging);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => error!("Failed to load config: {}. Using defaults.", e),
    }

    // ── Database ───────────────────────────────────────────────
    let db_config = app_cfg.database_config();
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            return Err(InfraError::from(e).into());
        }
    };
    if !db_config.auto_migrate {
        warn!("Automatic migrations disabled; schema must already be current");
    }

    let repos = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
    let ingestion = IngestionService::new(repos);

    let counts = ingestion.counts().await?;
    let summary = serde_json::to_string_pretty(&counts).map_err(InfraError::from)?;
    println!("{summary}");
    info!(total = counts.total(), "Store summary written");

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }
    Ok(())
}
