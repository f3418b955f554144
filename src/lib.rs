//! # ESPI Store
//!
//! Persistence layer for NAESB ESPI (Green Button) resources.
//!
//! ## Architecture
//!
//! - **domain**: Resource models, code enumerations and repository traits
//! - **application**: Batch ingestion and purge
//! - **infrastructure**: SeaORM entities, migrations and repositories
//! - **shared**: Errors and deterministic identifiers

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

pub use application::{IngestionBatch, IngestionService, StoreCounts};
