//! Application services

mod ingestion;

pub use ingestion::{IngestionBatch, IngestionService, StoreCounts};
