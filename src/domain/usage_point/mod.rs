//! UsagePoint aggregate
//!
//! Contains the usage point root, its meter readings with interval data,
//! and its billing and power-quality summaries.

pub mod meter_reading;
pub mod model;
pub mod repository;
pub mod summary;

pub use meter_reading::{IntervalBlock, IntervalReading, MeterReading, ReadingQuality};
pub use model::{AggregateNodeRef, PnodeRef, UsagePoint};
pub use repository::UsagePointRepository;
pub use summary::{
    BillingChargeSource, ElectricPowerQualitySummary, LineItem, TariffRiderRef, UsageSummary,
};
