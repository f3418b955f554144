//! ReadingType aggregate
//!
//! Shared, non-owned description of what a meter reading measures.

pub mod model;
pub mod repository;

pub use model::{Rational, ReadingType};
pub use repository::ReadingTypeRepository;
