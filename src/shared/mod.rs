pub mod errors;
pub mod identity;

pub use errors::*;
pub use identity::{derive_id, hashed_key, ESPI_NAMESPACE};
