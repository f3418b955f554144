//! Deterministic identifiers for ESPI resources.
//!
//! Every top-level resource is keyed by a name-based (version 5) UUID of a
//! natural key, usually its self link (`.../espi/1_1/resource/UsagePoint/1`)
//! or a domain code such as an agreement id. Deriving the id again from the
//! same key always yields the same value, which is what makes repeated
//! ingestion of the same feed an upsert instead of an insert.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Namespace under which all natural keys are hashed.
pub const ESPI_NAMESPACE: Uuid = Uuid::from_u128(0x3b0f_2c6a_9d41_5e8b_a7c2_1f60_4d9e_8a13);

/// Derive the primary key for a natural key.
pub fn derive_id(natural_key: &str) -> Uuid {
    Uuid::new_v5(&ESPI_NAMESPACE, natural_key.as_bytes())
}

/// Hex SHA-256 of a natural key, used for opaque public identifiers
/// (subscription hashed ids).
pub fn hashed_key(natural_key: &str) -> String {
    hex::encode(Sha256::digest(natural_key.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_key_yields_same_id() {
        let href = "https://utility.example/espi/1_1/resource/UsagePoint/1";
        assert_eq!(derive_id(href), derive_id(href));
    }

    #[test]
    fn different_keys_yield_different_ids() {
        assert_ne!(derive_id("foo"), derive_id("bar"));
        assert_ne!(derive_id("foo"), derive_id("foo "));
    }

    #[test]
    fn derived_ids_are_name_based() {
        assert_eq!(derive_id("foo").get_version_num(), 5);
    }

    #[test]
    fn hashed_key_is_stable_hex() {
        let a = hashed_key("subscription-1");
        assert_eq!(a, hashed_key("subscription-1"));
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
