//! Shared records referenced (never owned) by usage points

use serde::{Deserialize, Serialize};

use crate::domain::common::{Identified, IdentifiedObject};
use crate::shared::errors::{DomainError, DomainResult};

/// Local time parameters of a usage point. DST rules are opaque 4-byte
/// encodings carried as hex on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeConfiguration {
    pub object: IdentifiedObject,
    pub dst_end_rule: Option<Vec<u8>>,
    /// Seconds added during daylight saving time.
    pub dst_offset: Option<i64>,
    pub dst_start_rule: Option<Vec<u8>>,
    /// Offset from UTC in seconds.
    pub tz_offset: Option<i64>,
}

impl TimeConfiguration {
    pub fn new(self_href: &str, tz_offset: i64) -> Self {
        Self {
            object: IdentifiedObject::from_self_href(self_href),
            dst_end_rule: None,
            dst_offset: None,
            dst_start_rule: None,
            tz_offset: Some(tz_offset),
        }
    }

    /// Set both DST rules from their hex encodings.
    pub fn with_dst_rules(mut self, start_hex: &str, end_hex: &str, offset: i64) -> DomainResult<Self> {
        self.dst_start_rule = Some(decode_rule(start_hex)?);
        self.dst_end_rule = Some(decode_rule(end_hex)?);
        self.dst_offset = Some(offset);
        Ok(self)
    }

    /// Total offset from UTC while daylight saving time is in effect.
    pub fn dst_total_offset(&self) -> Option<i64> {
        Some(self.tz_offset? + self.dst_offset.unwrap_or(0))
    }
}

fn decode_rule(rule: &str) -> DomainResult<Vec<u8>> {
    hex::decode(rule).map_err(|e| DomainError::Validation(format!("invalid DST rule {rule}: {e}")))
}

impl Identified for TimeConfiguration {
    fn identified_object(&self) -> &IdentifiedObject {
        &self.object
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDeliveryPoint {
    pub object: IdentifiedObject,
    pub name: Option<String>,
    pub tariff_profile: Option<String>,
    pub customer_agreement: Option<String>,
}

impl ServiceDeliveryPoint {
    pub fn new(self_href: &str, name: impl Into<String>) -> Self {
        Self {
            object: IdentifiedObject::from_self_href(self_href),
            name: Some(name.into()),
            tariff_profile: None,
            customer_agreement: None,
        }
    }
}

impl Identified for ServiceDeliveryPoint {
    fn identified_object(&self) -> &IdentifiedObject {
        &self.object
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dst_rules_decode_from_hex() {
        let tc = TimeConfiguration::new("tc", -18_000)
            .with_dst_rules("360e2000", "b40e2000", 3_600)
            .unwrap();
        assert_eq!(tc.dst_start_rule, Some(vec![0x36, 0x0e, 0x20, 0x00]));
        assert_eq!(tc.dst_total_offset(), Some(-14_400));
    }

    #[test]
    fn invalid_dst_rule_is_rejected() {
        let result = TimeConfiguration::new("tc", 0).with_dst_rules("zz", "00", 0);
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
