use serde::{Deserialize, Serialize};

use crate::domain::kinds::{UnitMultiplierKind, UnitSymbolKind};

/// Scalar summary value with its unit, embedded by value in its owner.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SummaryMeasurement {
    pub power_of_ten_multiplier: Option<UnitMultiplierKind>,
    pub uom: Option<UnitSymbolKind>,
    pub value: Option<i64>,
    pub time_stamp: Option<i64>,
    pub reading_type_ref: Option<String>,
}

impl SummaryMeasurement {
    pub fn new(multiplier: UnitMultiplierKind, uom: UnitSymbolKind, value: i64) -> Self {
        Self {
            power_of_ten_multiplier: Some(multiplier),
            uom: Some(uom),
            value: Some(value),
            time_stamp: None,
            reading_type_ref: None,
        }
    }

    pub fn at(mut self, time_stamp: i64) -> Self {
        self.time_stamp = Some(time_stamp);
        self
    }

    pub fn with_reading_type_ref(mut self, href: impl Into<String>) -> Self {
        self.reading_type_ref = Some(href.into());
        self
    }

    /// Value scaled by its power-of-ten multiplier.
    pub fn scaled_value(&self) -> Option<f64> {
        let exponent = self.power_of_ten_multiplier.map_or(0, |m| m.code());
        self.value.map(|v| v as f64 * 10f64.powi(exponent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_value_applies_multiplier() {
        let m = SummaryMeasurement::new(UnitMultiplierKind::Kilo, UnitSymbolKind::WattHours, 12);
        assert_eq!(m.scaled_value(), Some(12_000.0));
    }

    #[test]
    fn clones_are_independent_values() {
        let base = SummaryMeasurement::new(UnitMultiplierKind::None, UnitSymbolKind::Watts, 5);
        let mut copy = base.clone().at(100);
        copy.value = Some(6);
        assert_eq!(base.value, Some(5));
        assert_eq!(base.time_stamp, None);
    }
}
