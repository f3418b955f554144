//! Meter readings and their interval data

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{DateTimeInterval, Identified, IdentifiedObject};
use crate::domain::kinds::QualityOfReading;

/// Quality marker on an interval reading. Equality is the code itself, so
/// a reading never carries the same marker twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReadingQuality {
    pub quality: QualityOfReading,
}

impl From<QualityOfReading> for ReadingQuality {
    fn from(quality: QualityOfReading) -> Self {
        Self { quality }
    }
}

/// One measured value over one interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalReading {
    pub time_period: DateTimeInterval,
    pub value: Option<i64>,
    pub cost: Option<i64>,
    pub consumption_tier: Option<i32>,
    pub tou: Option<i32>,
    pub cpp: Option<i32>,
    pub reading_qualities: BTreeSet<ReadingQuality>,
}

impl IntervalReading {
    pub fn new(start: i64, duration: i64, value: i64) -> Self {
        Self {
            time_period: DateTimeInterval::new(start, duration),
            value: Some(value),
            cost: None,
            consumption_tier: None,
            tou: None,
            cpp: None,
            reading_qualities: BTreeSet::new(),
        }
    }

    pub fn with_cost(mut self, cost: i64) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Returns `false` when the marker was already present.
    pub fn add_quality(&mut self, quality: QualityOfReading) -> bool {
        self.reading_qualities.insert(quality.into())
    }

    pub fn has_quality(&self, quality: QualityOfReading) -> bool {
        self.reading_qualities.contains(&quality.into())
    }
}

/// A contiguous block of interval readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalBlock {
    pub object: IdentifiedObject,
    pub meter_reading_id: Option<Uuid>,
    pub interval: DateTimeInterval,
    pub interval_readings: Vec<IntervalReading>,
}

impl IntervalBlock {
    pub fn new(self_href: &str, start: i64, duration: i64) -> Self {
        Self {
            object: IdentifiedObject::from_self_href(self_href),
            meter_reading_id: None,
            interval: DateTimeInterval::new(start, duration),
            interval_readings: Vec::new(),
        }
    }

    pub fn with_reading(mut self, reading: IntervalReading) -> Self {
        self.interval_readings.push(reading);
        self
    }

    /// Drop readings starting at `start`; returns how many were removed.
    pub fn remove_readings_starting_at(&mut self, start: i64) -> usize {
        let before = self.interval_readings.len();
        self.interval_readings
            .retain(|r| r.time_period.start != Some(start));
        before - self.interval_readings.len()
    }

    /// Sum of known values; `None` on overflow.
    pub fn total_value(&self) -> Option<i64> {
        self.interval_readings
            .iter()
            .filter_map(|r| r.value)
            .try_fold(0i64, i64::checked_add)
    }

    pub fn total_cost(&self) -> Option<i64> {
        self.interval_readings
            .iter()
            .filter_map(|r| r.cost)
            .try_fold(0i64, i64::checked_add)
    }
}

impl Identified for IntervalBlock {
    fn identified_object(&self) -> &IdentifiedObject {
        &self.object
    }
}

/// Readings of one quantity at one usage point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterReading {
    pub object: IdentifiedObject,
    pub usage_point_id: Option<Uuid>,
    /// Non-owning; the reading type outlives the reading.
    pub reading_type_id: Option<Uuid>,
    pub interval_blocks: Vec<IntervalBlock>,
}

impl MeterReading {
    pub fn new(self_href: &str) -> Self {
        Self {
            object: IdentifiedObject::from_self_href(self_href),
            usage_point_id: None,
            reading_type_id: None,
            interval_blocks: Vec::new(),
        }
    }

    pub fn with_reading_type(mut self, reading_type_id: Uuid) -> Self {
        self.reading_type_id = Some(reading_type_id);
        self
    }

    pub fn with_block(mut self, block: IntervalBlock) -> Self {
        self.interval_blocks.push(block);
        self.attach();
        self
    }

    /// Stamp every block's back-pointer with this reading's id.
    pub fn attach(&mut self) {
        let id = self.object.id;
        for block in &mut self.interval_blocks {
            block.meter_reading_id = Some(id);
        }
    }

    pub fn interval_reading_count(&self) -> usize {
        self.interval_blocks
            .iter()
            .map(|b| b.interval_readings.len())
            .sum()
    }
}

impl Identified for MeterReading {
    fn identified_object(&self) -> &IdentifiedObject {
        &self.object
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_quality_codes_collapse() {
        let mut reading = IntervalReading::new(0, 900, 10);
        assert!(reading.add_quality(QualityOfReading::Validated));
        assert!(!reading.add_quality(QualityOfReading::Validated));
        assert!(reading.add_quality(QualityOfReading::Raw));
        assert_eq!(reading.reading_qualities.len(), 2);
        assert!(reading.has_quality(QualityOfReading::Raw));
    }

    #[test]
    fn block_totals_and_removal() {
        let mut block = IntervalBlock::new("block", 0, 2700)
            .with_reading(IntervalReading::new(0, 900, 10).with_cost(3))
            .with_reading(IntervalReading::new(900, 900, 20).with_cost(4))
            .with_reading(IntervalReading::new(1800, 900, 30));
        assert_eq!(block.total_value(), Some(60));
        assert_eq!(block.total_cost(), Some(7));
        assert_eq!(block.remove_readings_starting_at(900), 1);
        assert_eq!(block.total_value(), Some(40));
    }

    #[test]
    fn overflowing_totals_are_none() {
        let block = IntervalBlock::new("block", 0, 1800)
            .with_reading(IntervalReading::new(0, 900, i64::MAX).with_cost(i64::MIN))
            .with_reading(IntervalReading::new(900, 900, 1).with_cost(-1));
        assert_eq!(block.total_value(), None);
        assert_eq!(block.total_cost(), None);
    }

    #[test]
    fn with_block_sets_back_pointer() {
        let reading = MeterReading::new("mr").with_block(IntervalBlock::new("b", 0, 900));
        assert_eq!(
            reading.interval_blocks[0].meter_reading_id,
            Some(reading.object.id)
        );
    }
}
