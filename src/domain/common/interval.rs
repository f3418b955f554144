use serde::{Deserialize, Serialize};

/// Time span expressed as epoch-seconds start plus duration in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateTimeInterval {
    pub start: Option<i64>,
    pub duration: Option<i64>,
}

impl DateTimeInterval {
    pub fn new(start: i64, duration: i64) -> Self {
        Self {
            start: Some(start),
            duration: Some(duration),
        }
    }

    /// Exclusive end of the interval, when both parts are known and the
    /// sum fits in an `i64`.
    pub fn end(&self) -> Option<i64> {
        self.start?.checked_add(self.duration?)
    }

    pub fn contains(&self, instant: i64) -> bool {
        match (self.start, self.end()) {
            (Some(start), Some(end)) => instant >= start && instant < end,
            _ => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.duration.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_and_contains() {
        let interval = DateTimeInterval::new(1_330_578_000, 900);
        assert_eq!(interval.end(), Some(1_330_578_900));
        assert!(interval.contains(1_330_578_000));
        assert!(!interval.contains(1_330_578_900));
    }

    #[test]
    fn partial_interval_has_no_end() {
        let interval = DateTimeInterval {
            start: Some(10),
            duration: None,
        };
        assert_eq!(interval.end(), None);
        assert!(!interval.contains(10));
        assert!(DateTimeInterval::default().is_empty());
    }

    #[test]
    fn overflowing_end_is_none() {
        let interval = DateTimeInterval::new(i64::MAX - 10, 3_600);
        assert_eq!(interval.end(), None);
        assert!(!interval.contains(i64::MAX - 5));
    }
}
