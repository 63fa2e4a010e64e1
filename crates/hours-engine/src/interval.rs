//! Open intervals within a single day.

use serde::{Deserialize, Serialize};

use crate::clock::LAST_MINUTE;
use crate::error::HoursError;

/// One open period, in minutes since midnight. Both ends are inclusive.
///
/// Construction enforces `start <= end <= 1439`, including when an interval
/// is deserialized from stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    start: u16,
    end: u16,
}

/// Unchecked shape of an interval as it appears in stored documents.
#[derive(Deserialize)]
struct RawInterval {
    start: i64,
    end: i64,
}

impl Interval {
    /// # Errors
    ///
    /// Returns [`HoursError::InvalidInterval`] if either bound lies outside
    /// `0..=1439` or if `start > end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hours_engine::Interval;
    ///
    /// let open = Interval::new(540, 1350).unwrap();
    /// assert!(open.contains(1295));
    /// assert!(Interval::new(800, 700).is_err());
    /// ```
    pub fn new(start: i64, end: i64) -> Result<Self, HoursError> {
        let last = i64::from(LAST_MINUTE);
        if !(0..=last).contains(&start) || !(0..=last).contains(&end) {
            return Err(HoursError::InvalidInterval(format!(
                "bounds {start}..{end} outside 0..={last}"
            )));
        }
        if start > end {
            return Err(HoursError::InvalidInterval(format!(
                "start {start} is after end {end}"
            )));
        }
        Ok(Self {
            start: start as u16,
            end: end as u16,
        })
    }

    /// Constructor for fixed schedules built in `const` items, where a bad
    /// bound fails compilation.
    pub(crate) const fn fixed(start: u16, end: u16) -> Self {
        assert!(start <= end && end <= LAST_MINUTE);
        Self { start, end }
    }

    #[must_use]
    pub fn start(self) -> u16 {
        self.start
    }

    #[must_use]
    pub fn end(self) -> u16 {
        self.end
    }

    /// Whether `minute` falls inside `start..=end`.
    #[must_use]
    pub fn contains(self, minute: u16) -> bool {
        self.start <= minute && minute <= self.end
    }
}

impl TryFrom<RawInterval> for Interval {
    type Error = HoursError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        Interval::new(raw.start, raw.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_contains_is_inclusive() {
        let iv = Interval::new(540, 1350).unwrap();
        assert!(iv.contains(540));
        assert!(iv.contains(1350));
        assert!(iv.contains(1295));
        assert!(!iv.contains(539));
        assert!(!iv.contains(1351));
    }

    #[test]
    fn test_single_minute_interval() {
        let iv = Interval::new(720, 720).unwrap();
        assert!(iv.contains(720));
        assert!(!iv.contains(721));
    }

    #[test]
    fn test_rejects_reversed_bounds() {
        let err = Interval::new(800, 700).unwrap_err();
        assert!(err.to_string().contains("after end"));
    }

    #[test]
    fn test_rejects_out_of_day() {
        assert!(Interval::new(-1, 10).is_err());
        assert!(Interval::new(0, 1440).is_err());
        assert!(Interval::new(0, 1439).is_ok());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Interval = serde_json::from_str(r#"{"start": 0, "end": 780}"#).unwrap();
        assert_eq!((ok.start(), ok.end()), (0, 780));

        let bad = serde_json::from_str::<Interval>(r#"{"start": 900, "end": 100}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_serialize_shape() {
        let iv = Interval::new(800, 1350).unwrap();
        let json = serde_json::to_string(&iv).unwrap();
        assert_eq!(json, r#"{"start":800,"end":1350}"#);
    }

    proptest! {
        #[test]
        fn prop_contains_matches_bounds(
            a in 0i64..1440,
            b in 0i64..1440,
            t in 0u16..1440,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let iv = Interval::new(lo, hi).unwrap();
            let expected = lo as u16 <= t && t <= hi as u16;
            prop_assert_eq!(iv.contains(t), expected);
        }
    }
}
