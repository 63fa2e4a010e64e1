//! A washroom's weekly opening hours.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};

use crate::clock::TimeOfDay;
use crate::interval::Interval;
use crate::weekday::Day;

/// Open intervals for each of the seven days.
///
/// Every day is always present. Within a day, intervals keep their stored
/// order and may overlap; nothing here sorts or merges them.
///
/// Serializes as a map keyed by day name in week order. When deserializing,
/// missing days become empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<Day, Vec<Interval>>")]
pub struct WeeklySchedule {
    days: [Vec<Interval>; 7],
}

impl WeeklySchedule {
    /// An all-closed week.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, replacing the intervals for `day`.
    #[must_use]
    pub fn with_day(mut self, day: Day, intervals: Vec<Interval>) -> Self {
        self.set_day(day, intervals);
        self
    }

    pub fn set_day(&mut self, day: Day, intervals: Vec<Interval>) {
        self.days[day.index() as usize] = intervals;
    }

    pub fn push(&mut self, day: Day, interval: Interval) {
        self.days[day.index() as usize].push(interval);
    }

    #[must_use]
    pub fn day(&self, day: Day) -> &[Interval] {
        &self.days[day.index() as usize]
    }

    /// Days with their intervals, Sunday first.
    pub fn iter(&self) -> impl Iterator<Item = (Day, &[Interval])> + '_ {
        Day::ALL
            .iter()
            .zip(self.days.iter())
            .map(|(day, intervals)| (*day, intervals.as_slice()))
    }

    /// True when no day has any interval.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }

    /// Whether `time` on `day` falls inside any interval of that day.
    #[must_use]
    pub fn is_open(&self, day: Day, time: TimeOfDay) -> bool {
        let minute = time.minutes();
        self.day(day).iter().any(|iv| iv.contains(minute))
    }
}

impl From<BTreeMap<Day, Vec<Interval>>> for WeeklySchedule {
    fn from(map: BTreeMap<Day, Vec<Interval>>) -> Self {
        let mut schedule = Self::default();
        for (day, intervals) in map {
            schedule.set_day(day, intervals);
        }
        schedule
    }
}

impl Serialize for WeeklySchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
