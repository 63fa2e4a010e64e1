//! The fixed seven-day week used to index opening hours.
//!
//! Days are ordered Sunday first: index 0 is Sunday and index 6 is Saturday.
//! The ordering is carried by the enum discriminants, so a `BTreeMap<Day, _>`
//! iterates in week order and serializes with the day names as keys.

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{HoursError, Result};

/// A day of the week, Sunday = 0.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Day {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Day {
    /// Every day in week order.
    pub const ALL: [Day; 7] = [
        Day::Sunday,
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// Map a day index to a day.
    ///
    /// # Errors
    ///
    /// Returns [`HoursError::InvalidDay`] if `index` is outside `0..=6`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hours_engine::Day;
    ///
    /// assert_eq!(Day::from_index(0).unwrap(), Day::Sunday);
    /// assert!(Day::from_index(7).is_err());
    /// ```
    pub fn from_index(index: i64) -> Result<Day> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(HoursError::InvalidDay(index))
    }

    /// Position in the week, Sunday = 0.
    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// English name, as used in stored schedules and responses.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Day::Sunday => "Sunday",
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        Self::ALL[weekday.num_days_from_sunday() as usize]
    }
}

impl From<Day> for Weekday {
    fn from(day: Day) -> Self {
        match day {
            Day::Sunday => Weekday::Sun,
            Day::Monday => Weekday::Mon,
            Day::Tuesday => Weekday::Tue,
            Day::Wednesday => Weekday::Wed,
            Day::Thursday => Weekday::Thu,
            Day::Friday => Weekday::Fri,
            Day::Saturday => Weekday::Sat,
        }
    }
}
