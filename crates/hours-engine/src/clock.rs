//! Minute-of-day arithmetic and clock-string rendering.

use chrono::{NaiveTime, Timelike};
use serde::Serialize;

use crate::error::{HoursError, Result};

/// Minutes in a day. Valid minute offsets are `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// The last valid minute offset (23:59).
pub const LAST_MINUTE: u16 = MINUTES_PER_DAY - 1;

/// A validated wall-clock time with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Build a time from hour and minute.
    ///
    /// Takes signed integers so raw query parameters can be validated without
    /// a lossy cast first.
    ///
    /// # Errors
    ///
    /// Returns [`HoursError::InvalidTime`] if `hour` is outside `0..=23` or
    /// `minute` is outside `0..=59`.
    pub fn new(hour: i64, minute: i64) -> Result<Self> {
        if !(0..=23).contains(&hour) || !(0..=59).contains(&minute) {
            return Err(HoursError::InvalidTime { hour, minute });
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    #[must_use]
    pub fn hour(self) -> u8 {
        self.hour
    }

    #[must_use]
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes since midnight: `hour * 60 + minute`.
    #[must_use]
    pub fn minutes(self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Truncates seconds.
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }
}

/// Render a minute offset as `H:MM`.
///
/// The hour has no leading zero and the minutes always have two digits.
///
/// # Examples
///
/// ```
/// use hours_engine::clock::format_clock;
///
/// assert_eq!(format_clock(540), "9:00");
/// assert_eq!(format_clock(1350), "22:30");
/// assert_eq!(format_clock(0), "0:00");
/// ```
#[must_use]
pub fn format_clock(minutes: u16) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    format!("{hours}:{mins:02}")
}
