//! Human-readable weekly timetables.
//!
//! Turns a [`WeeklySchedule`] of minute offsets into clock strings such as
//! `{"start": "9:00", "end": "22:30"}`. All seven days are always present in
//! the output, Sunday first; closed days map to an empty list.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::clock::format_clock;
use crate::error::Result;
use crate::interval::Interval;
use crate::schedule::WeeklySchedule;
use crate::store::{fetch_schedule, HoursStore, MissingEntityPolicy, WashroomId};
use crate::weekday::Day;

/// One open period rendered as clock strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedInterval {
    pub start: String,
    pub end: String,
}

impl From<Interval> for FormattedInterval {
    fn from(interval: Interval) -> Self {
        Self {
            start: format_clock(interval.start()),
            end: format_clock(interval.end()),
        }
    }
}

/// A week of formatted intervals keyed by day, iterating Sunday first.
pub type FormattedWeek = BTreeMap<Day, Vec<FormattedInterval>>;

/// Format every day of `schedule`, keeping each day's interval order.
///
/// # Examples
///
/// ```
/// use hours_engine::{format_week, Day, Interval, WeeklySchedule};
///
/// let week = WeeklySchedule::new().with_day(Day::Sunday, vec![Interval::new(540, 1350).unwrap()]);
/// let formatted = format_week(&week);
/// assert_eq!(formatted.len(), 7);
/// assert_eq!(formatted[&Day::Sunday][0].start, "9:00");
/// assert_eq!(formatted[&Day::Sunday][0].end, "22:30");
/// assert!(formatted[&Day::Monday].is_empty());
/// ```
#[must_use]
pub fn format_week(schedule: &WeeklySchedule) -> FormattedWeek {
    schedule
        .iter()
        .map(|(day, intervals)| {
            let formatted: Vec<FormattedInterval> = intervals
                .iter()
                .copied()
                .map(FormattedInterval::from)
                .collect();
            (day, formatted)
        })
        .collect()
}

/// Load a washroom's week and format it.
///
/// # Errors
///
/// Returns [`crate::HoursError::NotFound`] under
/// [`MissingEntityPolicy::Reject`], and [`crate::HoursError::StoreUnavailable`]
/// if the store fails. Under [`MissingEntityPolicy::TreatAsEmpty`] an unknown
/// washroom yields seven empty days.
pub async fn get_times(
    store: &dyn HoursStore,
    id: &WashroomId,
    policy: MissingEntityPolicy,
) -> Result<FormattedWeek> {
    let schedule = fetch_schedule(store, id, policy).await?;
    Ok(format_week(&schedule))
}

const DEMO_SUNDAY: Interval = Interval::fixed(900, 1200);
const DEMO_WEEKDAY: Interval = Interval::fixed(540, 780);

/// The fixed preview schedule: Sunday 15:00-20:00, every other day
/// 9:00-13:00.
#[must_use]
pub fn demo_schedule() -> WeeklySchedule {
    Day::ALL
        .iter()
        .fold(WeeklySchedule::new(), |week, &day| {
            let interval = if day == Day::Sunday {
                DEMO_SUNDAY
            } else {
                DEMO_WEEKDAY
            };
            week.with_day(day, vec![interval])
        })
}

/// [`demo_schedule`] formatted. Never touches a store.
#[must_use]
pub fn demo_week() -> FormattedWeek {
    format_week(&demo_schedule())
}
