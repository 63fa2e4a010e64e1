//! # hours-engine
//!
//! Opening-hours computation for washrooms.
//!
//! Each washroom has a week of open intervals, stored as minutes since
//! midnight. The engine answers two questions against that data: is the
//! washroom open at a given day and time, and what does its week look like as
//! clock strings.
//!
//! ## Modules
//!
//! - [`weekday`]: the fixed Sunday-first week as an enum
//! - [`clock`]: validated time of day and `H:MM` rendering
//! - [`interval`]: a single open period with inclusive bounds
//! - [`schedule`]: a washroom's full week of intervals
//! - [`store`]: the injected store trait, an in-memory store, missing-entity policy
//! - [`availability`]: open-at-time checks
//! - [`timetable`]: weekly formatting and the fixed demo schedule
//! - [`error`]: error types

pub mod availability;
pub mod clock;
pub mod error;
pub mod interval;
pub mod schedule;
pub mod store;
pub mod timetable;
pub mod weekday;

pub use availability::{check_availability, check_query, is_available, AvailabilityQuery};
pub use clock::{format_clock, TimeOfDay};
pub use error::HoursError;
pub use interval::Interval;
pub use schedule::WeeklySchedule;
pub use store::{fetch_schedule, HoursStore, InMemoryStore, MissingEntityPolicy, WashroomId};
pub use timetable::{
    demo_schedule, demo_week, format_week, get_times, FormattedInterval, FormattedWeek,
};
pub use weekday::Day;
