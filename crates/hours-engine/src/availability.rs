//! Is a washroom open at a given day and time?
//!
//! [`check_availability`] validates the raw query first, then loads the
//! washroom's week and scans that day's intervals. The scan is linear and
//! tolerates unsorted or overlapping intervals.

use serde::Serialize;

use crate::clock::TimeOfDay;
use crate::error::Result;
use crate::interval::Interval;
use crate::store::{fetch_schedule, HoursStore, MissingEntityPolicy, WashroomId};
use crate::weekday::Day;

/// A validated availability query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AvailabilityQuery {
    pub day: Day,
    pub time: TimeOfDay,
}

impl AvailabilityQuery {
    /// Validate raw inputs: `day_index` in `0..=6` (Sunday = 0), `hour` in
    /// `0..=23`, `minute` in `0..=59`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::HoursError::InvalidDay`] or
    /// [`crate::HoursError::InvalidTime`] for out-of-range inputs.
    pub fn new(day_index: i64, hour: i64, minute: i64) -> Result<Self> {
        Ok(Self {
            day: Day::from_index(day_index)?,
            time: TimeOfDay::new(hour, minute)?,
        })
    }
}

/// Whether `minute` falls inside any of `intervals`.
///
/// An empty slice is never available.
#[must_use]
pub fn is_available(intervals: &[Interval], minute: u16) -> bool {
    intervals.iter().any(|iv| iv.contains(minute))
}

/// Check whether a washroom is open at `hour:minute` on day `day_index`.
///
/// Inputs are validated before the store is touched. An unknown washroom is
/// handled according to `policy`.
///
/// # Errors
///
/// Returns an invalid-argument error for out-of-range inputs,
/// [`crate::HoursError::NotFound`] under [`MissingEntityPolicy::Reject`], and
/// [`crate::HoursError::StoreUnavailable`] if the store fails.
///
/// # Examples
///
/// ```
/// use hours_engine::{check_availability, Day, InMemoryStore, Interval,
///     MissingEntityPolicy, WashroomId, WeeklySchedule};
///
/// # tokio_test_block(async {
/// let store = InMemoryStore::new();
/// let id = WashroomId::new("north-gate").unwrap();
/// let week = WeeklySchedule::new().with_day(Day::Sunday, vec![Interval::new(540, 1350).unwrap()]);
/// store.insert(id.clone(), week).unwrap();
///
/// let open = check_availability(&store, &id, 0, 21, 35, MissingEntityPolicy::TreatAsEmpty)
///     .await
///     .unwrap();
/// assert!(open);
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
pub async fn check_availability(
    store: &dyn HoursStore,
    id: &WashroomId,
    day_index: i64,
    hour: i64,
    minute: i64,
    policy: MissingEntityPolicy,
) -> Result<bool> {
    let query = AvailabilityQuery::new(day_index, hour, minute)?;
    check_query(store, id, query, policy).await
}

/// Like [`check_availability`] with an already validated query.
///
/// # Errors
///
/// See [`check_availability`].
pub async fn check_query(
    store: &dyn HoursStore,
    id: &WashroomId,
    query: AvailabilityQuery,
    policy: MissingEntityPolicy,
) -> Result<bool> {
    let schedule = fetch_schedule(store, id, policy).await?;
    let minute = query.time.minutes();
    let open = is_available(schedule.day(query.day), minute);
    tracing::debug!(
        washroom = %id,
        day = %query.day,
        minute,
        open,
        "availability checked"
    );
    Ok(open)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HoursError;
    use crate::schedule::WeeklySchedule;
    use crate::store::InMemoryStore;
    use async_trait::async_trait;
    use proptest::prelude::*;

    fn iv(start: i64, end: i64) -> Interval {
        Interval::new(start, end).unwrap()
    }

    fn id(s: &str) -> WashroomId {
        WashroomId::new(s).unwrap()
    }

    /// The two washrooms the original service tests seeded.
    fn seeded_store() -> InMemoryStore {
        let store = InMemoryStore::new();
        store.insert(id("empty"), WeeklySchedule::new()).unwrap();
        store
            .insert(
                id("mixed"),
                WeeklySchedule::new()
                    .with_day(Day::Sunday, vec![iv(540, 1350)])
                    .with_day(Day::Wednesday, vec![iv(0, 780), iv(800, 1350)]),
            )
            .unwrap();
        store
    }

    /// A store whose backend is always down.
    struct DownStore;

    #[async_trait]
    impl HoursStore for DownStore {
        async fn get_schedule(&self, _id: &WashroomId) -> Result<WeeklySchedule> {
            Err(HoursError::StoreUnavailable("connection refused".to_string()))
        }

        async fn health_check(&self) -> Result<bool> {
            Ok(false)
        }
    }

    /// Panics on any access, proving validation happens first.
    struct UntouchableStore;

    #[async_trait]
    impl HoursStore for UntouchableStore {
        async fn get_schedule(&self, _id: &WashroomId) -> Result<WeeklySchedule> {
            panic!("store must not be queried for invalid input");
        }

        async fn health_check(&self) -> Result<bool> {
            Ok(true)
        }
    }

    #[test]
    fn test_is_available_empty_slice() {
        assert!(!is_available(&[], 0));
        assert!(!is_available(&[], 1439));
    }

    #[test]
    fn test_query_validation() {
        assert!(AvailabilityQuery::new(0, 0, 0).is_ok());
        assert!(AvailabilityQuery::new(6, 23, 59).is_ok());
        assert!(matches!(
            AvailabilityQuery::new(7, 10, 0),
            Err(HoursError::InvalidDay(7))
        ));
        assert!(matches!(
            AvailabilityQuery::new(0, 24, 0),
            Err(HoursError::InvalidTime { .. })
        ));
        assert!(AvailabilityQuery::new(0, 10, 60).is_err());
    }

    #[tokio::test]
    async fn test_no_times_available() {
        let store = seeded_store();
        let open = check_availability(
            &store,
            &id("empty"),
            0,
            22,
            35,
            MissingEntityPolicy::TreatAsEmpty,
        )
        .await
        .unwrap();
        assert!(!open);
    }

    #[tokio::test]
    async fn test_time_available() {
        let store = seeded_store();
        // 21:35 = 1295, inside Sunday 540..=1350
        let open = check_availability(
            &store,
            &id("mixed"),
            0,
            21,
            35,
            MissingEntityPolicy::TreatAsEmpty,
        )
        .await
        .unwrap();
        assert!(open);
    }

    #[tokio::test]
    async fn test_gap_between_intervals() {
        let store = seeded_store();
        let policy = MissingEntityPolicy::TreatAsEmpty;
        // Wednesday: 0..=780 and 800..=1350, so 13:10 falls in the gap
        assert!(!check_availability(&store, &id("mixed"), 3, 13, 10, policy)
            .await
            .unwrap());
        assert!(check_availability(&store, &id("mixed"), 3, 13, 0, policy)
            .await
            .unwrap());
        assert!(check_availability(&store, &id("mixed"), 3, 13, 20, policy)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_other_day_closed() {
        let store = seeded_store();
        let open = check_availability(
            &store,
            &id("mixed"),
            1,
            12,
            0,
            MissingEntityPolicy::TreatAsEmpty,
        )
        .await
        .unwrap();
        assert!(!open);
    }

    #[tokio::test]
    async fn test_unknown_washroom_by_policy() {
        let store = seeded_store();
        let open = check_availability(
            &store,
            &id("ghost"),
            0,
            12,
            0,
            MissingEntityPolicy::TreatAsEmpty,
        )
        .await
        .unwrap();
        assert!(!open);

        let err = check_availability(&store, &id("ghost"), 0, 12, 0, MissingEntityPolicy::Reject)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_invalid_input_rejected_before_lookup() {
        let policy = MissingEntityPolicy::Reject;
        for (day, hour, minute) in [(-1, 0, 0), (7, 0, 0), (0, 24, 0), (0, 0, 60), (0, -3, 0)] {
            let err = check_availability(&UntouchableStore, &id("a"), day, hour, minute, policy)
                .await
                .unwrap_err();
            assert!(err.is_invalid_argument(), "{day} {hour}:{minute} -> {err}");
        }
    }

    #[tokio::test]
    async fn test_store_outage_is_error_not_false() {
        let err = check_availability(
            &DownStore,
            &id("a"),
            0,
            12,
            0,
            MissingEntityPolicy::TreatAsEmpty,
        )
        .await
        .unwrap_err();
        assert!(err.is_transient());
    }

    proptest! {
        #[test]
        fn prop_inside_some_interval_is_available(
            bounds in prop::collection::vec((0i64..1440, 0i64..1440), 1..6),
            pick in any::<prop::sample::Index>(),
            offset in 0.0f64..=1.0,
        ) {
            let intervals: Vec<Interval> = bounds
                .iter()
                .map(|&(a, b)| if a <= b { iv(a, b) } else { iv(b, a) })
                .collect();
            let chosen = intervals[pick.index(intervals.len())];
            let span = f64::from(chosen.end() - chosen.start());
            let t = chosen.start() + (span * offset).floor() as u16;
            prop_assert!(is_available(&intervals, t));
        }

        #[test]
        fn prop_outside_every_interval_is_unavailable(
            bounds in prop::collection::vec((0i64..1440, 0i64..1440), 0..6),
            t in 0u16..1440,
        ) {
            let intervals: Vec<Interval> = bounds
                .iter()
                .map(|&(a, b)| if a <= b { iv(a, b) } else { iv(b, a) })
                .collect();
            let inside_any = intervals.iter().any(|i| i.start() <= t && t <= i.end());
            prop_assert_eq!(is_available(&intervals, t), inside_any);
        }

        #[test]
        fn prop_empty_week_never_available(day in 0usize..7, hour in 0i64..24, minute in 0i64..60) {
            let week = WeeklySchedule::new();
            let time = TimeOfDay::new(hour, minute).unwrap();
            prop_assert!(!week.is_open(Day::ALL[day], time));
        }
    }
}
