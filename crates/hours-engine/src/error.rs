//! Error types for hours-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HoursError {
    #[error("Washroom not found: {0}")]
    NotFound(String),

    #[error("Invalid day index: {0} (expected 0-6, Sunday = 0)")]
    InvalidDay(i64),

    #[error("Invalid time of day: {hour}:{minute:02} (expected hour 0-23, minute 0-59)")]
    InvalidTime { hour: i64, minute: i64 },

    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Invalid washroom id: {0}")]
    InvalidId(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Seed data error: {0}")]
    Seed(String),
}

impl HoursError {
    /// True for errors caused by caller input, rejected before any lookup.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidDay(_)
                | Self::InvalidTime { .. }
                | Self::InvalidInterval(_)
                | Self::InvalidId(_)
        )
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Transient backend failure. The engine never retries these.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}

pub type Result<T> = std::result::Result<T, HoursError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_day_display() {
        let err = HoursError::InvalidDay(7);
        assert_eq!(
            err.to_string(),
            "Invalid day index: 7 (expected 0-6, Sunday = 0)"
        );
    }

    #[test]
    fn test_invalid_time_display_pads_minute() {
        let err = HoursError::InvalidTime {
            hour: 24,
            minute: 5,
        };
        assert!(err.to_string().contains("24:05"));
    }

    #[test]
    fn test_classification() {
        assert!(HoursError::InvalidDay(-1).is_invalid_argument());
        assert!(HoursError::InvalidId(String::new()).is_invalid_argument());
        assert!(!HoursError::NotFound("x".into()).is_invalid_argument());

        assert!(HoursError::NotFound("x".into()).is_not_found());
        assert!(HoursError::StoreUnavailable("down".into()).is_transient());
        assert!(!HoursError::Seed("bad".into()).is_transient());
    }
}
