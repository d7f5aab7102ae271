//! Time source abstraction
//!
//! Business rules compare claim dates against "today". Reading the system
//! clock inside those rules would make them impossible to test at day
//! boundaries, so every component that needs the current time receives a
//! [`Clock`] instead.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::error::CoreError;

/// Provides the current instant
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current calendar date in UTC
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Clock backed by the operating system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant, for deterministic evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock frozen at the given instant
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Creates a clock frozen at midday UTC on the given calendar date
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the year/month/day combination is not a real date
    pub fn on_date(year: i32, month: u32, day: u32) -> Result<Self, CoreError> {
        let instant = Utc
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .single()
            .ok_or_else(|| {
                CoreError::validation(format!("Invalid calendar date {year:04}-{month:02}-{day:02}"))
            })?;
        Ok(Self { instant })
    }

    /// Returns a copy of this clock moved forward by the given number of days
    pub fn plus_days(&self, days: i64) -> Self {
        Self {
            instant: self.instant + Duration::days(days),
        }
    }

    /// Returns the date that lies `days` before this clock's date
    pub fn days_ago(&self, days: i64) -> NaiveDate {
        self.today() - Duration::days(days)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_is_stable() {
        let clock = FixedClock::on_date(2024, 3, 15).unwrap();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_fixed_clock_rejects_impossible_date() {
        assert!(FixedClock::on_date(2024, 2, 30).is_err());
    }

    #[test]
    fn test_days_ago_crosses_month_boundary() {
        let clock = FixedClock::on_date(2024, 3, 1).unwrap();
        assert_eq!(clock.days_ago(1), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }
}
