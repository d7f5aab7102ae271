//! Tests for the clock abstraction

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use core_kernel::{Clock, FixedClock, SystemClock};
use std::sync::Arc;

mod fixed_clock {
    use super::*;

    #[test]
    fn test_at_returns_exact_instant() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 15, 8, 30, 0).unwrap();
        let clock = FixedClock::at(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    }

    #[test]
    fn test_on_date_is_midday() {
        let clock = FixedClock::on_date(2024, 6, 15).unwrap();
        assert_eq!(
            clock.now(),
            Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_on_date_rejects_invalid_month() {
        let result = FixedClock::on_date(2024, 13, 1);
        assert!(matches!(result, Err(core_kernel::CoreError::Validation(_))));
    }

    #[test]
    fn test_plus_days_moves_forward() {
        let clock = FixedClock::on_date(2024, 12, 30).unwrap();
        let later = clock.plus_days(3);
        assert_eq!(later.today(), NaiveDate::from_ymd_opt(2025, 1, 2).unwrap());
        assert_eq!(later.now() - clock.now(), Duration::days(3));
    }

    #[test]
    fn test_days_ago() {
        let clock = FixedClock::on_date(2024, 6, 15).unwrap();
        assert_eq!(clock.days_ago(35), NaiveDate::from_ymd_opt(2024, 5, 11).unwrap());
        assert_eq!(clock.days_ago(0), clock.today());
    }
}

mod system_clock {
    use super::*;

    #[test]
    fn test_system_clock_tracks_utc_now() {
        let before = Utc::now();
        let now = SystemClock.now();
        let after = Utc::now();
        assert!(before <= now && now <= after);
    }

    #[test]
    fn test_clock_is_object_safe() {
        let clock: Arc<dyn Clock> = Arc::new(FixedClock::on_date(2024, 1, 1).unwrap());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }
}
