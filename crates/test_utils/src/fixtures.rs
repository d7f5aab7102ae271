//! Pre-built Test Fixtures
//!
//! Consistent, predictable values for unit and integration tests. All dates
//! are relative to a single fixed "today" so rule boundaries are exact.

use chrono::{Duration, NaiveDate};
use core_kernel::{Clock, FixedClock};
use domain_claims::LicensePlate;

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The reference "today" for every fixture: 30 June 2024
    pub fn clock() -> FixedClock {
        FixedClock::on_date(2024, 6, 30).expect("fixture date is a real date")
    }

    /// The fixture clock's calendar date
    pub fn today() -> NaiveDate {
        Self::clock().today()
    }

    /// The date `days` before the fixture's today
    pub fn days_ago(days: i64) -> NaiveDate {
        Self::today() - Duration::days(days)
    }
}

/// Fixture for license plates
pub struct PlateFixtures;

impl PlateFixtures {
    /// Plate used by the end-to-end vehicle scenario
    pub fn xyz789() -> LicensePlate {
        LicensePlate::parse("XYZ789").expect("fixture plate is valid")
    }

    /// A second, unrelated plate
    pub fn abc123() -> LicensePlate {
        LicensePlate::parse("ABC123").expect("fixture plate is valid")
    }

    /// Spellings that all normalize to `ABC123`
    pub fn abc123_spellings() -> [&'static str; 4] {
        ["abc 123", "ABC-123", "abc123", " a-b-c 1 2 3 "]
    }
}

/// Fixture for free-text fields
pub struct TextFixtures;

impl TextFixtures {
    /// A description of exactly the minimum accepted length
    pub fn twenty_char_description() -> &'static str {
        "Rear bumper damaged."
    }

    /// A description one character too short
    pub fn nineteen_char_description() -> &'static str {
        "Rear bumper damaged"
    }

    pub fn police_report_ref() -> &'static str {
        "PR-2024-0042"
    }

    pub fn address() -> &'static str {
        "12 Harbour Road, Portsmouth"
    }

    pub fn destination() -> &'static str {
        "Lisbon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_fixture_lengths() {
        assert_eq!(TextFixtures::twenty_char_description().chars().count(), 20);
        assert_eq!(TextFixtures::nineteen_char_description().chars().count(), 19);
    }

    #[test]
    fn test_spellings_normalize_to_fixture() {
        for raw in PlateFixtures::abc123_spellings() {
            assert_eq!(LicensePlate::parse(raw).unwrap(), PlateFixtures::abc123());
        }
    }

    #[test]
    fn test_days_ago() {
        assert_eq!(TemporalFixtures::days_ago(30), NaiveDate::from_ymd_opt(2024, 5, 31).unwrap());
    }
}
