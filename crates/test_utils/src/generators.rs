//! Property-Based Test Generators
//!
//! Proptest strategies that produce data satisfying the claim invariants,
//! plus `fake`-backed free text for realistic descriptions and addresses.

use chrono::{Duration, NaiveDate};
use domain_claims::{DamageCategory, IncidentCategory, TravelPeriod, MIN_DESCRIPTION_LENGTH};
use fake::faker::address::en::{CityName, StreetName};
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for canonical plates: three letters, two digits, one letter or digit
pub fn canonical_plate_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{3}[0-9]{2}[A-Z0-9]"
}

/// Strategy for raw plate input that normalizes to a valid plate
///
/// Yields `(raw, canonical)` pairs; the raw form may be lowercase and may
/// carry a space or hyphen between the letters and digits.
pub fn raw_plate_strategy() -> impl Strategy<Value = (String, String)> {
    (
        canonical_plate_strategy(),
        prop_oneof![Just(""), Just(" "), Just("-")],
        any::<bool>(),
    )
        .prop_map(|(canonical, separator, lowercase)| {
            let mut raw = format!("{}{}{}", &canonical[..3], separator, &canonical[3..]);
            if lowercase {
                raw = raw.to_lowercase();
            }
            (raw, canonical)
        })
}

/// Strategy for strings that never normalize to a valid plate
pub fn invalid_plate_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Z0-9]{0,5}",
        "[A-Z0-9]{7,10}",
        "[0-9][A-Z0-9]{5}",
        "[A-Z]{3}[A-Z][0-9][A-Z0-9]",
    ]
}

pub fn damage_category_strategy() -> impl Strategy<Value = DamageCategory> {
    prop_oneof![
        Just(DamageCategory::Fire),
        Just(DamageCategory::Water),
        Just(DamageCategory::Theft),
        Just(DamageCategory::Vandalism),
    ]
}

pub fn incident_category_strategy() -> impl Strategy<Value = IncidentCategory> {
    prop_oneof![
        Just(IncidentCategory::LostLuggage),
        Just(IncidentCategory::FlightCancellation),
        Just(IncidentCategory::MedicalEmergency),
    ]
}

/// Strategy for positive estimated values with two decimal places
pub fn estimated_value_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for valid travel periods starting in 2020 through 2029
///
/// About one in five periods is still ongoing.
pub fn travel_period_strategy() -> impl Strategy<Value = TravelPeriod> {
    (0i64..3650, 0i64..60, 0u8..5).prop_map(|(offset, length, ongoing)| {
        let start = base_date() + Duration::days(offset);
        if ongoing == 0 {
            TravelPeriod::ongoing(start)
        } else {
            TravelPeriod::new(start, Some(start + Duration::days(length)))
                .expect("end is never before start")
        }
    })
}

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid base date")
}

/// Random description that always passes the minimum length check
pub fn fake_description() -> String {
    let mut description: String = Sentence(6..12).fake();
    while description.chars().count() < MIN_DESCRIPTION_LENGTH {
        description.push_str(" Further details to follow.");
    }
    description
}

/// Random street address
pub fn fake_address() -> String {
    let number: u16 = (1..999).fake();
    let street: String = StreetName().fake();
    let city: String = CityName().fake();
    format!("{number} {street}, {city}")
}

/// Random destination city
pub fn fake_destination() -> String {
    CityName().fake()
}
