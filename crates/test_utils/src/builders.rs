//! Test Data Builders
//!
//! Builder patterns for each claim kind. Tests set only the fields they care
//! about; everything else defaults to a valid, rule-neutral value reported on
//! the fixture's today.

use chrono::NaiveDate;
use core_kernel::ClaimId;
use domain_claims::{
    Claim, ClaimError, DamageCategory, IncidentCategory, TravelPeriod,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::{TemporalFixtures, TextFixtures};

/// Builder for vehicle claims
pub struct VehicleClaimBuilder {
    id: Option<ClaimId>,
    description: String,
    report_date: NaiveDate,
    plate: String,
    police_report_ref: String,
}

impl Default for VehicleClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleClaimBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            description: TextFixtures::twenty_char_description().to_string(),
            report_date: TemporalFixtures::today(),
            plate: "ABC123".to_string(),
            police_report_ref: TextFixtures::police_report_ref().to_string(),
        }
    }

    /// Reuses an existing identifier, for replace-by-id scenarios
    pub fn with_id(mut self, id: ClaimId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_report_date(mut self, date: NaiveDate) -> Self {
        self.report_date = date;
        self
    }

    /// Sets the report date relative to the fixture's today
    pub fn reported_days_ago(mut self, days: i64) -> Self {
        self.report_date = TemporalFixtures::days_ago(days);
        self
    }

    /// Sets the raw plate text; it is validated on `build`
    pub fn with_plate(mut self, plate: impl Into<String>) -> Self {
        self.plate = plate.into();
        self
    }

    pub fn with_police_report_ref(mut self, reference: impl Into<String>) -> Self {
        self.police_report_ref = reference.into();
        self
    }

    /// Builds the claim through the validating constructor
    pub fn build(self) -> Result<Claim, ClaimError> {
        let claim = Claim::vehicle(
            &self.description,
            self.report_date,
            &self.plate,
            &self.police_report_ref,
        )?;
        Ok(match self.id {
            Some(id) => claim.with_id(id),
            None => claim,
        })
    }
}

/// Builder for property claims
pub struct PropertyClaimBuilder {
    description: String,
    report_date: NaiveDate,
    address: String,
    damage_category: DamageCategory,
    estimated_value: Decimal,
}

impl Default for PropertyClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyClaimBuilder {
    pub fn new() -> Self {
        Self {
            description: TextFixtures::twenty_char_description().to_string(),
            report_date: TemporalFixtures::today(),
            address: TextFixtures::address().to_string(),
            damage_category: DamageCategory::Water,
            estimated_value: dec!(75000),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn reported_days_ago(mut self, days: i64) -> Self {
        self.report_date = TemporalFixtures::days_ago(days);
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_damage_category(mut self, category: DamageCategory) -> Self {
        self.damage_category = category;
        self
    }

    pub fn with_estimated_value(mut self, value: Decimal) -> Self {
        self.estimated_value = value;
        self
    }

    pub fn build(self) -> Result<Claim, ClaimError> {
        Claim::property(
            &self.description,
            self.report_date,
            &self.address,
            self.damage_category,
            self.estimated_value,
        )
    }
}

/// Builder for travel claims
///
/// The trip defaults to a week that ended three days before today. The trip
/// dates are only combined into a `TravelPeriod` on `build`, so an inverted
/// range surfaces there as `InvalidRange`.
pub struct TravelClaimBuilder {
    description: String,
    report_date: NaiveDate,
    destination: String,
    start: NaiveDate,
    end: Option<NaiveDate>,
    incident_category: IncidentCategory,
}

impl Default for TravelClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TravelClaimBuilder {
    pub fn new() -> Self {
        Self {
            description: TextFixtures::twenty_char_description().to_string(),
            report_date: TemporalFixtures::today(),
            destination: TextFixtures::destination().to_string(),
            start: TemporalFixtures::days_ago(10),
            end: Some(TemporalFixtures::days_ago(3)),
            incident_category: IncidentCategory::LostLuggage,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn reported_days_ago(mut self, days: i64) -> Self {
        self.report_date = TemporalFixtures::days_ago(days);
        self
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    /// Sets the trip as `start_days_ago` to `end_days_ago` before today
    pub fn trip_days_ago(mut self, start_days_ago: i64, end_days_ago: i64) -> Self {
        self.start = TemporalFixtures::days_ago(start_days_ago);
        self.end = Some(TemporalFixtures::days_ago(end_days_ago));
        self
    }

    /// Sets a trip that started `start_days_ago` and has not ended
    pub fn ongoing_since_days_ago(mut self, start_days_ago: i64) -> Self {
        self.start = TemporalFixtures::days_ago(start_days_ago);
        self.end = None;
        self
    }

    pub fn with_incident_category(mut self, category: IncidentCategory) -> Self {
        self.incident_category = category;
        self
    }

    pub fn build(self) -> Result<Claim, ClaimError> {
        let period = TravelPeriod::new(self.start, self.end)?;
        Claim::travel(
            &self.description,
            self.report_date,
            &self.destination,
            period,
            self.incident_category,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_claims::{ClaimKind, ClaimStatus};

    #[test]
    fn test_defaults_build_pending_claims() {
        let claims = [
            VehicleClaimBuilder::new().build().unwrap(),
            PropertyClaimBuilder::new().build().unwrap(),
            TravelClaimBuilder::new().build().unwrap(),
        ];

        let kinds: Vec<_> = claims.iter().map(Claim::kind).collect();
        assert_eq!(kinds, vec![ClaimKind::Vehicle, ClaimKind::Property, ClaimKind::Travel]);
        assert!(claims.iter().all(|c| c.status() == ClaimStatus::Pending));
    }

    #[test]
    fn test_vehicle_with_id_reuses_identifier() {
        let first = VehicleClaimBuilder::new().build().unwrap();
        let second = VehicleClaimBuilder::new().with_id(first.id()).build().unwrap();
        assert_eq!(first.id(), second.id());
    }

    #[test]
    fn test_inverted_trip_is_invalid_range() {
        let result = TravelClaimBuilder::new().trip_days_ago(5, 10).build();
        assert!(matches!(result, Err(ClaimError::InvalidRange { .. })));
    }
}
