//! Claim aggregate
//!
//! A claim is a shared header plus one of three kind-specific payloads.
//! Every constructor validates its input and either returns a complete
//! claim or an error; there is no way to observe a half-built claim.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::ClaimId;
use crate::error::ClaimError;
use crate::plate::LicensePlate;
use crate::travel_period::TravelPeriod;

/// Minimum length of a non-empty description, in characters after trimming
pub const MIN_DESCRIPTION_LENGTH: usize = 20;

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    /// Registered, no rule has flagged it
    Pending,
    Approved,
    Rejected,
    /// Flagged for a human adjuster
    RequiresManualReview,
    /// Flagged for senior handling because of its value
    Escalated,
}

/// Kind of claim, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimKind {
    Vehicle,
    Property,
    Travel,
}

/// Cause of damage to a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageCategory {
    Fire,
    Water,
    Theft,
    Vandalism,
}

/// What went wrong during a trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentCategory {
    LostLuggage,
    FlightCancellation,
    MedicalEmergency,
}

/// Fields shared by every claim kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimHeader {
    id: ClaimId,
    description: String,
    report_date: NaiveDate,
    status: ClaimStatus,
}

impl ClaimHeader {
    fn new(description: String, report_date: NaiveDate) -> Result<Self, ClaimError> {
        let description = description.trim().to_string();
        let length = description.chars().count();
        if length > 0 && length < MIN_DESCRIPTION_LENGTH {
            return Err(ClaimError::InvalidDescription { length });
        }

        Ok(Self {
            id: ClaimId::new(),
            description,
            report_date,
            status: ClaimStatus::Pending,
        })
    }
}

/// Vehicle claim payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleDetails {
    plate: LicensePlate,
    police_report_ref: String,
}

impl VehicleDetails {
    pub fn plate(&self) -> &LicensePlate {
        &self.plate
    }

    pub fn police_report_ref(&self) -> &str {
        &self.police_report_ref
    }
}

/// Property claim payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDetails {
    address: String,
    damage_category: DamageCategory,
    estimated_value: Decimal,
}

impl PropertyDetails {
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn damage_category(&self) -> DamageCategory {
        self.damage_category
    }

    pub fn estimated_value(&self) -> Decimal {
        self.estimated_value
    }
}

/// Travel claim payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TravelDetails {
    destination: String,
    period: TravelPeriod,
    incident_category: IncidentCategory,
}

impl TravelDetails {
    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn period(&self) -> &TravelPeriod {
        &self.period
    }

    pub fn incident_category(&self) -> IncidentCategory {
        self.incident_category
    }
}

/// Kind-specific part of a claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClaimDetails {
    Vehicle(VehicleDetails),
    Property(PropertyDetails),
    Travel(TravelDetails),
}

/// An insurance claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Claim {
    #[serde(flatten)]
    header: ClaimHeader,
    details: ClaimDetails,
}

impl Claim {
    /// Creates a vehicle claim
    ///
    /// # Errors
    ///
    /// * `InvalidDescription` - description is non-empty but shorter than 20 characters
    /// * `InvalidFormat` - `plate` is not a valid license plate
    /// * `MissingField` - police report reference is blank
    pub fn vehicle(
        description: impl Into<String>,
        report_date: NaiveDate,
        plate: &str,
        police_report_ref: impl Into<String>,
    ) -> Result<Self, ClaimError> {
        let header = ClaimHeader::new(description.into(), report_date)?;
        let plate = LicensePlate::parse(plate)?;
        let police_report_ref = required_text(police_report_ref.into(), "police_report_ref")?;

        Ok(Self {
            header,
            details: ClaimDetails::Vehicle(VehicleDetails {
                plate,
                police_report_ref,
            }),
        })
    }

    /// Creates a property claim
    ///
    /// # Errors
    ///
    /// * `InvalidDescription` - description is non-empty but shorter than 20 characters
    /// * `MissingField` - address is blank
    /// * `InvalidEstimatedValue` - estimated value is zero or negative
    pub fn property(
        description: impl Into<String>,
        report_date: NaiveDate,
        address: impl Into<String>,
        damage_category: DamageCategory,
        estimated_value: Decimal,
    ) -> Result<Self, ClaimError> {
        let header = ClaimHeader::new(description.into(), report_date)?;
        let address = required_text(address.into(), "address")?;
        if estimated_value <= Decimal::ZERO {
            return Err(ClaimError::InvalidEstimatedValue(estimated_value));
        }

        Ok(Self {
            header,
            details: ClaimDetails::Property(PropertyDetails {
                address,
                damage_category,
                estimated_value,
            }),
        })
    }

    /// Creates a travel claim
    ///
    /// # Errors
    ///
    /// * `InvalidDescription` - description is non-empty but shorter than 20 characters
    /// * `MissingField` - destination is blank
    pub fn travel(
        description: impl Into<String>,
        report_date: NaiveDate,
        destination: impl Into<String>,
        period: TravelPeriod,
        incident_category: IncidentCategory,
    ) -> Result<Self, ClaimError> {
        let header = ClaimHeader::new(description.into(), report_date)?;
        let destination = required_text(destination.into(), "destination")?;

        Ok(Self {
            header,
            details: ClaimDetails::Travel(TravelDetails {
                destination,
                period,
                incident_category,
            }),
        })
    }

    /// Returns this claim re-keyed under an existing identifier
    ///
    /// Used to build a replacement version of a stored claim.
    pub fn with_id(mut self, id: ClaimId) -> Self {
        self.header.id = id;
        self
    }

    pub fn id(&self) -> ClaimId {
        self.header.id
    }

    pub fn description(&self) -> &str {
        &self.header.description
    }

    pub fn report_date(&self) -> NaiveDate {
        self.header.report_date
    }

    pub fn status(&self) -> ClaimStatus {
        self.header.status
    }

    pub fn kind(&self) -> ClaimKind {
        match self.details {
            ClaimDetails::Vehicle(_) => ClaimKind::Vehicle,
            ClaimDetails::Property(_) => ClaimKind::Property,
            ClaimDetails::Travel(_) => ClaimKind::Travel,
        }
    }

    pub fn details(&self) -> &ClaimDetails {
        &self.details
    }

    /// Returns the plate for vehicle claims
    pub fn plate(&self) -> Option<&LicensePlate> {
        match &self.details {
            ClaimDetails::Vehicle(vehicle) => Some(&vehicle.plate),
            ClaimDetails::Property(_) | ClaimDetails::Travel(_) => None,
        }
    }

    /// Whole days elapsed from the report date to `today`
    pub fn age_in_days(&self, today: NaiveDate) -> i64 {
        (today - self.header.report_date).num_days()
    }

    pub(crate) fn set_status(&mut self, status: ClaimStatus) {
        self.header.status = status;
    }
}

fn required_text(value: String, field: &'static str) -> Result<String, ClaimError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ClaimError::missing_field(field));
    }
    Ok(trimmed.to_string())
}
