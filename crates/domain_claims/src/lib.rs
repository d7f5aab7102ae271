//! Claims Intake Domain
//!
//! This crate implements claim registration: validated claim construction,
//! the business rules applied at intake, and the workflow that stores the
//! result.
//!
//! # Intake Flow
//!
//! ```text
//! construct (validate) -> BR3 travel deadline -> BR1 -> BR2 -> BR4 -> save
//!                               |
//!                               +-> BusinessRuleViolation (nothing stored)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_claims::{Claim, ClaimIntakeService};
//!
//! let claim = Claim::vehicle(
//!     "Rear-ended at a traffic light",
//!     report_date,
//!     "XYZ 789",
//!     "PR-2024-0042",
//! )?;
//! let stored = service.create_claim(claim).await?;
//! ```

pub mod claim;
pub mod plate;
pub mod travel_period;
pub mod rules;
pub mod config;
pub mod ports;
pub mod services;
pub mod error;

pub use claim::{
    Claim, ClaimStatus, ClaimKind, ClaimDetails, DamageCategory, IncidentCategory,
    VehicleDetails, PropertyDetails, TravelDetails, MIN_DESCRIPTION_LENGTH,
};
pub use plate::LicensePlate;
pub use travel_period::TravelPeriod;
pub use rules::{ClaimRules, RuleCode};
pub use config::RulesConfig;
pub use ports::{ClaimsPort, ClaimsPortExt};
pub use services::{ClaimIntakeService, IntakeOutcome};
pub use error::ClaimError;
