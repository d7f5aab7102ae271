//! Claims domain errors

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::{CoreError, PortError};
use crate::rules::RuleCode;

/// Errors that can occur in the claims domain
///
/// Construction errors are raised before a claim value exists and are always
/// recoverable by correcting the input. `BusinessRuleViolation` is the only
/// error raised for a fully valid claim; it is returned by the intake
/// workflow and guarantees nothing was stored.
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Invalid license plate format: '{value}'")]
    InvalidFormat { value: String },

    #[error("Required field is missing: {field}")]
    MissingField { field: &'static str },

    #[error("Description must be empty or at least 20 characters, got {length}")]
    InvalidDescription { length: usize },

    #[error("Estimated value must be greater than zero, got {0}")]
    InvalidEstimatedValue(Decimal),

    #[error("Travel end date {end} precedes start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Business rule {rule} violated: {message}")]
    BusinessRuleViolation { rule: RuleCode, message: String },

    #[error(transparent)]
    Port(#[from] PortError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ClaimError {
    pub fn invalid_format(value: impl Into<String>) -> Self {
        ClaimError::InvalidFormat { value: value.into() }
    }

    pub fn missing_field(field: &'static str) -> Self {
        ClaimError::MissingField { field }
    }

    pub fn business_rule(rule: RuleCode, message: impl Into<String>) -> Self {
        ClaimError::BusinessRuleViolation {
            rule,
            message: message.into(),
        }
    }

    /// Returns true for errors raised while constructing a claim or value object
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ClaimError::InvalidFormat { .. }
                | ClaimError::MissingField { .. }
                | ClaimError::InvalidDescription { .. }
                | ClaimError::InvalidEstimatedValue(_)
                | ClaimError::InvalidRange { .. }
        )
    }

    /// Returns the violated rule, if this is a business rule violation
    pub fn violated_rule(&self) -> Option<RuleCode> {
        match self {
            ClaimError::BusinessRuleViolation { rule, .. } => Some(*rule),
            _ => None,
        }
    }
}
