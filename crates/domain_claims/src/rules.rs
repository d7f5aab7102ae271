//! Claim business rules
//!
//! Each rule is a pure predicate over the claim and the data handed to it.
//! Nothing here reads storage or the system clock; callers pass "today" and
//! the existing claims explicitly.
//!
//! | Code | Applies to | Fires when                                                    | Effect            |
//! |------|------------|---------------------------------------------------------------|-------------------|
//! | BR1  | Vehicle    | reported more than 30 days ago                                | manual review     |
//! | BR2  | Property   | estimated value above 100 000                                 | escalation        |
//! | BR3  | Travel     | filed more than 14 days after returning                       | claim rejected    |
//! | BR4  | Vehicle    | 3 or more earlier claims on the plate within 90 days          | manual review     |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::claim::{Claim, ClaimDetails, ClaimStatus};
use crate::config::RulesConfig;

/// Identifies a business rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleCode {
    #[serde(rename = "BR1")]
    LateReport,
    #[serde(rename = "BR2")]
    HighValue,
    #[serde(rename = "BR3")]
    TravelReportDeadline,
    #[serde(rename = "BR4")]
    SuspiciousPattern,
}

impl RuleCode {
    /// Returns the short rule code
    pub fn code(&self) -> &'static str {
        match self {
            RuleCode::LateReport => "BR1",
            RuleCode::HighValue => "BR2",
            RuleCode::TravelReportDeadline => "BR3",
            RuleCode::SuspiciousPattern => "BR4",
        }
    }

    /// Status assigned when a flagging rule fires
    ///
    /// `None` for the blocking travel deadline rule, which rejects the claim
    /// instead of flagging it.
    pub fn flagged_status(&self) -> Option<ClaimStatus> {
        match self {
            RuleCode::LateReport | RuleCode::SuspiciousPattern => {
                Some(ClaimStatus::RequiresManualReview)
            }
            RuleCode::HighValue => Some(ClaimStatus::Escalated),
            RuleCode::TravelReportDeadline => None,
        }
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Evaluates the claim business rules against a configuration
#[derive(Debug, Clone, Default)]
pub struct ClaimRules {
    config: RulesConfig,
}

impl ClaimRules {
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// BR1: vehicle claim reported too long ago
    pub fn is_late_report(&self, claim: &Claim, today: NaiveDate) -> bool {
        match claim.details() {
            ClaimDetails::Vehicle(_) => claim.age_in_days(today) > self.config.late_report_days,
            ClaimDetails::Property(_) | ClaimDetails::Travel(_) => false,
        }
    }

    /// BR2: property claim above the high-value threshold
    pub fn is_high_value(&self, claim: &Claim) -> bool {
        match claim.details() {
            ClaimDetails::Property(property) => {
                property.estimated_value() > self.config.high_value_threshold
            }
            ClaimDetails::Vehicle(_) | ClaimDetails::Travel(_) => false,
        }
    }

    /// BR3: days since return, when a completed trip missed the filing deadline
    ///
    /// Returns `None` when the rule does not fire.
    pub fn travel_deadline_exceeded(&self, claim: &Claim, today: NaiveDate) -> Option<i64> {
        match claim.details() {
            ClaimDetails::Travel(travel) => travel
                .period()
                .days_since_end(today)
                .filter(|days| *days > self.config.travel_report_deadline_days),
            ClaimDetails::Vehicle(_) | ClaimDetails::Property(_) => None,
        }
    }

    /// BR4: too many recent claims on the same plate
    ///
    /// `existing` must not contain `claim` itself; intake removes it by
    /// identifier before calling this. Earlier claims count when
    /// they are vehicle claims on an equal plate reported no more than the
    /// window's length before `today`.
    pub fn is_suspicious_pattern(&self, claim: &Claim, existing: &[Claim], today: NaiveDate) -> bool {
        let Some(plate) = claim.plate() else {
            return false;
        };

        let recent_on_plate = existing
            .iter()
            .filter(|other| other.plate() == Some(plate))
            .filter(|other| other.age_in_days(today) <= self.config.suspicious_window_days)
            .count();

        recent_on_plate >= self.config.suspicious_claim_threshold
    }
}
