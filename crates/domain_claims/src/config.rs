//! Business rule configuration

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use core_kernel::CoreError;

/// Thresholds used by the claim business rules
///
/// Every field has a default, so an environment that sets nothing gets the
/// standard rule set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// A vehicle claim reported more than this many days after the report date is late
    pub late_report_days: i64,
    /// Property claims valued above this amount are escalated
    pub high_value_threshold: Decimal,
    /// Look-back window for counting earlier claims on the same plate
    pub suspicious_window_days: i64,
    /// Earlier claims on the same plate, within the window, that make a new one suspicious
    pub suspicious_claim_threshold: usize,
    /// Travel claims must be filed within this many days of returning
    pub travel_report_deadline_days: i64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            late_report_days: 30,
            high_value_threshold: dec!(100000),
            suspicious_window_days: 90,
            suspicious_claim_threshold: 3,
            travel_report_deadline_days: 14,
        }
    }
}

impl RulesConfig {
    /// Loads configuration from `CLAIMS_*` environment variables
    ///
    /// A `.env` file in the working directory is read first if present.
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Configuration` if a variable cannot be parsed or
    /// the resulting thresholds are invalid
    pub fn from_env() -> Result<Self, CoreError> {
        dotenvy::dotenv().ok();
        Self::from_env_prefix("CLAIMS")
    }

    /// Loads configuration from environment variables with the given prefix
    ///
    /// `PREFIX_LATE_REPORT_DAYS` sets `late_report_days`, and so on.
    pub fn from_env_prefix(prefix: &str) -> Result<Self, CoreError> {
        let rules: RulesConfig = config::Config::builder()
            .add_source(config::Environment::with_prefix(prefix))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| CoreError::configuration(e.to_string()))?;

        rules.validate()?;
        Ok(rules)
    }

    /// Checks that every threshold is usable
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.late_report_days < 0 {
            return Err(CoreError::configuration("late_report_days must not be negative"));
        }
        if self.high_value_threshold <= Decimal::ZERO {
            return Err(CoreError::configuration("high_value_threshold must be positive"));
        }
        if self.suspicious_window_days < 0 {
            return Err(CoreError::configuration("suspicious_window_days must not be negative"));
        }
        if self.suspicious_claim_threshold == 0 {
            return Err(CoreError::configuration("suspicious_claim_threshold must be at least 1"));
        }
        if self.travel_report_deadline_days < 0 {
            return Err(CoreError::configuration(
                "travel_report_deadline_days must not be negative",
            ));
        }
        Ok(())
    }
}
