//! Vehicle license plate value object

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClaimError;

/// Three letters, two digits, then one letter or digit
static PLATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z]{3}[0-9]{2}[A-Z0-9]$").expect("license plate pattern must compile")
});

/// A normalized vehicle license plate
///
/// Input is normalized by removing spaces and hyphens and uppercasing, so
/// `"abc 123"`, `"ABC-123"` and `"abc123"` all produce the plate `ABC123`.
/// Equality and hashing use the normalized value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LicensePlate(String);

impl LicensePlate {
    /// Parses and normalizes a raw plate string
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::InvalidFormat` if the input is blank or does not
    /// match the plate pattern after normalization
    pub fn parse(raw: &str) -> Result<Self, ClaimError> {
        if raw.trim().is_empty() {
            return Err(ClaimError::invalid_format(raw));
        }

        let normalized: String = raw
            .chars()
            .filter(|c| *c != ' ' && *c != '-')
            .flat_map(char::to_uppercase)
            .collect();

        if !PLATE_PATTERN.is_match(&normalized) {
            return Err(ClaimError::invalid_format(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the normalized plate
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LicensePlate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LicensePlate {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LicensePlate {
    type Error = ClaimError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LicensePlate> for String {
    fn from(plate: LicensePlate) -> String {
        plate.0
    }
}
