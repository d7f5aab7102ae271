//! Strongly-typed identifiers for domain entities
//!
//! Claims are keyed by an opaque, time-ordered UUID wrapped in a newtype so
//! that a raw `Uuid` can never be passed where a claim identifier is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const CLAIM_PREFIX: &str = "CLM";

/// Unique identifier of a claim
///
/// Assigned once when the claim is constructed and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(Uuid);

impl ClaimId {
    /// Creates a new time-ordered identifier (v7)
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Returns the identifier prefix for display
    pub fn prefix() -> &'static str {
        CLAIM_PREFIX
    }
}

impl Default for ClaimId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", CLAIM_PREFIX, self.0)
    }
}

impl FromStr for ClaimId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid_str = s
            .strip_prefix(CLAIM_PREFIX)
            .and_then(|rest| rest.strip_prefix('-'))
            .unwrap_or(s);
        Ok(Self(Uuid::parse_str(uuid_str)?))
    }
}

impl From<Uuid> for ClaimId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<ClaimId> for Uuid {
    fn from(id: ClaimId) -> Uuid {
        id.0
    }
}
