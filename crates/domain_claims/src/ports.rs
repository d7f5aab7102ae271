//! Claims Domain Ports
//!
//! `ClaimsPort` is everything the intake workflow needs from storage. The
//! in-memory adapter lives in `infra_store`; a networked store would
//! implement the same trait.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_claims::ports::ClaimsPort;
//!
//! let store: Arc<dyn ClaimsPort> = Arc::new(InMemoryClaimStore::new());
//! let service = ClaimIntakeService::new(store, Arc::new(SystemClock));
//! ```

use async_trait::async_trait;

use core_kernel::{ClaimId, DomainPort, HealthCheckable, PortError};

use crate::claim::Claim;
use crate::error::ClaimError;
use crate::plate::LicensePlate;

/// Storage operations for claims
///
/// Implementations must make `save` atomic with respect to the identifier
/// lookup, and must return owned snapshots from queries so a caller never
/// sees the collection change underneath it.
#[async_trait]
pub trait ClaimsPort: DomainPort + HealthCheckable {
    /// Inserts the claim, or replaces the stored claim with the same identifier
    ///
    /// # Returns
    ///
    /// The claim as stored
    async fn save(&self, claim: Claim) -> Result<Claim, PortError>;

    /// Retrieves a claim by ID
    ///
    /// # Returns
    ///
    /// `None` if no claim has this identifier
    async fn get_by_id(&self, id: ClaimId) -> Result<Option<Claim>, PortError>;

    /// Returns a snapshot of every stored claim, in no particular order
    async fn get_all(&self) -> Result<Vec<Claim>, PortError>;

    /// Returns all vehicle claims registered to the plate
    async fn get_by_plate(&self, plate: &LicensePlate) -> Result<Vec<Claim>, PortError>;

    /// Number of stored claims
    async fn count(&self) -> Result<usize, PortError>;
}

/// Convenience operations built on [`ClaimsPort`]
#[async_trait]
pub trait ClaimsPortExt: ClaimsPort {
    /// Looks up vehicle claims by an unparsed plate string
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::InvalidFormat` if `raw` is not a valid plate
    async fn get_by_raw_plate(&self, raw: &str) -> Result<Vec<Claim>, ClaimError> {
        let plate = LicensePlate::parse(raw)?;
        Ok(self.get_by_plate(&plate).await?)
    }
}

impl<T: ClaimsPort + ?Sized> ClaimsPortExt for T {}
