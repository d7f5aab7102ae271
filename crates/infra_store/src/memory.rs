//! In-memory claim store
//!
//! Claims live in a `HashMap` behind a `tokio::sync::RwLock`. Each store
//! value owns its own map, so independent stores never share state; cloning
//! a store shares the handle.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{
    AdapterHealth, ClaimId, DomainPort, HealthCheckResult, HealthCheckable, PortError,
};
use domain_claims::{Claim, ClaimsPort, LicensePlate};

/// Claim store held in process memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryClaimStore {
    claims: Arc<RwLock<HashMap<ClaimId, Claim>>>,
}

impl InMemoryClaimStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with claims
    ///
    /// # Errors
    ///
    /// Returns `PortError::Conflict` if two claims share an identifier
    pub fn with_claims(claims: impl IntoIterator<Item = Claim>) -> Result<Self, PortError> {
        let mut map = HashMap::new();
        for claim in claims {
            let id = claim.id();
            if map.insert(id, claim).is_some() {
                return Err(PortError::conflict(format!("duplicate claim {id} in seed data")));
            }
        }

        Ok(Self {
            claims: Arc::new(RwLock::new(map)),
        })
    }
}

impl DomainPort for InMemoryClaimStore {}

#[async_trait]
impl HealthCheckable for InMemoryClaimStore {
    async fn health_check(&self) -> HealthCheckResult {
        let stored = self.claims.read().await.len();
        HealthCheckResult {
            adapter_id: "in-memory-claim-store".to_string(),
            status: AdapterHealth::Healthy,
            message: Some(format!("{stored} claims stored")),
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl ClaimsPort for InMemoryClaimStore {
    async fn save(&self, claim: Claim) -> Result<Claim, PortError> {
        let mut claims = self.claims.write().await;
        let replaced = claims.insert(claim.id(), claim.clone()).is_some();
        debug!(claim_id = %claim.id(), replaced, "Claim saved");
        Ok(claim)
    }

    async fn get_by_id(&self, id: ClaimId) -> Result<Option<Claim>, PortError> {
        Ok(self.claims.read().await.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Claim>, PortError> {
        Ok(self.claims.read().await.values().cloned().collect())
    }

    async fn get_by_plate(&self, plate: &LicensePlate) -> Result<Vec<Claim>, PortError> {
        Ok(self
            .claims
            .read()
            .await
            .values()
            .filter(|claim| claim.plate() == Some(plate))
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<usize, PortError> {
        Ok(self.claims.read().await.len())
    }
}
