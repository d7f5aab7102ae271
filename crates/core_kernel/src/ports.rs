//! Ports and Adapters Infrastructure
//!
//! Domain crates declare their storage needs as port traits extending the
//! marker traits here; adapter crates implement them.
//!
//! ```text
//! ┌───────────────────────────────┐
//! │   Claim intake workflow       │
//! └──────────────┬────────────────┘
//!                ▼
//! ┌───────────────────────────────┐
//! │   ClaimsPort (domain_claims)  │
//! └──────────────┬────────────────┘
//!                ▲
//!     ┌──────────┴──────────┐
//!     │  InMemoryClaimStore │
//!     │    (infra_store)    │
//!     └─────────────────────┘
//! ```

use thiserror::Error;
use serde::{Deserialize, Serialize};

/// Error type for port operations
///
/// Every adapter reports failures through this type so the domain layer
/// handles an in-memory store and a future networked store the same way.
#[derive(Debug, Error)]
pub enum PortError {
    /// The operation conflicts with existing data
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }
}

/// Marker trait for all domain ports
///
/// Ports are shared behind `Arc` across tasks, so they must be thread-safe.
pub trait DomainPort: Send + Sync + 'static {}

/// Health status for an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    Healthy,
    Unhealthy,
}

/// Health check result for an adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Adapter identifier
    pub adapter_id: String,
    /// Current health status
    pub status: AdapterHealth,
    /// Optional message with additional details
    pub message: Option<String>,
    /// Timestamp of the health check
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

/// Trait for adapters that support health checks
#[async_trait::async_trait]
pub trait HealthCheckable: Send + Sync {
    /// Performs a health check on the adapter
    async fn health_check(&self) -> HealthCheckResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_internal_display() {
        let error = PortError::internal("store offline");
        assert_eq!(error.to_string(), "Internal error: store offline");
    }

    #[test]
    fn test_adapter_health_serialization() {
        let json = serde_json::to_string(&AdapterHealth::Healthy).unwrap();
        assert_eq!(json, "\"healthy\"");
        let json = serde_json::to_string(&AdapterHealth::Unhealthy).unwrap();
        assert_eq!(json, "\"unhealthy\"");
    }
}
