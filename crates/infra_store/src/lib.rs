//! Infrastructure Storage Layer
//!
//! Adapters implementing `domain_claims::ClaimsPort`. The domain layer only
//! sees the port trait, so the intake workflow does not change when the
//! backing store does.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use infra_store::InMemoryClaimStore;
//!
//! let store = Arc::new(InMemoryClaimStore::new());
//! let service = ClaimIntakeService::new(store.clone(), Arc::new(SystemClock));
//! ```

pub mod memory;

pub use memory::InMemoryClaimStore;
