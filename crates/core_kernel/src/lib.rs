//! Core Kernel - Foundational types shared by the claim intake layers
//!
//! This crate sits at the centre of the workspace and depends on nothing
//! else in it:
//! - Strongly-typed claim identifiers
//! - A clock abstraction so business rules can be evaluated against a fixed "today"
//! - Port error and marker traits implemented by storage adapters

pub mod identifiers;
pub mod clock;
pub mod ports;
pub mod error;

pub use identifiers::ClaimId;
pub use clock::{Clock, SystemClock, FixedClock};
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
};
pub use error::CoreError;
