//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claim intake test suite.
//!
//! # Modules
//!
//! - `fixtures`: Fixed clock, dates, and plates
//! - `builders`: Builder patterns for each claim kind
//! - `assertions`: Assertion helpers for statuses and rule outcomes
//! - `generators`: Property-based strategies and fake free text
//! - `logging`: One-time tracing subscriber for tests

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;
pub mod logging;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
pub use logging::init_test_tracing;
