//! Custom Test Assertions
//!
//! Assertion helpers for claim outcomes that give more meaningful failure
//! messages than a bare `assert_eq!` on the whole claim.

use std::fmt::Debug;

use domain_claims::{Claim, ClaimError, ClaimStatus, IntakeOutcome, RuleCode};

/// Asserts that a claim carries the expected status
pub fn assert_status(claim: &Claim, expected: ClaimStatus) {
    assert_eq!(
        claim.status(),
        expected,
        "Claim {} has status {:?}, expected {:?}",
        claim.id(),
        claim.status(),
        expected
    );
}

/// Asserts that exactly the given rules fired, in the given order
pub fn assert_fired_rules(outcome: &IntakeOutcome, expected: &[RuleCode]) {
    assert_eq!(
        outcome.fired_rules.as_slice(),
        expected,
        "Unexpected rules fired for claim {}",
        outcome.claim.id()
    );
}

/// Asserts that an intake result is a business rule violation for `rule`
///
/// # Panics
///
/// Panics if the result is `Ok`, or an error of any other kind
pub fn assert_business_rule_violation<T: Debug>(result: &Result<T, ClaimError>, rule: RuleCode) {
    match result {
        Err(ClaimError::BusinessRuleViolation { rule: actual, .. }) => assert_eq!(
            *actual, rule,
            "Expected violation of {rule}, got violation of {actual}"
        ),
        other => panic!("Expected BusinessRuleViolation({rule}), got {other:?}"),
    }
}

/// Asserts that a result failed construction-time validation
pub fn assert_validation_error<T: Debug>(result: &Result<T, ClaimError>) {
    match result {
        Err(error) if error.is_validation() => {}
        other => panic!("Expected a validation error, got {other:?}"),
    }
}
