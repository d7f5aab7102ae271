//! Claims domain services
//!
//! The intake service takes a constructed claim through the business rules
//! and stores it.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use core_kernel::{ClaimId, Clock};
use crate::claim::Claim;
use crate::config::RulesConfig;
use crate::error::ClaimError;
use crate::ports::{ClaimsPort, ClaimsPortExt};
use crate::rules::{ClaimRules, RuleCode};

/// Result of running a claim through intake
#[derive(Debug, Clone, Serialize)]
pub struct IntakeOutcome {
    /// The claim as stored, with its final status
    pub claim: Claim,
    /// Flagging rules that fired, in evaluation order
    ///
    /// Only the last rule's status survives on the claim; this list keeps
    /// the ones it overwrote.
    pub fired_rules: Vec<RuleCode>,
}

impl IntakeOutcome {
    /// Returns true if the given rule fired during intake
    pub fn fired(&self, rule: RuleCode) -> bool {
        self.fired_rules.contains(&rule)
    }
}

/// Service for registering new claims
///
/// Intake runs in a fixed order:
/// 1. BR3 travel deadline, which rejects the claim outright
/// 2. BR1 late report
/// 3. BR2 high value
/// 4. BR4 suspicious pattern, checked against every stored claim
/// 5. Save
///
/// Each flagging rule overwrites the status set by the one before it.
pub struct ClaimIntakeService {
    claims: Arc<dyn ClaimsPort>,
    clock: Arc<dyn Clock>,
    rules: ClaimRules,
}

impl ClaimIntakeService {
    /// Creates a new intake service with the default rule set
    pub fn new(claims: Arc<dyn ClaimsPort>, clock: Arc<dyn Clock>) -> Self {
        Self {
            claims,
            clock,
            rules: ClaimRules::default(),
        }
    }

    /// Creates an intake service with thresholds from `CLAIMS_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::Core` if the configuration cannot be loaded or is invalid
    pub fn from_env(claims: Arc<dyn ClaimsPort>, clock: Arc<dyn Clock>) -> Result<Self, ClaimError> {
        let config = RulesConfig::from_env()?;
        Ok(Self::new(claims, clock).with_rules(ClaimRules::new(config)))
    }

    /// Replaces the rule set
    pub fn with_rules(mut self, rules: ClaimRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> &ClaimRules {
        &self.rules
    }

    /// Registers a new claim and returns it as stored
    ///
    /// # Errors
    ///
    /// * `BusinessRuleViolation` - the travel filing deadline has passed; nothing was stored
    /// * `Port` - the store failed
    pub async fn create_claim(&self, claim: Claim) -> Result<Claim, ClaimError> {
        self.process(claim).await.map(|outcome| outcome.claim)
    }

    /// Registers a new claim and reports which rules fired
    ///
    /// Same workflow as [`create_claim`](Self::create_claim).
    pub async fn process(&self, mut claim: Claim) -> Result<IntakeOutcome, ClaimError> {
        let today = self.clock.today();
        let claim_id = claim.id();

        if let Some(days) = self.rules.travel_deadline_exceeded(&claim, today) {
            let deadline = self.rules.config().travel_report_deadline_days;
            warn!(
                claim_id = %claim_id,
                rule = %RuleCode::TravelReportDeadline,
                days_since_return = days,
                "Rejecting travel claim filed after deadline"
            );
            return Err(ClaimError::business_rule(
                RuleCode::TravelReportDeadline,
                format!(
                    "Travel claims must be reported within {deadline} days of return; \
                     this trip ended {days} days ago"
                ),
            ));
        }

        let mut fired_rules = Vec::new();

        if self.rules.is_late_report(&claim, today) {
            fired_rules.push(RuleCode::LateReport);
        }

        if self.rules.is_high_value(&claim) {
            fired_rules.push(RuleCode::HighValue);
        }

        let mut existing = self.claims.get_all().await?;
        existing.retain(|stored| stored.id() != claim_id);
        if self.rules.is_suspicious_pattern(&claim, &existing, today) {
            fired_rules.push(RuleCode::SuspiciousPattern);
        }

        for rule in &fired_rules {
            if let Some(status) = rule.flagged_status() {
                info!(claim_id = %claim_id, rule = %rule, status = ?status, "Business rule flagged claim");
                claim.set_status(status);
            }
        }

        let claim = self.claims.save(claim).await?;
        debug!(claim_id = %claim_id, status = ?claim.status(), kind = ?claim.kind(), "Claim registered");

        Ok(IntakeOutcome { claim, fired_rules })
    }

    /// Retrieves a claim by ID
    pub async fn get_claim(&self, id: ClaimId) -> Result<Option<Claim>, ClaimError> {
        Ok(self.claims.get_by_id(id).await?)
    }

    /// Lists every stored claim
    pub async fn list_claims(&self) -> Result<Vec<Claim>, ClaimError> {
        Ok(self.claims.get_all().await?)
    }

    /// Lists vehicle claims for an unparsed plate string
    pub async fn claims_for_plate(&self, raw_plate: &str) -> Result<Vec<Claim>, ClaimError> {
        self.claims.get_by_raw_plate(raw_plate).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{Duration, NaiveDate, Utc};
    use tokio::sync::Mutex;

    use core_kernel::{
        AdapterHealth, DomainPort, FixedClock, HealthCheckResult, HealthCheckable, PortError,
    };
    use crate::claim::ClaimStatus;
    use crate::plate::LicensePlate;

    /// Port that keeps claims in a vector and can be told to fail
    #[derive(Default)]
    struct VecPort {
        claims: Mutex<Vec<Claim>>,
        fail_reads: bool,
    }

    impl DomainPort for VecPort {}

    #[async_trait]
    impl HealthCheckable for VecPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                adapter_id: "vec-port".to_string(),
                status: if self.fail_reads {
                    AdapterHealth::Unhealthy
                } else {
                    AdapterHealth::Healthy
                },
                message: None,
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl ClaimsPort for VecPort {
        async fn save(&self, claim: Claim) -> Result<Claim, PortError> {
            let mut claims = self.claims.lock().await;
            claims.retain(|c| c.id() != claim.id());
            claims.push(claim.clone());
            Ok(claim)
        }

        async fn get_by_id(&self, id: ClaimId) -> Result<Option<Claim>, PortError> {
            Ok(self.claims.lock().await.iter().find(|c| c.id() == id).cloned())
        }

        async fn get_all(&self) -> Result<Vec<Claim>, PortError> {
            if self.fail_reads {
                return Err(PortError::internal("store offline"));
            }
            Ok(self.claims.lock().await.clone())
        }

        async fn get_by_plate(&self, plate: &LicensePlate) -> Result<Vec<Claim>, PortError> {
            Ok(self
                .claims
                .lock()
                .await
                .iter()
                .filter(|c| c.plate() == Some(plate))
                .cloned()
                .collect())
        }

        async fn count(&self) -> Result<usize, PortError> {
            Ok(self.claims.lock().await.len())
        }
    }

    fn clock() -> FixedClock {
        FixedClock::on_date(2024, 6, 30).unwrap()
    }

    fn service(port: Arc<VecPort>) -> ClaimIntakeService {
        ClaimIntakeService::new(port, Arc::new(clock()))
    }

    #[tokio::test]
    async fn test_pending_claim_is_saved() {
        let port = Arc::new(VecPort::default());
        let claim = Claim::vehicle("", clock().today(), "ABC123", "PR-1").unwrap();

        let outcome = service(port.clone()).process(claim).await.unwrap();

        assert_eq!(outcome.claim.status(), ClaimStatus::Pending);
        assert!(outcome.fired_rules.is_empty());
        assert_eq!(port.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_store_failure_propagates_without_saving() {
        let port = Arc::new(VecPort {
            fail_reads: true,
            ..VecPort::default()
        });
        let claim = Claim::vehicle("", clock().today(), "ABC123", "PR-1").unwrap();

        let result = service(port.clone()).create_claim(claim).await;

        assert!(matches!(result, Err(ClaimError::Port(_))));
        assert_eq!(port.claims.lock().await.len(), 0);
        assert_eq!(port.health_check().await.status, AdapterHealth::Unhealthy);
    }

    #[tokio::test]
    async fn test_resubmitted_claim_is_not_counted_against_itself() {
        let port = Arc::new(VecPort::default());
        let today = clock().today();
        for days in [1, 2] {
            let prior = Claim::vehicle("", today - Duration::days(days), "XYZ789", "PR").unwrap();
            port.save(prior).await.unwrap();
        }
        let claim = Claim::vehicle("", today, "XYZ789", "PR-3").unwrap();
        let service = service(port.clone());

        let first = service.process(claim.clone()).await.unwrap();
        let again = service.process(claim).await.unwrap();

        assert_eq!(first.claim.status(), ClaimStatus::Pending);
        assert!(again.fired_rules.is_empty());
        assert_eq!(again.claim.status(), ClaimStatus::Pending);
        assert_eq!(port.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_from_env_reads_claims_prefix() {
        std::env::set_var("CLAIMS_LATE_REPORT_DAYS", "45");
        let port = Arc::new(VecPort::default());

        let service = ClaimIntakeService::from_env(port, Arc::new(clock())).unwrap();

        assert_eq!(service.rules().config().late_report_days, 45);
        assert_eq!(service.rules().config().travel_report_deadline_days, 14);
    }

    #[tokio::test]
    async fn test_late_and_suspicious_both_recorded() {
        let port = Arc::new(VecPort::default());
        let today = clock().today();
        for days in [1, 2, 3] {
            let prior = Claim::vehicle("", today - Duration::days(days), "XYZ789", "PR").unwrap();
            port.save(prior).await.unwrap();
        }
        let late = Claim::vehicle("", today - Duration::days(40), "xyz-789", "PR-9").unwrap();

        let outcome = service(port).process(late).await.unwrap();

        assert_eq!(
            outcome.fired_rules,
            vec![RuleCode::LateReport, RuleCode::SuspiciousPattern]
        );
        assert_eq!(outcome.claim.status(), ClaimStatus::RequiresManualReview);
    }

    #[tokio::test]
    async fn test_claims_for_plate_rejects_bad_plate() {
        let port = Arc::new(VecPort::default());
        let result = service(port).claims_for_plate("not a plate").await;
        assert!(matches!(result, Err(ClaimError::InvalidFormat { .. })));
    }

    #[test]
    fn test_outcome_fired() {
        let claim = Claim::vehicle(
            "",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "ABC123",
            "PR-1",
        )
        .unwrap();
        let outcome = IntakeOutcome {
            claim,
            fired_rules: vec![RuleCode::LateReport],
        };
        assert!(outcome.fired(RuleCode::LateReport));
        assert!(!outcome.fired(RuleCode::HighValue));
    }
}
