//! Tracing setup for tests
//!
//! Honors `RUST_LOG`, defaulting to `debug` for the workspace crates, and
//! writes through the test harness so output is captured per test.

use once_cell::sync::OnceCell;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: OnceCell<()> = OnceCell::new();

/// Installs the global tracing subscriber once per test process
pub fn init_test_tracing() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("domain_claims=debug,infra_store=debug"));

        // Another harness may already have installed a subscriber.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_test_writer().with_target(true))
            .try_init();
    });
}
