use std::sync::Once;

use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::EnvFilter;

/// Default filter directive applied when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "info";

/// Guard ensuring the test subscriber is installed at most once per process.
static TEST_TRACING: Once = Once::new();

/// Initializes tracing for a service binary.
///
/// Installs a formatting subscriber with an environment-driven filter
/// (`RUST_LOG`, falling back to `info`) and the service name recorded on every
/// event via the `service` field of the root span opened by the caller.
pub fn init_tracing(service_name: &str) -> Result<(), SetGlobalDefaultError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!(service = service_name, "tracing initialized");

    Ok(())
}

/// Initializes tracing for tests.
///
/// Safe to call from every test; the subscriber is installed once and reused.
/// Output is captured by the test harness.
pub fn init_test_tracing() {
    TEST_TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_test_writer()
            .try_init();
    });
}
