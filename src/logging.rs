use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "centrix=info";

/// Installs the global tracing subscriber. Safe to call once per process;
/// later calls are ignored so tests can initialize freely.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
