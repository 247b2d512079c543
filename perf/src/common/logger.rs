use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Installs the global tracing subscriber. Logs go to stderr so stdout only
/// carries benchmark output. Filtered by `RUST_LOG`, `info` if unset.
pub fn setup_logger() {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
