use tracing_subscriber::{fmt, EnvFilter};

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Installs the global subscriber. `RUST_LOG` overrides `level`.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let result = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();

    if let Err(err) = result {
        eprintln!("Logging already initialised: {err}");
    }
}
