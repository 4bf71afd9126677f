use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`. Calling this more than
/// once is harmless: only the first call installs a subscriber.
pub fn initialise_tracing(default_filter: &str) {
    let filter = build_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok(), default_filter);

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();

    if result.is_err() {
        tracing::debug!("Tracing subscriber already initialised");
    }
}

// An unparseable `RUST_LOG` falls back to the default.
fn build_filter(rust_log: Option<String>, default_filter: &str) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_filter))
}
