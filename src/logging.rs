use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr diagnostics subscriber.
///
/// Honors `RUST_LOG`; defaults to `warn` so progress output on stdout stays clean.
pub fn init() {
	let _ = tracing_subscriber::registry()
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.try_init();
}
