//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to stderr
///
/// `RUST_LOG` wins when set; otherwise `fallback` is used. Stdout stays
/// free for rendered views.
///
/// # Errors
/// Returns error if the filter is invalid or a subscriber is already set
pub fn init(fallback: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(fallback)?,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
}
