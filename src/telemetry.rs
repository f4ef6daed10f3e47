use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `fallback_filter` is used, and `info`
/// if that does not parse either. Safe to call more than once.
pub fn init_tracing(fallback_filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("Tracing subscriber already installed");
    }
}
