use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber, filtered through `RUST_LOG`.
///
/// Records of the `log` facade are forwarded to the subscriber as well.
pub fn init_tracing(name: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
    {
        eprintln!("Error initializing logging: {err:?}");
    }

    log::info!("{name}: logging initialized");
}
