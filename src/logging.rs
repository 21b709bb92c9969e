use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber. `RUST_LOG` overrides the default filter.
///
/// Returns quietly if a subscriber is already set.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "maplog_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
