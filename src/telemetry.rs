use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Install the global tracing subscriber. `RUST_LOG` overrides the `info`
/// default. Call once, before anything logs.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer().compact().with_target(true);

    Registry::default().with(env_filter).with(fmt_layer).init();
}
