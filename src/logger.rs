use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str = "info,simple_time_service=debug,tower_http=debug";

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
/// Colours are turned off under Lambda, where output lands in CloudWatch.
pub fn init(ansi: bool) {

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_ansi(ansi))
        .init();

}
