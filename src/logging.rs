use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks debug over warn for
/// this crate. Diagnostics go to stderr so command output on stdout stays
/// clean.
pub fn init_cli_logger(verbose: bool) {
    let fallback = if verbose {
        "pixelco=debug,tower_http=debug,warn"
    } else {
        "pixelco=warn,warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
