//! Tracing setup for the hosting application.

use tracing_subscriber::fmt::format::FmtSpan;

/// Install the global fmt subscriber.
///
/// DEBUG when `debug` is set, INFO otherwise. Span close events carry the
/// duration of each aggregate resolve. Fails if a global subscriber is
/// already installed.
pub fn init_tracing(debug: bool) -> anyhow::Result<()> {
    let log_level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(FmtSpan::CLOSE)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))
}
