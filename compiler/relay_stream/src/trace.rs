//! Tracing setup for stream diagnostics.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `RUST_LOG`-filtered subscriber for the stream's trace events.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, and
/// leaves an already-installed global subscriber alone. Events are only
/// produced by streams whose [`StreamConfig`](crate::StreamConfig) enables
/// tracing; enable output with `RUST_LOG=relay_stream=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // An embedding application may have installed its own subscriber.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
