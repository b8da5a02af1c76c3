//! Tracing setup for the binary

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Filter directive for a `-v` count: warn, info, then debug
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "bank_analyzer=warn",
        1 => "bank_analyzer=info",
        _ => "bank_analyzer=debug",
    }
}

/// Initializes the global tracing subscriber, logging to stderr.
///
/// `RUST_LOG` takes precedence over `verbosity` when set. Later calls are
/// no-ops.
pub fn init_tracing(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        // A subscriber installed by an embedding program wins
        let _ = fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .try_init();
    });
}
