//! Diagnostic logging setup
//!
//! Events go to stderr through `tracing-subscriber`. The default filter only
//! shows warnings from this crate; `-v` raises it to info and `-vv` to debug.
//! `RUST_LOG` overrides both.

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static INIT: OnceLock<()> = OnceLock::new();

/// Filter directive for a `-v` count
#[must_use]
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "wordle_hints=warn",
        1 => "wordle_hints=info",
        _ => "wordle_hints=debug",
    }
}

/// Install the global subscriber
///
/// Safe to call multiple times - only the first call has effect.
pub fn init(verbosity: u8) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init();
    });
}
