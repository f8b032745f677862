//! Tracing initialization for the server binary.

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG`; defaults to `info` when unset. Call once, at
/// process start.
pub fn init() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();
}
