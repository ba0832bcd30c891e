//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber for embeddings that want the
//! crate's structured logs. The core itself only emits through the `tracing`
//! macros; initializing a subscriber is entirely optional and a library
//! embedding with its own subscriber should simply not call this.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Initializes a stderr tracing subscriber filtered by the configured level.
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set (an `EnvFilter` directive string)
/// 2. Default: `"info"`
///
/// # Initialization Behavior
///
/// Idempotent and infallible: if a global subscriber is already installed,
/// the call is a no-op. Observability is optional and must never take a
/// session down.
///
/// # Example
///
/// ```
/// use gridsift::config::Config;
/// use gridsift::observability::init_tracing;
///
/// init_tracing(&Config::default());
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        );

    let _ = subscriber.try_init();
}
