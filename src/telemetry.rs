//! Opt-in tracing setup for hosts embedding `cartesian-axis`.
//!
//! Tick selection emits `trace!` per pass and `debug!`/`warn!` on fallbacks.
//! Hosts that already own a subscriber should skip `init_default_tracing`.

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_TRACING_FILTER: &str = "cartesian_axis=info";

/// Installs a compact `tracing-subscriber` honoring `RUST_LOG`.
///
/// Returns `false` when the `telemetry` feature is off or a global subscriber
/// is already installed.
#[cfg(feature = "telemetry")]
#[must_use]
pub fn init_default_tracing() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACING_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .is_ok()
}

#[cfg(not(feature = "telemetry"))]
#[must_use]
pub fn init_default_tracing() -> bool {
    false
}
