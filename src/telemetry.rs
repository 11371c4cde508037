//! Tracing setup for hosts embedding `brushchart-rs`.
//!
//! Nothing here runs implicitly. A host either calls
//! [`init_default_tracing`] (with the `telemetry` feature enabled) or wires
//! its own `tracing` subscriber and filters.

/// Installs a compact `tracing` subscriber honoring `RUST_LOG`, defaulting
/// to `info`.
///
/// Returns `true` when the subscriber was installed, `false` when the
/// `telemetry` feature is disabled or another global subscriber is already
/// in place.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
