//! Tracing setup for hosts embedding a grid engine.
//!
//! Applied commands log at `debug` (column id, new state version), buffered
//! resize deltas at `trace`, and rejected commands, dropped state entries
//! and recovered accessor failures at `warn`. Hosts either call
//! `init_default_tracing` or install their own subscriber, e.g. with
//! `RUST_LOG=grid_rs=debug` to follow state changes.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
