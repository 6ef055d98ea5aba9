//! Telemetry helpers for programs that build calculus figures.
//!
//! Figure builders log through `tracing`; nothing is emitted unless a
//! subscriber is installed, either here or by the host application.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_TRACING_FILTER: &str = "calculus_figures=info";

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_TRACING_FILTER)
}

/// Same as [`init_default_tracing`] but with an explicit fallback filter.
///
/// `RUST_LOG` still wins when it is set.
#[must_use]
pub fn init_tracing_with_filter(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
