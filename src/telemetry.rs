//! Tracing setup for hosts and tools embedding `dashboard-charts`.
//!
//! The library only emits `tracing` events. Installing a subscriber is left to
//! the host unless it opts into the `telemetry` feature and calls
//! [`init_default_tracing`].

/// Environment variable consulted first for the log filter.
pub const LOG_FILTER_ENV: &str = "DASHBOARD_CHARTS_LOG";

/// Filter used when neither `DASHBOARD_CHARTS_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "dashboard_charts=info,warn";

/// Resolves the filter directive: `DASHBOARD_CHARTS_LOG`, then `RUST_LOG`,
/// then [`DEFAULT_LOG_FILTER`]. Blank values are ignored.
#[must_use]
pub fn resolve_log_filter(crate_filter: Option<&str>, rust_log: Option<&str>) -> String {
    [crate_filter, rust_log]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|directive| !directive.is_empty())
        .unwrap_or(DEFAULT_LOG_FILTER)
        .to_owned()
}

/// Installs a compact stderr subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled, the resolved filter does not
/// parse, or the host already installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let crate_filter = std::env::var(LOG_FILTER_ENV).ok();
        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let directive = resolve_log_filter(crate_filter.as_deref(), rust_log.as_deref());
        let Ok(filter) = EnvFilter::try_new(&directive) else {
            return false;
        };

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .without_time()
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_LOG_FILTER, resolve_log_filter};

    #[test]
    fn crate_specific_filter_wins_over_rust_log() {
        assert_eq!(resolve_log_filter(Some("debug"), Some("warn")), "debug");
    }

    #[test]
    fn blank_filters_fall_through_to_default() {
        assert_eq!(resolve_log_filter(Some("  "), None), DEFAULT_LOG_FILTER);
        assert_eq!(resolve_log_filter(None, Some("trace")), "trace");
    }
}
