//! Process-global observability runtime settings.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::config::observability::ObservabilityConfig;

const DEFAULT_SLOW_REQUEST_THRESHOLD_MS: u64 = 1_000;

static SLOW_REQUEST_THRESHOLD_MS: AtomicU64 = AtomicU64::new(DEFAULT_SLOW_REQUEST_THRESHOLD_MS);
static OTEL_PARENT_PROPAGATION_ENABLED: AtomicBool = AtomicBool::new(false);

pub(super) fn apply_runtime_config(config: &ObservabilityConfig) {
    SLOW_REQUEST_THRESHOLD_MS.store(config.slow_request_threshold_ms, Ordering::Relaxed);
    OTEL_PARENT_PROPAGATION_ENABLED.store(
        config.otel_enabled && config.otel_parent_propagation_enabled,
        Ordering::Relaxed,
    );
}

pub(super) fn slow_request_threshold_ms() -> u64 {
    SLOW_REQUEST_THRESHOLD_MS.load(Ordering::Relaxed)
}

pub(super) fn otel_parent_propagation_enabled() -> bool {
    OTEL_PARENT_PROPAGATION_ENABLED.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use crate::config::ServerConfig;

    use super::*;

    #[test]
    fn parent_propagation_requires_otel() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "weshoot-json",
            "--database-url=postgres://localhost/weshoot",
            "--supabase-url=https://weshoot.supabase.co",
            "--supabase-anon-key=anon",
            "--cms-graphql-url=https://cms.example.com/graphql",
            "--otel-parent-propagation-enabled",
            "--slow-request-threshold-ms=250",
        ])?;

        apply_runtime_config(&config.observability);

        assert!(!otel_parent_propagation_enabled());
        assert_eq!(slow_request_threshold_ms(), 250);

        Ok(())
    }
}
