//! Logging utilities for the WFQ trace scheduler
//!
//! Provides tracing subscriber initialization for binaries built on top of
//! `wfq-scheduler`. The library itself stays subscriber-agnostic — only
//! `wfq-sim-cli`'s `main` calls these.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing subscriber with sensible defaults
///
/// Configures structured logging with:
/// - Environment-based filtering (RUST_LOG)
/// - Target module names
/// - Compact output format
///
/// # Environment Variables
/// - `RUST_LOG`: Filter directives (default: "info")
///   - Example: `RUST_LOG=wfq_scheduler=debug,wfq_trace_io=trace`
///
/// # Example
/// ```no_run
/// use wfq_scheduler::logging::init_tracing;
///
/// fn main() {
///     init_tracing();
///     // Your application code here
/// }
/// ```
///
/// # Panics
/// Panics if a subscriber is already initialized (call once per process)
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}

/// Initialize tracing subscriber with a caller-supplied filter
///
/// Same as [`init_tracing`] but allows programmatic filter control, used
/// by `wfq-sim-cli` when `wfq-cli-config` resolves a `log_filter` from
/// `wfqsim.toml` or a `WFQSIM_LOG_FILTER` environment variable.
///
/// # Panics
/// Panics if a subscriber is already initialized or `filter` is invalid.
pub fn init_tracing_with_filter(filter: &str) {
    let env_filter = EnvFilter::new(filter);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}
