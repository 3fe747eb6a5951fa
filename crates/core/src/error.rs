//! Unified error type for the WFQ trace scheduler workspace

use thiserror::Error;

/// Result type alias using this workspace's `Error` type
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the scheduler, trace I/O, and CLI crates
///
/// Malformed trace lines are not represented here: they are a recoverable,
/// per-line condition (log and skip, see `wfq_trace_io::ParseWarning`), not
/// a propagated failure. Likewise a non-positive explicit weight is handled
/// by the scheduler's enqueue policy (treat as absent), never surfaced as
/// an `Error`.
#[derive(Error, Debug)]
pub enum Error {
    /// A scheduler invariant was violated (heap emptied unexpectedly,
    /// negative `active_weight_sum`, non-monotonic real time, ...).
    /// Always a bug; never retried.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// Stdin/stdout failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invariant_violation_displays_its_message() {
        let err = Error::InvariantViolation("heap emptied unexpectedly".to_string());
        assert_eq!(err.to_string(), "invariant violation: heap emptied unexpectedly");
    }

    #[test]
    fn io_error_converts_via_from_and_displays_the_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();
        assert!(err.to_string().starts_with("I/O error:"));
    }
}
