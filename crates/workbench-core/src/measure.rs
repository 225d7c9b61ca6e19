//! Timing and panic isolation for individual operations
//!
//! `measure` wraps an operation at the call site: it records how long the
//! operation took, converts a panic into [`WorkbenchError::Internal`], and
//! logs failures without swallowing them.

use crate::{WorkbenchError, WorkbenchResult};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

/// Outcome of a measured operation
#[derive(Debug)]
pub struct Measured<T> {
    /// Result returned by the operation, or the error it raised
    pub outcome: WorkbenchResult<T>,
    /// Wall-clock time spent in the operation
    pub elapsed: Duration,
}

impl<T> Measured<T> {
    /// Split into the result, dropping the timing
    pub fn into_result(self) -> WorkbenchResult<T> {
        self.outcome
    }

    /// Elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }
}

/// Run `op`, timing it and catching panics
pub fn measure<T, F>(label: &str, op: F) -> Measured<T>
where
    F: FnOnce() -> WorkbenchResult<T>,
{
    let start = Instant::now();
    let outcome = match catch_unwind(AssertUnwindSafe(op)) {
        Ok(result) => result,
        Err(panic_info) => {
            let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };

            error!(operation = label, panic_msg = %panic_msg, "Operation panicked");
            Err(WorkbenchError::Internal(format!(
                "{} panicked: {}",
                label, panic_msg
            )))
        }
    };
    let elapsed = start.elapsed();

    match &outcome {
        Ok(_) => debug!(
            operation = label,
            duration_ms = elapsed.as_millis() as u64,
            "Operation completed"
        ),
        Err(e) => warn!(
            operation = label,
            duration_ms = elapsed.as_millis() as u64,
            error = %e,
            "Operation failed"
        ),
    }

    Measured { outcome, elapsed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_success() {
        let measured = measure("add", || Ok(2 + 2));
        assert_eq!(measured.outcome.unwrap(), 4);
    }

    #[test]
    fn test_measure_propagates_error() {
        let measured: Measured<()> =
            measure("read", || Err(WorkbenchError::NotFound("a.txt".to_string())));
        assert!(matches!(measured.outcome, Err(WorkbenchError::NotFound(_))));
    }

    #[test]
    fn test_measure_records_elapsed() {
        let measured = measure("sleep", || {
            std::thread::sleep(Duration::from_millis(10));
            Ok(())
        });
        assert!(measured.elapsed >= Duration::from_millis(10));
        assert!(measured.elapsed_ms() >= 10);
    }

    #[test]
    fn test_measure_catches_panic() {
        let measured: Measured<u32> = measure("boom", || panic!("model exploded"));
        match measured.into_result() {
            Err(WorkbenchError::Internal(msg)) => {
                assert!(msg.contains("boom"));
                assert!(msg.contains("model exploded"));
            }
            other => panic!("expected internal error, got {:?}", other),
        }
    }
}
