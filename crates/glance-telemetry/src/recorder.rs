//! Named timing spans over a monotonic clock.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::trace;

/// Records named start timestamps and measures elapsed durations.
///
/// Entries are ephemeral: created on `start_timing`, consumed and
/// removed on `end_timing`. Ending a label that was never started
/// yields a zero duration rather than an error, so callers cannot
/// distinguish "zero elapsed" from "never started".
#[derive(Debug, Clone, Default)]
pub struct TimingRecorder {
    timings: Arc<Mutex<HashMap<String, Instant>>>,
}

impl TimingRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current monotonic time under `label`, overwriting
    /// any prior unconsumed entry for that label.
    pub fn start_timing(&self, label: &str) {
        trace!(label, "Timing started");
        self.timings.lock().insert(label.to_string(), Instant::now());
    }

    /// Consume the entry for `label` and return the elapsed time in
    /// milliseconds, or 0.0 if the label was never started.
    pub fn end_timing(&self, label: &str) -> f64 {
        match self.timings.lock().remove(label) {
            Some(started) => {
                let elapsed_ms = started.elapsed().as_secs_f64() * 1_000.0;
                trace!(label, elapsed_ms, "Timing ended");
                elapsed_ms
            }
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_unstarted_label_yields_zero() {
        let recorder = TimingRecorder::new();
        assert_eq!(recorder.end_timing("never_started"), 0.0);
    }

    #[test]
    fn test_end_timing_consumes_the_entry() {
        let recorder = TimingRecorder::new();
        recorder.start_timing("span");
        std::thread::sleep(Duration::from_millis(5));

        let first = recorder.end_timing("span");
        assert!(first > 0.0);

        // Entry was removed; a second end is the silent zero default.
        assert_eq!(recorder.end_timing("span"), 0.0);
    }

    #[test]
    fn test_restart_overwrites_prior_entry() {
        let recorder = TimingRecorder::new();
        recorder.start_timing("span");
        std::thread::sleep(Duration::from_millis(20));
        recorder.start_timing("span");

        // The second start wins, so the measured span is short.
        let elapsed = recorder.end_timing("span");
        assert!(elapsed < 20.0, "expected restarted span, got {elapsed}ms");
    }
}
