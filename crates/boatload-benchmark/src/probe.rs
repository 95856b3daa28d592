//! Scoped time and peak-memory measurement.

use std::time::{Duration, Instant};

use tracing::warn;

use crate::memory;

/// Measurements taken over one probe scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Wall-clock time between start and finish.
    pub elapsed: Duration,
    /// Highest heap usage above the starting level, in bytes.
    pub peak_bytes: u64,
}

/// Brackets exactly one region of work.
///
/// [`Probe::start`] records the current time and lowers the allocator's
/// high-water mark to the current level; [`Probe::finish`] reads both back.
/// A probe dropped without `finish` (the measured call panicked) logs a
/// warning and is discarded.
///
/// Probes must not be nested or used from several threads at once: the
/// high-water mark is process-wide.
///
/// # Example
///
/// ```
/// use boatload_benchmark::Probe;
///
/// let probe = Probe::start();
/// let data: Vec<u64> = (0..1024).collect();
/// let sample = probe.finish();
/// assert_eq!(data.len(), 1024);
/// assert!(sample.elapsed.as_secs() < 60);
/// ```
#[derive(Debug)]
#[must_use = "a probe measures nothing until finish() is called"]
pub struct Probe {
    started: Instant,
    baseline: usize,
    finished: bool,
}

impl Probe {
    /// Starts measuring.
    pub fn start() -> Self {
        let baseline = memory::reset_peak();
        Self {
            started: Instant::now(),
            baseline,
            finished: false,
        }
    }

    /// Stops measuring and returns the sample.
    pub fn finish(mut self) -> Sample {
        let elapsed = self.started.elapsed();
        let peak = memory::peak_bytes().saturating_sub(self.baseline);
        self.finished = true;
        Sample {
            elapsed,
            peak_bytes: peak as u64,
        }
    }
}

impl Drop for Probe {
    fn drop(&mut self) {
        if !self.finished {
            warn!(
                event = "probe_abandoned",
                elapsed_us = self.started.elapsed().as_micros() as u64,
                "measurement scope left without finishing"
            );
        }
    }
}

/// Runs `f` inside a probe and returns its output together with the sample.
///
/// # Example
///
/// ```
/// use boatload_benchmark::measure;
///
/// let (sum, sample) = measure(|| (1..=100u64).sum::<u64>());
/// assert_eq!(sum, 5050);
/// assert!(sample.elapsed.as_secs() < 60);
/// ```
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, Sample) {
    let probe = Probe::start();
    let output = f();
    (output, probe.finish())
}
