//! Fluent handle for reading loudness from non-audio threads.

use super::{LoudnessReadings, LoudnessSnapshot};
use std::sync::Arc;

/// Reader-side handle to a [`LoudnessProcessor`](super::LoudnessProcessor).
///
/// Cheap to clone; every clone observes the same readings.
///
/// # Example
/// ```ignore
/// let handle = processor.handle();
/// std::thread::spawn(move || loop {
///     let m = handle.momentary();
///     let i = handle.integrated();
///     // draw...
/// });
///
/// // From any thread; applied on the audio thread before the next block.
/// handle.reset();
/// ```
#[derive(Debug, Clone)]
pub struct LoudnessHandle {
    readings: Arc<LoudnessReadings>,
}

impl LoudnessHandle {
    pub fn new(readings: Arc<LoudnessReadings>) -> Self {
        Self { readings }
    }

    /// 400 ms window, LUFS.
    pub fn momentary(&self) -> f64 {
        self.readings.momentary()
    }

    /// 3-second window, LUFS.
    pub fn short_term(&self) -> f64 {
        self.readings.short_term()
    }

    pub fn integrated(&self) -> f64 {
        self.readings.integrated()
    }

    pub fn snapshot(&self) -> LoudnessSnapshot {
        self.readings.snapshot()
    }

    /// Schedules a session reset on the audio thread.
    pub fn reset(&self) -> &Self {
        self.readings.request_reset();
        self
    }

    pub fn is_reset_pending(&self) -> bool {
        self.readings.is_reset_pending()
    }

    pub fn inner(&self) -> &Arc<LoudnessReadings> {
        &self.readings
    }
}
