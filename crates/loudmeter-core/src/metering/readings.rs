//! Lock-free loudness readings shared with UI / monitoring threads.

use crate::lockfree::{AtomicLufs, ResetFlag};

/// Published loudness values plus the pending-reset flag.
///
/// Each value is updated atomically on its own; readers may see momentary
/// and integrated loudness from different blocks.
#[derive(Debug)]
pub struct LoudnessReadings {
    momentary: AtomicLufs,
    short_term: AtomicLufs,
    integrated: AtomicLufs,
    reset_requested: ResetFlag,
}

impl Default for LoudnessReadings {
    fn default() -> Self {
        Self::new()
    }
}

impl LoudnessReadings {
    pub fn new() -> Self {
        Self {
            momentary: AtomicLufs::new(),
            short_term: AtomicLufs::new(),
            integrated: AtomicLufs::new(),
            reset_requested: ResetFlag::new(),
        }
    }

    /// Momentary loudness (400 ms), LUFS.
    #[inline]
    pub fn momentary(&self) -> f64 {
        self.momentary.load()
    }

    /// Short-term loudness (3 s), LUFS.
    #[inline]
    pub fn short_term(&self) -> f64 {
        self.short_term.load()
    }

    /// Gated integrated loudness, LUFS.
    #[inline]
    pub fn integrated(&self) -> f64 {
        self.integrated.load()
    }

    pub fn snapshot(&self) -> LoudnessSnapshot {
        LoudnessSnapshot {
            momentary: self.momentary(),
            short_term: self.short_term(),
            integrated: self.integrated(),
        }
    }

    /// Asks the audio thread to reset before its next block.
    pub fn request_reset(&self) {
        self.reset_requested.raise();
    }

    pub fn is_reset_pending(&self) -> bool {
        self.reset_requested.is_raised()
    }

    #[inline]
    pub(crate) fn take_reset_request(&self) -> bool {
        self.reset_requested.take()
    }

    #[inline]
    pub(crate) fn set_momentary(&self, lufs: f64) {
        self.momentary.store(lufs);
    }

    #[inline]
    pub(crate) fn set_short_term(&self, lufs: f64) {
        self.short_term.store(lufs);
    }

    #[inline]
    pub(crate) fn set_integrated(&self, lufs: f64) {
        self.integrated.store(lufs);
    }

    pub(crate) fn clear(&self) {
        self.momentary.clear();
        self.short_term.clear();
        self.integrated.clear();
    }
}

/// The three loudness values read together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoudnessSnapshot {
    pub momentary: f64,
    pub short_term: f64,
    pub integrated: f64,
}

impl Default for LoudnessSnapshot {
    fn default() -> Self {
        Self {
            momentary: f64::NEG_INFINITY,
            short_term: f64::NEG_INFINITY,
            integrated: f64::NEG_INFINITY,
        }
    }
}

impl LoudnessSnapshot {
    /// True while no value has been measured yet.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_neg_infinity() {
        let readings = LoudnessReadings::new();
        assert!(readings.snapshot().is_empty());
        assert!(!readings.is_reset_pending());
    }

    #[test]
    fn test_clear_keeps_reset_flag() {
        let readings = LoudnessReadings::new();
        readings.set_momentary(-20.0);
        readings.request_reset();
        readings.clear();
        assert_eq!(readings.momentary(), f64::NEG_INFINITY);
        assert!(readings.take_reset_request());
        assert!(!readings.take_reset_request());
    }
}
