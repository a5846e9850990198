//! Lock-free cells shared between the audio thread and readers.

use atomic_float::AtomicF64;
use std::sync::atomic::{AtomicBool, Ordering};

/// One published loudness value in LUFS, cache-line aligned so the three
/// readings never share a line.
///
/// Starts at negative infinity, the value of "nothing measured yet".
#[derive(Debug)]
#[repr(align(64))]
pub struct AtomicLufs {
    lufs: AtomicF64,
}

impl AtomicLufs {
    pub fn new() -> Self {
        Self {
            lufs: AtomicF64::new(f64::NEG_INFINITY),
        }
    }

    #[inline]
    pub fn load(&self) -> f64 {
        self.lufs.load(Ordering::Acquire)
    }

    #[inline]
    pub fn store(&self, lufs: f64) {
        self.lufs.store(lufs, Ordering::Release);
    }

    /// Back to negative infinity.
    #[inline]
    pub fn clear(&self) {
        self.store(f64::NEG_INFINITY);
    }
}

impl Default for AtomicLufs {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-consumer request flag: any thread raises it, the audio thread
/// takes it.
#[derive(Debug, Default)]
#[repr(align(64))]
pub struct ResetFlag {
    raised: AtomicBool,
}

impl ResetFlag {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn raise(&self) {
        self.raised.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }

    /// Lowers the flag, returning whether it was raised.
    #[inline]
    pub fn take(&self) -> bool {
        self.raised.swap(false, Ordering::AcqRel)
    }
}
