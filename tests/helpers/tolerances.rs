//! Tolerance constants for loudness testing.
//!
//! Different measurements require different precision levels.

/// Agreement with published BS.1770 reference figures, LU.
pub const REFERENCE_LU: f64 = 0.2;

/// Agreement with another BS.1770 implementation on identical samples, LU.
pub const CROSS_CHECK_LU: f64 = 0.05;

/// Floating point noise between mathematically equal loudness paths, LU.
pub const NUMERIC_LU: f64 = 1e-6;

/// Loudness of a full-scale 1 kHz sine on one channel, LUFS.
pub const FULL_SCALE_SINE_MONO_LUFS: f64 = -3.01;
