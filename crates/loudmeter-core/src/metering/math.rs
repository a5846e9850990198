//! Loudness scale conversions.

/// K-weighting calibration offset in LU.
pub const LUFS_OFFSET: f64 = -0.691;

/// Absolute gate, LUFS.
pub const ABSOLUTE_GATE_LUFS: f64 = -70.0;

/// Relative gate offset below the gated mean, LU.
pub const RELATIVE_GATE_LU: f64 = -10.0;

/// Converts a weighted mean-square power to LUFS.
///
/// Zero power maps to negative infinity.
#[inline]
pub fn power_to_lufs(power: f64) -> f64 {
    LUFS_OFFSET + 10.0 * power.log10()
}

/// Converts LUFS back to weighted mean-square power.
#[inline]
pub fn lufs_to_power(lufs: f64) -> f64 {
    10f64.powf((lufs - LUFS_OFFSET) / 10.0)
}

/// Relative threshold in LUFS for a gate-1 mean power.
#[inline]
pub fn relative_threshold_lufs(mean_power: f64) -> f64 {
    power_to_lufs(mean_power) + RELATIVE_GATE_LU
}
