//! Two-stage BS.1770 gating over weighted 400 ms block powers.

use super::math::{power_to_lufs, relative_threshold_lufs, ABSOLUTE_GATE_LUFS};

/// Running sum and count of block powers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct PowerMean {
    sum: f64,
    count: u64,
}

impl PowerMean {
    #[inline]
    fn add(&mut self, power: f64) {
        self.sum += power;
        self.count += 1;
    }

    #[inline]
    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Outcome of gating one momentary block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GatedBlock {
    /// Momentary loudness of the block, LUFS.
    pub momentary: f64,
    /// Integrated loudness after this block, if it passed both gates.
    pub integrated: Option<f64>,
}

/// Relative-threshold and integrated-loudness accumulators.
///
/// Both means are running sums over every block that passed the respective
/// gate; no block history is stored and passed blocks are never retracted.
#[derive(Debug, Clone, Default)]
pub struct LoudnessGate {
    absolute: PowerMean,
    relative: PowerMean,
}

/// Linear power ratio of the relative gate offset.
const RELATIVE_GATE_RATIO: f64 = 0.1;

impl LoudnessGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gates one weighted block power.
    pub fn push(&mut self, combined_power: f64) -> GatedBlock {
        let momentary = power_to_lufs(combined_power);

        if momentary <= ABSOLUTE_GATE_LUFS || momentary.is_nan() {
            return GatedBlock {
                momentary,
                integrated: None,
            };
        }

        self.absolute.add(combined_power);

        // Compared in the power domain: mean * 10^(-10 LU / 10).
        let threshold_power =
            self.absolute.sum / self.absolute.count as f64 * RELATIVE_GATE_RATIO;
        let passes = combined_power >= threshold_power || self.relative.count == 0;
        if !passes {
            return GatedBlock {
                momentary,
                integrated: None,
            };
        }

        self.relative.add(combined_power);
        GatedBlock {
            momentary,
            integrated: self.integrated(),
        }
    }

    /// Current relative threshold in LUFS, once any block passed gate 1.
    pub fn relative_threshold(&self) -> Option<f64> {
        self.absolute.mean().map(relative_threshold_lufs)
    }

    /// Current integrated loudness in LUFS, once any block passed gate 2.
    pub fn integrated(&self) -> Option<f64> {
        self.relative.mean().map(power_to_lufs)
    }

    /// Blocks that passed the absolute gate.
    pub fn absolute_gated_blocks(&self) -> u64 {
        self.absolute.count
    }

    /// Blocks that passed both gates.
    pub fn relative_gated_blocks(&self) -> u64 {
        self.relative.count
    }

    pub fn reset(&mut self) {
        self.absolute = PowerMean::default();
        self.relative = PowerMean::default();
    }
}
