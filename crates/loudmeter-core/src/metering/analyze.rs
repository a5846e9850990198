//! One-shot loudness analysis for offline buffers.
//!
//! Runs the same streaming processor over complete channel buffers. For live
//! metering, use [`LoudnessProcessor`] directly.

use super::{LoudnessProcessor, LoudnessSnapshot};
use crate::config::MeterConfig;
use crate::Result;

/// Internal block size for offline runs.
const ANALYSIS_BLOCK_SIZE: usize = 4096;

/// Measures complete channel buffers, returning the values published after
/// the last sample.
pub fn analyze_loudness(
    channels: &[&[f32]],
    sample_rate: f64,
    config: &MeterConfig,
) -> Result<LoudnessSnapshot> {
    let mut processor = LoudnessProcessor::new(config.clone())?;
    processor.prepare(sample_rate, ANALYSIS_BLOCK_SIZE)?;
    processor.process_block(channels, channels.len());
    Ok(processor.snapshot())
}
