//! Test helpers and fixtures for loudmeter integration tests
//!
//! ## Tolerance Levels
//!
//! Use the appropriate tolerance from [`tolerances`] module:
//! - `REFERENCE_LU` (0.2): Published BS.1770 reference figures
//! - `CROSS_CHECK_LU` (0.05): Agreement with the `ebur128` crate
//! - `NUMERIC_LU` (1e-6): Mathematically equal paths

#![allow(dead_code)]

pub mod tolerances;

use loudmeter::prelude::*;

/// Default test sample rate (matches common hardware)
pub const TEST_SAMPLE_RATE: f64 = 48000.0;

/// Standard buffer size for deterministic testing
pub const TEST_BUFFER_SIZE: usize = 512;

/// Route `tracing` output to the test harness (once per binary).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Create a prepared meter for the given layout at the test sample rate.
pub fn test_meter(layout: ChannelLayout) -> LoudnessMeter {
    LoudnessMeter::builder()
        .sample_rate(TEST_SAMPLE_RATE)
        .max_block_size(TEST_BUFFER_SIZE)
        .layout(layout)
        .build()
        .expect("Failed to create test meter")
}

/// Generate a test signal: sine wave at given frequency and amplitude.
pub fn generate_sine(frequency: f64, amplitude: f32, sample_rate: f64, num_samples: usize) -> Vec<f32> {
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate;
            amplitude * (2.0 * std::f64::consts::PI * frequency * t).sin() as f32
        })
        .collect()
}

/// Generate silence (zero samples).
pub fn generate_silence(num_samples: usize) -> Vec<f32> {
    vec![0.0; num_samples]
}

/// Generate white noise (random samples in -amplitude..amplitude).
pub fn generate_noise(num_samples: usize, amplitude: f32, seed: u64) -> Vec<f32> {
    // Simple LCG for reproducible "random" noise
    let mut rng = seed;
    (0..num_samples)
        .map(|_| {
            rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1);
            (((rng >> 33) as f32 / u32::MAX as f32) * 4.0 - 1.0) * amplitude
        })
        .collect()
}

/// Seconds to samples at the test sample rate.
pub fn seconds(secs: f64) -> usize {
    (secs * TEST_SAMPLE_RATE) as usize
}

/// Feed equal-length channel buffers to the meter in fixed-size blocks.
pub fn feed(meter: &mut LoudnessMeter, channels: &[Vec<f32>], block_size: usize) {
    let len = channels.iter().map(|c| c.len()).min().unwrap_or(0);
    let mut start = 0;
    while start < len {
        let end = (start + block_size).min(len);
        let block: Vec<&[f32]> = channels.iter().map(|c| &c[start..end]).collect();
        meter.process_block(&block, block.len());
        start = end;
    }
}

/// Feed channel buffers in variable-size blocks, returning the snapshot
/// published after each block keyed by samples consumed.
pub fn feed_blocks(
    processor: &mut LoudnessProcessor,
    channels: &[Vec<f32>],
    block_sizes: &[usize],
) -> Vec<(usize, LoudnessSnapshot)> {
    let len = channels.iter().map(|c| c.len()).min().unwrap_or(0);
    let mut trajectory = Vec::new();
    let mut start = 0;
    let mut sizes = block_sizes.iter().copied().cycle();
    while start < len {
        let size = sizes.next().unwrap_or(len).max(1);
        let end = (start + size).min(len);
        let block: Vec<&[f32]> = channels.iter().map(|c| &c[start..end]).collect();
        processor.process_block(&block, block.len());
        trajectory.push((end, processor.snapshot()));
        start = end;
    }
    trajectory
}
