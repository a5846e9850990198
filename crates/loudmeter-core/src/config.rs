//! Meter configuration.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Lowest sample rate accepted by `prepare`.
pub const MIN_SAMPLE_RATE: f64 = 8000.0;

/// Highest sample rate accepted by `prepare`.
pub const MAX_SAMPLE_RATE: f64 = 384000.0;

/// Speaker layouts with their BS.1770 channel weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelLayout {
    Mono,
    #[default]
    Stereo,
    /// L, R, C, Ls, Rs
    Surround50,
    /// L, R, C, LFE, Ls, Rs
    Surround51,
}

impl ChannelLayout {
    /// Per-channel weights in channel order.
    ///
    /// Surround channels carry +1.5 dB (1.41), the LFE is excluded.
    pub fn weights(self) -> Vec<f64> {
        match self {
            ChannelLayout::Mono => vec![1.0],
            ChannelLayout::Stereo => vec![1.0, 1.0],
            ChannelLayout::Surround50 => vec![1.0, 1.0, 1.0, 1.41, 1.41],
            ChannelLayout::Surround51 => vec![1.0, 1.0, 1.0, 0.0, 1.41, 1.41],
        }
    }

    pub fn channels(self) -> usize {
        match self {
            ChannelLayout::Mono => 1,
            ChannelLayout::Stereo => 2,
            ChannelLayout::Surround50 => 5,
            ChannelLayout::Surround51 => 6,
        }
    }
}

/// Configuration for a loudness meter.
///
/// The number of weights is the number of channels measured; surplus input
/// channels are ignored by the driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterConfig {
    pub channel_weights: Vec<f64>,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self::from_layout(ChannelLayout::default())
    }
}

impl MeterConfig {
    pub fn from_layout(layout: ChannelLayout) -> Self {
        Self {
            channel_weights: layout.weights(),
        }
    }

    pub fn with_weights(channel_weights: Vec<f64>) -> Self {
        Self { channel_weights }
    }

    pub fn channels(&self) -> usize {
        self.channel_weights.len()
    }

    pub fn validate(&self) -> Result<()> {
        if self.channel_weights.is_empty() {
            return Err(Error::InvalidConfig(
                "at least one channel weight is required".to_string(),
            ));
        }

        for (channel, &weight) in self.channel_weights.iter().enumerate() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "channel {} weight {} must be finite and non-negative",
                    channel, weight
                )));
            }
        }

        Ok(())
    }
}

/// Checks the stream parameters passed to `prepare`.
pub(crate) fn validate_stream(sample_rate: f64, max_block_size: usize) -> Result<()> {
    if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&sample_rate) {
        return Err(Error::InvalidSampleRate(sample_rate));
    }
    if max_block_size == 0 {
        return Err(Error::InvalidBlockSize(max_block_size));
    }
    Ok(())
}
