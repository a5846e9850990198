//! Builder for configuring and constructing a `LoudnessMeter`.

use crate::core::{ChannelLayout, LoudnessProcessor, MeterConfig};
use crate::{Error, LoudnessMeter, Result};
use tracing::debug;

/// Fluent configuration for a [`LoudnessMeter`].
///
/// Weights come from `layout`, from explicit `channel_weights`, or from both
/// (the counts must then agree, the explicit weights win). Without either
/// the meter measures stereo.
///
/// # Example
///
/// ```ignore
/// use loudmeter::prelude::*;
///
/// let meter = LoudnessMeter::builder()
///     .sample_rate(44100.0)
///     .max_block_size(1024)
///     .layout(ChannelLayout::Surround51)
///     .build()?;
/// ```
pub struct LoudnessMeterBuilder {
    sample_rate: f64,
    max_block_size: usize,
    layout: Option<ChannelLayout>,
    channel_weights: Option<Vec<f64>>,
}

impl Default for LoudnessMeterBuilder {
    fn default() -> Self {
        Self {
            sample_rate: 48000.0,
            max_block_size: 512,
            layout: None,
            channel_weights: None,
        }
    }
}

impl LoudnessMeterBuilder {
    /// Default: 48000.0
    pub fn sample_rate(mut self, rate: f64) -> Self {
        self.sample_rate = rate;
        self
    }

    /// Default: 512
    pub fn max_block_size(mut self, frames: usize) -> Self {
        self.max_block_size = frames;
        self
    }

    pub fn layout(mut self, layout: ChannelLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn channel_weights(mut self, weights: impl Into<Vec<f64>>) -> Self {
        self.channel_weights = Some(weights.into());
        self
    }

    fn config(&self) -> Result<MeterConfig> {
        match (self.layout, &self.channel_weights) {
            (Some(layout), Some(weights)) if layout.channels() != weights.len() => {
                Err(Error::LayoutMismatch {
                    layout: layout.channels(),
                    weights: weights.len(),
                })
            }
            (_, Some(weights)) => Ok(MeterConfig::with_weights(weights.clone())),
            (Some(layout), None) => Ok(MeterConfig::from_layout(layout)),
            (None, None) => Ok(MeterConfig::default()),
        }
    }

    pub fn build(self) -> Result<LoudnessMeter> {
        let config = self.config()?;
        let mut processor = LoudnessProcessor::new(config)?;
        processor.prepare(self.sample_rate, self.max_block_size)?;

        debug!(
            sample_rate = self.sample_rate,
            channels = processor.channels(),
            "loudness meter built"
        );

        Ok(LoudnessMeter::from_processor(processor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_stereo() {
        let meter = LoudnessMeterBuilder::default().build().unwrap();
        assert_eq!(meter.processor().channels(), 2);
        assert_eq!(meter.processor().sample_rate(), 48000.0);
    }

    #[test]
    fn test_layout_and_weights_must_agree() {
        let err = LoudnessMeterBuilder::default()
            .layout(ChannelLayout::Surround51)
            .channel_weights([1.0, 1.0])
            .build()
            .err();
        assert_eq!(
            err,
            Some(Error::LayoutMismatch {
                layout: 6,
                weights: 2
            })
        );
    }

    #[test]
    fn test_core_errors_propagate() {
        let err = LoudnessMeterBuilder::default().sample_rate(10.0).build().err();
        assert_eq!(
            err,
            Some(Error::Core(loudmeter_core::Error::InvalidSampleRate(10.0)))
        );
    }
}
