//! Streaming driver: feeds channel accumulators and drains loudness windows.

use super::channel::ChannelAccumulator;
use super::gate::LoudnessGate;
use super::kweight::KWeightCoeffs;
use super::math::power_to_lufs;
use super::{LoudnessHandle, LoudnessReadings, LoudnessSnapshot};
use crate::config::{validate_stream, MeterConfig};
use crate::Result;
use std::sync::Arc;
use tracing::{debug, warn};

/// Real-time BS.1770 loudness processor.
///
/// Lives on the audio thread. `prepare` allocates everything; after that
/// `process_block` does not allocate, block, or fail. Results are published
/// through [`LoudnessReadings`] and read elsewhere via [`LoudnessHandle`].
pub struct LoudnessProcessor {
    config: MeterConfig,
    channels: Vec<ChannelAccumulator>,
    gate: LoudnessGate,
    readings: Arc<LoudnessReadings>,
    sample_rate: f64,
    bin_length: usize,
    last_channel_count: Option<usize>,
}

impl LoudnessProcessor {
    /// Creates an unprepared processor. Blocks are ignored until `prepare`.
    pub fn new(config: MeterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            channels: Vec::new(),
            gate: LoudnessGate::new(),
            readings: Arc::new(LoudnessReadings::new()),
            sample_rate: 0.0,
            bin_length: 0,
            last_channel_count: None,
        })
    }

    /// (Re)builds all state for a stream. Call before streaming starts and
    /// whenever the sample rate changes; starts a fresh session.
    pub fn prepare(&mut self, sample_rate: f64, max_block_size: usize) -> Result<()> {
        validate_stream(sample_rate, max_block_size)?;

        let bin_length = (sample_rate / 10.0) as usize;
        let coeffs = Arc::new(KWeightCoeffs::new(sample_rate));
        self.channels = self
            .config
            .channel_weights
            .iter()
            .map(|&weight| {
                ChannelAccumulator::new(Arc::clone(&coeffs), weight, bin_length, max_block_size)
            })
            .collect();
        self.sample_rate = sample_rate;
        self.bin_length = bin_length;

        debug!(
            sample_rate,
            max_block_size,
            bin_length,
            channels = self.channels.len(),
            "loudness processor prepared"
        );

        self.reset();
        Ok(())
    }

    pub fn is_prepared(&self) -> bool {
        !self.channels.is_empty()
    }

    /// Clears every accumulator and publishes negative infinity.
    pub fn reset(&mut self) {
        for channel in &mut self.channels {
            channel.reset();
        }
        self.gate.reset();
        self.last_channel_count = None;
        self.readings.clear();
        debug!("loudness session reset");
    }

    /// Measures one host block.
    ///
    /// Only the first `channel_count` buffers (and at most as many as there
    /// are configured channels) are measured. A change of `channel_count`
    /// from the previous block resets the session first.
    pub fn process_block(&mut self, buffers: &[&[f32]], channel_count: usize) {
        if self.readings.take_reset_request() {
            self.reset();
        }
        if !self.is_prepared() {
            return;
        }

        if let Some(previous) = self.last_channel_count {
            if previous != channel_count {
                warn!(
                    previous,
                    current = channel_count,
                    "channel count changed, resetting loudness session"
                );
                self.reset();
            }
        }
        self.last_channel_count = Some(channel_count);

        let active = channel_count.min(buffers.len()).min(self.channels.len());
        if active == 0 {
            return;
        }
        let buffers = &buffers[..active];
        let len = buffers.iter().map(|b| b.len()).max().unwrap_or(0);

        // At most one bin completes per channel between drains, so the
        // history ring never drops a window regardless of host block size.
        let mut start = 0;
        while start < len {
            let end = (start + self.bin_length).min(len);
            for (channel, buffer) in self.channels.iter_mut().zip(buffers) {
                if start < buffer.len() {
                    channel.ingest(&buffer[start..end.min(buffer.len())]);
                }
            }
            self.drain(active);
            start = end;
        }
    }

    fn drain(&mut self, active: usize) {
        let channels = &mut self.channels[..active];

        while channels.iter().all(|c| c.has_new_momentary_bin()) {
            let combined = weighted_sum(channels, ChannelAccumulator::momentary_power);
            let block = self.gate.push(combined);
            self.readings.set_momentary(block.momentary);
            if let Some(integrated) = block.integrated {
                self.readings.set_integrated(integrated);
            }
        }

        while channels.iter().all(|c| c.has_new_short_term_bin()) {
            let combined = weighted_sum(channels, ChannelAccumulator::short_term_power);
            self.readings.set_short_term(power_to_lufs(combined));
        }
    }

    /// Reader handle sharing this processor's readings.
    pub fn handle(&self) -> LoudnessHandle {
        LoudnessHandle::new(Arc::clone(&self.readings))
    }

    pub fn readings(&self) -> &Arc<LoudnessReadings> {
        &self.readings
    }

    pub fn snapshot(&self) -> LoudnessSnapshot {
        self.readings.snapshot()
    }

    /// Current relative gate threshold in LUFS.
    pub fn relative_threshold(&self) -> Option<f64> {
        self.gate.relative_threshold()
    }

    /// Momentary blocks that passed the absolute gate this session.
    pub fn absolute_gated_blocks(&self) -> u64 {
        self.gate.absolute_gated_blocks()
    }

    /// Momentary blocks counted towards integrated loudness this session.
    pub fn relative_gated_blocks(&self) -> u64 {
        self.gate.relative_gated_blocks()
    }

    pub fn config(&self) -> &MeterConfig {
        &self.config
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Samples per 100 ms bin at the prepared sample rate.
    pub fn bin_length(&self) -> usize {
        self.bin_length
    }

    /// Number of configured (measurable) channels.
    pub fn channels(&self) -> usize {
        self.config.channels()
    }
}

/// Pops one window from every channel and sums the weighted powers.
#[inline]
fn weighted_sum(
    channels: &mut [ChannelAccumulator],
    window: fn(&mut ChannelAccumulator) -> Option<f64>,
) -> f64 {
    channels
        .iter_mut()
        .map(|c| {
            let weight = c.weight();
            window(c).map_or(0.0, |power| power * weight)
        })
        .sum()
}
