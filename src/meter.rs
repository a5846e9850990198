//! Assembled loudness meter.

use crate::builder::LoudnessMeterBuilder;
use crate::core::{LoudnessHandle, LoudnessProcessor, LoudnessSnapshot};
use crate::Result;

/// A prepared loudness processor paired with its reader handle.
///
/// Either drive it in place, or hand the processor to the audio callback
/// with [`into_parts`](Self::into_parts) and keep the handle for the UI.
pub struct LoudnessMeter {
    processor: LoudnessProcessor,
    handle: LoudnessHandle,
}

impl LoudnessMeter {
    pub fn builder() -> LoudnessMeterBuilder {
        LoudnessMeterBuilder::default()
    }

    pub(crate) fn from_processor(processor: LoudnessProcessor) -> Self {
        let handle = processor.handle();
        Self { processor, handle }
    }

    /// Re-prepares for a new sample rate or block size; starts a new session.
    pub fn prepare(&mut self, sample_rate: f64, max_block_size: usize) -> Result<()> {
        self.processor.prepare(sample_rate, max_block_size)?;
        Ok(())
    }

    #[inline]
    pub fn process_block(&mut self, buffers: &[&[f32]], channel_count: usize) {
        self.processor.process_block(buffers, channel_count);
    }

    pub fn reset(&mut self) {
        self.processor.reset();
    }

    pub fn momentary(&self) -> f64 {
        self.handle.momentary()
    }

    pub fn short_term(&self) -> f64 {
        self.handle.short_term()
    }

    pub fn integrated(&self) -> f64 {
        self.handle.integrated()
    }

    pub fn snapshot(&self) -> LoudnessSnapshot {
        self.handle.snapshot()
    }

    pub fn handle(&self) -> LoudnessHandle {
        self.handle.clone()
    }

    pub fn processor(&self) -> &LoudnessProcessor {
        &self.processor
    }

    pub fn into_parts(self) -> (LoudnessProcessor, LoudnessHandle) {
        (self.processor, self.handle)
    }
}
