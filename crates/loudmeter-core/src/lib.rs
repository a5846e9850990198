//! Streaming loudness kernel: K-weighting, 100 ms binning, two-stage gating.
//!
//! # Primary API
//!
//! - [`LoudnessProcessor`]: audio-thread driver (`prepare` / `process_block` / `reset`)
//! - [`LoudnessHandle`]: lock-free readings for UI and monitoring threads
//! - [`MeterConfig`] / [`ChannelLayout`]: channel weights
//! - [`analyze_loudness`]: one-shot offline measurement
//!
//! # Example
//!
//! ```ignore
//! use loudmeter_core::{ChannelLayout, LoudnessProcessor, MeterConfig};
//!
//! let mut processor = LoudnessProcessor::new(MeterConfig::from_layout(ChannelLayout::Stereo))?;
//! processor.prepare(48000.0, 512)?;
//! let handle = processor.handle();
//!
//! // audio callback
//! processor.process_block(&[left, right], 2);
//!
//! // UI thread
//! let lufs = handle.momentary();
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod config;
pub use config::{ChannelLayout, MeterConfig, MAX_SAMPLE_RATE, MIN_SAMPLE_RATE};

pub(crate) mod lockfree;
pub use lockfree::{AtomicLufs, ResetFlag};

pub mod metering;
pub use metering::{
    analyze_loudness, ChannelAccumulator, KWeightCoeffs, KWeightingFilter, LoudnessGate,
    LoudnessHandle, LoudnessProcessor, LoudnessReadings, LoudnessSnapshot,
};
