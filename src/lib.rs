//! # loudmeter - Real-time Loudness Metering
//!
//! EBU R128 / ITU-R BS.1770 loudness for live multichannel streams:
//! momentary (400 ms), short-term (3 s) and gated integrated loudness.
//!
//! ## Architecture
//!
//! loudmeter is an umbrella crate over:
//! - **loudmeter-core** - K-weighting, 100 ms binning, gating, lock-free readings
//!
//! ## Quick Start
//!
//! ```ignore
//! use loudmeter::prelude::*;
//!
//! let meter = LoudnessMeter::builder()
//!     .sample_rate(48000.0)
//!     .layout(ChannelLayout::Stereo)
//!     .build()?;
//!
//! let (mut processor, handle) = meter.into_parts();
//!
//! // Audio thread
//! processor.process_block(&[left, right], 2);
//!
//! // UI thread
//! println!("{:.1} LUFS", handle.momentary());
//! handle.reset();
//! ```

/// Re-export of loudmeter-core for direct access
pub use loudmeter_core as core;

pub use loudmeter_core::{
    analyze_loudness, AtomicLufs, ChannelLayout, KWeightCoeffs, LoudnessHandle, LoudnessProcessor,
    LoudnessReadings, LoudnessSnapshot, MeterConfig, ResetFlag,
};

mod builder;
mod error;
mod meter;

pub use builder::LoudnessMeterBuilder;
pub use error::{Error, Result};
pub use meter::LoudnessMeter;

/// Common imports.
pub mod prelude {
    pub use crate::{
        analyze_loudness, ChannelLayout, Error, LoudnessHandle, LoudnessMeter,
        LoudnessMeterBuilder, LoudnessProcessor, LoudnessSnapshot, MeterConfig, Result,
    };
}
