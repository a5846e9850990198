//! Loudness metering (ITU-R BS.1770 / EBU R128).
//!
//! - Real-time metering: `LoudnessProcessor` on the audio thread, `LoudnessHandle` for readers
//! - Batch analysis: `analyze_loudness` for offline buffers

mod analyze;
mod channel;
mod gate;
mod handle;
mod kweight;
mod math;
mod processor;
mod readings;

pub use analyze::analyze_loudness;
pub use channel::{ChannelAccumulator, BINS_IN_3S, BINS_IN_400MS, HISTORY_BINS};
pub use gate::{GatedBlock, LoudnessGate};
pub use handle::LoudnessHandle;
pub use kweight::{BiquadCoeffs, KWeightCoeffs, KWeightingFilter};
pub use math::{
    lufs_to_power, power_to_lufs, relative_threshold_lufs, ABSOLUTE_GATE_LUFS, LUFS_OFFSET,
    RELATIVE_GATE_LU,
};
pub use processor::LoudnessProcessor;
pub use readings::{LoudnessReadings, LoudnessSnapshot};
