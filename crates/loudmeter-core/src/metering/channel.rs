//! Per-channel K-weighted binning and sliding window powers.

use super::kweight::{KWeightCoeffs, KWeightingFilter};
use std::sync::Arc;

/// Bins in the momentary (400 ms) window.
pub const BINS_IN_400MS: usize = 4;

/// Bins in the short-term (3 s) window.
pub const BINS_IN_3S: usize = 30;

/// Completed bins retained per channel; enough for the longest window.
pub const HISTORY_BINS: usize = if BINS_IN_3S > BINS_IN_400MS {
    BINS_IN_3S
} else {
    BINS_IN_400MS
};

/// Fixed ring of the most recent completed bin powers.
///
/// Bins are addressed by their absolute index since the session start, so the
/// window counters never need rebasing when the ring wraps.
#[derive(Debug, Clone)]
struct BinHistory {
    bins: [f64; HISTORY_BINS],
    completed: u64,
}

impl BinHistory {
    fn new() -> Self {
        Self {
            bins: [0.0; HISTORY_BINS],
            completed: 0,
        }
    }

    #[inline]
    fn push(&mut self, power: f64) {
        self.bins[(self.completed % HISTORY_BINS as u64) as usize] = power;
        self.completed += 1;
    }

    /// Absolute index of the oldest bin still held.
    #[inline]
    fn oldest(&self) -> u64 {
        self.completed.saturating_sub(HISTORY_BINS as u64)
    }

    /// Mean of the `len` bins ending at absolute index `end` (inclusive).
    #[inline]
    fn mean(&self, end: u64, len: usize) -> f64 {
        let start = end + 1 - len as u64;
        let sum: f64 = (start..=end)
            .map(|i| self.bins[(i % HISTORY_BINS as u64) as usize])
            .sum();
        sum / len as f64
    }

    fn clear(&mut self) {
        self.bins = [0.0; HISTORY_BINS];
        self.completed = 0;
    }
}

/// Accumulates one channel into 100 ms bins and serves window powers.
///
/// `momentary_power` / `short_term_power` each read the window ending at
/// their own counter and then advance it, so every completed bin produces
/// exactly one momentary and one short-term window.
#[derive(Debug, Clone)]
pub struct ChannelAccumulator {
    filter: KWeightingFilter,
    weight: f64,
    bin_length: usize,
    partial_sum: f64,
    partial_len: usize,
    history: BinHistory,
    momentary_counter: u64,
    short_term_counter: u64,
    scratch: Vec<f64>,
}

impl ChannelAccumulator {
    /// Creates an accumulator; all allocation happens here.
    pub fn new(
        coeffs: Arc<KWeightCoeffs>,
        weight: f64,
        bin_length: usize,
        max_block_size: usize,
    ) -> Self {
        Self {
            filter: KWeightingFilter::new(coeffs),
            weight,
            bin_length: bin_length.max(1),
            partial_sum: 0.0,
            partial_len: 0,
            history: BinHistory::new(),
            momentary_counter: BINS_IN_400MS as u64 - 1,
            short_term_counter: BINS_IN_3S as u64 - 1,
            scratch: vec![0.0; max_block_size.max(1)],
        }
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn bin_length(&self) -> usize {
        self.bin_length
    }

    /// Number of bins completed since the last reset.
    pub fn completed_bins(&self) -> u64 {
        self.history.completed
    }

    /// Samples folded into the bin currently being filled.
    pub fn partial_len(&self) -> usize {
        self.partial_len
    }

    /// Filters `samples` and folds them into bins. Any length is accepted;
    /// blocks longer than the scratch buffer are taken in pieces.
    pub fn ingest(&mut self, samples: &[f32]) {
        let Self {
            filter,
            bin_length,
            partial_sum,
            partial_len,
            history,
            scratch,
            ..
        } = self;

        for chunk in samples.chunks(scratch.len()) {
            let buf = &mut scratch[..chunk.len()];
            for (dst, &src) in buf.iter_mut().zip(chunk) {
                *dst = src as f64;
            }
            filter.process_in_place(buf);

            for &x in buf.iter() {
                *partial_sum += x * x;
                *partial_len += 1;
                if *partial_len == *bin_length {
                    history.push(*partial_sum / *bin_length as f64);
                    *partial_sum = 0.0;
                    *partial_len = 0;
                }
            }
        }
    }

    #[inline]
    pub fn has_new_momentary_bin(&self) -> bool {
        self.history.completed > self.momentary_counter
    }

    #[inline]
    pub fn has_new_short_term_bin(&self) -> bool {
        self.history.completed > self.short_term_counter
    }

    /// Mean power of the 400 ms window at the momentary counter, then
    /// advances the counter. `None` when no new window is complete.
    pub fn momentary_power(&mut self) -> Option<f64> {
        if !self.has_new_momentary_bin() {
            return None;
        }
        let end = self.window_end(self.momentary_counter, BINS_IN_400MS);
        self.momentary_counter = end + 1;
        Some(self.history.mean(end, BINS_IN_400MS))
    }

    /// Mean power of the 3 s window at the short-term counter, then advances
    /// the counter. `None` when no new window is complete.
    pub fn short_term_power(&mut self) -> Option<f64> {
        if !self.has_new_short_term_bin() {
            return None;
        }
        let end = self.window_end(self.short_term_counter, BINS_IN_3S);
        self.short_term_counter = end + 1;
        Some(self.history.mean(end, BINS_IN_3S))
    }

    /// Windows whose bins already left the ring are skipped.
    #[inline]
    fn window_end(&self, counter: u64, len: usize) -> u64 {
        counter.max(self.history.oldest() + len as u64 - 1)
    }

    pub fn reset(&mut self) {
        self.filter.reset();
        self.partial_sum = 0.0;
        self.partial_len = 0;
        self.history.clear();
        self.momentary_counter = BINS_IN_400MS as u64 - 1;
        self.short_term_counter = BINS_IN_3S as u64 - 1;
    }
}
