//! K-weighting pre-filter (ITU-R BS.1770).
//!
//! Two cascaded biquads: a high-frequency shelf (+4 dB above ~1.7 kHz)
//! followed by the RLB high-pass (~38 Hz). Coefficients are designed from the
//! analog prototype for the stream's sample rate; at 48 kHz they reproduce
//! the values tabulated in BS.1770.
//!
//! Coefficients are immutable and shared between channels through an `Arc`,
//! each channel owns only its delay registers.

use std::f64::consts::PI;
use std::sync::Arc;

/// Normalized biquad coefficients (`a0 == 1`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiquadCoeffs {
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub a1: f64,
    pub a2: f64,
}

/// Coefficients for both K-weighting stages at one sample rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KWeightCoeffs {
    pub shelf: BiquadCoeffs,
    pub highpass: BiquadCoeffs,
}

// Analog prototype parameters of the two stages.
const SHELF_FC: f64 = 1681.974450955533;
const SHELF_GAIN_DB: f64 = 3.999843853973347;
const SHELF_Q: f64 = 0.7071752369554196;
const SHELF_VB_EXP: f64 = 0.4996667741545416;
const HIGHPASS_FC: f64 = 38.13547087602444;
const HIGHPASS_Q: f64 = 0.5003270373238773;

impl KWeightCoeffs {
    /// BS.1770 table values for 48 kHz.
    #[allow(clippy::excessive_precision)]
    pub const BS1770_48K: KWeightCoeffs = KWeightCoeffs {
        shelf: BiquadCoeffs {
            b0: 1.53512485958697,
            b1: -2.69169618940638,
            b2: 1.19839281085285,
            a1: -1.69065929318241,
            a2: 0.73248077421585,
        },
        highpass: BiquadCoeffs {
            b0: 1.0,
            b1: -2.0,
            b2: 1.0,
            a1: -1.99004745483398,
            a2: 0.99007225036621,
        },
    };

    /// Designs both stages for `sample_rate` via the bilinear transform.
    pub fn new(sample_rate: f64) -> Self {
        let k = (PI * SHELF_FC / sample_rate).tan();
        let vh = 10f64.powf(SHELF_GAIN_DB / 20.0);
        let vb = vh.powf(SHELF_VB_EXP);
        let a0 = 1.0 + k / SHELF_Q + k * k;
        let shelf = BiquadCoeffs {
            b0: (vh + vb * k / SHELF_Q + k * k) / a0,
            b1: 2.0 * (k * k - vh) / a0,
            b2: (vh - vb * k / SHELF_Q + k * k) / a0,
            a1: 2.0 * (k * k - 1.0) / a0,
            a2: (1.0 - k / SHELF_Q + k * k) / a0,
        };

        let k = (PI * HIGHPASS_FC / sample_rate).tan();
        let a0 = 1.0 + k / HIGHPASS_Q + k * k;
        let highpass = BiquadCoeffs {
            b0: 1.0,
            b1: -2.0,
            b2: 1.0,
            a1: 2.0 * (k * k - 1.0) / a0,
            a2: (1.0 - k / HIGHPASS_Q + k * k) / a0,
        };

        Self { shelf, highpass }
    }
}

/// Transposed direct form II delay registers.
#[derive(Debug, Clone, Copy, Default)]
struct BiquadState {
    s1: f64,
    s2: f64,
}

impl BiquadState {
    #[inline]
    fn tick(&mut self, c: &BiquadCoeffs, x: f64) -> f64 {
        let y = c.b0 * x + self.s1;
        self.s1 = c.b1 * x - c.a1 * y + self.s2;
        self.s2 = c.b2 * x - c.a2 * y;
        y
    }
}

/// Per-channel K-weighting filter instance.
#[derive(Debug, Clone)]
pub struct KWeightingFilter {
    coeffs: Arc<KWeightCoeffs>,
    shelf: BiquadState,
    highpass: BiquadState,
}

impl KWeightingFilter {
    pub fn new(coeffs: Arc<KWeightCoeffs>) -> Self {
        Self {
            coeffs,
            shelf: BiquadState::default(),
            highpass: BiquadState::default(),
        }
    }

    pub fn coeffs(&self) -> &KWeightCoeffs {
        &self.coeffs
    }

    #[inline]
    pub fn process_sample(&mut self, x: f64) -> f64 {
        let y = self.shelf.tick(&self.coeffs.shelf, x);
        self.highpass.tick(&self.coeffs.highpass, y)
    }

    /// Filters `buf` in place, carrying state over to the next call.
    #[inline]
    pub fn process_in_place(&mut self, buf: &mut [f64]) {
        for x in buf.iter_mut() {
            *x = self.process_sample(*x);
        }
    }

    pub fn reset(&mut self) {
        self.shelf = BiquadState::default();
        self.highpass = BiquadState::default();
    }
}
