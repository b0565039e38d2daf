//! Band-limiting of the signal sent into the network.
//!
//! Lowpass then highpass, always in that order: the comb damping and the gain
//! table were tuned against this combined response.

use reverie_core::Biquad;

use crate::tuning::{INPUT_HIGHPASS, INPUT_LOWPASS};

/// 7 kHz lowpass followed by a 120 Hz highpass.
#[derive(Debug, Clone)]
pub struct InputTone {
    lowpass: Biquad,
    highpass: Biquad,
}

impl InputTone {
    /// Creates both filters with cleared state.
    pub const fn new() -> Self {
        Self {
            lowpass: Biquad::new(INPUT_LOWPASS),
            highpass: Biquad::new(INPUT_HIGHPASS),
        }
    }

    /// Filters one sample.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        self.highpass.process(self.lowpass.process(input))
    }

    /// Clears both filters.
    pub fn clear(&mut self) {
        self.lowpass.clear();
        self.highpass.clear();
    }
}

impl Default for InputTone {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine_gain(freq: f32) -> f32 {
        let mut tone = InputTone::new();
        let mut peak_in = 0.0f32;
        let mut peak_out = 0.0f32;
        for n in 0..48000 {
            let x = libm::sinf(core::f32::consts::TAU * freq * n as f32 / 48000.0);
            let y = tone.process(x);
            if n >= 24000 {
                peak_in = peak_in.max(x.abs());
                peak_out = peak_out.max(y.abs());
            }
        }
        peak_out / peak_in
    }

    #[test]
    fn passes_midrange() {
        let g = sine_gain(1000.0);
        assert!((g - 1.0).abs() < 0.05, "1 kHz gain {g}");
    }

    #[test]
    fn rejects_lows_and_highs() {
        assert!(sine_gain(25.0) < 0.1, "25 Hz should be cut");
        assert!(sine_gain(20000.0) < 0.1, "20 kHz should be cut");
    }

    #[test]
    fn blocks_dc() {
        let mut tone = InputTone::new();
        let mut out = 1.0;
        for _ in 0..48000 {
            out = tone.process(1.0);
        }
        assert!(out.abs() < 1e-3, "DC residue {out}");
    }
}
