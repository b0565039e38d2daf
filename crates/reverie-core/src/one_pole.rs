//! One-pole IIR filter for in-loop damping.
//!
//! A first-order recursive filter realized with a single state tap
//! (transposed direct form):
//!
//! ```text
//! y[n]  = b0 * x[n] + z1
//! z1    = b1 * x[n] - a1 * y[n]
//! ```
//!
//! which is equivalent to `y[n] = b0*x[n] + b1*x[n-1] - a1*y[n-1]`.
//!
//! Coefficients are fixed for the lifetime of the filter. In the reverb they
//! sit inside each comb's feedback loop, so every recirculation loses a little
//! more high-frequency energy, the way air and wall absorption do in a room.
//!
//! # Usage
//!
//! ```rust
//! use reverie_core::{OnePole, one_pole::lowpass_coefficients};
//!
//! let mut lp = OnePole::new(lowpass_coefficients(4000.0, 48000.0));
//! let filtered = lp.process(1.0);
//! assert!(filtered < 1.0); // first sample of the step is attenuated
//! ```
//!
//! # Reference
//!
//! Julius O. Smith III, "Introduction to Digital Filters with Audio Applications",
//! Section: One-Pole Filter.

use crate::flush_denormal;
use libm::tanf;

/// Coefficient set `{b0, b1, a1}` of a first-order section (a0 normalized to 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnePoleCoefficients {
    /// Feedforward gain on the current input.
    pub b0: f32,
    /// Feedforward gain on the previous input.
    pub b1: f32,
    /// Feedback coefficient (subtracted).
    pub a1: f32,
}

impl OnePoleCoefficients {
    /// Builds a coefficient set; usable in `const` tables.
    pub const fn new(b0: f32, b1: f32, a1: f32) -> Self {
        Self { b0, b1, a1 }
    }

    /// Gain at DC: `(b0 + b1) / (1 + a1)`.
    pub fn dc_gain(&self) -> f32 {
        (self.b0 + self.b1) / (1.0 + self.a1)
    }
}

/// First-order IIR filter with one persistent tap.
///
/// # Invariants
///
/// - `|a1| < 1` for a stable pole
/// - `z1` is flushed to zero when below 1e-20 (denormal protection)
#[derive(Debug, Clone)]
pub struct OnePole {
    coeffs: OnePoleCoefficients,
    z1: f32,
}

impl OnePole {
    /// Creates a filter with cleared state.
    pub const fn new(coeffs: OnePoleCoefficients) -> Self {
        Self { coeffs, z1: 0.0 }
    }

    /// Processes one sample.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let c = &self.coeffs;
        let output = c.b0 * input + self.z1;
        self.z1 = flush_denormal(c.b1 * input - c.a1 * output);
        output
    }

    /// Clears the state tap.
    pub fn reset(&mut self) {
        self.z1 = 0.0;
    }

    /// Returns the coefficient set.
    pub fn coefficients(&self) -> OnePoleCoefficients {
        self.coeffs
    }
}

/// Designs a first-order lowpass with the bilinear transform.
///
/// Unity gain at DC, a zero at Nyquist, −3 dB at `cutoff_hz`:
///
/// ```text
/// K  = tan(π·fc/fs)
/// b0 = b1 = K / (1 + K)
/// a1 = (K − 1) / (K + 1)
/// ```
///
/// Intended for deriving constant tables, not for the render path.
pub fn lowpass_coefficients(cutoff_hz: f32, sample_rate: f32) -> OnePoleCoefficients {
    let k = tanf(core::f32::consts::PI * cutoff_hz / sample_rate);
    let b = k / (1.0 + k);
    OnePoleCoefficients::new(b, b, (k - 1.0) / (k + 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_dc() {
        let mut lp = OnePole::new(lowpass_coefficients(1000.0, 48000.0));
        let mut out = 0.0;
        for _ in 0..48000 {
            out = lp.process(1.0);
        }
        assert!(
            (out - 1.0).abs() < 1e-4,
            "DC should pass through, got {out}"
        );
    }

    #[test]
    fn blocks_nyquist() {
        let mut lp = OnePole::new(lowpass_coefficients(6000.0, 48000.0));
        let mut sum = 0.0f32;
        for i in 0..4800 {
            let input = if i % 2 == 0 { 1.0 } else { -1.0 };
            let out = lp.process(input);
            if i >= 100 {
                sum += out.abs();
            }
        }
        let avg = sum / 4700.0;
        assert!(avg < 1e-3, "Nyquist should be nulled, avg = {avg}");
    }

    #[test]
    fn matches_direct_form_difference_equation() {
        let coeffs = OnePoleCoefficients::new(0.3, 0.3, -0.4);
        let mut lp = OnePole::new(coeffs);

        let input = [1.0, 0.5, -0.25, 0.0, 0.0, 0.75];
        let mut x_prev = 0.0;
        let mut y_prev = 0.0;
        for &x in &input {
            let expected = 0.3 * x + 0.3 * x_prev + 0.4 * y_prev;
            let got = lp.process(x);
            assert!((got - expected).abs() < 1e-6, "expected {expected}, got {got}");
            x_prev = x;
            y_prev = expected;
        }
    }

    #[test]
    fn unity_dc_gain_design() {
        for &fc in &[500.0, 5000.0, 12000.0] {
            let c = lowpass_coefficients(fc, 48000.0);
            assert!((c.dc_gain() - 1.0).abs() < 1e-5);
            assert!(c.a1.abs() < 1.0);
        }
    }

    #[test]
    fn reset_clears_state() {
        let mut lp = OnePole::new(lowpass_coefficients(1000.0, 48000.0));
        lp.process(1.0);
        lp.process(1.0);
        lp.reset();
        assert_eq!(lp.process(0.0), 0.0);
    }
}
