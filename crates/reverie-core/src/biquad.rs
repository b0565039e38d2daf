//! Biquad (bi-quadratic) filter structure.
//!
//! A second-order IIR section with two persistent state taps, realized in
//! transposed direct form II:
//!
//! ```text
//! y[n] = b0*x[n] + z1
//! z1   = b1*x[n] - a1*y[n] + z2
//! z2   = b2*x[n] - a2*y[n]
//! ```
//!
//! This is the same transfer function as the Direct Form I equation
//! `y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2] - a1*y[n-1] - a2*y[n-2]`
//! with half the state.
//!
//! Coefficient calculation uses the RBJ Audio EQ Cookbook formulas. The
//! reverb bakes its coefficients into constants, so the design functions are
//! only used to derive and check those tables.

use core::f32::consts::PI;
use libm::{cosf, sinf};

use crate::flush_denormal;

/// Normalized biquad coefficients (`a0 = 1`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiquadCoefficients {
    /// Feedforward coefficients.
    pub b0: f32,
    /// Feedforward coefficient on `x[n-1]`.
    pub b1: f32,
    /// Feedforward coefficient on `x[n-2]`.
    pub b2: f32,
    /// Feedback coefficient on `y[n-1]` (subtracted).
    pub a1: f32,
    /// Feedback coefficient on `y[n-2]` (subtracted).
    pub a2: f32,
}

impl BiquadCoefficients {
    /// Passthrough: `y[n] = x[n]`.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0, 0.0);

    /// Builds an already-normalized coefficient set; usable in `const` tables.
    pub const fn new(b0: f32, b1: f32, b2: f32, a1: f32, a2: f32) -> Self {
        Self { b0, b1, b2, a1, a2 }
    }

    /// Normalizes raw cookbook coefficients by `a0`.
    pub fn from_raw(b0: f32, b1: f32, b2: f32, a0: f32, a1: f32, a2: f32) -> Self {
        let a0_inv = 1.0 / a0;
        Self::new(b0 * a0_inv, b1 * a0_inv, b2 * a0_inv, a1 * a0_inv, a2 * a0_inv)
    }

    /// Stability check: both poles strictly inside the unit circle.
    ///
    /// Uses the stability triangle `|a2| < 1` and `|a1| < 1 + a2`.
    pub fn is_stable(&self) -> bool {
        self.a2.abs() < 1.0 && self.a1.abs() < 1.0 + self.a2
    }
}

impl Default for BiquadCoefficients {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Second-order IIR filter with fixed coefficients and two state taps.
#[derive(Debug, Clone)]
pub struct Biquad {
    coeffs: BiquadCoefficients,
    z1: f32,
    z2: f32,
}

impl Biquad {
    /// Creates a filter with cleared state.
    pub const fn new(coeffs: BiquadCoefficients) -> Self {
        Self {
            coeffs,
            z1: 0.0,
            z2: 0.0,
        }
    }

    /// Processes a single sample.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let c = &self.coeffs;
        let output = c.b0 * input + self.z1;
        self.z1 = flush_denormal(c.b1 * input - c.a1 * output + self.z2);
        self.z2 = flush_denormal(c.b2 * input - c.a2 * output);
        output
    }

    /// Clears the state taps without touching the coefficients.
    pub fn clear(&mut self) {
        self.z1 = 0.0;
        self.z2 = 0.0;
    }

    /// Returns the coefficient set.
    pub fn coefficients(&self) -> BiquadCoefficients {
        self.coeffs
    }
}

impl Default for Biquad {
    fn default() -> Self {
        Self::new(BiquadCoefficients::IDENTITY)
    }
}

/// Calculates low-pass filter coefficients using the RBJ cookbook formula.
///
/// # Arguments
///
/// * `frequency` - Cutoff frequency in Hz
/// * `q` - Q factor (0.707 for Butterworth response)
/// * `sample_rate` - Sample rate in Hz
pub fn lowpass_coefficients(frequency: f32, q: f32, sample_rate: f32) -> BiquadCoefficients {
    let omega = 2.0 * PI * frequency / sample_rate;
    let cos_omega = cosf(omega);
    let alpha = sinf(omega) / (2.0 * q);

    BiquadCoefficients::from_raw(
        (1.0 - cos_omega) / 2.0,
        1.0 - cos_omega,
        (1.0 - cos_omega) / 2.0,
        1.0 + alpha,
        -2.0 * cos_omega,
        1.0 - alpha,
    )
}

/// Calculates high-pass filter coefficients using the RBJ cookbook formula.
///
/// # Arguments
///
/// * `frequency` - Cutoff frequency in Hz
/// * `q` - Q factor (0.707 for Butterworth response)
/// * `sample_rate` - Sample rate in Hz
pub fn highpass_coefficients(frequency: f32, q: f32, sample_rate: f32) -> BiquadCoefficients {
    let omega = 2.0 * PI * frequency / sample_rate;
    let cos_omega = cosf(omega);
    let alpha = sinf(omega) / (2.0 * q);

    BiquadCoefficients::from_raw(
        (1.0 + cos_omega) / 2.0,
        -(1.0 + cos_omega),
        (1.0 + cos_omega) / 2.0,
        1.0 + alpha,
        -2.0 * cos_omega,
        1.0 - alpha,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_passthrough() {
        let mut biquad = Biquad::default();
        for &x in &[1.0, -0.5, 0.25, 0.0] {
            assert_eq!(biquad.process(x), x);
        }
    }

    #[test]
    fn test_matches_direct_form_one() {
        let coeffs = lowpass_coefficients(2000.0, 0.707, 48000.0);
        let mut biquad = Biquad::new(coeffs);

        let (mut x1, mut x2, mut y1, mut y2) = (0.0f32, 0.0f32, 0.0f32, 0.0f32);
        for i in 0..64 {
            let x = if i % 7 == 0 { 1.0 } else { -0.25 };
            let expected = coeffs.b0 * x + coeffs.b1 * x1 + coeffs.b2 * x2
                - coeffs.a1 * y1
                - coeffs.a2 * y2;
            let got = biquad.process(x);
            assert!(
                (got - expected).abs() < 1e-5,
                "sample {i}: expected {expected}, got {got}"
            );
            x2 = x1;
            x1 = x;
            y2 = y1;
            y1 = expected;
        }
    }

    #[test]
    fn test_lowpass_dc_gain() {
        let mut biquad = Biquad::new(lowpass_coefficients(1000.0, 0.707, 48000.0));
        let mut out = 0.0;
        for _ in 0..4800 {
            out = biquad.process(1.0);
        }
        assert!((out - 1.0).abs() < 1e-3, "DC should pass, got {out}");
    }

    #[test]
    fn test_highpass_blocks_dc() {
        let mut biquad = Biquad::new(highpass_coefficients(120.0, 0.707, 48000.0));
        let mut out = 1.0;
        for _ in 0..48000 {
            out = biquad.process(1.0);
        }
        assert!(out.abs() < 1e-3, "DC should be removed, got {out}");
    }

    #[test]
    fn test_designs_are_stable() {
        for &freq in &[20.0, 120.0, 1000.0, 7000.0, 20000.0] {
            assert!(lowpass_coefficients(freq, 0.707, 48000.0).is_stable());
            assert!(highpass_coefficients(freq, 0.707, 48000.0).is_stable());
        }
        assert!(!BiquadCoefficients::new(1.0, 0.0, 0.0, -2.0, 1.0).is_stable());
    }

    #[test]
    fn test_clear() {
        let mut biquad = Biquad::new(lowpass_coefficients(1000.0, 0.707, 48000.0));
        for _ in 0..16 {
            biquad.process(1.0);
        }
        biquad.clear();
        assert_eq!(biquad.process(0.0), 0.0);
    }
}
