//! Mathematical utility functions for DSP.
//!
//! All functions are allocation-free and suitable for `no_std`.
//!
//! # Level Conversions
//!
//! - [`db_to_linear`] / [`linear_to_db`] - Convert between dB and linear gain
//!
//! # Saturation
//!
//! - [`cubic_soft_clip`] - Polynomial soft limiter with a smooth knee
//!
//! # Utilities
//!
//! - [`flush_denormal`] - Keep feedback loops out of the subnormal range
//! - [`mono_sum`] - Average a stereo pair
//! - [`ms_to_samples`] - Time conversion

use libm::{expf, logf};

/// Convert decibels to linear gain.
///
/// # Example
/// ```rust
/// use reverie_core::db_to_linear;
///
/// assert!((db_to_linear(0.0) - 1.0).abs() < 0.001);
/// assert!((db_to_linear(-6.02) - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    // 10^(dB/20) = e^(dB * ln(10)/20)
    const FACTOR: f32 = core::f32::consts::LN_10 / 20.0;
    expf(db * FACTOR)
}

/// Convert linear gain to decibels.
///
/// Inputs at or below 1e-10 floor at -200 dB.
///
/// # Example
/// ```rust
/// use reverie_core::linear_to_db;
///
/// assert!(linear_to_db(1.0).abs() < 0.001);
/// assert!((linear_to_db(0.5) - (-6.02)).abs() < 0.01);
/// ```
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    const FACTOR: f32 = 20.0 / core::f32::consts::LN_10;
    logf(linear.max(1e-10)) * FACTOR
}

/// Cubic soft clipper.
///
/// ```text
/// u = clamp(x, -1, 1)
/// y = u - c·u³
/// ```
///
/// With `c = 1/3` the slope reaches zero exactly at `|x| = 1`, so the curve
/// flattens into its ceiling of `±2/3` without a corner. Near zero it is the
/// identity to within `c·x²` relative error.
///
/// # Example
/// ```rust
/// use reverie_core::cubic_soft_clip;
///
/// assert!((cubic_soft_clip(0.01, 1.0 / 3.0) - 0.01).abs() < 1e-6);
/// assert_eq!(cubic_soft_clip(5.0, 1.0 / 3.0), cubic_soft_clip(1.0, 1.0 / 3.0));
/// ```
#[inline]
pub fn cubic_soft_clip(x: f32, c: f32) -> f32 {
    let u = x.clamp(-1.0, 1.0);
    u - c * u * u * u
}

/// Average a stereo pair to mono.
#[inline]
pub fn mono_sum(left: f32, right: f32) -> f32 {
    (left + right) * 0.5
}

/// Convert milliseconds to a whole number of samples (rounded down).
#[inline]
pub fn ms_to_samples(ms: u32, sample_rate: u32) -> usize {
    (ms as u64 * sample_rate as u64 / 1000) as usize
}

/// Flush denormal (subnormal) floating point values to zero.
///
/// Subnormal floats cause severe CPU slowdowns on most architectures.
/// Values below 1e-20 are replaced with zero, well before the IEEE 754
/// subnormal range begins. Use in every feedback path.
#[allow(clippy::inline_always)]
#[inline(always)]
pub fn flush_denormal(x: f32) -> f32 {
    if x.abs() < 1e-20 { 0.0 } else { x }
}
