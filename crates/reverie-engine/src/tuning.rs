//! Design-time constants of the reverb network.
//!
//! Every delay length and filter coefficient here was derived for a single
//! sample rate, [`SAMPLE_RATE`]. Porting the engine to another rate means
//! re-deriving all of them; the design functions in `reverie_core` reproduce
//! the filter constants (see the crate tests).
//!
//! # Storage layout
//!
//! | Stage | Lines | Capacity per line | Samples |
//! |-------|-------|-------------------|---------|
//! | Pre-delay | 1 | 2048 | 2048 |
//! | Comb bank | 8 | 2048 | 16384 |
//! | Allpass chain | 4 | 1024 / 256 / 128 / 32 | 1440 |

use core::f32::consts::FRAC_1_SQRT_2;
use reverie_core::{BiquadCoefficients, OnePoleCoefficients};

/// The only sample rate the network is tuned for.
pub const SAMPLE_RATE: u32 = 48_000;

/// Channels on each side of the engine (interleaved stereo).
pub const CHANNELS: usize = 2;

/// Pre-delay length in milliseconds.
pub const PRE_DELAY_MS: u32 = 30;

/// Pre-delay length in samples (30 ms at 48 kHz).
pub const PRE_DELAY_SAMPLES: usize = 1440;

/// Pre-delay line capacity.
pub const PRE_DELAY_CAPACITY: usize = 2048;

/// Number of parallel comb lines.
pub const COMB_COUNT: usize = 8;

/// Comb delay lengths in samples.
///
/// All prime, spread over 11.6-23.3 ms with no pair in a small integer ratio,
/// so the lines' resonances never line up.
pub const COMB_DELAYS: [usize; COMB_COUNT] = [557, 619, 709, 787, 863, 941, 1033, 1117];

/// Capacity of every comb line.
pub const COMB_CAPACITY: usize = 2048;

/// Damping cutoff per comb line in Hz; longer lines are darker.
pub const COMB_DAMPING_HZ: [f32; COMB_COUNT] =
    [9000.0, 8500.0, 8000.0, 7500.0, 7000.0, 6500.0, 6000.0, 5500.0];

/// Bilinear one-pole lowpass coefficients for [`COMB_DAMPING_HZ`].
pub const COMB_DAMPING: [OnePoleCoefficients; COMB_COUNT] = [
    OnePoleCoefficients::new(0.400543816, 0.400543816, -0.198912367),
    OnePoleCoefficients::new(0.383416351, 0.383416351, -0.233167297),
    OnePoleCoefficients::new(0.366025404, 0.366025404, -0.267949192),
    OnePoleCoefficients::new(0.348326658, 0.348326658, -0.303346684),
    OnePoleCoefficients::new(0.330272871, 0.330272871, -0.339454259),
    OnePoleCoefficients::new(0.311813326, 0.311813326, -0.376373349),
    OnePoleCoefficients::new(0.292893219, 0.292893219, -0.414213562),
    OnePoleCoefficients::new(0.273452947, 0.273452947, -0.453094105),
];

/// Scale applied to the comb sum before diffusion (one over the line count).
pub const COMB_OUTPUT_SCALE: f32 = 1.0 / COMB_COUNT as f32;

/// Number of series allpass stages.
pub const ALLPASS_COUNT: usize = 4;

/// Allpass delay lengths in samples, in processing order.
pub const ALLPASS_DELAYS: [usize; ALLPASS_COUNT] = [953, 241, 81, 23];

/// Line capacity per allpass stage: the next power of two above each delay.
pub const ALLPASS_CAPACITIES: [usize; ALLPASS_COUNT] = [1024, 256, 128, 32];

/// Feedback/feedforward gain shared by all allpass stages.
pub const ALLPASS_GAIN: f32 = 0.7;

/// Input lowpass cutoff in Hz.
pub const INPUT_LOWPASS_HZ: f32 = 7000.0;

/// Input highpass cutoff in Hz.
pub const INPUT_HIGHPASS_HZ: f32 = 120.0;

/// Q of both input filters (Butterworth).
pub const INPUT_FILTER_Q: f32 = FRAC_1_SQRT_2;

/// RBJ lowpass at [`INPUT_LOWPASS_HZ`], Q = 1/√2.
pub const INPUT_LOWPASS: BiquadCoefficients = BiquadCoefficients::new(
    0.125317809,
    0.250635617,
    0.125317809,
    -0.779970626,
    0.281241860,
);

/// RBJ highpass at [`INPUT_HIGHPASS_HZ`], Q = 1/√2.
pub const INPUT_HIGHPASS: BiquadCoefficients = BiquadCoefficients::new(
    0.988954248,
    -1.977908496,
    0.988954248,
    -1.977786484,
    0.978030508,
);

/// Soft clipper input scale.
pub const SOFT_CLIP_PRE: f32 = 0.25;

/// Soft clipper output scale.
pub const SOFT_CLIP_POST: f32 = 4.0;

/// Cubic knee coefficient of the soft clipper.
pub const SOFT_CLIP_KNEE: f32 = 1.0 / 3.0;
