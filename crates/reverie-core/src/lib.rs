//! Reverie Core - DSP primitives for reverberation networks
//!
//! This crate provides the building blocks the reverie engine is assembled from,
//! designed for real-time audio processing with zero allocation in the audio path.
//! Every sample store is borrowed from the host, so nothing here ever allocates.
//!
//! # Core Abstractions
//!
//! ## Delay Lines
//!
//! - [`DelayLine`] - Power-of-two circular buffer over borrowed storage,
//!   addressed by read-behind offsets
//!
//! ## Filters
//!
//! - [`OnePole`] - First-order IIR with a single state tap (comb damping)
//! - [`Biquad`] - Second-order IIR, transposed direct form II (tone shaping)
//! - [`CombFilter`] - Feedback comb with an in-loop [`OnePole`] lowpass
//! - [`AllpassFilter`] - Schroeder allpass for diffusion
//!
//! ## Utilities
//!
//! - Math functions: [`flush_denormal`], [`cubic_soft_clip`], [`mono_sum`], etc.
//! - Parameter metadata: [`ParamDescriptor`], [`ParamUnit`]
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded audio applications.
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! reverie-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use reverie_core::{CombFilter, DelayLine, OnePole, OnePoleCoefficients};
//!
//! let mut storage = [0.0f32; 1024];
//! let line = DelayLine::new(&mut storage).unwrap();
//! let damping = OnePole::new(OnePoleCoefficients::new(0.4, 0.4, -0.2));
//! let mut comb = CombFilter::new(line, 557, damping).unwrap();
//! comb.set_feedback(0.8);
//!
//! let _ = comb.process(1.0);
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: No allocations, locks, or I/O in processing paths
//! - **Borrowed storage**: Sample memory is owned by the host and lent for the
//!   lifetime of the processor
//! - **Fixed coefficients**: Filter design happens offline; the design
//!   functions here exist to derive and verify the constants

#![cfg_attr(not(feature = "std"), no_std)]

pub mod allpass;
pub mod biquad;
pub mod comb;
pub mod delay;
pub mod math;
pub mod one_pole;
pub mod param_info;

// Re-export main types at crate root
pub use allpass::AllpassFilter;
pub use biquad::{Biquad, BiquadCoefficients, highpass_coefficients, lowpass_coefficients};
pub use comb::{CombFilter, MAX_FEEDBACK};
pub use delay::{DelayError, DelayLine};
pub use math::{
    cubic_soft_clip, db_to_linear, flush_denormal, linear_to_db, mono_sum, ms_to_samples,
};
pub use one_pole::{OnePole, OnePoleCoefficients};
pub use param_info::{ParamDescriptor, ParamUnit};
