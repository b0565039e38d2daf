//! Reverie Engine - stereo Schroeder-style reverb over host-lent storage
//!
//! A fixed reverb network tuned for 48 kHz:
//!
//! ```text
//! (L+R)/2 × depth → 7 kHz LP → 120 Hz HP → 30 ms pre-delay
//!     → 8 damped combs (Σ/8) → 4 allpasses → wet
//! out = softclip(dry·in + wet·v) per channel
//! ```
//!
//! # Parameters
//!
//! | ID | Parameter | Raw range | Default |
//! |----|-----------|-----------|---------|
//! | 0 | TIME | 0..=1023 | 0 |
//! | 1 | DEPTH | 0..=1023 | 0 |
//! | 2 | MIX | -1000..=1000 | 500 |
//!
//! # Memory
//!
//! The engine never allocates. [`ReverbEngine::initialize`] borrows
//! [`REQUIRED_STORAGE`] samples from a [`StorageProvider`] and keeps them for
//! its lifetime. Rendering and parameter calls cannot fail.
//!
//! # Feature flags
//!
//! - `std` (default): std support in dependencies
//! - `tracing`: log initialization results through `tracing`
//!
//! # Example
//!
//! ```rust
//! use reverie_engine::{HostConfig, ParamId, REQUIRED_STORAGE, ReverbEngine, SliceArena};
//!
//! let mut storage = vec![0.0f32; REQUIRED_STORAGE];
//! let mut engine =
//!     ReverbEngine::initialize(&HostConfig::default(), &mut SliceArena::new(&mut storage))?;
//! engine.set_param(ParamId::Time, 800);
//! engine.set_param(ParamId::Depth, 1023);
//!
//! let mut block = vec![0.0f32; 2 * 256];
//! block[0] = 1.0;
//! block[1] = 1.0;
//! engine.render_in_place(&mut block);
//! # Ok::<(), reverie_engine::InitError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod allpass_chain;
pub mod comb_bank;
pub mod engine;
pub mod error;
pub mod gain_table;
pub mod input_tone;
pub mod output;
pub mod params;
pub mod pre_delay;
pub mod storage;
pub mod tuning;

pub use allpass_chain::AllpassChain;
pub use comb_bank::CombBank;
pub use engine::{HostConfig, ReverbEngine};
pub use error::InitError;
pub use gain_table::{GAIN_TABLE, GainScheduler};
pub use input_tone::InputTone;
pub use output::{OutputStage, SoftClipper};
pub use params::{PARAMS, ParamId, Params, UNKNOWN_PARAM_VALUE};
pub use pre_delay::PreDelay;
pub use storage::{REQUIRED_STORAGE, SliceArena, StorageProvider, StorageStage};
