//! The reverb engine: initialization, parameters and rendering.
//!
//! # Signal flow
//!
//! ```text
//! L ─┬─────────────────────────────────────────────────────┐ dry
//!    ├→ (L+R)/2 × send → InputTone → PreDelay → CombBank    │
//! R ─┤                                   → AllpassChain ─→ wet
//!    └──────────────────────────────────────────────────────┤
//!                          softclip(dry·L + wet·v), softclip(dry·R + wet·v)
//! ```
//!
//! # Block contract
//!
//! Comb gains, send level and wet/dry weights are derived from [`Params`] once
//! at the top of every block, so a parameter change takes effect at the next
//! block boundary. Parameter calls and render calls must not overlap; the
//! `&mut self` receivers make that a compile-time guarantee within one thread
//! and leave cross-thread serialization to the host.

use reverie_core::mono_sum;

use crate::allpass_chain::AllpassChain;
use crate::comb_bank::CombBank;
use crate::gain_table::GainScheduler;
use crate::input_tone::InputTone;
use crate::output::OutputStage;
use crate::params::{ParamId, Params, UNKNOWN_PARAM_VALUE};
use crate::pre_delay::PreDelay;
use crate::storage::{StorageProvider, StorageStage};
use crate::tuning::{CHANNELS, COMB_COUNT, SAMPLE_RATE};
use crate::InitError;

/// What the host offers the engine at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Input channels offered.
    pub input_channels: u8,
    /// Output channels offered.
    pub output_channels: u8,
}

impl HostConfig {
    /// Stereo in, stereo out at `sample_rate`.
    pub const fn stereo(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            input_channels: CHANNELS as u8,
            output_channels: CHANNELS as u8,
        }
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self::stereo(SAMPLE_RATE)
    }
}

/// Stereo reverb over host-lent storage.
///
/// Built once by [`initialize`](Self::initialize); every delay line is
/// cleared and parameters sit at their defaults (time 0, depth 0, mix 0.5).
///
/// # Example
///
/// ```rust
/// use reverie_engine::{HostConfig, ParamId, ReverbEngine, REQUIRED_STORAGE, SliceArena};
///
/// let mut storage = vec![0.0f32; REQUIRED_STORAGE];
/// let mut arena = SliceArena::new(&mut storage);
/// let mut engine = ReverbEngine::initialize(&HostConfig::default(), &mut arena).unwrap();
///
/// engine.set_param(ParamId::Depth, 1023);
/// engine.set_param(ParamId::Mix, 1000);
///
/// let input = [1.0f32, 1.0, 0.0, 0.0];
/// let mut output = [0.0f32; 4];
/// engine.render_block(&input, &mut output, 2);
/// assert_eq!(output, [0.0; 4]); // the tail starts after the 30 ms pre-delay
/// ```
#[derive(Debug)]
pub struct ReverbEngine<'a> {
    params: Params,
    scheduler: GainScheduler,
    send: f32,
    input_tone: InputTone,
    pre_delay: PreDelay<'a>,
    combs: CombBank<'a>,
    allpasses: AllpassChain<'a>,
    output: OutputStage,
}

impl<'a> ReverbEngine<'a> {
    /// Validates the host configuration and binds every stage to storage
    /// obtained from `storage`.
    ///
    /// Storage is requested in the order pre-delay, comb bank, allpass chain.
    /// Any failure aborts initialization; nothing partially built escapes.
    pub fn initialize<S>(config: &HostConfig, storage: &mut S) -> Result<Self, InitError>
    where
        S: StorageProvider<'a> + ?Sized,
    {
        let result = Self::build(config, storage);

        #[cfg(feature = "tracing")]
        match &result {
            Ok(_) => tracing::debug!(
                sample_rate = config.sample_rate,
                storage = crate::storage::REQUIRED_STORAGE,
                "reverb engine initialized"
            ),
            Err(e) => tracing::warn!("reverb engine initialization rejected: {e}"),
        }

        result
    }

    fn build<S>(config: &HostConfig, storage: &mut S) -> Result<Self, InitError>
    where
        S: StorageProvider<'a> + ?Sized,
    {
        if config.sample_rate != SAMPLE_RATE {
            return Err(InitError::UnsupportedSampleRate(config.sample_rate));
        }
        if usize::from(config.input_channels) != CHANNELS
            || usize::from(config.output_channels) != CHANNELS
        {
            return Err(InitError::ChannelGeometry {
                inputs: config.input_channels,
                outputs: config.output_channels,
            });
        }

        let pre_delay = PreDelay::new(request(storage, StorageStage::PreDelay)?)?;
        let combs = CombBank::new(request(storage, StorageStage::Comb)?)?;
        let allpasses = AllpassChain::new(request(storage, StorageStage::Allpass)?)?;

        let params = Params::default();
        let mut engine = Self {
            params,
            scheduler: GainScheduler::new(),
            send: 0.0,
            input_tone: InputTone::new(),
            pre_delay,
            combs,
            allpasses,
            output: OutputStage::new(params.mix()),
        };
        engine.prepare_block();
        Ok(engine)
    }

    /// Sets a parameter by raw host ID. Values are clamped; unknown IDs are
    /// ignored.
    pub fn set_parameter(&mut self, id: u8, raw: i32) {
        if let Ok(id) = ParamId::try_from(id) {
            self.set_param(id, raw);
        }
    }

    /// Reads a parameter by raw host ID, or [`UNKNOWN_PARAM_VALUE`] for an
    /// unknown ID.
    pub fn get_parameter(&self, id: u8) -> i32 {
        ParamId::try_from(id).map_or(UNKNOWN_PARAM_VALUE, |id| self.param(id))
    }

    /// Sets a parameter, clamped to its range.
    pub fn set_param(&mut self, id: ParamId, raw: i32) {
        self.params.set(id, raw);
    }

    /// Reads a parameter in its raw domain.
    pub fn param(&self, id: ParamId) -> i32 {
        self.params.get(id)
    }

    /// Current parameter values.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Comb feedback gains in use since the last block started.
    pub fn comb_gains(&self) -> [f32; COMB_COUNT] {
        self.combs.gains()
    }

    /// Renders up to `frames` interleaved stereo frames from `input` into
    /// `output`.
    ///
    /// Processes `min(frames, input.len() / 2, output.len() / 2)` frames and
    /// leaves the rest of `output` untouched. Zero frames is a no-op.
    pub fn render_block(&mut self, input: &[f32], output: &mut [f32], frames: usize) {
        let frames = frames
            .min(input.len() / CHANNELS)
            .min(output.len() / CHANNELS);
        if frames == 0 {
            return;
        }

        self.prepare_block();
        let n = frames * CHANNELS;
        for (inp, out) in input[..n]
            .chunks_exact(CHANNELS)
            .zip(output[..n].chunks_exact_mut(CHANNELS))
        {
            let (l, r) = self.tick(inp[0], inp[1]);
            out[0] = l;
            out[1] = r;
        }
    }

    /// Renders an interleaved stereo buffer in place. A trailing odd sample is
    /// left untouched.
    pub fn render_in_place(&mut self, buffer: &mut [f32]) {
        if buffer.len() < CHANNELS {
            return;
        }

        self.prepare_block();
        for frame in buffer.chunks_exact_mut(CHANNELS) {
            let (l, r) = self.tick(frame[0], frame[1]);
            frame[0] = l;
            frame[1] = r;
        }
    }

    /// Renders a single frame as a one-frame block.
    pub fn process_frame(&mut self, left: f32, right: f32) -> (f32, f32) {
        self.prepare_block();
        self.tick(left, right)
    }

    /// Silences every delay line and filter, keeping parameters.
    pub fn reset(&mut self) {
        self.input_tone.clear();
        self.pre_delay.clear();
        self.combs.clear();
        self.allpasses.clear();
    }

    /// Per-block control update: O(N), allocation-free.
    #[inline]
    fn prepare_block(&mut self) {
        let gains = self.scheduler.schedule(self.params.time());
        self.combs.set_gains(gains);
        self.send = self.params.send();
        self.output.set_mix(self.params.mix());
    }

    #[inline]
    fn tick(&mut self, left: f32, right: f32) -> (f32, f32) {
        let x = mono_sum(left, right) * self.send;
        let x = self.input_tone.process(x);
        let x = self.pre_delay.process(x);
        let x = self.combs.process(x);
        let wet = self.allpasses.process(x);
        self.output.process(left, right, wet)
    }
}

/// Asks the provider for one stage's store and checks its length.
fn request<'a, S>(storage: &mut S, stage: StorageStage) -> Result<&'a mut [f32], InitError>
where
    S: StorageProvider<'a> + ?Sized,
{
    let required = stage.required();
    let store = storage
        .allocate(required)
        .ok_or(InitError::StorageUnavailable {
            stage,
            requested: required,
        })?;
    if store.len() < required {
        return Err(InitError::InsufficientStorage {
            stage,
            required,
            provided: store.len(),
        });
    }
    Ok(store)
}
