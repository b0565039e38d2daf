//! User parameters: TIME, DEPTH and MIX.
//!
//! | ID | Name | Raw range | Default | Meaning |
//! |----|------|-----------|---------|---------|
//! | 0 | Time | 0..=1023 | 0 | Decay time, 0.4 s to 10 s in 64 steps |
//! | 1 | Depth | 0..=1023 | 0 | Send level into the network (`depth / 1023`) |
//! | 2 | Mix | -1000..=1000 | 500 | Dry (-1000) to wet (+1000) crossfade |
//!
//! Out-of-range raw values are clamped, never rejected. Unknown IDs are
//! ignored on set and read back as [`UNKNOWN_PARAM_VALUE`].

use reverie_core::{ParamDescriptor, ParamUnit};

/// Value [`ReverbEngine::get_parameter`](crate::ReverbEngine::get_parameter) returns
/// for an unknown parameter ID.
pub const UNKNOWN_PARAM_VALUE: i32 = i32::MIN;

/// Identifier of a user parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ParamId {
    /// Decay time.
    Time = 0,
    /// Send level.
    Depth = 1,
    /// Wet/dry mix.
    Mix = 2,
}

impl ParamId {
    /// All parameters in ID order.
    pub const ALL: [ParamId; 3] = [ParamId::Time, ParamId::Depth, ParamId::Mix];

    /// Host-facing description of this parameter.
    pub const fn descriptor(self) -> ParamDescriptor {
        PARAMS[self as usize]
    }
}

impl TryFrom<u8> for ParamId {
    type Error = u8;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(ParamId::Time),
            1 => Ok(ParamId::Depth),
            2 => Ok(ParamId::Mix),
            other => Err(other),
        }
    }
}

/// Descriptors for every parameter, indexed by ID.
pub const PARAMS: [ParamDescriptor; 3] = [
    ParamDescriptor::new(0, "Time", "time", ParamUnit::Steps, 0, 1023, 0),
    ParamDescriptor::new(1, "Depth", "depth", ParamUnit::Steps, 0, 1023, 0),
    ParamDescriptor::new(2, "Mix", "mix", ParamUnit::Permille, -1000, 1000, 500),
];

/// Current parameter values, as consumed by the render path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    time: i32,
    depth: i32,
    mix: f32,
}

impl Params {
    /// Stores `raw` for `id`, clamped to the parameter's range.
    pub fn set(&mut self, id: ParamId, raw: i32) {
        let value = id.descriptor().clamp(raw);
        match id {
            ParamId::Time => self.time = value,
            ParamId::Depth => self.depth = value,
            ParamId::Mix => self.mix = value as f32 / 1000.0,
        }
    }

    /// Returns the stored value in the raw domain.
    pub fn get(&self, id: ParamId) -> i32 {
        match id {
            ParamId::Time => self.time,
            ParamId::Depth => self.depth,
            ParamId::Mix => libm::roundf(self.mix * 1000.0) as i32,
        }
    }

    /// Raw TIME control, `0..=1023`.
    pub fn time(&self) -> i32 {
        self.time
    }

    /// Raw DEPTH control, `0..=1023`.
    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// Mix in `[-1, 1]`.
    pub fn mix(&self) -> f32 {
        self.mix
    }

    /// Send level into the network, `depth / 1023`.
    pub fn send(&self) -> f32 {
        self.depth as f32 / 1023.0
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            time: PARAMS[0].default,
            depth: PARAMS[1].default,
            mix: PARAMS[2].default as f32 / 1000.0,
        }
    }
}
