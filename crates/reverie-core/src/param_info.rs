//! Parameter metadata for host-facing controls.
//!
//! Hosts address parameters by a small numeric ID and exchange raw integer
//! values. A [`ParamDescriptor`] tells the host what each ID means, the raw
//! range it accepts, and the value it starts at, so knobs and command-line
//! flags can be generated instead of hand-maintained.
//!
//! # Example
//!
//! ```rust
//! use reverie_core::{ParamDescriptor, ParamUnit};
//!
//! const MIX: ParamDescriptor =
//!     ParamDescriptor::new(2, "Mix", "mix", ParamUnit::Permille, -1000, 1000, 500);
//!
//! assert_eq!(MIX.clamp(-5000), -1000);
//! assert_eq!(MIX.normalize(0), 0.5);
//! ```
//!
//! # no_std Support
//!
//! This module is fully `no_std` compatible with no heap allocations required.

/// Description of one host-visible parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamDescriptor {
    /// Numeric ID the host uses for get/set calls.
    pub id: u8,

    /// Full parameter name for display (e.g., "Time").
    pub name: &'static str,

    /// Stable lowercase key for command lines and logs (e.g., "time").
    pub key: &'static str,

    /// Unit of the raw value.
    pub unit: ParamUnit,

    /// Minimum raw value accepted.
    pub min: i32,

    /// Maximum raw value accepted.
    pub max: i32,

    /// Raw value reported straight after initialization.
    pub default: i32,
}

impl ParamDescriptor {
    /// Builds a descriptor; usable in `const` tables.
    pub const fn new(
        id: u8,
        name: &'static str,
        key: &'static str,
        unit: ParamUnit,
        min: i32,
        max: i32,
        default: i32,
    ) -> Self {
        Self {
            id,
            name,
            key,
            unit,
            min,
            max,
            default,
        }
    }

    /// Clamps a raw value to `[min, max]`.
    #[inline]
    pub const fn clamp(&self, value: i32) -> i32 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Maps a raw value to `[0.0, 1.0]` after clamping.
    #[inline]
    pub fn normalize(&self, value: i32) -> f32 {
        let range = (self.max - self.min) as f32;
        if range == 0.0 {
            return 0.0;
        }
        (self.clamp(value) - self.min) as f32 / range
    }
}

/// Unit of a raw parameter value, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Coarse control steps with no physical unit (e.g., 0..1023).
    Steps,

    /// Thousandths of full scale (e.g., -1000..1000).
    Permille,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    ///
    /// ```rust
    /// use reverie_core::ParamUnit;
    ///
    /// assert_eq!(ParamUnit::Permille.suffix(), " ‰");
    /// assert_eq!(ParamUnit::Steps.suffix(), "");
    /// ```
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Steps => "",
            ParamUnit::Permille => " ‰",
        }
    }
}
