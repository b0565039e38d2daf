//! Parallel comb bank: echo density, decay time and damping.
//!
//! Eight [`CombFilter`]s with co-prime lengths are fed the same input and
//! summed. Each line's feedback passes through its own one-pole lowpass, so
//! high frequencies die faster than lows. Feedback gains come from the
//! [`GainScheduler`](crate::GainScheduler) and are rewritten once per block.
//!
//! ```text
//!        ┌─→ comb 557 ──┐
//! in ────┼─→ comb 619 ──┼─→ Σ × 1/8 ─→ out
//!        ┆      ⋮       ┆
//!        └─→ comb 1117 ─┘
//! ```

use reverie_core::{CombFilter, DelayLine, OnePole};

use crate::InitError;
use crate::storage::{COMB_STORAGE, StorageStage};
use crate::tuning::{COMB_CAPACITY, COMB_COUNT, COMB_DAMPING, COMB_DELAYS, COMB_OUTPUT_SCALE};

/// The comb lines and their normalized sum.
#[derive(Debug)]
pub struct CombBank<'a> {
    lines: [CombFilter<'a>; COMB_COUNT],
}

impl<'a> CombBank<'a> {
    /// Splits `storage` into [`COMB_COUNT`] lines of [`COMB_CAPACITY`] samples.
    ///
    /// All feedback gains start at zero.
    pub fn new(storage: &'a mut [f32]) -> Result<Self, InitError> {
        let provided = storage.len();
        if provided < COMB_STORAGE {
            return Err(InitError::InsufficientStorage {
                stage: StorageStage::Comb,
                required: COMB_STORAGE,
                provided,
            });
        }

        let mut chunks = storage.chunks_exact_mut(COMB_CAPACITY);
        let mut line = |i: usize| -> Result<CombFilter<'a>, InitError> {
            let store = chunks.next().ok_or(InitError::InsufficientStorage {
                stage: StorageStage::Comb,
                required: COMB_STORAGE,
                provided,
            })?;
            let damping = OnePole::new(COMB_DAMPING[i]);
            Ok(CombFilter::new(DelayLine::new(store)?, COMB_DELAYS[i], damping)?)
        };

        Ok(Self {
            lines: [
                line(0)?,
                line(1)?,
                line(2)?,
                line(3)?,
                line(4)?,
                line(5)?,
                line(6)?,
                line(7)?,
            ],
        })
    }

    /// Installs one feedback gain per line.
    #[inline]
    pub fn set_gains(&mut self, gains: &[f32; COMB_COUNT]) {
        for (comb, &g) in self.lines.iter_mut().zip(gains) {
            comb.set_feedback(g);
        }
    }

    /// Current feedback gains.
    pub fn gains(&self) -> [f32; COMB_COUNT] {
        core::array::from_fn(|i| self.lines[i].feedback())
    }

    /// Feeds `input` to every line and returns the scaled sum of their outputs.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let mut sum = 0.0;
        for comb in &mut self.lines {
            sum += comb.process(input);
        }
        sum * COMB_OUTPUT_SCALE
    }

    /// Silences every line and damping filter.
    pub fn clear(&mut self) {
        for comb in &mut self.lines {
            comb.clear();
        }
    }
}
