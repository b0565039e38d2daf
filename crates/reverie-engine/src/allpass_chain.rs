//! Series allpass diffusion after the comb bank.

use reverie_core::{AllpassFilter, DelayLine};

use crate::InitError;
use crate::storage::{ALLPASS_STORAGE, StorageStage};
use crate::tuning::{ALLPASS_CAPACITIES, ALLPASS_COUNT, ALLPASS_DELAYS, ALLPASS_GAIN};

/// Four Schroeder allpasses in fixed order (953, 241, 81, 23 samples).
///
/// The long stage first smears each comb echo widely, the short ones fill in
/// the gaps. Gains are fixed at [`ALLPASS_GAIN`].
#[derive(Debug)]
pub struct AllpassChain<'a> {
    stages: [AllpassFilter<'a>; ALLPASS_COUNT],
}

impl<'a> AllpassChain<'a> {
    /// Carves one line per stage out of `storage`, sized by
    /// [`ALLPASS_CAPACITIES`].
    pub fn new(storage: &'a mut [f32]) -> Result<Self, InitError> {
        let provided = storage.len();
        if provided < ALLPASS_STORAGE {
            return Err(InitError::InsufficientStorage {
                stage: StorageStage::Allpass,
                required: ALLPASS_STORAGE,
                provided,
            });
        }

        let mut rest = storage;
        let mut stage = |i: usize| -> Result<AllpassFilter<'a>, InitError> {
            let (store, tail) = core::mem::take(&mut rest).split_at_mut(ALLPASS_CAPACITIES[i]);
            rest = tail;
            Ok(AllpassFilter::new(DelayLine::new(store)?, ALLPASS_DELAYS[i], ALLPASS_GAIN)?)
        };

        Ok(Self {
            stages: [stage(0)?, stage(1)?, stage(2)?, stage(3)?],
        })
    }

    /// Runs `input` through every stage in order.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let mut x = input;
        for stage in &mut self.stages {
            x = stage.process(x);
        }
        x
    }

    /// Silences every stage.
    pub fn clear(&mut self) {
        for stage in &mut self.stages {
            stage.clear();
        }
    }
}
