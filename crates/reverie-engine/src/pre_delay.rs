//! Fixed pre-delay ahead of the comb bank.

use reverie_core::DelayLine;

use crate::InitError;
use crate::storage::StorageStage;
use crate::tuning::{PRE_DELAY_CAPACITY, PRE_DELAY_SAMPLES};

/// Delays the network input by [`PRE_DELAY_SAMPLES`] so the first reflection
/// arrives 30 ms after the dry onset.
#[derive(Debug)]
pub struct PreDelay<'a> {
    line: DelayLine<'a>,
    delay: usize,
}

impl<'a> PreDelay<'a> {
    /// Binds the pre-delay to the first [`PRE_DELAY_CAPACITY`] samples of
    /// `storage`, clearing them.
    pub fn new(storage: &'a mut [f32]) -> Result<Self, InitError> {
        let provided = storage.len();
        let store = storage
            .get_mut(..PRE_DELAY_CAPACITY)
            .ok_or(InitError::InsufficientStorage {
                stage: StorageStage::PreDelay,
                required: PRE_DELAY_CAPACITY,
                provided,
            })?;
        let line = DelayLine::new(store)?;
        let delay = line.tap(PRE_DELAY_SAMPLES)?;
        Ok(Self { line, delay })
    }

    /// Pushes one sample and returns the one from [`PRE_DELAY_SAMPLES`] ago.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        self.line.read_write(input, self.delay)
    }

    /// Delay in samples.
    pub fn delay(&self) -> usize {
        self.delay
    }

    /// Silences the line.
    pub fn clear(&mut self) {
        self.line.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impulse_arrives_after_thirty_ms() {
        let mut storage = vec![0.0f32; PRE_DELAY_CAPACITY];
        let mut pre = PreDelay::new(&mut storage).unwrap();
        assert_eq!(pre.delay(), 1440);

        assert_eq!(pre.process(1.0), 0.0);
        for _ in 1..1440 {
            assert_eq!(pre.process(0.0), 0.0);
        }
        assert_eq!(pre.process(0.0), 1.0);
        assert_eq!(pre.process(0.0), 0.0);
    }

    #[test]
    fn rejects_short_storage() {
        let mut storage = vec![0.0f32; 1024];
        let err = PreDelay::new(&mut storage).unwrap_err();
        assert_eq!(
            err,
            InitError::InsufficientStorage {
                stage: StorageStage::PreDelay,
                required: 2048,
                provided: 1024,
            }
        );
    }

    #[test]
    fn clears_dirty_storage() {
        let mut storage = vec![0.9f32; PRE_DELAY_CAPACITY];
        let mut pre = PreDelay::new(&mut storage).unwrap();
        for _ in 0..3000 {
            assert_eq!(pre.process(0.0), 0.0);
        }
    }
}
