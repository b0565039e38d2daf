//! Host-supplied sample storage.
//!
//! The engine never allocates. At initialization it asks a
//! [`StorageProvider`] for three sample stores, in this order:
//!
//! 1. [`PRE_DELAY_STORAGE`] samples for the pre-delay line
//! 2. [`COMB_STORAGE`] samples, split evenly across the comb lines
//! 3. [`ALLPASS_STORAGE`] samples, split across the allpass stages
//!
//! and borrows what it receives for its whole lifetime. A provider returning
//! `None` or a short slice aborts initialization with the failing
//! [`StorageStage`] named in the error.
//!
//! [`SliceArena`] serves all three requests from one contiguous buffer:
//!
//! ```rust
//! use reverie_engine::storage::{REQUIRED_STORAGE, SliceArena, StorageProvider};
//!
//! let mut buffer = vec![0.0f32; REQUIRED_STORAGE];
//! let mut arena = SliceArena::new(&mut buffer);
//! let first = arena.allocate(2048).unwrap();
//! assert_eq!(first.len(), 2048);
//! assert_eq!(arena.remaining(), REQUIRED_STORAGE - 2048);
//! ```

use core::fmt;

use crate::tuning::{ALLPASS_CAPACITIES, COMB_CAPACITY, COMB_COUNT, PRE_DELAY_CAPACITY};

/// Samples requested for the pre-delay line.
pub const PRE_DELAY_STORAGE: usize = PRE_DELAY_CAPACITY;

/// Samples requested for the comb bank.
pub const COMB_STORAGE: usize = COMB_CAPACITY * COMB_COUNT;

/// Samples requested for the allpass chain.
pub const ALLPASS_STORAGE: usize = {
    let mut total = 0;
    let mut i = 0;
    while i < ALLPASS_CAPACITIES.len() {
        total += ALLPASS_CAPACITIES[i];
        i += 1;
    }
    total
};

/// Total samples an engine borrows.
pub const REQUIRED_STORAGE: usize = PRE_DELAY_STORAGE + COMB_STORAGE + ALLPASS_STORAGE;

/// Hands out sample stores that outlive the engine borrowing them.
///
/// Models the host's allocation hook. Implementations may return any slice of
/// at least `len` samples; the engine uses the first `len` and never frees.
pub trait StorageProvider<'a> {
    /// Returns a store of `len` samples, or `None` when the host has none.
    fn allocate(&mut self, len: usize) -> Option<&'a mut [f32]>;
}

/// Bump allocator over one contiguous host buffer.
#[derive(Debug)]
pub struct SliceArena<'a> {
    rest: &'a mut [f32],
}

impl<'a> SliceArena<'a> {
    /// Wraps `buffer`; requests are carved from its front.
    pub fn new(buffer: &'a mut [f32]) -> Self {
        Self { rest: buffer }
    }

    /// Samples not yet handed out.
    pub fn remaining(&self) -> usize {
        self.rest.len()
    }
}

impl<'a> StorageProvider<'a> for SliceArena<'a> {
    fn allocate(&mut self, len: usize) -> Option<&'a mut [f32]> {
        if len > self.rest.len() {
            return None;
        }
        let (head, tail) = core::mem::take(&mut self.rest).split_at_mut(len);
        self.rest = tail;
        Some(head)
    }
}

/// Stage a storage request belongs to, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageStage {
    /// Pre-delay line.
    PreDelay,
    /// Comb bank lines.
    Comb,
    /// Allpass chain lines.
    Allpass,
}

impl StorageStage {
    /// Samples the engine requests for this stage.
    pub const fn required(self) -> usize {
        match self {
            StorageStage::PreDelay => PRE_DELAY_STORAGE,
            StorageStage::Comb => COMB_STORAGE,
            StorageStage::Allpass => ALLPASS_STORAGE,
        }
    }
}

impl fmt::Display for StorageStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StorageStage::PreDelay => "pre-delay",
            StorageStage::Comb => "comb bank",
            StorageStage::Allpass => "allpass chain",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals() {
        assert_eq!(PRE_DELAY_STORAGE, 2048);
        assert_eq!(COMB_STORAGE, 16384);
        assert_eq!(ALLPASS_STORAGE, 1440);
        assert_eq!(REQUIRED_STORAGE, 19872);
    }

    #[test]
    fn arena_carves_in_order() {
        let mut buffer = [0.0f32; 10];
        buffer[4] = 7.0;
        let mut arena = SliceArena::new(&mut buffer);

        let a = arena.allocate(4).unwrap();
        let b = arena.allocate(6).unwrap();
        assert_eq!(a.len(), 4);
        assert_eq!(b[0], 7.0);
        assert_eq!(arena.remaining(), 0);
    }

    #[test]
    fn arena_refuses_oversized_request() {
        let mut buffer = [0.0f32; 8];
        let mut arena = SliceArena::new(&mut buffer);

        assert!(arena.allocate(9).is_none());
        assert_eq!(arena.remaining(), 8, "failed request must not consume");
        assert!(arena.allocate(8).is_some());
        assert!(arena.allocate(1).is_none());
    }

    #[test]
    fn zero_length_request() {
        let mut buffer = [0.0f32; 2];
        let mut arena = SliceArena::new(&mut buffer);
        assert_eq!(arena.allocate(0).map(|s| s.len()), Some(0));
        assert_eq!(arena.remaining(), 2);
    }

    #[test]
    fn stage_display() {
        assert_eq!(StorageStage::Comb.to_string(), "comb bank");
        assert_eq!(StorageStage::Allpass.required(), 1440);
    }
}
