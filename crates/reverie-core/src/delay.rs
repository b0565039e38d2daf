//! Delay line over host-owned storage.
//!
//! A fixed-capacity circular buffer with a write cursor and read-behind
//! addressing. The sample store is borrowed, never allocated, so the same type
//! works on a desktop heap or a slab of external SDRAM handed in by a host.
//!
//! # Addressing
//!
//! Capacity must be a power of two. The cursor wraps with a bit mask instead of
//! a modulo, which keeps the per-sample cost to one add and one AND:
//!
//! ```text
//! write:  buf[pos] = x;  pos = (pos + 1) & mask
//! read:   buf[(pos - offset) & mask]      offset ∈ [1, capacity]
//! ```
//!
//! `read_behind(1)` is the most recent write; `read_behind(capacity)` is the
//! oldest sample still held. Offsets are validated once, at construction of
//! the owning stage ([`DelayLine::tap`]), never in the hot loop.
//!
//! # Use Cases
//!
//! | Stage | Typical offset | Capacity |
//! |-------|----------------|----------|
//! | Pre-delay | 30 ms | 2048 |
//! | Reverb comb | 10-25 ms | 2048 |
//! | Diffusion allpass | 0.5-20 ms | 32-1024 |

/// Errors raised while binding a delay line to its storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DelayError {
    /// Storage length is zero or not a power of two.
    #[error("delay storage length {len} is not a non-zero power of two")]
    NonPowerOfTwo {
        /// Length of the rejected slice.
        len: usize,
    },

    /// Requested read offset cannot be served by the line.
    #[error("delay offset {offset} outside 1..={capacity}")]
    OffsetOutOfRange {
        /// Requested read-behind offset.
        offset: usize,
        /// Capacity of the line.
        capacity: usize,
    },
}

/// Circular delay line borrowing its sample store.
///
/// # Memory
///
/// The buffer is lent by the caller for `'a` and cleared on construction.
/// No allocations occur, ever.
///
/// # Example
///
/// ```rust
/// use reverie_core::DelayLine;
///
/// let mut storage = [0.0f32; 8];
/// let mut delay = DelayLine::new(&mut storage).unwrap();
///
/// delay.write(1.0);
/// delay.write(2.0);
/// assert_eq!(delay.read_behind(1), 2.0);
/// assert_eq!(delay.read_behind(2), 1.0);
/// ```
#[derive(Debug)]
pub struct DelayLine<'a> {
    buffer: &'a mut [f32],
    mask: usize,
    pos: usize,
}

impl<'a> DelayLine<'a> {
    /// Binds a delay line to `storage` and clears it to silence.
    ///
    /// # Errors
    ///
    /// [`DelayError::NonPowerOfTwo`] if the slice length is zero or not a
    /// power of two.
    pub fn new(storage: &'a mut [f32]) -> Result<Self, DelayError> {
        let len = storage.len();
        if !len.is_power_of_two() {
            return Err(DelayError::NonPowerOfTwo { len });
        }
        storage.fill(0.0);
        Ok(Self {
            buffer: storage,
            mask: len - 1,
            pos: 0,
        })
    }

    /// Validates a fixed read offset against this line's capacity.
    ///
    /// Stages call this once when they are built so the render loop can
    /// index without checks.
    pub fn tap(&self, offset: usize) -> Result<usize, DelayError> {
        if offset == 0 || offset > self.capacity() {
            return Err(DelayError::OffsetOutOfRange {
                offset,
                capacity: self.capacity(),
            });
        }
        Ok(offset)
    }

    /// Stores one sample at the cursor and advances it.
    #[inline]
    pub fn write(&mut self, sample: f32) {
        self.buffer[self.pos] = sample;
        self.pos = (self.pos + 1) & self.mask;
    }

    /// Returns the sample written `offset` writes ago (1 = most recent).
    #[inline]
    pub fn read_behind(&self, offset: usize) -> f32 {
        debug_assert!(offset >= 1 && offset <= self.buffer.len());
        self.buffer[self.pos.wrapping_sub(offset) & self.mask]
    }

    /// Reads at `offset`, then writes `sample`: a plain `offset`-sample delay.
    #[inline]
    pub fn read_write(&mut self, sample: f32, offset: usize) -> f32 {
        let output = self.read_behind(offset);
        self.write(sample);
        output
    }

    /// Clears the line to silence and rewinds the cursor.
    pub fn clear(&mut self) {
        self.buffer.fill(0.0);
        self.pos = 0;
    }

    /// Returns the capacity in samples.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }
}
