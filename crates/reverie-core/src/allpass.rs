//! Allpass filter for reverb diffusion.
//!
//! A Schroeder allpass smears each echo it receives into a train of
//! progressively weaker copies without changing the magnitude spectrum.
//! A few of these in series turn the comb bank's discrete echoes into a
//! smooth tail.
//!
//! ```text
//! delayed = line[n - d]
//! output  = -g * input + delayed
//! line[n] = input + g * output
//! ```
//!
//! Transfer function: `H(z) = (z^-d - g) / (1 - g z^-d)`, so `|H| = 1`.

use crate::{DelayError, DelayLine, flush_denormal};

/// Schroeder allpass with a fixed delay and gain.
///
/// # Example
///
/// ```rust
/// use reverie_core::{AllpassFilter, DelayLine};
///
/// let mut storage = [0.0f32; 256];
/// let mut allpass = AllpassFilter::new(DelayLine::new(&mut storage).unwrap(), 241, 0.7).unwrap();
///
/// assert!((allpass.process(1.0) + 0.7).abs() < 1e-6);
/// ```
#[derive(Debug)]
pub struct AllpassFilter<'a> {
    line: DelayLine<'a>,
    delay: usize,
    gain: f32,
}

impl<'a> AllpassFilter<'a> {
    /// Creates an allpass reading `delay` samples behind the cursor.
    ///
    /// `gain` is clamped to ±0.99; the structure is stable for `|g| < 1`.
    ///
    /// # Errors
    ///
    /// [`DelayError::OffsetOutOfRange`] if `delay` does not fit the line.
    pub fn new(line: DelayLine<'a>, delay: usize, gain: f32) -> Result<Self, DelayError> {
        let delay = line.tap(delay)?;
        Ok(Self {
            line,
            delay,
            gain: gain.clamp(-0.99, 0.99),
        })
    }

    /// Returns the fixed gain.
    #[inline]
    pub fn gain(&self) -> f32 {
        self.gain
    }

    /// Returns the fixed delay in samples.
    pub fn delay(&self) -> usize {
        self.delay
    }

    /// Processes one sample.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let delayed = self.line.read_behind(self.delay);
        let output = -self.gain * input + delayed;
        self.line.write(flush_denormal(input + self.gain * output));
        output
    }

    /// Clears the delay line.
    pub fn clear(&mut self) {
        self.line.clear();
    }
}
