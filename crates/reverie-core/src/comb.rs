//! Feedback comb filter for reverb algorithms.
//!
//! A delay line whose output is fed back through a one-pole lowpass and a
//! feedback gain. Several of these in parallel, with unrelated lengths, give a
//! reverb its echo density and its decay time.
//!
//! ```text
//! input ─→ (+) ─→ [delay line] ─┬─→ output
//!            ↑                  │
//!            └── g × [OnePole] ←┘
//! ```

use crate::{DelayError, DelayLine, OnePole, flush_denormal};

/// Largest feedback gain a comb accepts.
///
/// The damping filter has unity DC gain, so the loop gain never exceeds the
/// feedback gain; keeping that strictly below one bounds the decay.
pub const MAX_FEEDBACK: f32 = 0.999;

/// Comb filter with feedback and in-loop damping.
///
/// The output is the delayed signal before it is mixed back into the line,
/// so the first echo of an impulse appears exactly `delay` samples later.
///
/// # Example
///
/// ```rust
/// use reverie_core::{CombFilter, DelayLine, OnePole, one_pole::lowpass_coefficients};
///
/// let mut storage = [0.0f32; 128];
/// let line = DelayLine::new(&mut storage).unwrap();
/// let mut comb = CombFilter::new(line, 100, OnePole::new(lowpass_coefficients(8000.0, 48000.0))).unwrap();
/// comb.set_feedback(0.8);
///
/// assert_eq!(comb.process(1.0), 0.0);
/// ```
#[derive(Debug)]
pub struct CombFilter<'a> {
    line: DelayLine<'a>,
    delay: usize,
    feedback: f32,
    damping: OnePole,
}

impl<'a> CombFilter<'a> {
    /// Creates a comb reading `delay` samples behind the cursor.
    ///
    /// Feedback starts at zero; the owner schedules it.
    ///
    /// # Errors
    ///
    /// [`DelayError::OffsetOutOfRange`] if `delay` does not fit the line.
    pub fn new(line: DelayLine<'a>, delay: usize, damping: OnePole) -> Result<Self, DelayError> {
        let delay = line.tap(delay)?;
        Ok(Self {
            line,
            delay,
            feedback: 0.0,
            damping,
        })
    }

    /// Sets the feedback gain, clamped to `[0, MAX_FEEDBACK]`.
    #[inline]
    pub fn set_feedback(&mut self, feedback: f32) {
        self.feedback = feedback.clamp(0.0, MAX_FEEDBACK);
    }

    /// Returns the current feedback gain.
    #[inline]
    pub fn feedback(&self) -> f32 {
        self.feedback
    }

    /// Returns the fixed delay in samples.
    pub fn delay(&self) -> usize {
        self.delay
    }

    /// Processes one sample, returning the delayed (pre-feedback) value.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let output = self.line.read_behind(self.delay);
        let damped = self.damping.process(output);
        self.line.write(flush_denormal(input + damped * self.feedback));
        output
    }

    /// Clears the delay line and the damping state.
    pub fn clear(&mut self) {
        self.line.clear();
        self.damping.reset();
    }
}
