//! Wet/dry crossfade and output soft clipping.
//!
//! ```text
//! wet = (mix + 1) / 2        mix ∈ [-1, 1]
//! dry = 1 - wet
//! y   = softclip(dry·x + wet·v)    per channel, v = mono network output
//! ```

use reverie_core::cubic_soft_clip;

use crate::tuning::{SOFT_CLIP_KNEE, SOFT_CLIP_POST, SOFT_CLIP_PRE};

/// Scaled cubic soft limiter: `post · cubic_soft_clip(pre · x, knee)`.
///
/// With the engine constants (pre 1/4, post 4, knee 1/3) the curve is
/// `x − x³/48` up to `|x| = 4` and flat at `±8/3` beyond. At full scale the
/// deviation is about 2%.
///
/// ```rust
/// use reverie_engine::SoftClipper;
///
/// let clip = SoftClipper::default();
/// assert!((clip.process(0.1) - 0.1).abs() < 1e-4);
/// assert!(clip.process(1000.0) < 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoftClipper {
    pre: f32,
    post: f32,
    knee: f32,
}

impl SoftClipper {
    /// Creates a clipper; `knee` is expected in `[0, 1/3]`.
    pub const fn new(pre: f32, post: f32, knee: f32) -> Self {
        Self { pre, post, knee }
    }

    /// Clips one sample.
    #[inline]
    pub fn process(&self, x: f32) -> f32 {
        self.post * cubic_soft_clip(self.pre * x, self.knee)
    }

    /// Largest magnitude the clipper can output: `post · (1 − knee)`.
    pub fn ceiling(&self) -> f32 {
        self.post * (1.0 - self.knee)
    }
}

impl Default for SoftClipper {
    fn default() -> Self {
        Self::new(SOFT_CLIP_PRE, SOFT_CLIP_POST, SOFT_CLIP_KNEE)
    }
}

/// Crossfades dry input with the wet network output, then clips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputStage {
    dry: f32,
    wet: f32,
    clipper: SoftClipper,
}

impl OutputStage {
    /// Creates a stage at `mix` (clamped to `[-1, 1]`).
    pub fn new(mix: f32) -> Self {
        let mut stage = Self {
            dry: 0.0,
            wet: 0.0,
            clipper: SoftClipper::default(),
        };
        stage.set_mix(mix);
        stage
    }

    /// Recomputes the weights for `mix`: −1 is fully dry, +1 fully wet.
    #[inline]
    pub fn set_mix(&mut self, mix: f32) {
        self.wet = (mix.clamp(-1.0, 1.0) + 1.0) * 0.5;
        self.dry = 1.0 - self.wet;
    }

    /// Dry weight.
    pub fn dry(&self) -> f32 {
        self.dry
    }

    /// Wet weight.
    pub fn wet(&self) -> f32 {
        self.wet
    }

    /// Combines one stereo frame with the shared wet sample.
    #[inline]
    pub fn process(&self, left: f32, right: f32, wet: f32) -> (f32, f32) {
        let w = self.wet * wet;
        (
            self.clipper.process(self.dry * left + w),
            self.clipper.process(self.dry * right + w),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipper_is_transparent_at_small_levels() {
        let clip = SoftClipper::default();
        for &x in &[0.001f32, 0.05, 0.25, -0.5] {
            let y = clip.process(x);
            // Relative error x²/48
            assert!(((y - x) / x).abs() <= x * x / 48.0 + 1e-6, "clip({x}) = {y}");
        }
    }

    #[test]
    fn clipper_is_bounded() {
        let clip = SoftClipper::default();
        assert!((clip.ceiling() - 8.0 / 3.0).abs() < 1e-6);
        for &x in &[4.0f32, 10.0, 1e6, f32::MAX, -1e9] {
            let y = clip.process(x);
            assert!(y.abs() <= clip.ceiling() + 1e-6);
            assert!(y.abs() < SOFT_CLIP_POST);
        }
    }

    #[test]
    fn mix_extremes_are_exact() {
        let dry_only = OutputStage::new(-1.0);
        assert_eq!(dry_only.wet(), 0.0);
        assert_eq!(dry_only.dry(), 1.0);
        let clip = SoftClipper::default();
        assert_eq!(dry_only.process(0.3, -0.2, 0.9), (clip.process(0.3), clip.process(-0.2)));

        let wet_only = OutputStage::new(1.0);
        assert_eq!(wet_only.dry(), 0.0);
        assert_eq!(wet_only.process(0.3, -0.2, 0.9), (clip.process(0.9), clip.process(0.9)));
    }

    #[test]
    fn centre_mix_is_equal_blend() {
        let stage = OutputStage::new(0.0);
        assert_eq!(stage.wet(), 0.5);
        assert_eq!(stage.dry(), 0.5);
    }

    #[test]
    fn mix_is_clamped() {
        let stage = OutputStage::new(7.0);
        assert_eq!(stage.wet(), 1.0);
    }
}
