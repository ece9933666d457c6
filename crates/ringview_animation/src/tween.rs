//! Duration-bounded progress
//!
//! A [`Tween`] integrates frame deltas into a normalized progress value in
//! `[0, 1]`. Progress never decreases and reaches exactly `1.0` once the
//! accumulated time covers the duration.

use crate::easing::Easing;

/// Remaining fraction below which a tween counts as complete. Absorbs the
/// rounding of frame deltas such as `1.0 / 60.0` summed over many frames.
const COMPLETION_EPSILON: f64 = 1e-6;

/// One-shot, time-bounded progress with an easing curve
#[derive(Clone, Debug)]
pub struct Tween {
    duration: f64,
    elapsed: f64,
    progress: f32,
    easing: Easing,
}

impl Tween {
    /// Create a tween lasting `duration_secs`. Non-positive durations complete
    /// on the first advance.
    pub fn new(duration_secs: f32, easing: Easing) -> Self {
        Self {
            duration: f64::from(duration_secs.max(0.0)),
            elapsed: 0.0,
            progress: 0.0,
            easing,
        }
    }

    /// Integrate `dt` seconds and return the new linear progress.
    ///
    /// Negative deltas are treated as zero; a zero delta leaves progress
    /// unchanged.
    pub fn advance(&mut self, dt: f32) -> f32 {
        if self.is_finished() {
            return self.progress;
        }
        self.elapsed += f64::from(dt.max(0.0));

        let raw = if self.duration > 0.0 {
            self.elapsed / self.duration
        } else {
            1.0
        };
        let next = if 1.0 - raw < COMPLETION_EPSILON {
            1.0
        } else {
            raw as f32
        };
        self.progress = self.progress.max(next.min(1.0));
        self.progress
    }

    /// Linear progress in `[0, 1]`
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Progress mapped through the easing curve
    pub fn eased(&self) -> f32 {
        self.easing.apply(self.progress)
    }

    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }

    pub fn duration(&self) -> f32 {
        self.duration as f32
    }
}
