//! Easing functions
//!
//! Every curve maps `[0, 1]` onto `[0, 1]` with `f(0) == 0` and `f(1) == 1`
//! exactly, so an animation driven to completion lands on its end value
//! without residual error.

use serde::{Deserialize, Serialize};

/// Easing curve variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// No easing
    Linear,
    /// Quadratic ease-in (slow start)
    QuadIn,
    /// Quadratic ease-out (slow end)
    QuadOut,
    /// Cubic ease-out, `1 - (1 - t)^3`
    #[default]
    CubicOut,
    /// Smoothstep, `3t^2 - 2t^3`
    SmoothStep,
}

impl Easing {
    /// Evaluate the curve at `t`; input is clamped to `[0, 1]`
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Easing::CubicOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt * omt
            }
            Easing::SmoothStep => t * t * (3.0 - 2.0 * t),
        }
    }
}
