//! Exponential smoothing toward a moving target
//!
//! A smoothing policy decides what fraction of the remaining distance a value
//! covers in one tick. Two policies exist:
//!
//! - [`SmoothingPolicy::FixedFraction`] covers the same fraction every tick no
//!   matter how long the tick was. Convergence therefore speeds up with the
//!   frame rate. This is the behavior scenes were tuned against.
//! - [`SmoothingPolicy::TimeNormalized`] scales the fraction by elapsed time
//!   (`1 - (1 - f)^(dt * hz)`), matching `FixedFraction` exactly at the
//!   reference rate and converging at the same wall-clock speed elsewhere.

use crate::values::Interpolate;
use serde::{Deserialize, Serialize};

/// Per-tick approach rule
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SmoothingPolicy {
    /// Cover `factor` of the remaining distance every tick
    FixedFraction { factor: f32 },
    /// Cover `factor` of the remaining distance per `1 / reference_hz` seconds
    TimeNormalized { factor: f32, reference_hz: f32 },
}

impl SmoothingPolicy {
    /// Ten percent per tick, independent of tick length
    pub const LEGACY: SmoothingPolicy = SmoothingPolicy::FixedFraction { factor: 0.1 };

    /// Fraction of the remaining distance to cover for a tick of `dt` seconds
    pub fn blend_factor(&self, dt: f32) -> f32 {
        match *self {
            SmoothingPolicy::FixedFraction { factor } => factor.clamp(0.0, 1.0),
            SmoothingPolicy::TimeNormalized {
                factor,
                reference_hz,
            } => {
                let keep = (1.0 - factor).clamp(0.0, 1.0);
                1.0 - keep.powf(dt.max(0.0) * reference_hz)
            }
        }
    }

    /// Advance `current` one tick toward `target`
    pub fn step<T: Interpolate>(&self, current: &T, target: &T, dt: f32) -> T {
        current.lerp(target, self.blend_factor(dt))
    }

    /// Reject factors that would never converge or would overshoot
    pub fn validate(&self) -> Result<(), String> {
        let factor = match *self {
            SmoothingPolicy::FixedFraction { factor } => factor,
            SmoothingPolicy::TimeNormalized {
                factor,
                reference_hz,
            } => {
                if !(reference_hz > 0.0) {
                    return Err(format!(
                        "smoothing reference_hz must be positive, got {reference_hz}"
                    ));
                }
                factor
            }
        };
        if factor > 0.0 && factor <= 1.0 {
            Ok(())
        } else {
            Err(format!("smoothing factor must be in (0, 1], got {factor}"))
        }
    }
}

impl Default for SmoothingPolicy {
    fn default() -> Self {
        Self::LEGACY
    }
}
