//! Camera pose and the components that move it
//!
//! - [`CameraAnimator`] - Sole writer of the live camera pose
//! - [`IntroSequencer`] - Time-bounded opening flight
//! - [`OrbitController`] - User navigation around an anchor point
//! - [`NavigationInput`] - Per-frame pointer and scroll deltas

mod animator;
mod input;
mod intro;
mod orbit;

pub use animator::{Approach, CameraAnimator};
pub use input::NavigationInput;
pub use intro::{IntroFrame, IntroSequencer, Swirl};
pub use orbit::{OrbitController, MAX_ELEVATION};

use ringview_animation::Interpolate;
use ringview_core::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Camera position plus the point it faces
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// World position
    pub position: Vec3,
    /// Point the camera looks at
    pub look_at: Vec3,
}

impl Pose {
    pub const fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    /// Distance between the two camera positions; look-at is not considered
    pub fn distance_to(&self, other: &Pose) -> f32 {
        self.position.distance(other.position)
    }

    /// Blend position and look-at independently
    pub fn lerp(&self, other: &Pose, t: f32) -> Pose {
        Pose {
            position: self.position.lerp(other.position, t),
            look_at: self.look_at.lerp(other.look_at, t),
        }
    }
}

impl Interpolate for Pose {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Pose::lerp(self, other, t)
    }

    fn distance(&self, other: &Self) -> f32 {
        self.distance_to(other)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            look_at: Vec3::ZERO,
        }
    }
}

/// Component allowed to write the camera pose in a given tick
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Driver {
    /// Opening flight
    Intro,
    /// Focus and return transitions
    Scripted,
    /// User orbit navigation
    Navigation,
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Driver::Intro => "intro",
            Driver::Scripted => "scripted transition",
            Driver::Navigation => "navigation",
        };
        f.write_str(name)
    }
}
