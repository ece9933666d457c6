//! Camera animator
//!
//! Owns the live camera pose. Every write goes through this type and is
//! attributed to a [`Driver`]; a second driver writing within the same tick
//! is reported as [`SceneError::DriverConflict`].

use super::{Driver, Pose};
use crate::error::{Result, SceneError};
use crate::gate::NavigationPermit;
use ringview_animation::SmoothingPolicy;

/// Result of one smoothing step toward the target
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Approach {
    /// No target is set; the pose was left untouched
    Idle,
    /// Moved toward the target and is still `distance` away
    Moving { distance: f32 },
    /// Within the arrival epsilon of the target
    Arrived { distance: f32 },
}

impl Approach {
    pub fn is_arrived(&self) -> bool {
        matches!(self, Approach::Arrived { .. })
    }

    /// Remaining distance, `None` when idle
    pub fn distance(&self) -> Option<f32> {
        match *self {
            Approach::Idle => None,
            Approach::Moving { distance } | Approach::Arrived { distance } => Some(distance),
        }
    }
}

/// Smoothed camera motion toward an optional target pose
#[derive(Clone, Debug)]
pub struct CameraAnimator {
    pose: Pose,
    target: Option<Pose>,
    smoothing: SmoothingPolicy,
    writer: Option<Driver>,
}

impl CameraAnimator {
    pub fn new(initial: Pose, smoothing: SmoothingPolicy) -> Self {
        Self {
            pose: initial,
            target: None,
            smoothing,
            writer: None,
        }
    }

    /// Current camera pose
    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn target(&self) -> Option<Pose> {
        self.target
    }

    pub fn smoothing(&self) -> SmoothingPolicy {
        self.smoothing
    }

    /// Driver that wrote the pose during the current tick, if any
    pub fn writer(&self) -> Option<Driver> {
        self.writer
    }

    /// Start a new tick; any driver may claim the pose again
    pub fn begin_tick(&mut self) {
        self.writer = None;
    }

    /// Set or replace the pose the camera approaches on [`tick`](Self::tick)
    pub fn set_target(&mut self, target: Pose) {
        self.target = Some(target);
    }

    pub fn clear_target(&mut self) {
        self.target = None;
    }

    /// Move one smoothing step toward the target.
    ///
    /// Writes on behalf of [`Driver::Scripted`]. Without a target the pose is
    /// untouched and [`Approach::Idle`] is returned.
    pub fn tick(&mut self, dt: f32, epsilon: f32) -> Result<Approach> {
        let Some(target) = self.target else {
            return Ok(Approach::Idle);
        };
        self.claim(Driver::Scripted)?;

        self.pose = self.smoothing.step(&self.pose, &target, dt);
        let distance = self.pose.distance_to(&target);
        if distance < epsilon {
            Ok(Approach::Arrived { distance })
        } else {
            Ok(Approach::Moving { distance })
        }
    }

    /// Replace the pose outright
    pub fn snap_to(&mut self, driver: Driver, pose: Pose) -> Result<()> {
        self.claim(driver)?;
        self.pose = pose;
        Ok(())
    }

    /// Write a pose produced by user navigation.
    ///
    /// Requires a permit, which only an open navigation gate hands out.
    pub fn apply_navigation(&mut self, _permit: NavigationPermit, pose: Pose) -> Result<()> {
        self.claim(Driver::Navigation)?;
        self.pose = pose;
        Ok(())
    }

    fn claim(&mut self, driver: Driver) -> Result<()> {
        match self.writer {
            Some(holder) if holder != driver => Err(SceneError::DriverConflict {
                holder,
                intruder: driver,
            }),
            _ => {
                self.writer = Some(driver);
                Ok(())
            }
        }
    }
}
