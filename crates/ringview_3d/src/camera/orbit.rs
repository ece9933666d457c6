//! Orbit navigation
//!
//! Orbits around an anchor point in response to pointer drags and scroll.
//! The controller never writes the camera itself; it proposes a pose that
//! the coordinator applies through an open navigation gate.

use super::{NavigationInput, Pose};
use ringview_core::Vec3;
use std::f32::consts::PI;

/// Below this difference the smoothed state snaps onto its target
const SETTLE_EPSILON: f32 = 1e-4;

/// Steepest elevation the orbit reaches above or below the horizon (radians)
pub const MAX_ELEVATION: f32 = PI * 0.45;

/// Orbit camera controller
///
/// Rotates around an anchor with adjustable distance. Supports rotation,
/// zoom and, when enabled, panning of the anchor.
///
/// # Example
///
/// ```
/// use ringview_3d::camera::{NavigationInput, OrbitController};
/// use ringview_core::Vec3;
///
/// let mut orbit = OrbitController::new(Vec3::ZERO, 10.0);
/// orbit.min_distance = 5.0;
/// orbit.max_distance = 20.0;
///
/// // Nothing to do without input
/// assert!(orbit.update(1.0 / 60.0, &NavigationInput::new()).is_none());
///
/// let pose = orbit.update(1.0 / 60.0, &NavigationInput::drag(40.0, 0.0)).unwrap();
/// assert_eq!(pose.look_at, Vec3::ZERO);
/// ```
#[derive(Clone, Debug)]
pub struct OrbitController {
    /// Point to orbit around
    pub anchor: Vec3,
    /// Distance from anchor
    pub distance: f32,
    /// Horizontal angle (radians, 0 = camera on +Z)
    pub azimuth: f32,
    /// Vertical angle (radians, 0 = horizontal, positive = camera above)
    pub elevation: f32,

    /// Minimum distance from anchor
    pub min_distance: f32,
    /// Maximum distance from anchor
    pub max_distance: f32,
    /// Minimum elevation angle (radians)
    pub min_elevation: f32,
    /// Maximum elevation angle (radians)
    pub max_elevation: f32,

    /// Rotation sensitivity (radians per pixel)
    pub rotation_speed: f32,
    /// Zoom sensitivity (fraction of distance per scroll unit)
    pub zoom_speed: f32,
    /// Pan sensitivity (world units per pixel per distance unit)
    pub pan_speed: f32,

    /// Smooth damping factor (0 = instant, 1 = no movement)
    pub damping: f32,

    /// Enable rotation
    pub rotate_enabled: bool,
    /// Enable zooming
    pub zoom_enabled: bool,
    /// Enable panning
    pub pan_enabled: bool,

    // Smooth interpolation state
    target_azimuth: f32,
    target_elevation: f32,
    target_distance: f32,
    target_anchor: Vec3,
}

impl OrbitController {
    /// Create a new orbit controller
    pub fn new(anchor: Vec3, distance: f32) -> Self {
        Self {
            anchor,
            distance,
            azimuth: 0.0,
            elevation: 0.3,

            min_distance: 0.1,
            max_distance: 1000.0,
            min_elevation: -MAX_ELEVATION,
            max_elevation: MAX_ELEVATION,

            rotation_speed: 0.005,
            zoom_speed: 0.1,
            pan_speed: 0.01,

            damping: 0.1,

            rotate_enabled: true,
            zoom_enabled: true,
            pan_enabled: true,

            target_azimuth: 0.0,
            target_elevation: 0.3,
            target_distance: distance,
            target_anchor: anchor,
        }
    }

    /// Set distance instantly
    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.clamp(self.min_distance, self.max_distance);
        self.target_distance = self.distance;
    }

    /// Set angles instantly (in radians)
    pub fn set_angles(&mut self, azimuth: f32, elevation: f32) {
        self.azimuth = azimuth;
        self.elevation = elevation.clamp(self.min_elevation, self.max_elevation);
        self.target_azimuth = self.azimuth;
        self.target_elevation = self.elevation;
    }

    /// Re-anchor on `anchor` and adopt the spherical coordinates of `pose`.
    ///
    /// Leaves the controller at rest, so the next update without input
    /// proposes nothing.
    pub fn sync_from_pose(&mut self, pose: Pose, anchor: Vec3) {
        self.anchor = anchor;
        self.target_anchor = anchor;

        let offset = pose.position - anchor;
        let distance = offset.length();
        if distance > f32::EPSILON {
            let azimuth = offset.x.atan2(offset.z);
            let elevation = (offset.y / distance).clamp(-1.0, 1.0).asin();
            self.set_angles(azimuth, elevation);
        }
        self.set_distance(distance);
        tracing::trace!(distance = self.distance, azimuth = self.azimuth, elevation = self.elevation, "orbit synced");
    }

    /// Current pose derived from the spherical state
    pub fn pose(&self) -> Pose {
        Pose::new(self.calculate_position(), self.anchor)
    }

    /// True when the smoothed state has reached its targets
    pub fn is_at_rest(&self) -> bool {
        self.azimuth == self.target_azimuth
            && self.elevation == self.target_elevation
            && self.distance == self.target_distance
            && self.anchor == self.target_anchor
    }

    /// Apply `input` and advance smoothing by `dt` seconds.
    ///
    /// Returns the new pose, or `None` when the controller is at rest and
    /// the input carries no motion.
    pub fn update(&mut self, dt: f32, input: &NavigationInput) -> Option<Pose> {
        if !input.has_motion() && self.is_at_rest() {
            return None;
        }

        if self.rotate_enabled && input.rotate_pressed {
            self.target_azimuth -= input.pointer_delta.x * self.rotation_speed;
            self.target_elevation += input.pointer_delta.y * self.rotation_speed;
            self.target_elevation = self
                .target_elevation
                .clamp(self.min_elevation, self.max_elevation);
        }

        if self.pan_enabled && input.pan_pressed {
            let right = Vec3::new(self.azimuth.cos(), 0.0, -self.azimuth.sin());
            let pan_x = input.pointer_delta.x * self.pan_speed * self.distance;
            let pan_y = input.pointer_delta.y * self.pan_speed * self.distance;
            self.target_anchor -= right * pan_x + Vec3::UP * pan_y;
        }

        if self.zoom_enabled && input.scroll_delta != 0.0 {
            self.target_distance -= input.scroll_delta * self.zoom_speed * self.distance;
            self.target_distance = self
                .target_distance
                .clamp(self.min_distance, self.max_distance);
        }

        let t = 1.0 - self.damping.powf(dt * 60.0);
        self.azimuth = settle(self.azimuth, self.target_azimuth, t);
        self.elevation = settle(self.elevation, self.target_elevation, t);
        self.distance = settle(self.distance, self.target_distance, t);
        self.anchor = Vec3::new(
            settle(self.anchor.x, self.target_anchor.x, t),
            settle(self.anchor.y, self.target_anchor.y, t),
            settle(self.anchor.z, self.target_anchor.z, t),
        );

        Some(self.pose())
    }

    fn calculate_position(&self) -> Vec3 {
        let cos_elev = self.elevation.cos();
        let sin_elev = self.elevation.sin();
        let cos_azim = self.azimuth.cos();
        let sin_azim = self.azimuth.sin();

        Vec3::new(
            self.anchor.x + self.distance * cos_elev * sin_azim,
            self.anchor.y + self.distance * sin_elev,
            self.anchor.z + self.distance * cos_elev * cos_azim,
        )
    }
}

fn settle(a: f32, b: f32, t: f32) -> f32 {
    let next = a + (b - a) * t;
    if (b - next).abs() < SETTLE_EPSILON {
        b
    } else {
        next
    }
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 5.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_idle_without_input() {
        let mut orbit = OrbitController::new(Vec3::ZERO, 10.0);
        assert!(orbit.is_at_rest());
        assert!(orbit.update(DT, &NavigationInput::new()).is_none());
    }

    #[test]
    fn test_sync_round_trips_pose() {
        let mut orbit = OrbitController::new(Vec3::ZERO, 10.0);
        orbit.min_distance = 5.0;
        orbit.max_distance = 20.0;
        let pose = Pose::new(Vec3::new(8.0, 7.0, 10.0), Vec3::ZERO);
        orbit.sync_from_pose(pose, Vec3::ZERO);

        let derived = orbit.pose();
        assert!(derived.position.distance(pose.position) < 1e-4);
        assert_eq!(derived.look_at, Vec3::ZERO);
        assert!(orbit.is_at_rest());
        assert!(orbit.update(DT, &NavigationInput::new()).is_none());
    }

    #[test]
    fn test_drag_rotates_around_anchor() {
        let mut orbit = OrbitController::new(Vec3::ZERO, 10.0);
        let before = orbit.pose();
        let after = orbit.update(DT, &NavigationInput::drag(50.0, 0.0)).unwrap();
        assert!(after.position.distance(before.position) > 1e-3);
        assert!((after.position.length() - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_motion_settles_after_release() {
        let mut orbit = OrbitController::new(Vec3::ZERO, 10.0);
        orbit.update(DT, &NavigationInput::drag(50.0, 20.0));
        let mut frames = 0;
        while orbit.update(DT, &NavigationInput::new()).is_some() {
            frames += 1;
            assert!(frames < 1000, "orbit never settled");
        }
        assert!(orbit.is_at_rest());
    }

    #[test]
    fn test_zoom_respects_limits() {
        let mut orbit = OrbitController::new(Vec3::ZERO, 10.0);
        orbit.min_distance = 5.0;
        orbit.max_distance = 20.0;
        for _ in 0..200 {
            orbit.update(DT, &NavigationInput::scroll(5.0));
        }
        assert!(orbit.distance >= 5.0 - 1e-4);
        for _ in 0..200 {
            orbit.update(DT, &NavigationInput::scroll(-5.0));
        }
        assert!(orbit.distance <= 20.0 + 1e-4);
    }

    #[test]
    fn test_pan_disabled_keeps_anchor() {
        let mut orbit = OrbitController::new(Vec3::ZERO, 10.0);
        orbit.pan_enabled = false;
        let input = NavigationInput {
            pointer_delta: ringview_core::Vec2::new(30.0, 30.0),
            pan_pressed: true,
            ..NavigationInput::default()
        };
        orbit.update(DT, &input);
        assert_eq!(orbit.anchor, Vec3::ZERO);
    }

    #[test]
    fn test_elevation_clamped() {
        let mut orbit = OrbitController::new(Vec3::ZERO, 10.0);
        for _ in 0..100 {
            orbit.update(DT, &NavigationInput::drag(0.0, 500.0));
        }
        assert!(orbit.elevation <= orbit.max_elevation + 1e-6);
    }
}
