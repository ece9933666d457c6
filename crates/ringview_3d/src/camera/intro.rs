//! Intro sequencer
//!
//! Flies the camera from its opening pose to the overview pose over a fixed
//! duration. The flight runs once per scene; a finished sequencer keeps
//! reporting its final frame.

use super::Pose;
use ringview_animation::{Easing, Tween};
use ringview_core::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Horizontal spiral layered on top of the straight flight.
///
/// The offset turns through `turns · π` radians while its radius shrinks
/// from `amplitude` to zero, so the flight still lands on the end pose.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Swirl {
    pub amplitude: f32,
    pub turns: f32,
}

impl Swirl {
    pub const NONE: Swirl = Swirl {
        amplitude: 0.0,
        turns: 1.0,
    };

    fn offset(&self, eased: f32) -> Vec3 {
        if self.amplitude == 0.0 {
            return Vec3::ZERO;
        }
        let angle = eased * PI * self.turns;
        let radius = self.amplitude * (1.0 - eased);
        Vec3::new(angle.sin() * radius, 0.0, angle.cos() * radius)
    }
}

impl Default for Swirl {
    fn default() -> Self {
        Self::NONE
    }
}

/// One step of the intro flight
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntroFrame {
    /// Linear progress in `[0, 1]`
    pub progress: f32,
    /// Progress after easing
    pub eased: f32,
    /// Pose the camera takes this frame
    pub pose: Pose,
    /// True on and after the frame progress reaches 1
    pub finished: bool,
}

/// Time-bounded interpolation from a starting pose to the overview pose
#[derive(Clone, Debug)]
pub struct IntroSequencer {
    from: Pose,
    to: Pose,
    tween: Tween,
    swirl: Swirl,
}

impl IntroSequencer {
    /// Begin the flight from `now` toward `end_position`, looking at
    /// `end_look_at` on arrival
    pub fn start(now: Pose, end_position: Vec3, end_look_at: Vec3, duration_secs: f32) -> Self {
        tracing::debug!(duration_secs, "intro started");
        Self {
            from: now,
            to: Pose::new(end_position, end_look_at),
            tween: Tween::new(duration_secs, Easing::CubicOut),
            swirl: Swirl::NONE,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.tween = Tween::new(self.tween.duration(), easing);
        self
    }

    pub fn with_swirl(mut self, swirl: Swirl) -> Self {
        self.swirl = swirl;
        self
    }

    /// Integrate `dt` seconds and compute the pose for this frame
    pub fn advance(&mut self, dt: f32) -> IntroFrame {
        let was_finished = self.tween.is_finished();
        self.tween.advance(dt);
        if self.tween.is_finished() && !was_finished {
            tracing::debug!("intro finished");
        }
        self.frame()
    }

    /// Frame for the current progress without advancing time
    pub fn frame(&self) -> IntroFrame {
        let progress = self.tween.progress();
        let finished = self.tween.is_finished();
        let eased = self.tween.eased();

        // Exact end pose on completion so later transitions start from it
        let pose = if finished {
            self.to
        } else {
            let base = self.from.lerp(&self.to, eased);
            Pose::new(base.position + self.swirl.offset(eased), base.look_at)
        };

        IntroFrame {
            progress,
            eased,
            pose,
            finished,
        }
    }

    pub fn progress(&self) -> f32 {
        self.tween.progress()
    }

    pub fn is_finished(&self) -> bool {
        self.tween.is_finished()
    }

    /// Pose the flight ends on
    pub fn end_pose(&self) -> Pose {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequencer() -> IntroSequencer {
        IntroSequencer::start(
            Pose::new(Vec3::new(0.0, 15.0, 0.0), Vec3::new(0.0, 20.0, 0.0)),
            Vec3::new(8.0, 7.0, 10.0),
            Vec3::ZERO,
            3.0,
        )
    }

    #[test]
    fn test_first_frame_near_start() {
        let mut intro = sequencer();
        let frame = intro.advance(0.0);
        assert_eq!(frame.progress, 0.0);
        assert_eq!(frame.pose.position, Vec3::new(0.0, 15.0, 0.0));
        assert_eq!(frame.pose.look_at, Vec3::new(0.0, 20.0, 0.0));
        assert!(!frame.finished);
    }

    #[test]
    fn test_halfway_uses_cubic_ease_out() {
        let mut intro = sequencer();
        let frame = intro.advance(1.5);
        assert!((frame.progress - 0.5).abs() < 1e-6);
        assert!((frame.eased - 0.875).abs() < 1e-6);
        // x: 0 -> 8
        assert!((frame.pose.position.x - 7.0).abs() < 1e-4);
        // look-at y: 20 -> 0
        assert!((frame.pose.look_at.y - 2.5).abs() < 1e-4);
    }

    #[test]
    fn test_sixty_fps_lands_exactly_on_end_pose() {
        let mut intro = sequencer();
        let mut last = intro.frame();
        for _ in 0..180 {
            last = intro.advance(1.0 / 60.0);
        }
        assert!(last.finished);
        assert_eq!(last.progress, 1.0);
        assert_eq!(last.pose.position, Vec3::new(8.0, 7.0, 10.0));
        assert_eq!(last.pose.look_at, Vec3::ZERO);
    }

    #[test]
    fn test_finished_sequencer_does_not_restart() {
        let mut intro = sequencer();
        intro.advance(10.0);
        let frame = intro.advance(1.0);
        assert!(frame.finished);
        assert_eq!(frame.pose, intro.end_pose());
    }

    #[test]
    fn test_swirl_offsets_midflight_and_vanishes_at_end() {
        let swirl = Swirl {
            amplitude: 3.0,
            turns: 1.0,
        };
        let mut plain = sequencer();
        let mut swirled = sequencer().with_swirl(swirl);

        let a = plain.advance(0.5);
        let b = swirled.advance(0.5);
        assert!(a.pose.position.distance(b.pose.position) > 0.1);
        assert_eq!(a.pose.look_at, b.pose.look_at);

        let end = swirled.advance(5.0);
        assert_eq!(end.pose.position, Vec3::new(8.0, 7.0, 10.0));
    }

    #[test]
    fn test_swirl_radius_is_amplitude_at_start() {
        let swirl = Swirl {
            amplitude: 3.0,
            turns: 1.0,
        };
        let offset = swirl.offset(0.0);
        assert!((offset.length() - 3.0).abs() < 1e-6);
        assert_eq!(swirl.offset(1.0).length(), 0.0);
    }
}
