//! Focus state machine
//!
//! [`AnimationState`] names who owns the camera. Transitions are a pure
//! function of the current state and a [`ControlEvent`]; the
//! [`FocusController`] wraps that function with the per-tick work of driving
//! the camera toward the focus or resting pose.

use crate::camera::{CameraAnimator, Driver, Pose};
use crate::catalog::Ring;
use crate::error::Result;
use ringview_core::Vec3;
use serde::{Deserialize, Serialize};

/// Camera ownership state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "index", rename_all = "kebab-case")]
pub enum AnimationState {
    /// Opening flight in progress
    Introing,
    /// User navigation owns the camera
    Idle,
    /// Flying toward an object
    FocusTransition(usize),
    /// Arrived at an object and tracking it
    FocusLocked(usize),
    /// Flying back to the resting overview pose
    ReturnTransition,
}

/// Inputs to the state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlEvent {
    IntroFinished,
    Focus(usize),
    Back,
    Arrived,
}

impl AnimationState {
    /// Next state for `event`, or `None` when the event does not apply.
    ///
    /// Focus during the intro, back without a focus and arrival without a
    /// transition are all rejected here.
    pub fn on(self, event: ControlEvent) -> Option<AnimationState> {
        use AnimationState::*;
        match (self, event) {
            (Introing, ControlEvent::IntroFinished) => Some(Idle),
            (Introing, _) => None,

            (_, ControlEvent::Focus(index)) => Some(FocusTransition(index)),

            (FocusTransition(_) | FocusLocked(_), ControlEvent::Back) => Some(ReturnTransition),
            (Idle | ReturnTransition, ControlEvent::Back) => None,

            (FocusTransition(index), ControlEvent::Arrived) => Some(FocusLocked(index)),
            (ReturnTransition, ControlEvent::Arrived) => Some(Idle),
            (Idle | FocusLocked(_), ControlEvent::Arrived) => None,

            (_, ControlEvent::IntroFinished) => None,
        }
    }

    pub fn is_intro(self) -> bool {
        matches!(self, AnimationState::Introing)
    }

    pub fn is_idle(self) -> bool {
        matches!(self, AnimationState::Idle)
    }

    /// A focus or return transition owns the camera
    pub fn is_scripted(self) -> bool {
        matches!(
            self,
            AnimationState::FocusTransition(_)
                | AnimationState::FocusLocked(_)
                | AnimationState::ReturnTransition
        )
    }

    /// Object the camera is moving to or tracking
    pub fn focused_index(self) -> Option<usize> {
        match self {
            AnimationState::FocusTransition(index) | AnimationState::FocusLocked(index) => {
                Some(index)
            }
            _ => None,
        }
    }
}

/// What a focus request did
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FocusOutcome {
    /// Started a focus transition from idle or a return
    Accepted,
    /// Switched focus from one object to another
    Retargeted,
    /// Dropped because the intro is still running
    Ignored,
}

/// What a back request did
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackOutcome {
    /// Return transition started
    Returning,
    /// Nothing was focused
    Ignored,
}

/// Camera placement relative to a focused object
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusSettings {
    /// Camera offset from the object
    pub offset: Vec3,
    /// Look-at offset from the object
    pub look_offset: Vec3,
    /// Distance at which a focus transition locks
    pub arrive_epsilon: f32,
    /// Distance at which a return transition completes
    pub return_epsilon: f32,
}

impl Default for FocusSettings {
    fn default() -> Self {
        Self {
            offset: Vec3::new(-2.0, 2.0, 3.0),
            look_offset: Vec3::new(-1.0, 0.5, 0.0),
            arrive_epsilon: 0.1,
            return_epsilon: 0.1,
        }
    }
}

impl FocusSettings {
    /// Pose that frames an object at `object`
    pub fn pose_for(&self, object: Vec3) -> Pose {
        Pose::new(object + self.offset, object + self.look_offset)
    }
}

/// Monotonic progress of one scripted transition, `1 - d/d0`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransitionProgress {
    start_distance: f32,
    value: f32,
}

impl TransitionProgress {
    /// Begin a transition that starts `distance` away from its target
    pub fn restart(&mut self, distance: f32) {
        self.start_distance = distance;
        self.value = 0.0;
    }

    /// Record the remaining distance and return the progress
    pub fn update(&mut self, distance: f32) -> f32 {
        let raw = if self.start_distance > f32::EPSILON {
            1.0 - distance / self.start_distance
        } else {
            1.0
        };
        self.value = self.value.max(raw.clamp(0.0, 1.0));
        self.value
    }

    pub fn complete(&mut self) {
        self.value = 1.0;
    }

    pub fn value(&self) -> f32 {
        self.value
    }
}

/// Drives focus and return transitions through the camera animator
#[derive(Clone, Debug)]
pub struct FocusController {
    state: AnimationState,
    settings: FocusSettings,
    resting: Pose,
    progress: TransitionProgress,
}

impl FocusController {
    /// Controller starting in [`AnimationState::Introing`]; `resting` is the
    /// overview pose return transitions fly back to
    pub fn new(settings: FocusSettings, resting: Pose) -> Self {
        Self {
            state: AnimationState::Introing,
            settings,
            resting,
            progress: TransitionProgress::default(),
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Progress of the current or last scripted transition
    pub fn progress(&self) -> f32 {
        self.progress.value()
    }

    /// Leave the intro. Returns false if the intro had already ended.
    pub fn complete_intro(&mut self) -> bool {
        self.apply(ControlEvent::IntroFinished).is_some()
    }

    /// Start or redirect a focus transition toward object `index`.
    ///
    /// Invalid and placeholder indices are rejected before anything changes.
    pub fn request_focus(
        &mut self,
        ring: &Ring,
        animator: &mut CameraAnimator,
        index: usize,
    ) -> Result<FocusOutcome> {
        let object = ring.selectable(index)?;
        let was_focused = self.state.focused_index().is_some();

        if self.apply(ControlEvent::Focus(index)).is_none() {
            tracing::trace!(index, "focus ignored during intro");
            return Ok(FocusOutcome::Ignored);
        }

        let target = self.settings.pose_for(object.position());
        animator.set_target(target);
        self.progress.restart(animator.pose().distance_to(&target));

        Ok(if was_focused {
            FocusOutcome::Retargeted
        } else {
            FocusOutcome::Accepted
        })
    }

    /// Head back to the resting pose if an object is focused
    pub fn request_back(&mut self, animator: &mut CameraAnimator) -> BackOutcome {
        if self.apply(ControlEvent::Back).is_none() {
            tracing::trace!(state = ?self.state, "back ignored");
            return BackOutcome::Ignored;
        }

        animator.set_target(self.resting);
        self.progress
            .restart(animator.pose().distance_to(&self.resting));
        BackOutcome::Returning
    }

    /// Advance the active transition by one tick.
    ///
    /// Returns the new state when the tick completed a transition.
    pub fn advance(
        &mut self,
        ring: &Ring,
        animator: &mut CameraAnimator,
        dt: f32,
    ) -> Result<Option<AnimationState>> {
        match self.state {
            AnimationState::FocusTransition(index) | AnimationState::FocusLocked(index) => {
                // Follow the object's live position
                let object = ring.selectable(index)?;
                animator.set_target(self.settings.pose_for(object.position()));

                let approach = animator.tick(dt, self.settings.arrive_epsilon)?;
                if let Some(distance) = approach.distance() {
                    self.progress.update(distance);
                }
                if approach.is_arrived() && matches!(self.state, AnimationState::FocusTransition(_))
                {
                    self.progress.complete();
                    return Ok(self.apply(ControlEvent::Arrived));
                }
                Ok(None)
            }
            AnimationState::ReturnTransition => {
                let approach = animator.tick(dt, self.settings.return_epsilon)?;
                if let Some(distance) = approach.distance() {
                    self.progress.update(distance);
                }
                if approach.is_arrived() {
                    animator.clear_target();
                    animator.snap_to(Driver::Scripted, self.resting)?;
                    self.progress.complete();
                    return Ok(self.apply(ControlEvent::Arrived));
                }
                Ok(None)
            }
            AnimationState::Introing | AnimationState::Idle => Ok(None),
        }
    }

    fn apply(&mut self, event: ControlEvent) -> Option<AnimationState> {
        let next = self.state.on(event)?;
        if next != self.state {
            tracing::debug!(from = ?self.state, to = ?next, ?event, "animation state changed");
        }
        self.state = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;
    use crate::error::SceneError;
    use ringview_animation::SmoothingPolicy;

    const DT: f32 = 1.0 / 60.0;

    fn ring() -> Ring {
        let mut catalog: Vec<CatalogEntry> = (1..=6)
            .map(|i| CatalogEntry::new(format!("Object {i}"), ""))
            .collect();
        catalog[5] = CatalogEntry::placeholder();
        Ring::from_catalog(&catalog, 5.0)
    }

    fn resting() -> Pose {
        Pose::new(Vec3::new(8.0, 7.0, 10.0), Vec3::ZERO)
    }

    fn idle_controller() -> (FocusController, CameraAnimator) {
        let mut focus = FocusController::new(FocusSettings::default(), resting());
        assert!(focus.complete_intro());
        (focus, CameraAnimator::new(resting(), SmoothingPolicy::LEGACY))
    }

    fn run_until_settled(
        focus: &mut FocusController,
        ring: &Ring,
        animator: &mut CameraAnimator,
    ) -> usize {
        for tick in 1..=1000 {
            animator.begin_tick();
            if focus.advance(ring, animator, DT).unwrap().is_some() {
                return tick;
            }
        }
        panic!("transition never settled");
    }

    #[test]
    fn test_transition_table() {
        use AnimationState::*;
        assert_eq!(Introing.on(ControlEvent::IntroFinished), Some(Idle));
        assert_eq!(Introing.on(ControlEvent::Focus(1)), None);
        assert_eq!(Introing.on(ControlEvent::Back), None);
        assert_eq!(Idle.on(ControlEvent::Focus(1)), Some(FocusTransition(1)));
        assert_eq!(Idle.on(ControlEvent::Back), None);
        assert_eq!(FocusTransition(1).on(ControlEvent::Arrived), Some(FocusLocked(1)));
        assert_eq!(FocusTransition(1).on(ControlEvent::Focus(3)), Some(FocusTransition(3)));
        assert_eq!(FocusLocked(1).on(ControlEvent::Focus(3)), Some(FocusTransition(3)));
        assert_eq!(FocusLocked(1).on(ControlEvent::Back), Some(ReturnTransition));
        assert_eq!(FocusLocked(1).on(ControlEvent::Arrived), None);
        assert_eq!(ReturnTransition.on(ControlEvent::Arrived), Some(Idle));
        assert_eq!(ReturnTransition.on(ControlEvent::Back), None);
        assert_eq!(ReturnTransition.on(ControlEvent::Focus(0)), Some(FocusTransition(0)));
        assert_eq!(Idle.on(ControlEvent::IntroFinished), None);
    }

    #[test]
    fn test_focus_ignored_during_intro() {
        let ring = ring();
        let mut focus = FocusController::new(FocusSettings::default(), resting());
        let mut animator = CameraAnimator::new(resting(), SmoothingPolicy::LEGACY);

        assert_eq!(
            focus.request_focus(&ring, &mut animator, 2).unwrap(),
            FocusOutcome::Ignored
        );
        assert_eq!(focus.state(), AnimationState::Introing);
        assert!(animator.target().is_none());
    }

    #[test]
    fn test_invalid_and_placeholder_rejected() {
        let ring = ring();
        let (mut focus, mut animator) = idle_controller();

        let err = focus.request_focus(&ring, &mut animator, 99).unwrap_err();
        assert!(matches!(err, SceneError::InvalidSelection { index: 99, count: 6 }));
        let err = focus.request_focus(&ring, &mut animator, 5).unwrap_err();
        assert!(matches!(err, SceneError::PlaceholderSelection { index: 5 }));
        assert_eq!(focus.state(), AnimationState::Idle);
    }

    #[test]
    fn test_focus_locks_on_object() {
        let ring = ring();
        let (mut focus, mut animator) = idle_controller();

        assert_eq!(
            focus.request_focus(&ring, &mut animator, 2).unwrap(),
            FocusOutcome::Accepted
        );
        run_until_settled(&mut focus, &ring, &mut animator);
        assert_eq!(focus.state(), AnimationState::FocusLocked(2));
        assert_eq!(focus.progress(), 1.0);

        let object = ring.selectable(2).unwrap().position();
        let expected = object + Vec3::new(-2.0, 2.0, 3.0);
        assert!(animator.pose().position.distance(expected) < 0.1);
    }

    #[test]
    fn test_locked_keeps_tracking_without_leaving_state() {
        let ring = ring();
        let (mut focus, mut animator) = idle_controller();
        focus.request_focus(&ring, &mut animator, 0).unwrap();
        run_until_settled(&mut focus, &ring, &mut animator);

        for _ in 0..30 {
            animator.begin_tick();
            assert_eq!(focus.advance(&ring, &mut animator, DT).unwrap(), None);
        }
        assert_eq!(focus.state(), AnimationState::FocusLocked(0));
    }

    #[test]
    fn test_retarget_skips_idle() {
        let ring = ring();
        let (mut focus, mut animator) = idle_controller();
        focus.request_focus(&ring, &mut animator, 1).unwrap();
        animator.begin_tick();
        focus.advance(&ring, &mut animator, DT).unwrap();

        assert_eq!(
            focus.request_focus(&ring, &mut animator, 3).unwrap(),
            FocusOutcome::Retargeted
        );
        assert_eq!(focus.state(), AnimationState::FocusTransition(3));
        assert_eq!(focus.progress(), 0.0);
    }

    #[test]
    fn test_back_returns_and_snaps_to_resting() {
        let ring = ring();
        let (mut focus, mut animator) = idle_controller();
        focus.request_focus(&ring, &mut animator, 2).unwrap();
        run_until_settled(&mut focus, &ring, &mut animator);

        assert_eq!(focus.request_back(&mut animator), BackOutcome::Returning);
        assert_eq!(focus.state(), AnimationState::ReturnTransition);
        assert_eq!(focus.request_back(&mut animator), BackOutcome::Ignored);

        run_until_settled(&mut focus, &ring, &mut animator);
        assert_eq!(focus.state(), AnimationState::Idle);
        assert_eq!(animator.pose(), resting());
        assert!(animator.target().is_none());
    }

    #[test]
    fn test_back_when_idle_is_noop() {
        let (mut focus, mut animator) = idle_controller();
        assert_eq!(focus.request_back(&mut animator), BackOutcome::Ignored);
        assert_eq!(focus.state(), AnimationState::Idle);
        assert!(animator.target().is_none());
    }

    #[test]
    fn test_focus_during_return_is_accepted() {
        let ring = ring();
        let (mut focus, mut animator) = idle_controller();
        focus.request_focus(&ring, &mut animator, 2).unwrap();
        run_until_settled(&mut focus, &ring, &mut animator);
        focus.request_back(&mut animator);

        assert_eq!(
            focus.request_focus(&ring, &mut animator, 4).unwrap(),
            FocusOutcome::Accepted
        );
        assert_eq!(focus.state(), AnimationState::FocusTransition(4));
    }

    #[test]
    fn test_progress_is_monotonic() {
        let ring = ring();
        let (mut focus, mut animator) = idle_controller();
        focus.request_focus(&ring, &mut animator, 3).unwrap();
        let mut last = 0.0;
        for _ in 0..100 {
            animator.begin_tick();
            focus.advance(&ring, &mut animator, DT).unwrap();
            assert!(focus.progress() >= last);
            last = focus.progress();
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn test_transition_progress_zero_start_distance() {
        let mut progress = TransitionProgress::default();
        progress.restart(0.0);
        assert_eq!(progress.update(0.0), 1.0);
    }
}
