//! Scene coordinator
//!
//! Ties the ring, the camera drivers and the observer registries together
//! behind a single frame-driven entry point. Each [`SceneCoordinator::tick`]
//! hands the camera to exactly one driver:
//!
//! | state | driver |
//! |---|---|
//! | `Introing` | [`IntroSequencer`] |
//! | `Idle` | [`OrbitController`] through the navigation gate |
//! | `FocusTransition`, `FocusLocked`, `ReturnTransition` | [`FocusController`] |

use crate::camera::{CameraAnimator, Driver, IntroSequencer, NavigationInput, OrbitController, Pose};
use crate::catalog::{Ring, RingSlot};
use crate::config::SceneConfig;
use crate::error::{Result, SceneError};
use crate::events::{ProgressEvent, SelectionEvent, TransitionKind};
use crate::focus::{AnimationState, BackOutcome, FocusController, FocusOutcome};
use crate::gate::{check_exclusive, NavigationGate};
use ringview_core::{ObserverId, Observers};
use serde::Serialize;

/// Summary of one tick
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TickReport {
    /// Number of completed ticks, this one included
    pub frame: u64,
    /// State after the tick
    pub state: AnimationState,
    /// Driver that wrote the camera this tick, if any
    pub driver: Option<Driver>,
    /// Camera pose after the tick
    pub pose: Pose,
    /// Whether navigation input is admitted after the tick
    pub gate_open: bool,
    /// Progress emitted this tick, if a scripted animation ran
    pub progress: Option<ProgressEvent>,
}

/// Frame-driven camera and interaction coordinator
pub struct SceneCoordinator {
    ring: Ring,
    animator: CameraAnimator,
    intro: IntroSequencer,
    focus: FocusController,
    gate: NavigationGate,
    orbit: OrbitController,
    progress_observers: Observers<ProgressEvent>,
    selection_observers: Observers<SelectionEvent>,
    frame: u64,
}

impl SceneCoordinator {
    /// Build the ring and start the intro
    pub fn new(config: &SceneConfig) -> Result<Self> {
        config.validate()?;

        let ring = Ring::from_catalog(&config.catalog, config.ring.radius);
        let start = config.intro.start_pose();
        let resting = config.overview.pose();

        let intro = IntroSequencer::start(start, resting.position, resting.look_at, config.intro.duration)
            .with_easing(config.intro.easing)
            .with_swirl(config.intro.swirl);

        let mut orbit = OrbitController::new(ring.center(), resting.position.distance(ring.center()));
        orbit.min_distance = config.orbit.min_distance;
        orbit.max_distance = config.orbit.max_distance;
        orbit.rotation_speed = config.orbit.rotation_speed;
        orbit.zoom_speed = config.orbit.zoom_speed;
        orbit.damping = config.orbit.damping;
        orbit.pan_enabled = config.orbit.enable_pan;

        tracing::debug!(
            slots = ring.len(),
            objects = ring.objects().count(),
            radius = ring.radius(),
            "scene created"
        );

        Ok(Self {
            animator: CameraAnimator::new(start, config.smoothing),
            focus: FocusController::new(config.focus.settings(), resting),
            gate: NavigationGate::new(),
            ring,
            intro,
            orbit,
            progress_observers: Observers::new(),
            selection_observers: Observers::new(),
            frame: 0,
        })
    }

    /// Advance the scene by `dt` seconds
    pub fn tick(&mut self, dt: f32, input: &NavigationInput) -> Result<TickReport> {
        self.animator.begin_tick();

        let progress = match self.focus.state() {
            AnimationState::Introing => Some(self.advance_intro(dt)?),
            AnimationState::Idle => {
                self.navigate(dt, input)?;
                None
            }
            state => {
                if input.has_motion() {
                    tracing::trace!(?state, "navigation input dropped, gate closed");
                }
                self.advance_transition(state, dt)?
            }
        };

        if let Some(event) = progress {
            self.progress_observers.notify(&event);
        }

        self.gate.sync(self.focus.state());
        self.check_ownership()?;
        self.frame += 1;

        let report = TickReport {
            frame: self.frame,
            state: self.focus.state(),
            driver: self.animator.writer(),
            pose: self.animator.pose(),
            gate_open: self.gate.is_open(),
            progress,
        };
        tracing::trace!(frame = report.frame, state = ?report.state, driver = ?report.driver, "tick");
        Ok(report)
    }

    /// Fly to object `index`.
    ///
    /// Ignored while the intro runs. Out-of-range and placeholder indices
    /// are errors and leave the scene unchanged.
    pub fn request_focus(&mut self, index: usize) -> Result<FocusOutcome> {
        let outcome = match self.focus.request_focus(&self.ring, &mut self.animator, index) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(index, "focus rejected: {err}");
                return Err(err);
            }
        };

        if outcome != FocusOutcome::Ignored {
            self.gate.sync(self.focus.state());
            self.selection_observers.notify(&SelectionEvent::focused(index));
            tracing::debug!(index, ?outcome, "focus requested");
        }
        Ok(outcome)
    }

    /// Leave the focused object and return to the overview
    pub fn trigger_back(&mut self) -> BackOutcome {
        let outcome = self.focus.request_back(&mut self.animator);
        if outcome == BackOutcome::Returning {
            self.gate.sync(self.focus.state());
            self.selection_observers.notify(&SelectionEvent::cleared());
        }
        outcome
    }

    /// Subscribe to per-tick progress of scripted animations
    pub fn subscribe_progress<F>(&mut self, callback: F) -> ObserverId
    where
        F: FnMut(&ProgressEvent) + 'static,
    {
        self.progress_observers.subscribe(callback)
    }

    /// Subscribe to focus changes
    pub fn subscribe_selection<F>(&mut self, callback: F) -> ObserverId
    where
        F: FnMut(&SelectionEvent) + 'static,
    {
        self.selection_observers.subscribe(callback)
    }

    pub fn unsubscribe_progress(&mut self, id: ObserverId) -> bool {
        self.progress_observers.unsubscribe(id)
    }

    pub fn unsubscribe_selection(&mut self, id: ObserverId) -> bool {
        self.selection_observers.unsubscribe(id)
    }

    pub fn state(&self) -> AnimationState {
        self.focus.state()
    }

    pub fn pose(&self) -> Pose {
        self.animator.pose()
    }

    pub fn gate_open(&self) -> bool {
        self.gate.is_open()
    }

    pub fn intro_finished(&self) -> bool {
        !self.focus.state().is_intro()
    }

    /// Progress of the intro while it runs, otherwise of the last transition
    pub fn progress(&self) -> f32 {
        if self.focus.state().is_intro() {
            self.intro.progress()
        } else {
            self.focus.progress()
        }
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focus.state().focused_index()
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    pub fn slots(&self) -> &[RingSlot] {
        self.ring.slots()
    }

    pub fn animator(&self) -> &CameraAnimator {
        &self.animator
    }

    pub fn orbit(&self) -> &OrbitController {
        &self.orbit
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    fn advance_intro(&mut self, dt: f32) -> Result<ProgressEvent> {
        let frame = self.intro.advance(dt);
        self.animator.snap_to(Driver::Intro, frame.pose)?;

        if frame.finished && self.focus.complete_intro() {
            self.orbit.sync_from_pose(frame.pose, self.ring.center());
        }
        Ok(ProgressEvent {
            kind: TransitionKind::Intro,
            value: frame.progress,
        })
    }

    fn navigate(&mut self, dt: f32, input: &NavigationInput) -> Result<()> {
        let Some(permit) = self.gate.permit() else {
            return Ok(());
        };
        if let Some(pose) = self.orbit.update(dt, input) {
            self.animator.apply_navigation(permit, pose)?;
        }
        Ok(())
    }

    fn advance_transition(&mut self, state: AnimationState, dt: f32) -> Result<Option<ProgressEvent>> {
        let kind = if state == AnimationState::ReturnTransition {
            TransitionKind::Return
        } else {
            TransitionKind::Focus
        };

        let changed = self.focus.advance(&self.ring, &mut self.animator, dt)?;
        if changed == Some(AnimationState::Idle) {
            // Orbit resumes around the scene center from the resting pose
            self.orbit
                .sync_from_pose(self.animator.pose(), self.ring.center());
        }

        // A locked focus is steady; only moving transitions report progress
        Ok((!matches!(state, AnimationState::FocusLocked(_))).then(|| ProgressEvent {
            kind,
            value: self.focus.progress(),
        }))
    }

    fn check_ownership(&self) -> Result<()> {
        let state = self.focus.state();
        let gate_open = self.gate.is_open();
        if check_exclusive(state.is_intro(), gate_open, state.is_scripted()) {
            Ok(())
        } else {
            Err(SceneError::Ownership(format!(
                "state {state:?} with gate {}",
                if gate_open { "open" } else { "closed" }
            )))
        }
    }
}

impl std::fmt::Debug for SceneCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneCoordinator")
            .field("state", &self.focus.state())
            .field("pose", &self.animator.pose())
            .field("gate_open", &self.gate.is_open())
            .field("slots", &self.ring.len())
            .field("frame", &self.frame)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringview_core::Vec3;
    use std::cell::RefCell;
    use std::rc::Rc;

    const DT: f32 = 1.0 / 60.0;

    fn coordinator() -> SceneCoordinator {
        SceneCoordinator::new(&SceneConfig::default()).unwrap()
    }

    fn finish_intro(scene: &mut SceneCoordinator) {
        for _ in 0..180 {
            scene.tick(DT, &NavigationInput::new()).unwrap();
        }
        assert_eq!(scene.state(), AnimationState::Idle);
    }

    #[test]
    fn test_starts_in_intro_with_gate_closed() {
        let scene = coordinator();
        assert_eq!(scene.state(), AnimationState::Introing);
        assert!(!scene.gate_open());
        assert_eq!(scene.pose(), SceneConfig::default().intro.start_pose());
        assert_eq!(scene.slots().len(), 6);
    }

    #[test]
    fn test_intro_reports_progress_every_tick() {
        let mut scene = coordinator();
        let values = Rc::new(RefCell::new(Vec::new()));
        let sink = values.clone();
        scene.subscribe_progress(move |event| sink.borrow_mut().push(event.value));

        finish_intro(&mut scene);
        let values = values.borrow();
        assert_eq!(values.len(), 180);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*values.last().unwrap(), 1.0);
    }

    #[test]
    fn test_idle_scene_does_not_move() {
        let mut scene = coordinator();
        finish_intro(&mut scene);
        let pose = scene.pose();
        let report = scene.tick(DT, &NavigationInput::new()).unwrap();
        assert_eq!(report.driver, None);
        assert_eq!(report.pose, pose);
        assert!(report.gate_open);
    }

    #[test]
    fn test_navigation_moves_camera_only_when_idle() {
        let mut scene = coordinator();
        let report = scene.tick(DT, &NavigationInput::drag(80.0, 0.0)).unwrap();
        assert_eq!(report.driver, Some(Driver::Intro));

        finish_intro(&mut scene);
        let before = scene.pose();
        let report = scene.tick(DT, &NavigationInput::drag(80.0, 0.0)).unwrap();
        assert_eq!(report.driver, Some(Driver::Navigation));
        assert_ne!(report.pose, before);

        scene.request_focus(0).unwrap();
        let report = scene.tick(DT, &NavigationInput::drag(80.0, 0.0)).unwrap();
        assert_eq!(report.driver, Some(Driver::Scripted));
    }

    #[test]
    fn test_first_drag_after_intro_continues_from_overview() {
        let mut config = SceneConfig::default();
        config.overview.position = Vec3::new(0.0, 2.0, 18.0);
        let mut scene = SceneCoordinator::new(&config).unwrap();
        finish_intro(&mut scene);
        let rest = scene.pose();
        assert_eq!(rest, config.overview.pose());

        let report = scene.tick(DT, &NavigationInput::drag(1.0, 0.0)).unwrap();
        assert_eq!(report.driver, Some(Driver::Navigation));
        assert!(report.pose.position.distance(rest.position) < 0.2);
        assert_eq!(report.pose.look_at, rest.look_at);
    }

    #[test]
    fn test_overview_unreachable_by_orbit_rejected() {
        let mut config = SceneConfig::default();
        config.overview.position = Vec3::new(0.0, 2.0, 30.0);
        assert!(matches!(
            SceneCoordinator::new(&config),
            Err(SceneError::Config(_))
        ));

        let mut config = SceneConfig::default();
        config.overview.look_at = Vec3::new(0.0, 3.0, 0.0);
        assert!(matches!(
            SceneCoordinator::new(&config),
            Err(SceneError::Config(_))
        ));
    }

    #[test]
    fn test_selection_events() {
        let mut scene = coordinator();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        scene.subscribe_selection(move |event| sink.borrow_mut().push(*event));

        // Ignored during the intro: no signal
        assert_eq!(scene.request_focus(1).unwrap(), FocusOutcome::Ignored);
        finish_intro(&mut scene);

        scene.request_focus(1).unwrap();
        scene.request_focus(4).unwrap();
        scene.trigger_back();
        scene.trigger_back();

        assert_eq!(
            *events.borrow(),
            vec![
                SelectionEvent::focused(1),
                SelectionEvent::focused(4),
                SelectionEvent::cleared(),
            ]
        );
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut scene = coordinator();
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        let id = scene.subscribe_progress(move |_| *sink.borrow_mut() += 1);
        scene.tick(DT, &NavigationInput::new()).unwrap();
        assert!(scene.unsubscribe_progress(id));
        scene.tick(DT, &NavigationInput::new()).unwrap();
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_gate_closes_immediately_on_focus() {
        let mut scene = coordinator();
        finish_intro(&mut scene);
        scene.request_focus(2).unwrap();
        assert!(!scene.gate_open());
        assert_eq!(scene.focused_index(), Some(2));
    }

    #[test]
    fn test_zero_duration_intro_finishes_on_first_tick() {
        let mut config = SceneConfig::default();
        config.intro.duration = 0.0;
        let mut scene = SceneCoordinator::new(&config).unwrap();
        let report = scene.tick(0.0, &NavigationInput::new()).unwrap();
        assert_eq!(report.state, AnimationState::Idle);
        assert_eq!(report.pose, config.overview.pose());
        assert!(report.gate_open);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = SceneConfig::default();
        config.focus.arrive_epsilon = 0.0;
        assert!(matches!(
            SceneCoordinator::new(&config),
            Err(SceneError::Config(_))
        ));
    }
}
