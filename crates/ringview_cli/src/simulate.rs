//! Headless scene simulation
//!
//! Runs an interaction script against a scene at a fixed frame rate and
//! collects what a renderer would have shown.

use crate::script::ScriptStep;
use anyhow::Result;
use ringview_3d::presentation::{label_visible, logo_overlay, InfoPanel, OverlayFrame, SelectionScale};
use ringview_3d::{
    AnimationState, BackOutcome, FocusOutcome, NavigationInput, Pose, SceneCoordinator,
    SelectionEvent,
};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

/// Outcome counts for focus requests
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FocusTally {
    pub accepted: u32,
    pub retargeted: u32,
    pub ignored: u32,
    pub rejected: u32,
}

/// State change observed at the end of a frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StateChange {
    pub frame: u64,
    pub state: AnimationState,
}

/// Everything the simulation observed
#[derive(Clone, Debug, Serialize)]
pub struct SimulationReport {
    pub frames: u64,
    pub elapsed_secs: f32,
    pub final_state: AnimationState,
    pub final_pose: Pose,
    pub gate_open: bool,
    pub focus: FocusTally,
    pub back_ignored: u32,
    pub selections: Vec<SelectionEvent>,
    pub state_changes: Vec<StateChange>,
    pub progress_events: u64,
    pub overlay: OverlayFrame,
    pub info_panel_visible: bool,
    pub visible_labels: Vec<usize>,
    pub object_scales: Vec<f32>,
}

/// Drives a scene through a script one frame at a time
pub struct Simulation {
    scene: SceneCoordinator,
    dt: f32,
    elapsed: f32,
    pending: Rc<RefCell<Vec<SelectionEvent>>>,
    progress_events: Rc<RefCell<u64>>,
    selections: Vec<SelectionEvent>,
    state_changes: Vec<StateChange>,
    focus: FocusTally,
    back_ignored: u32,
    panel: InfoPanel,
    scales: SelectionScale,
    selected: Option<usize>,
}

impl Simulation {
    pub fn new(mut scene: SceneCoordinator, fps: u32) -> Self {
        let pending = Rc::new(RefCell::new(Vec::new()));
        let sink = pending.clone();
        scene.subscribe_selection(move |event| sink.borrow_mut().push(*event));

        let progress_events = Rc::new(RefCell::new(0));
        let counter = progress_events.clone();
        scene.subscribe_progress(move |_| *counter.borrow_mut() += 1);

        let scales = SelectionScale::new(scene.slots().len());
        Self {
            scene,
            dt: 1.0 / fps.max(1) as f32,
            elapsed: 0.0,
            pending,
            progress_events,
            selections: Vec::new(),
            state_changes: Vec::new(),
            focus: FocusTally::default(),
            back_ignored: 0,
            panel: InfoPanel::default(),
            scales,
            selected: None,
        }
    }

    /// Execute every step, then build the report
    pub fn run(mut self, steps: &[ScriptStep]) -> Result<SimulationReport> {
        for step in steps {
            tracing::debug!(%step, frame = self.scene.frame(), "script step");
            self.step(*step)?;
        }
        Ok(self.report())
    }

    fn step(&mut self, step: ScriptStep) -> Result<()> {
        match step {
            ScriptStep::Wait(seconds) => {
                let frames = (seconds / self.dt).round() as u64;
                for _ in 0..frames {
                    self.frame(&NavigationInput::new())?;
                }
            }
            ScriptStep::Focus(index) => {
                match self.scene.request_focus(index) {
                    Ok(FocusOutcome::Accepted) => self.focus.accepted += 1,
                    Ok(FocusOutcome::Retargeted) => self.focus.retargeted += 1,
                    Ok(FocusOutcome::Ignored) => self.focus.ignored += 1,
                    Err(err) if err.is_selection() => {
                        tracing::warn!("{err}");
                        self.focus.rejected += 1;
                    }
                    Err(err) => return Err(err.into()),
                }
                self.drain_selections();
            }
            ScriptStep::Back => {
                if self.scene.trigger_back() == BackOutcome::Ignored {
                    self.back_ignored += 1;
                }
                self.drain_selections();
            }
            ScriptStep::Drag(dx, dy) => self.frame(&NavigationInput::drag(dx, dy))?,
            ScriptStep::Zoom(delta) => self.frame(&NavigationInput::scroll(delta))?,
        }
        Ok(())
    }

    fn frame(&mut self, input: &NavigationInput) -> Result<()> {
        let before = self.scene.state();
        let report = self.scene.tick(self.dt, input)?;
        self.elapsed += self.dt;

        if report.state != before {
            self.state_changes.push(StateChange {
                frame: report.frame,
                state: report.state,
            });
        }
        self.drain_selections();
        self.panel.advance(self.dt);
        self.scales.update(self.selected);
        Ok(())
    }

    fn drain_selections(&mut self) {
        let events: Vec<SelectionEvent> = self.pending.borrow_mut().drain(..).collect();
        for event in events {
            self.panel.on_selection(&event);
            self.selected = event.index;
            self.selections.push(event);
        }
    }

    fn report(&self) -> SimulationReport {
        let intro_finished = self.scene.intro_finished();
        let focused = self.scene.focused_index();
        let intro_progress = if intro_finished { 1.0 } else { self.scene.progress() };
        let visible_labels = self
            .scene
            .slots()
            .iter()
            .filter(|slot| label_visible(slot, intro_finished, focused))
            .map(|slot| slot.index())
            .collect();

        SimulationReport {
            frames: self.scene.frame(),
            elapsed_secs: self.elapsed,
            final_state: self.scene.state(),
            final_pose: self.scene.pose(),
            gate_open: self.scene.gate_open(),
            focus: self.focus.clone(),
            back_ignored: self.back_ignored,
            selections: self.selections.clone(),
            state_changes: self.state_changes.clone(),
            progress_events: *self.progress_events.borrow(),
            overlay: logo_overlay(intro_progress),
            info_panel_visible: self.panel.is_visible(),
            visible_labels,
            object_scales: self.scales.scales().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::parse_script;
    use ringview_3d::SceneConfig;

    fn simulate(script: &str) -> SimulationReport {
        let scene = SceneCoordinator::new(&SceneConfig::default()).unwrap();
        let steps = parse_script(script).unwrap();
        Simulation::new(scene, 60).run(&steps).unwrap()
    }

    #[test]
    fn test_intro_only() {
        let report = simulate("wait 3");
        assert_eq!(report.frames, 180);
        assert_eq!(report.final_state, AnimationState::Idle);
        assert!(report.gate_open);
        assert_eq!(report.progress_events, 180);
        assert!(!report.overlay.visible);
        assert_eq!(report.visible_labels, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_focus_tour() {
        let report = simulate("wait 3\nfocus 2\nwait 2\nback\nwait 3\n");
        assert_eq!(report.focus.accepted, 1);
        assert_eq!(report.final_state, AnimationState::Idle);
        assert_eq!(
            report.selections,
            vec![SelectionEvent::focused(2), SelectionEvent::cleared()]
        );
        let states: Vec<AnimationState> = report.state_changes.iter().map(|c| c.state).collect();
        assert_eq!(
            states,
            vec![
                AnimationState::Idle,
                AnimationState::FocusLocked(2),
                AnimationState::Idle,
            ]
        );
        assert!(!report.info_panel_visible);
    }

    #[test]
    fn test_focused_scene_shows_panel_and_hides_labels() {
        let report = simulate("wait 3\nfocus 1\nwait 1\n");
        assert_eq!(report.final_state, AnimationState::FocusLocked(1));
        assert!(report.info_panel_visible);
        assert!(report.visible_labels.is_empty());
        assert!(report.object_scales[1] > 1.4);
        assert!((report.object_scales[0] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_early_and_invalid_focus_counted() {
        let report = simulate("focus 1\nwait 3\nfocus 42\nback\n");
        assert_eq!(report.focus.ignored, 1);
        assert_eq!(report.focus.rejected, 1);
        assert_eq!(report.back_ignored, 1);
        assert!(report.selections.is_empty());
    }
}
