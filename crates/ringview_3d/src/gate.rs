//! Navigation gate
//!
//! User navigation may move the camera only while the scene is idle. The
//! gate tracks that condition and hands out [`NavigationPermit`]s, the only
//! way to obtain write access for navigation on a
//! [`CameraAnimator`](crate::camera::CameraAnimator).

use crate::focus::AnimationState;

/// Proof that the navigation gate was open when the permit was issued.
///
/// Cannot be constructed outside this module and is consumed by
/// [`CameraAnimator::apply_navigation`](crate::camera::CameraAnimator::apply_navigation).
#[derive(Debug)]
pub struct NavigationPermit {
    _private: (),
}

/// Open exactly while the animation state is idle
#[derive(Clone, Debug, Default)]
pub struct NavigationGate {
    open: bool,
}

impl NavigationGate {
    /// A closed gate; scenes start in their intro
    pub fn new() -> Self {
        Self { open: false }
    }

    /// Recompute the gate from the animation state
    pub fn sync(&mut self, state: AnimationState) {
        let open = state.is_idle();
        if open != self.open {
            tracing::debug!(open, ?state, "navigation gate changed");
        }
        self.open = open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Permit for one navigation write, `None` while closed
    pub fn permit(&self) -> Option<NavigationPermit> {
        self.open.then_some(NavigationPermit { _private: () })
    }
}

/// True when exactly one of the three camera owners is active
pub fn check_exclusive(intro_active: bool, gate_open: bool, scripted_active: bool) -> bool {
    [intro_active, gate_open, scripted_active]
        .iter()
        .filter(|active| **active)
        .count()
        == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_follows_idle_state() {
        let mut gate = NavigationGate::new();
        assert!(!gate.is_open());
        assert!(gate.permit().is_none());

        gate.sync(AnimationState::Idle);
        assert!(gate.is_open());
        assert!(gate.permit().is_some());

        for state in [
            AnimationState::Introing,
            AnimationState::FocusTransition(2),
            AnimationState::FocusLocked(2),
            AnimationState::ReturnTransition,
        ] {
            gate.sync(state);
            assert!(!gate.is_open(), "gate open in {state:?}");
            assert!(gate.permit().is_none());
        }
    }

    #[test]
    fn test_check_exclusive() {
        assert!(check_exclusive(true, false, false));
        assert!(check_exclusive(false, true, false));
        assert!(check_exclusive(false, false, true));
        assert!(!check_exclusive(false, false, false));
        assert!(!check_exclusive(true, true, false));
        assert!(!check_exclusive(false, true, true));
        assert!(!check_exclusive(true, true, true));
    }
}
