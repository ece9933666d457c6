//! Observer events
//!
//! Payloads delivered to subscribers of a
//! [`SceneCoordinator`](crate::coordinator::SceneCoordinator).

use serde::Serialize;

/// Scripted animation that produced a progress value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionKind {
    Intro,
    Focus,
    Return,
}

/// Progress of the active scripted animation, emitted every tick it runs
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ProgressEvent {
    pub kind: TransitionKind,
    /// Monotonic within one animation, in `[0, 1]`
    pub value: f32,
}

/// Focus changed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SelectionEvent {
    pub focused: bool,
    pub index: Option<usize>,
}

impl SelectionEvent {
    pub fn focused(index: usize) -> Self {
        Self {
            focused: true,
            index: Some(index),
        }
    }

    pub fn cleared() -> Self {
        Self {
            focused: false,
            index: None,
        }
    }
}
