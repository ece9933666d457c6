//! Info panel visibility
//!
//! The panel appears a short delay after an object gains focus and
//! disappears as soon as focus is lost. Time is advanced by the frame loop.

use crate::events::SelectionEvent;
use std::time::Duration;

/// Delay between focus and the panel appearing
pub const INFO_PANEL_DELAY: Duration = Duration::from_millis(300);

/// Debounced panel for the focused object
#[derive(Clone, Debug)]
pub struct InfoPanel {
    delay: f32,
    pending: Option<f32>,
    visible: bool,
    index: Option<usize>,
}

impl InfoPanel {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay: delay.as_secs_f32(),
            pending: None,
            visible: false,
            index: None,
        }
    }

    /// React to a selection change
    pub fn on_selection(&mut self, event: &SelectionEvent) {
        if event.focused {
            self.index = event.index;
            if !self.visible {
                self.pending = Some(0.0);
            }
        } else {
            self.index = None;
            self.pending = None;
            self.visible = false;
        }
    }

    /// Advance the pending show by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        if let Some(waited) = self.pending.as_mut() {
            *waited += dt.max(0.0);
            if *waited >= self.delay {
                self.pending = None;
                self.visible = true;
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Object whose details the panel shows
    pub fn index(&self) -> Option<usize> {
        self.index
    }
}

impl Default for InfoPanel {
    fn default() -> Self {
        Self::new(INFO_PANEL_DELAY)
    }
}
