//! Presentation state derived from scene progress and selection
//!
//! - [`logo_overlay`] - Splash fade driven by intro progress
//! - [`InfoPanel`] - Delayed detail panel for the focused object
//! - [`label_visible`] / [`SelectionScale`] - Per-slot label and scale rules

mod info_panel;
mod labels;
mod overlay;

pub use info_panel::{InfoPanel, INFO_PANEL_DELAY};
pub use labels::{label_visible, SelectionScale, SELECTED_SCALE};
pub use overlay::{logo_overlay, OverlayFrame};
