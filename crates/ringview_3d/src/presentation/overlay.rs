//! Logo overlay fade

use serde::Serialize;

/// Progress at which the overlay starts to leave
const FADE_START: f32 = 0.1;
/// Share of the intro the fade spans
const FADE_SPAN: f32 = 0.6;
/// Opacity lost per unit of phase; the overlay is gone before the lift ends
const FADE_RATE: f32 = 1.2;
/// Lift at full phase, in viewport heights
const LIFT: f32 = 1.5;

/// Overlay appearance for one frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct OverlayFrame {
    /// Opacity in `[0, 1]`
    pub opacity: f32,
    /// Upward offset in viewport heights
    pub lift: f32,
    pub visible: bool,
}

/// Overlay state for intro progress `progress`
pub fn logo_overlay(progress: f32) -> OverlayFrame {
    let phase = ((progress - FADE_START) / FADE_SPAN).clamp(0.0, 1.0);
    let opacity = (1.0 - FADE_RATE * phase).max(0.0);
    OverlayFrame {
        opacity,
        lift: LIFT * phase,
        visible: opacity > 0.0,
    }
}
