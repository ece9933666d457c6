//! Navigation input handling

use ringview_core::Vec2;

/// Input state for orbit navigation, sampled once per frame
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationInput {
    /// Pointer movement delta this frame (pixels)
    pub pointer_delta: Vec2,
    /// Scroll wheel delta (positive = zoom in)
    pub scroll_delta: f32,
    /// Whether the rotate button is held (left click)
    pub rotate_pressed: bool,
    /// Whether the pan button is held (right or middle click)
    pub pan_pressed: bool,
}

impl NavigationInput {
    /// Create empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer drag with the rotate button held
    pub fn drag(dx: f32, dy: f32) -> Self {
        Self {
            pointer_delta: Vec2::new(dx, dy),
            rotate_pressed: true,
            ..Self::default()
        }
    }

    /// Scroll wheel movement only
    pub fn scroll(delta: f32) -> Self {
        Self {
            scroll_delta: delta,
            ..Self::default()
        }
    }

    /// Whether this frame carries anything the orbit controller would act on
    pub fn has_motion(&self) -> bool {
        let dragging = (self.rotate_pressed || self.pan_pressed) && !self.pointer_delta.is_zero();
        dragging || self.scroll_delta != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_has_no_motion() {
        assert!(!NavigationInput::new().has_motion());
    }

    #[test]
    fn test_hover_without_button_has_no_motion() {
        let input = NavigationInput {
            pointer_delta: Vec2::new(12.0, 0.0),
            ..NavigationInput::default()
        };
        assert!(!input.has_motion());
    }

    #[test]
    fn test_drag_and_scroll_have_motion() {
        assert!(NavigationInput::drag(1.0, 0.0).has_motion());
        assert!(NavigationInput::scroll(-0.5).has_motion());
    }
}
