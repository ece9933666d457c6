//! Slot labels and selection scale

use crate::catalog::RingSlot;

/// Scale the selected object grows toward
pub const SELECTED_SCALE: f32 = 1.5;
/// Fraction of the remaining scale covered per tick
const SCALE_RATE: f32 = 0.1;

/// Whether a slot shows its label
pub fn label_visible(slot: &RingSlot, intro_finished: bool, focused: Option<usize>) -> bool {
    intro_finished && !slot.is_placeholder() && focused.is_none()
}

/// Per-slot scale easing toward [`SELECTED_SCALE`] for the selection
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionScale {
    scales: Vec<f32>,
}

impl SelectionScale {
    pub fn new(count: usize) -> Self {
        Self {
            scales: vec![1.0; count],
        }
    }

    /// One tick toward the target scales
    pub fn update(&mut self, selected: Option<usize>) {
        for (index, scale) in self.scales.iter_mut().enumerate() {
            let target = if selected == Some(index) {
                SELECTED_SCALE
            } else {
                1.0
            };
            *scale += (target - *scale) * SCALE_RATE;
        }
    }

    pub fn scale(&self, index: usize) -> Option<f32> {
        self.scales.get(index).copied()
    }

    pub fn scales(&self) -> &[f32] {
        &self.scales
    }
}
