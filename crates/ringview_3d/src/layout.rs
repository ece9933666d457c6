//! Ring layout
//!
//! Places `count` slots at equal angular spacing on a horizontal circle
//! centered on the origin.

use ringview_core::Vec3;
use std::f32::consts::TAU;

/// Positions of `count` slots on a circle of `radius` in the XZ plane.
///
/// Slot `i` sits at angle `2π·i/count`, measured from +X toward +Z.
/// Returns `(position, index)` pairs in index order; `count == 0` yields an
/// empty list.
pub fn ring_layout(count: usize, radius: f32) -> Vec<(Vec3, usize)> {
    (0..count)
        .map(|index| (slot_position(index, count, radius), index))
        .collect()
}

/// Position of a single slot; `count` must be non-zero
pub fn slot_position(index: usize, count: usize, radius: f32) -> Vec3 {
    let angle = slot_angle(index, count);
    Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
}

/// Angle of slot `index` in radians
pub fn slot_angle(index: usize, count: usize) -> f32 {
    (index as f32 / count as f32) * TAU
}
