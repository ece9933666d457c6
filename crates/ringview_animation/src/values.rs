//! Animatable value types
//!
//! Linear interpolation for the value types camera motion blends.

use ringview_core::Vec3;

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Distance used for settling detection
    fn distance(&self, other: &Self) -> f32;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        if t >= 1.0 {
            return *other;
        }
        self + (other - self) * t
    }

    fn distance(&self, other: &Self) -> f32 {
        (self - other).abs()
    }
}

impl Interpolate for Vec3 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Vec3::lerp(self, *other, t)
    }

    fn distance(&self, other: &Self) -> f32 {
        Vec3::distance(self, *other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_lerp() {
        assert_eq!(Interpolate::lerp(&2.0_f32, &4.0, 0.5), 3.0);
        assert_eq!(Interpolate::lerp(&2.0_f32, &4.0, 1.0), 4.0);
        assert_eq!(Interpolate::distance(&1.0_f32, &1.5), 0.5);
    }

    #[test]
    fn test_vec3_distance_is_euclidean() {
        let a = Vec3::ZERO;
        let b = Vec3::new(3.0, 4.0, 0.0);
        assert_eq!(Interpolate::distance(&a, &b), 5.0);
        // Component-wise closeness is not enough
        assert!(Interpolate::distance(&a, &Vec3::new(0.09, 0.09, 0.09)) > 0.1);
    }
}
