//! Ringview Animation System
//!
//! Time-stepped interpolation building blocks for camera motion.
//!
//! # Features
//!
//! - **Easing**: closed-form curves mapping linear progress to eased progress
//! - **Interpolate**: linear blending for scalars and vectors
//! - **Smoothing policies**: per-tick exponential approach toward a target,
//!   either a fixed fraction per tick or normalized to elapsed time
//! - **Tweens**: one-shot, duration-bounded progress with easing

pub mod easing;
pub mod smoothing;
pub mod tween;
pub mod values;

pub use easing::Easing;
pub use smoothing::SmoothingPolicy;
pub use tween::Tween;
pub use values::Interpolate;
