//! Ringview Core
//!
//! Foundational primitives shared by every Ringview crate:
//!
//! - **Vector math**: small `Copy` vector types with the handful of operations
//!   camera code needs (lerp, distance)
//! - **Observers**: single-threaded callback registries with stable handles
//!
//! # Example
//!
//! ```rust
//! use ringview_core::{Observers, Vec3};
//!
//! let mut moved = Observers::<Vec3>::new();
//! let handle = moved.subscribe(|p| assert!(p.length() > 0.0));
//! moved.notify(&Vec3::new(1.0, 0.0, 0.0));
//! moved.unsubscribe(handle);
//! ```

pub mod math;
pub mod observer;

pub use math::{Vec2, Vec3};
pub use observer::{ObserverId, Observers};
