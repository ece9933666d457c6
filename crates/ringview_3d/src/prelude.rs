//! Prelude module for convenient imports
//!
//! ```rust
//! use ringview_3d::prelude::*;
//! ```

pub use crate::camera::{CameraAnimator, Driver, NavigationInput, Pose};
pub use crate::catalog::{CatalogEntry, Ring, RingSlot};
pub use crate::config::SceneConfig;
pub use crate::coordinator::{SceneCoordinator, TickReport};
pub use crate::error::SceneError;
pub use crate::events::{ProgressEvent, SelectionEvent, TransitionKind};
pub use crate::focus::{AnimationState, BackOutcome, FocusOutcome};
pub use crate::presentation::{label_visible, logo_overlay, InfoPanel, SelectionScale};

pub use ringview_animation::{Easing, SmoothingPolicy};
pub use ringview_core::{Vec2, Vec3};
