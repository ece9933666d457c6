//! # Ringview 3D
//!
//! Camera and interaction coordination for a ring of selectable objects.
//!
//! This crate provides:
//! - **Ring layout** of catalog objects on a horizontal circle
//! - **Camera animator** that owns the live pose and smooths it toward targets
//! - **Intro sequencer** for the one-shot opening flight
//! - **Focus state machine** for flying to an object and back
//! - **Navigation gate** that admits user orbit input only while idle
//! - **Presentation rules** for the splash overlay, info panel and labels
//!
//! ## Quick Start
//!
//! ```rust
//! use ringview_3d::prelude::*;
//!
//! let mut scene = SceneCoordinator::new(&SceneConfig::default()).unwrap();
//! while scene.state() == AnimationState::Introing {
//!     scene.tick(1.0 / 60.0, &NavigationInput::new()).unwrap();
//! }
//!
//! assert_eq!(scene.request_focus(2).unwrap(), FocusOutcome::Accepted);
//! assert!(!scene.gate_open());
//! ```

// Camera pose, animator and drivers
pub mod camera;

// Catalog and ring slots
pub mod catalog;

// Scene configuration
pub mod config;

// Frame-driven coordinator
pub mod coordinator;

pub mod error;

// Observer payloads
pub mod events;

// Focus state machine
pub mod focus;

// Navigation gate
pub mod gate;

pub mod layout;

// Overlay, info panel and label rules
pub mod presentation;

// Prelude for common imports
pub mod prelude;

// Re-export core types at crate root
pub use camera::{CameraAnimator, Driver, IntroSequencer, NavigationInput, OrbitController, Pose};
pub use catalog::{CatalogEntry, Ring, RingSlot, SelectableObject};
pub use config::SceneConfig;
pub use coordinator::{SceneCoordinator, TickReport};
pub use error::{Result, SceneError};
pub use events::{ProgressEvent, SelectionEvent, TransitionKind};
pub use focus::{AnimationState, BackOutcome, FocusOutcome};
pub use gate::{check_exclusive, NavigationGate, NavigationPermit};
pub use layout::ring_layout;
