//! Error types for ringview_3d

use crate::camera::Driver;
use thiserror::Error;

/// Errors that can occur while building or driving a scene
#[derive(Error, Debug)]
pub enum SceneError {
    /// Focus requested for an index outside the ring
    #[error("invalid selection: object {index} is out of range for a ring of {count}")]
    InvalidSelection { index: usize, count: usize },

    /// Focus requested for a slot that holds no interactive object
    #[error("invalid selection: slot {index} is a placeholder")]
    PlaceholderSelection { index: usize },

    /// Two drivers tried to write the camera pose in the same tick
    #[error("camera driver conflict: {intruder} tried to write while {holder} owns this tick")]
    DriverConflict { holder: Driver, intruder: Driver },

    /// The animation state and navigation gate disagree about who owns the camera
    #[error("camera ownership invariant violated: {0}")]
    Ownership(String),

    /// Scene configuration could not be parsed or is out of range
    #[error("invalid scene configuration: {0}")]
    Config(String),

    /// Reading or writing a scene file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SceneError {
    /// True for errors caused by a bad selection request; the scene is unchanged
    pub fn is_selection(&self) -> bool {
        matches!(
            self,
            SceneError::InvalidSelection { .. } | SceneError::PlaceholderSelection { .. }
        )
    }
}

/// Result type for ringview_3d operations
pub type Result<T> = std::result::Result<T, SceneError>;
