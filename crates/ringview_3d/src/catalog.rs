//! Object catalog and ring slots
//!
//! The catalog is the ordered list of objects supplied when a scene is
//! built. Its length fixes the ring cardinality. An entry titled
//! [`PLACEHOLDER_TITLE`] still takes a ring position but produces no
//! interactive object and no label.

use crate::error::{Result, SceneError};
use crate::layout::ring_layout;
use ringview_core::Vec3;
use serde::{Deserialize, Serialize};

/// Title that marks a slot as an empty placeholder
pub const PLACEHOLDER_TITLE: &str = "NONE";

/// Per-object visual adjustments applied by the renderer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualConfig {
    /// Model scale
    pub scale: Vec3,
    /// Model offset relative to the slot position
    pub offset: Vec3,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            scale: Vec3::ONE,
            offset: Vec3::ZERO,
        }
    }
}

/// One entry of the externally supplied object list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display title, also used as the label
    pub title: String,
    /// Model reference handed to the asset loader
    #[serde(default)]
    pub model: String,
    /// Visual adjustments
    #[serde(default)]
    pub visual: VisualConfig,
}

impl CatalogEntry {
    pub fn new(title: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            model: model.into(),
            visual: VisualConfig::default(),
        }
    }

    /// Entry that reserves a ring position without an object
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_TITLE, "")
    }

    pub fn is_placeholder(&self) -> bool {
        self.title == PLACEHOLDER_TITLE
    }
}

/// An interactive object on the ring
#[derive(Clone, Debug, PartialEq)]
pub struct SelectableObject {
    index: usize,
    position: Vec3,
    label: String,
    model: String,
    visual: VisualConfig,
}

impl SelectableObject {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn visual(&self) -> &VisualConfig {
        &self.visual
    }
}

/// A position on the ring, occupied or not
#[derive(Clone, Debug, PartialEq)]
pub enum RingSlot {
    /// Interactive object with a label
    Object(SelectableObject),
    /// Reserved position with nothing rendered
    Placeholder { index: usize, position: Vec3 },
}

impl RingSlot {
    pub fn index(&self) -> usize {
        match self {
            RingSlot::Object(object) => object.index,
            RingSlot::Placeholder { index, .. } => *index,
        }
    }

    pub fn position(&self) -> Vec3 {
        match self {
            RingSlot::Object(object) => object.position,
            RingSlot::Placeholder { position, .. } => *position,
        }
    }

    pub fn as_object(&self) -> Option<&SelectableObject> {
        match self {
            RingSlot::Object(object) => Some(object),
            RingSlot::Placeholder { .. } => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, RingSlot::Placeholder { .. })
    }
}

/// The immutable ring of slots built once per scene
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    slots: Vec<RingSlot>,
    radius: f32,
}

impl Ring {
    /// Lay out `catalog` on a circle of `radius`
    pub fn from_catalog(catalog: &[CatalogEntry], radius: f32) -> Self {
        let slots = ring_layout(catalog.len(), radius)
            .into_iter()
            .zip(catalog)
            .map(|((position, index), entry)| {
                if entry.is_placeholder() {
                    RingSlot::Placeholder { index, position }
                } else {
                    RingSlot::Object(SelectableObject {
                        index,
                        position,
                        label: entry.title.clone(),
                        model: entry.model.clone(),
                        visual: entry.visual.clone(),
                    })
                }
            })
            .collect();

        Self { slots, radius }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Scene center the ring is laid out around
    pub const CENTER: Vec3 = Vec3::ZERO;

    pub fn center(&self) -> Vec3 {
        Self::CENTER
    }

    pub fn slots(&self) -> &[RingSlot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&RingSlot> {
        self.slots.get(index)
    }

    /// Interactive objects in index order, placeholders skipped
    pub fn objects(&self) -> impl Iterator<Item = &SelectableObject> {
        self.slots.iter().filter_map(RingSlot::as_object)
    }

    /// Look up a focusable object, rejecting out-of-range and placeholder slots
    pub fn selectable(&self, index: usize) -> Result<&SelectableObject> {
        match self.slots.get(index) {
            Some(RingSlot::Object(object)) => Ok(object),
            Some(RingSlot::Placeholder { .. }) => Err(SceneError::PlaceholderSelection { index }),
            None => Err(SceneError::InvalidSelection {
                index,
                count: self.slots.len(),
            }),
        }
    }
}
