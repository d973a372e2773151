//! Selected elements - the opaque handles edits are applied to.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an element owned by the editor model.
///
/// The identifier is never interpreted here; it is only passed through into
/// [`EditCommand`](crate::EditCommand)s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(Uuid);

impl ElementId {
    /// Create a new unique element ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where an element's geometry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// Vector artwork (SVG paths and primitive shapes).
    #[default]
    #[serde(alias = "svg")]
    Vector,
    /// Text converted to outlines. Cannot be resized freely.
    Text,
    /// Bitmap image. Aspect-ratio lock cannot be toggled.
    Raster,
}

impl SourceType {
    /// Whether free width/height edits are allowed for this source.
    #[must_use]
    pub const fn is_resizable(self) -> bool {
        !matches!(self, Self::Text)
    }

    /// Whether the uniform scaling lock may be toggled for this source.
    #[must_use]
    pub const fn can_toggle_uniform_scaling(self) -> bool {
        !matches!(self, Self::Raster)
    }
}

fn default_visible() -> bool {
    true
}

/// A member of the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedElement {
    /// Opaque handle of the element, supplied by the model.
    pub id: ElementId,
    /// Origin of the element's geometry.
    #[serde(default)]
    pub source_type: SourceType,
    /// Whether the element is shown on the canvas.
    #[serde(default = "default_visible")]
    pub visible: bool,
}

impl SelectedElement {
    /// Create a visible element with a fresh ID.
    #[must_use]
    pub fn new(source_type: SourceType) -> Self {
        Self {
            id: ElementId::new(),
            source_type,
            visible: true,
        }
    }

    /// Set the element ID.
    #[must_use]
    pub fn with_id(mut self, id: ElementId) -> Self {
        self.id = id;
        self
    }

    /// Set whether the element is visible.
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}
