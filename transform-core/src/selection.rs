//! Selection context and editor snapshots.

use serde::{Deserialize, Serialize};

use crate::element::{ElementId, SelectedElement, SourceType};
use crate::error::TransformResult;
use crate::transform::{ShapeTransform, WorkArea};

/// What is selected, plus the aspect-ratio lock attached to the selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionContext {
    /// Selected elements, in selection order.
    #[serde(default)]
    pub elements: Vec<SelectedElement>,
    /// Persisted uniform scaling lock. Unset means locked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uniform_scaling_state: Option<bool>,
}

impl SelectionContext {
    /// Create a selection from its members with the lock unset.
    #[must_use]
    pub fn new(elements: Vec<SelectedElement>) -> Self {
        Self {
            elements,
            uniform_scaling_state: None,
        }
    }

    /// Set the uniform scaling lock.
    #[must_use]
    pub fn with_uniform_scaling(mut self, locked: bool) -> Self {
        self.uniform_scaling_state = Some(locked);
        self
    }

    /// Number of selected elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The only selected element, if exactly one is selected.
    #[must_use]
    pub fn sole(&self) -> Option<&SelectedElement> {
        match self.elements.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Source type of the only selected element, if exactly one is selected.
    #[must_use]
    pub fn sole_source_type(&self) -> Option<SourceType> {
        self.sole().map(|e| e.source_type)
    }

    /// Whether width and height edits keep the aspect ratio.
    #[must_use]
    pub fn uniform_scaling_locked(&self) -> bool {
        self.uniform_scaling_state.unwrap_or(true)
    }

    /// IDs of the selected elements.
    #[must_use]
    pub fn element_ids(&self) -> Vec<ElementId> {
        self.elements.iter().map(|e| e.id).collect()
    }
}

/// Everything the panel reads from the editor model at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorSnapshot {
    /// Machine work area.
    #[serde(default)]
    pub work_area: WorkArea,
    /// Aggregate bounding transform of the selection.
    #[serde(default)]
    pub transformation: ShapeTransform,
    /// Current selection.
    #[serde(default)]
    pub selection: SelectionContext,
}

impl EditorSnapshot {
    /// Create a snapshot.
    #[must_use]
    pub fn new(
        work_area: WorkArea,
        transformation: ShapeTransform,
        selection: SelectionContext,
    ) -> Self {
        Self {
            work_area,
            transformation,
            selection,
        }
    }

    /// Parse a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a snapshot.
    pub fn from_json(json: &str) -> TransformResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the snapshot to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> TransformResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Provides the latest editor snapshot on demand.
///
/// The panel pulls a fresh snapshot before every query and every edit, so
/// nothing derived from an old snapshot outlives it.
pub trait SnapshotSource {
    /// Read the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot be read.
    fn snapshot(&self) -> TransformResult<EditorSnapshot>;
}

impl SnapshotSource for EditorSnapshot {
    fn snapshot(&self) -> TransformResult<EditorSnapshot> {
        Ok(self.clone())
    }
}

impl<F> SnapshotSource for F
where
    F: Fn() -> TransformResult<EditorSnapshot>,
{
    fn snapshot(&self) -> TransformResult<EditorSnapshot> {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_scaling_defaults_to_locked() {
        let selection = SelectionContext::new(vec![SelectedElement::new(SourceType::Vector)]);
        assert!(selection.uniform_scaling_locked());
        assert!(!selection.with_uniform_scaling(false).uniform_scaling_locked());
    }

    #[test]
    fn test_sole_source_type_only_for_single_selection() {
        let single = SelectionContext::new(vec![SelectedElement::new(SourceType::Text)]);
        assert_eq!(single.sole_source_type(), Some(SourceType::Text));

        let multi = SelectionContext::new(vec![
            SelectedElement::new(SourceType::Text),
            SelectedElement::new(SourceType::Raster),
        ]);
        assert_eq!(multi.sole_source_type(), None);
        assert_eq!(SelectionContext::default().sole_source_type(), None);
    }

    #[test]
    fn test_snapshot_from_json() {
        let json = r#"{
            "work_area": {"x": 150, "y": 100},
            "transformation": {"x": 50, "y": 40, "width": 20, "height": 10, "angle": 30},
            "selection": {"elements": [{"id": "936da01f-9abd-4d9d-80c7-02af85c822a8", "source_type": "raster", "visible": false}]}
        }"#;
        let snapshot = EditorSnapshot::from_json(json).expect("should parse");
        assert!((snapshot.work_area.x - 150.0).abs() < f64::EPSILON);
        assert_eq!(snapshot.selection.len(), 1);
        assert!(!snapshot.selection.elements[0].visible);
        assert!(snapshot.selection.uniform_scaling_state.is_none());
    }

    #[test]
    fn test_snapshot_json_preserves_ids() {
        let selection = SelectionContext::new(vec![SelectedElement::new(SourceType::Vector)]);
        let id = selection.elements[0].id;
        let snapshot = EditorSnapshot::new(WorkArea::default(), ShapeTransform::default(), selection);

        let json = snapshot.to_json().expect("serialize");
        let parsed = EditorSnapshot::from_json(&json).expect("parse");
        assert_eq!(parsed.selection.element_ids(), vec![id]);
    }

    #[test]
    fn test_closure_snapshot_source() {
        let source = || Ok(EditorSnapshot::default());
        let snapshot = source.snapshot().expect("snapshot");
        assert!(snapshot.selection.is_empty());
    }
}
