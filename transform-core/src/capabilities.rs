//! Which edits the current selection allows.

use serde::{Deserialize, Serialize};

use crate::element::SourceType;
use crate::selection::SelectionContext;

/// Enablement of every panel input, computed once per snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct EditCapabilities {
    /// Any input is enabled at all.
    pub enabled: bool,
    /// Position inputs accept edits.
    pub can_move: bool,
    /// Width and height inputs accept edits.
    pub can_resize: bool,
    /// Angle input accepts edits.
    pub can_rotate: bool,
    /// Flip buttons accept clicks.
    pub can_flip: bool,
    /// Aspect-ratio lock button accepts clicks.
    pub can_toggle_uniform_scaling: bool,
}

impl EditCapabilities {
    /// Derive capabilities from a selection.
    ///
    /// `disabled` is the panel-wide switch (for example while a job is
    /// running); when set every capability is off.
    #[must_use]
    pub fn from_selection(selection: &SelectionContext, disabled: bool) -> Self {
        let single = selection.sole();
        // Visibility only matters for a single selection.
        let enabled = !disabled
            && match selection.len() {
                0 => false,
                1 => single.is_some_and(|e| e.visible),
                _ => true,
            };

        let can_resize =
            enabled && single.is_some_and(|e| e.source_type.is_resizable());
        let can_rotate = enabled && single.is_some();
        let can_toggle_uniform_scaling = enabled
            && selection
                .sole_source_type()
                .is_none_or(SourceType::can_toggle_uniform_scaling);

        Self {
            enabled,
            can_move: enabled,
            can_resize,
            can_rotate,
            can_flip: enabled,
            can_toggle_uniform_scaling,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SelectedElement;

    fn single(source_type: SourceType) -> SelectionContext {
        SelectionContext::new(vec![SelectedElement::new(source_type)])
    }

    #[test]
    fn test_empty_selection_disables_everything() {
        let caps = EditCapabilities::from_selection(&SelectionContext::default(), false);
        assert_eq!(caps, EditCapabilities::default());
    }

    #[test]
    fn test_single_vector_allows_everything() {
        let caps = EditCapabilities::from_selection(&single(SourceType::Vector), false);
        assert!(caps.enabled);
        assert!(caps.can_move);
        assert!(caps.can_resize);
        assert!(caps.can_rotate);
        assert!(caps.can_flip);
        assert!(caps.can_toggle_uniform_scaling);
    }

    #[test]
    fn test_text_cannot_resize() {
        let caps = EditCapabilities::from_selection(&single(SourceType::Text), false);
        assert!(!caps.can_resize);
        assert!(caps.can_rotate);
        assert!(caps.can_toggle_uniform_scaling);
    }

    #[test]
    fn test_raster_cannot_toggle_lock() {
        let caps = EditCapabilities::from_selection(&single(SourceType::Raster), false);
        assert!(caps.can_resize);
        assert!(!caps.can_toggle_uniform_scaling);
    }

    #[test]
    fn test_hidden_single_element_disables_inputs() {
        let selection = SelectionContext::new(vec![
            SelectedElement::new(SourceType::Vector).with_visible(false)
        ]);
        let caps = EditCapabilities::from_selection(&selection, false);
        assert_eq!(caps, EditCapabilities::default());
    }

    #[test]
    fn test_multi_selection_ignores_visibility() {
        let selection = SelectionContext::new(vec![
            SelectedElement::new(SourceType::Vector).with_visible(false),
            SelectedElement::new(SourceType::Raster).with_visible(false),
        ]);
        let caps = EditCapabilities::from_selection(&selection, false);
        assert!(caps.enabled);
        assert!(caps.can_move);
        assert!(caps.can_flip);
        assert!(!caps.can_resize);
        assert!(!caps.can_rotate);
        assert!(caps.can_toggle_uniform_scaling);
    }

    #[test]
    fn test_panel_disabled_overrides_selection() {
        let caps = EditCapabilities::from_selection(&single(SourceType::Vector), true);
        assert_eq!(caps, EditCapabilities::default());
    }
}
