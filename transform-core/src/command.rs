//! Edit commands sent to the editor model.
//!
//! All coordinates in a command are in shape space. The element list is
//! passed through from the selection untouched.

use serde::{Deserialize, Serialize};

use crate::element::ElementId;

/// New position for a move. Only one axis changes per edit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveTarget {
    /// Move to a new shape-space X; Y unchanged.
    X(f64),
    /// Move to a new shape-space Y; X unchanged.
    Y(f64),
}

/// New size for a resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeTarget {
    /// Change width only.
    Width(f64),
    /// Change height only.
    Height(f64),
    /// Change both, keeping the aspect ratio.
    Both {
        /// New width.
        width: f64,
        /// New height.
        height: f64,
    },
}

impl ResizeTarget {
    /// New width, if this resize changes it.
    #[must_use]
    pub const fn width(&self) -> Option<f64> {
        match self {
            Self::Width(width) | Self::Both { width, .. } => Some(*width),
            Self::Height(_) => None,
        }
    }

    /// New height, if this resize changes it.
    #[must_use]
    pub const fn height(&self) -> Option<f64> {
        match self {
            Self::Height(height) | Self::Both { height, .. } => Some(*height),
            Self::Width(_) => None,
        }
    }
}

/// A single edit request for the editor model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EditCommand {
    /// Move the selection.
    Move {
        /// Elements to move.
        elements: Vec<ElementId>,
        /// New position along one axis.
        target: MoveTarget,
    },
    /// Resize the selection.
    Resize {
        /// Elements to resize.
        elements: Vec<ElementId>,
        /// New size.
        target: ResizeTarget,
    },
    /// Rotate the selection to an absolute angle.
    Rotate {
        /// Elements to rotate.
        elements: Vec<ElementId>,
        /// New angle in degrees, shape convention.
        angle: f64,
    },
    /// Mirror the selection about its vertical axis.
    FlipHorizontal {
        /// Elements to mirror.
        elements: Vec<ElementId>,
    },
    /// Mirror the selection about its horizontal axis.
    FlipVertical {
        /// Elements to mirror.
        elements: Vec<ElementId>,
    },
    /// Persist the aspect-ratio lock of the selection. Geometry is unchanged.
    SetUniformScalingState {
        /// Elements the lock belongs to.
        elements: Vec<ElementId>,
        /// New lock state.
        uniform_scaling_state: bool,
    },
}

impl EditCommand {
    /// Elements this command applies to.
    #[must_use]
    pub fn elements(&self) -> &[ElementId] {
        match self {
            Self::Move { elements, .. }
            | Self::Resize { elements, .. }
            | Self::Rotate { elements, .. }
            | Self::FlipHorizontal { elements }
            | Self::FlipVertical { elements }
            | Self::SetUniformScalingState { elements, .. } => elements,
        }
    }

    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Move { .. } => "move",
            Self::Resize { .. } => "resize",
            Self::Rotate { .. } => "rotate",
            Self::FlipHorizontal { .. } => "flip_horizontal",
            Self::FlipVertical { .. } => "flip_vertical",
            Self::SetUniformScalingState { .. } => "set_uniform_scaling_state",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_target_accessors() {
        let both = ResizeTarget::Both {
            width: 40.0,
            height: 20.0,
        };
        assert_eq!(both.width(), Some(40.0));
        assert_eq!(both.height(), Some(20.0));
        assert_eq!(ResizeTarget::Width(3.0).height(), None);
        assert_eq!(ResizeTarget::Height(3.0).width(), None);
    }

    #[test]
    fn test_command_serializes_with_tag() {
        let command = EditCommand::Rotate {
            elements: vec![],
            angle: -30.0,
        };
        let json = serde_json::to_value(&command).expect("serialize");
        assert_eq!(json["command"], "rotate");
        assert_eq!(json["angle"], -30.0);
    }

    #[test]
    fn test_move_target_json_shape() {
        let command = EditCommand::Move {
            elements: vec![],
            target: MoveTarget::Y(40.0),
        };
        let json = serde_json::to_value(&command).expect("serialize");
        assert_eq!(json["target"]["y"], 40.0);
        assert_eq!(command.name(), "move");
    }
}
