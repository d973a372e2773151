//! Turns logical values entered by the user into shape-space edit commands.
//!
//! Every operation submits at most one [`EditCommand`]. When the selection
//! does not allow the edit, nothing is submitted and the operation returns
//! [`Dispatch::Skipped`] with the reason.

use serde::{Deserialize, Serialize};

use crate::capabilities::EditCapabilities;
use crate::command::{EditCommand, MoveTarget, ResizeTarget};
use crate::element::ElementId;
use crate::error::TransformResult;
use crate::mapper::{self, CoordinateMapper};
use crate::queue::CommandSink;
use crate::selection::EditorSnapshot;

/// Smallest width or height a resize may request.
pub const MIN_SIZE: f64 = 1.0;

/// Why an edit produced no command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The panel is disabled as a whole.
    PanelDisabled,
    /// Nothing is selected.
    NoSelection,
    /// The only selected element is hidden.
    Hidden,
    /// The edit needs exactly one selected element.
    NotSingleSelection,
    /// Text elements cannot be resized.
    TextNotResizable,
    /// The aspect-ratio lock of raster elements is fixed.
    RasterLockFixed,
    /// The requested size is below [`MIN_SIZE`].
    BelowMinimumSize,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::PanelDisabled => "panel is disabled",
            Self::NoSelection => "nothing is selected",
            Self::Hidden => "selected element is hidden",
            Self::NotSingleSelection => "exactly one element must be selected",
            Self::TextNotResizable => "text cannot be resized",
            Self::RasterLockFixed => "raster aspect ratio lock cannot be changed",
            Self::BelowMinimumSize => "size is below the minimum",
        };
        f.write_str(text)
    }
}

/// Outcome of one edit.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    /// The command was submitted to the sink.
    Sent(EditCommand),
    /// No command was submitted.
    Skipped(SkipReason),
}

impl Dispatch {
    /// Whether a command was submitted.
    #[must_use]
    pub const fn is_sent(&self) -> bool {
        matches!(self, Self::Sent(_))
    }

    /// The submitted command, if any.
    #[must_use]
    pub const fn command(&self) -> Option<&EditCommand> {
        match self {
            Self::Sent(command) => Some(command),
            Self::Skipped(_) => None,
        }
    }
}

/// Edit intent dispatcher bound to one snapshot.
///
/// Build a new dispatcher for each snapshot; it holds no state of its own
/// beyond the capabilities derived from that snapshot.
#[derive(Debug)]
pub struct EditIntentDispatcher<'a, S> {
    snapshot: &'a EditorSnapshot,
    capabilities: EditCapabilities,
    disabled: bool,
    sink: S,
}

impl<'a, S: CommandSink> EditIntentDispatcher<'a, S> {
    /// Create a dispatcher for `snapshot` that submits into `sink`.
    #[must_use]
    pub fn new(snapshot: &'a EditorSnapshot, disabled: bool, sink: S) -> Self {
        Self {
            snapshot,
            capabilities: EditCapabilities::from_selection(&snapshot.selection, disabled),
            disabled,
            sink,
        }
    }

    /// Capabilities derived from the snapshot.
    #[must_use]
    pub const fn capabilities(&self) -> EditCapabilities {
        self.capabilities
    }

    /// Give the sink back.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Move the selection to a logical X.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink refuses the command.
    pub fn set_logical_x(&mut self, value: f64) -> TransformResult<Dispatch> {
        if let Some(reason) = self.check(self.capabilities.can_move, SkipReason::NoSelection) {
            return Ok(Self::skip("set_logical_x", reason));
        }
        let target = MoveTarget::X(self.mapper().shape_x(value));
        self.send(EditCommand::Move {
            elements: self.elements(),
            target,
        })
    }

    /// Move the selection to a logical Y.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink refuses the command.
    pub fn set_logical_y(&mut self, value: f64) -> TransformResult<Dispatch> {
        if let Some(reason) = self.check(self.capabilities.can_move, SkipReason::NoSelection) {
            return Ok(Self::skip("set_logical_y", reason));
        }
        let target = MoveTarget::Y(self.mapper().shape_y(value));
        self.send(EditCommand::Move {
            elements: self.elements(),
            target,
        })
    }

    /// Resize the selection to a new logical width.
    ///
    /// With the uniform scaling lock set the height follows to keep the
    /// current aspect ratio.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink refuses the command.
    pub fn set_width(&mut self, value: f64) -> TransformResult<Dispatch> {
        if let Some(reason) = self.check_resize(value) {
            return Ok(Self::skip("set_width", reason));
        }
        let shape = &self.snapshot.transformation;
        let (width, height) = (shape.scaled_width(), shape.scaled_height());

        let target = if !self.snapshot.selection.uniform_scaling_locked() {
            ResizeTarget::Width(value)
        } else if width.abs() < f64::EPSILON {
            tracing::warn!("Cannot keep aspect ratio of a zero-width selection, resizing width only");
            ResizeTarget::Width(value)
        } else {
            ResizeTarget::Both {
                width: value,
                height: height * (value / width),
            }
        };
        self.send(EditCommand::Resize {
            elements: self.elements(),
            target,
        })
    }

    /// Resize the selection to a new logical height.
    ///
    /// With the uniform scaling lock set the width follows to keep the
    /// current aspect ratio.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink refuses the command.
    pub fn set_height(&mut self, value: f64) -> TransformResult<Dispatch> {
        if let Some(reason) = self.check_resize(value) {
            return Ok(Self::skip("set_height", reason));
        }
        let shape = &self.snapshot.transformation;
        let (width, height) = (shape.scaled_width(), shape.scaled_height());

        let target = if !self.snapshot.selection.uniform_scaling_locked() {
            ResizeTarget::Height(value)
        } else if height.abs() < f64::EPSILON {
            tracing::warn!("Cannot keep aspect ratio of a zero-height selection, resizing height only");
            ResizeTarget::Height(value)
        } else {
            ResizeTarget::Both {
                width: width * (value / height),
                height: value,
            }
        };
        self.send(EditCommand::Resize {
            elements: self.elements(),
            target,
        })
    }

    /// Rotate the selection to a logical angle in degrees.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink refuses the command.
    pub fn set_logical_angle(&mut self, value: f64) -> TransformResult<Dispatch> {
        if let Some(reason) =
            self.check(self.capabilities.can_rotate, SkipReason::NotSingleSelection)
        {
            return Ok(Self::skip("set_logical_angle", reason));
        }
        self.send(EditCommand::Rotate {
            elements: self.elements(),
            angle: mapper::shape_angle(value),
        })
    }

    /// Mirror the selection about its vertical axis.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink refuses the command.
    pub fn flip_horizontal(&mut self) -> TransformResult<Dispatch> {
        if let Some(reason) = self.check(self.capabilities.can_flip, SkipReason::NoSelection) {
            return Ok(Self::skip("flip_horizontal", reason));
        }
        self.send(EditCommand::FlipHorizontal {
            elements: self.elements(),
        })
    }

    /// Mirror the selection about its horizontal axis.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink refuses the command.
    pub fn flip_vertical(&mut self) -> TransformResult<Dispatch> {
        if let Some(reason) = self.check(self.capabilities.can_flip, SkipReason::NoSelection) {
            return Ok(Self::skip("flip_vertical", reason));
        }
        self.send(EditCommand::FlipVertical {
            elements: self.elements(),
        })
    }

    /// Persist a new aspect-ratio lock for the selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink refuses the command.
    pub fn set_uniform_scaling(&mut self, locked: bool) -> TransformResult<Dispatch> {
        if let Some(reason) = self.check(
            self.capabilities.can_toggle_uniform_scaling,
            SkipReason::RasterLockFixed,
        ) {
            return Ok(Self::skip("set_uniform_scaling", reason));
        }
        self.send(EditCommand::SetUniformScalingState {
            elements: self.elements(),
            uniform_scaling_state: locked,
        })
    }

    fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.snapshot.work_area)
    }

    fn elements(&self) -> Vec<ElementId> {
        self.snapshot.selection.element_ids()
    }

    /// Reason an edit guarded by `allowed` cannot run, if any.
    ///
    /// General reasons (disabled panel, empty or hidden selection) win over
    /// the edit-specific one.
    fn check(&self, allowed: bool, specific: SkipReason) -> Option<SkipReason> {
        if allowed {
            return None;
        }
        let selection = &self.snapshot.selection;
        let reason = if self.disabled {
            SkipReason::PanelDisabled
        } else if selection.is_empty() {
            SkipReason::NoSelection
        } else if selection.sole().is_some_and(|e| !e.visible) {
            SkipReason::Hidden
        } else {
            specific
        };
        Some(reason)
    }

    fn check_resize(&self, value: f64) -> Option<SkipReason> {
        let specific = if self.snapshot.selection.sole().is_some() {
            SkipReason::TextNotResizable
        } else {
            SkipReason::NotSingleSelection
        };
        self.check(self.capabilities.can_resize, specific).or({
            if value < MIN_SIZE {
                Some(SkipReason::BelowMinimumSize)
            } else {
                None
            }
        })
    }

    fn skip(operation: &str, reason: SkipReason) -> Dispatch {
        tracing::debug!("Skipping {operation}: {reason}");
        Dispatch::Skipped(reason)
    }

    fn send(&mut self, command: EditCommand) -> TransformResult<Dispatch> {
        tracing::debug!(
            "Dispatching {} for {} element(s)",
            command.name(),
            command.elements().len()
        );
        self.sink.submit(command.clone())?;
        Ok(Dispatch::Sent(command))
    }
}
