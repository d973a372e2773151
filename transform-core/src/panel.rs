//! Transformation panel - what the user sees and what their edits do.
//!
//! The panel pulls a fresh [`EditorSnapshot`] from its [`SnapshotSource`]
//! for every query and every edit. It never caches derived values.

use serde::{Deserialize, Serialize};

use crate::capabilities::EditCapabilities;
use crate::dispatcher::{Dispatch, EditIntentDispatcher, MIN_SIZE};
use crate::error::TransformResult;
use crate::mapper::CoordinateMapper;
use crate::queue::CommandSink;
use crate::selection::{EditorSnapshot, SnapshotSource};
use crate::transform::{LogicalTransform, WorkArea};

/// Closed range an input accepts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    /// Smallest accepted value.
    pub min: f64,
    /// Largest accepted value.
    pub max: f64,
}

impl Bound {
    /// Create a bound.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Pull `value` into the range.
    ///
    /// If the range is inverted (a work area smaller than the minimum size)
    /// the minimum wins.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.min(self.max).max(self.min)
    }

    /// Check if `value` is inside the range.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Ranges of the numeric inputs. Angle is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputBounds {
    /// Logical X.
    pub x: Bound,
    /// Logical Y.
    pub y: Bound,
    /// Width.
    pub width: Bound,
    /// Height.
    pub height: Bound,
}

impl InputBounds {
    /// Bounds for a work area.
    #[must_use]
    pub fn for_area(area: WorkArea) -> Self {
        Self {
            x: Bound::new(-area.x, area.x),
            y: Bound::new(-area.y, area.y),
            width: Bound::new(MIN_SIZE, area.x),
            height: Bound::new(MIN_SIZE, area.y),
        }
    }
}

/// Logical values formatted for display, one decimal place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayValues {
    /// X in mm.
    pub x: String,
    /// Y in mm.
    pub y: String,
    /// Width in mm.
    pub width: String,
    /// Height in mm.
    pub height: String,
    /// Angle in degrees.
    pub angle: String,
}

impl From<&LogicalTransform> for DisplayValues {
    fn from(t: &LogicalTransform) -> Self {
        Self {
            x: format_value(t.x),
            y: format_value(t.y),
            width: format_value(t.width),
            height: format_value(t.height),
            angle: format_value(t.angle),
        }
    }
}

/// Format a value the way the panel inputs show it.
///
/// One decimal, with ties rounded away from zero (`12.25` shows as `12.3`).
#[must_use]
pub fn format_value(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    let formatted = format!("{rounded:.1}");
    // Avoid showing "-0.0" for tiny negative values.
    if formatted == "-0.0" {
        "0.0".to_string()
    } else {
        formatted
    }
}

/// Everything needed to render the panel for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelView {
    /// Logical transform of the selection.
    pub logical: LogicalTransform,
    /// Formatted input values.
    pub display: DisplayValues,
    /// State of the aspect-ratio lock icon.
    pub uniform_scaling_locked: bool,
    /// Which inputs are enabled.
    pub capabilities: EditCapabilities,
    /// Input ranges.
    pub bounds: InputBounds,
    /// Number of selected elements.
    pub selection_count: usize,
}

impl PanelView {
    /// Derive the view for a snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: &EditorSnapshot, disabled: bool) -> Self {
        let logical = CoordinateMapper::new(snapshot.work_area).to_logical(&snapshot.transformation);
        Self {
            display: DisplayValues::from(&logical),
            logical,
            uniform_scaling_locked: snapshot.selection.uniform_scaling_locked(),
            capabilities: EditCapabilities::from_selection(&snapshot.selection, disabled),
            bounds: InputBounds::for_area(snapshot.work_area),
            selection_count: snapshot.selection.len(),
        }
    }
}

/// Transformation panel over an external editor model.
#[derive(Debug, Clone)]
pub struct TransformationPanel<Src> {
    source: Src,
    disabled: bool,
}

impl<Src: SnapshotSource> TransformationPanel<Src> {
    /// Create a panel reading from `source`.
    #[must_use]
    pub fn new(source: Src) -> Self {
        Self {
            source,
            disabled: false,
        }
    }

    /// Set the panel-wide disabled flag.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the panel-wide disabled flag in place.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Whether the panel is disabled as a whole.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Access the snapshot source.
    #[must_use]
    pub fn source(&self) -> &Src {
        &self.source
    }

    /// Derive the view from the latest snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read.
    pub fn view(&self) -> TransformResult<PanelView> {
        let snapshot = self.source.snapshot()?;
        Ok(PanelView::from_snapshot(&snapshot, self.disabled))
    }

    /// Edit logical X.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or the sink refuses the command.
    pub fn set_logical_x(&self, value: f64, sink: impl CommandSink) -> TransformResult<Dispatch> {
        let snapshot = self.source.snapshot()?;
        self.dispatcher(&snapshot, sink).set_logical_x(value)
    }

    /// Edit logical Y.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or the sink refuses the command.
    pub fn set_logical_y(&self, value: f64, sink: impl CommandSink) -> TransformResult<Dispatch> {
        let snapshot = self.source.snapshot()?;
        self.dispatcher(&snapshot, sink).set_logical_y(value)
    }

    /// Edit width.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or the sink refuses the command.
    pub fn set_width(&self, value: f64, sink: impl CommandSink) -> TransformResult<Dispatch> {
        let snapshot = self.source.snapshot()?;
        self.dispatcher(&snapshot, sink).set_width(value)
    }

    /// Edit height.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or the sink refuses the command.
    pub fn set_height(&self, value: f64, sink: impl CommandSink) -> TransformResult<Dispatch> {
        let snapshot = self.source.snapshot()?;
        self.dispatcher(&snapshot, sink).set_height(value)
    }

    /// Edit logical angle.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or the sink refuses the command.
    pub fn set_logical_angle(
        &self,
        value: f64,
        sink: impl CommandSink,
    ) -> TransformResult<Dispatch> {
        let snapshot = self.source.snapshot()?;
        self.dispatcher(&snapshot, sink).set_logical_angle(value)
    }

    /// Click the horizontal flip button.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or the sink refuses the command.
    pub fn flip_horizontal(&self, sink: impl CommandSink) -> TransformResult<Dispatch> {
        let snapshot = self.source.snapshot()?;
        self.dispatcher(&snapshot, sink).flip_horizontal()
    }

    /// Click the vertical flip button.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or the sink refuses the command.
    pub fn flip_vertical(&self, sink: impl CommandSink) -> TransformResult<Dispatch> {
        let snapshot = self.source.snapshot()?;
        self.dispatcher(&snapshot, sink).flip_vertical()
    }

    /// Set the aspect-ratio lock to an explicit state.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or the sink refuses the command.
    pub fn set_uniform_scaling(
        &self,
        locked: bool,
        sink: impl CommandSink,
    ) -> TransformResult<Dispatch> {
        let snapshot = self.source.snapshot()?;
        self.dispatcher(&snapshot, sink).set_uniform_scaling(locked)
    }

    /// Click the aspect-ratio lock button, inverting the current lock.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or the sink refuses the command.
    pub fn toggle_uniform_scaling(&self, sink: impl CommandSink) -> TransformResult<Dispatch> {
        let snapshot = self.source.snapshot()?;
        let locked = snapshot.selection.uniform_scaling_locked();
        self.dispatcher(&snapshot, sink).set_uniform_scaling(!locked)
    }

    fn dispatcher<'s, S: CommandSink>(
        &self,
        snapshot: &'s EditorSnapshot,
        sink: S,
    ) -> EditIntentDispatcher<'s, S> {
        EditIntentDispatcher::new(snapshot, self.disabled, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        EditCommand, ResizeTarget, SelectedElement, SelectionContext, ShapeTransform, SourceType,
    };

    fn example_snapshot() -> EditorSnapshot {
        EditorSnapshot::new(
            WorkArea::new(150.0, 100.0),
            ShapeTransform {
                x: 50.0,
                y: 40.0,
                width: 20.0,
                height: 10.0,
                scale_x: 1.0,
                scale_y: 1.0,
                angle: 30.0,
            },
            SelectionContext::new(vec![SelectedElement::new(SourceType::Vector)]),
        )
    }

    #[test]
    fn test_view_shows_logical_values() {
        let panel = TransformationPanel::new(example_snapshot());
        let view = panel.view().expect("view");

        assert_eq!(view.display.x, "-100.0");
        assert_eq!(view.display.y, "60.0");
        assert_eq!(view.display.width, "20.0");
        assert_eq!(view.display.height, "10.0");
        assert_eq!(view.display.angle, "-30.0");
        assert!(view.uniform_scaling_locked);
        assert!(view.capabilities.can_resize);
        assert_eq!(view.selection_count, 1);
    }

    #[test]
    fn test_bounds_follow_work_area() {
        let bounds = InputBounds::for_area(WorkArea::new(150.0, 100.0));
        assert_eq!(bounds.x, Bound::new(-150.0, 150.0));
        assert_eq!(bounds.y, Bound::new(-100.0, 100.0));
        assert_eq!(bounds.width, Bound::new(1.0, 150.0));
        assert_eq!(bounds.height, Bound::new(1.0, 100.0));
    }

    #[test]
    fn test_bound_clamp() {
        let bound = Bound::new(1.0, 150.0);
        assert!((bound.clamp(0.2) - 1.0).abs() < f64::EPSILON);
        assert!((bound.clamp(400.0) - 150.0).abs() < f64::EPSILON);
        assert!((bound.clamp(42.0) - 42.0).abs() < f64::EPSILON);
        assert!(bound.contains(150.0));
        assert!(!bound.contains(150.5));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(12.345), "12.3");
        assert_eq!(format_value(-0.01), "0.0");
        assert_eq!(format_value(7.0), "7.0");
    }

    #[test]
    fn test_format_value_rounds_ties_away_from_zero() {
        assert_eq!(format_value(12.25), "12.3");
        assert_eq!(format_value(0.25), "0.3");
        assert_eq!(format_value(-0.25), "-0.3");
        assert_eq!(format_value(-0.04), "0.0");
    }

    #[test]
    fn test_panel_edit_uses_latest_snapshot() {
        let panel = TransformationPanel::new(example_snapshot());
        let mut sink: Vec<EditCommand> = Vec::new();
        panel.set_width(40.0, &mut sink).expect("edit");

        assert!(matches!(
            sink[..],
            [EditCommand::Resize {
                target: ResizeTarget::Both { .. },
                ..
            }]
        ));
    }

    #[test]
    fn test_toggle_inverts_default_lock() {
        let panel = TransformationPanel::new(example_snapshot());
        let mut sink: Vec<EditCommand> = Vec::new();
        panel.toggle_uniform_scaling(&mut sink).expect("toggle");

        assert!(matches!(
            sink[..],
            [EditCommand::SetUniformScalingState {
                uniform_scaling_state: false,
                ..
            }]
        ));
    }

    #[test]
    fn test_disabled_panel_view_and_edits() {
        let panel = TransformationPanel::new(example_snapshot()).with_disabled(true);
        let view = panel.view().expect("view");
        assert!(!view.capabilities.enabled);

        let mut sink: Vec<EditCommand> = Vec::new();
        let result = panel.flip_vertical(&mut sink).expect("flip");
        assert!(!result.is_sent());
        assert!(sink.is_empty());
    }
}
