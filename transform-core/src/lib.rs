//! # Transform Core
//!
//! Transformation panel logic for a laser/CNC editor: shows the position,
//! size and rotation of the selected shapes in machine coordinates and turns
//! user edits into commands for the editor model.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               transform-core                │
//! ├─────────────────────────────────────────────┤
//! │  SnapshotSource ──► TransformationPanel     │
//! │                      │            │         │
//! │          CoordinateMapper   EditCapabilities│
//! │                      │            │         │
//! │                 EditIntentDispatcher        │
//! │                      │                      │
//! │                 CommandSink ──► editor model│
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Shape space has its origin at the top-left of the bed with Y pointing
//! down. Logical space is centered on the work area with Y pointing up.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod capabilities;
pub mod command;
pub mod dispatcher;
pub mod element;
pub mod error;
pub mod mapper;
pub mod panel;
pub mod queue;
pub mod selection;
pub mod transform;

pub use capabilities::EditCapabilities;
pub use command::{EditCommand, MoveTarget, ResizeTarget};
pub use dispatcher::{Dispatch, EditIntentDispatcher, SkipReason, MIN_SIZE};
pub use element::{ElementId, SelectedElement, SourceType};
pub use error::{TransformError, TransformResult};
pub use mapper::{to_logical, CoordinateMapper};
pub use panel::{Bound, DisplayValues, InputBounds, PanelView, TransformationPanel};
pub use queue::{CommandQueue, CommandSink, QueuedCommand};
pub use selection::{EditorSnapshot, SelectionContext, SnapshotSource};
pub use transform::{LogicalPoint, LogicalTransform, ShapePoint, ShapeTransform, WorkArea};

/// Transform core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
