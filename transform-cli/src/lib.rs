//! # Transform CLI
//!
//! Command-line input surface for the transformation panel.
//!
//! ## Usage
//!
//! ```bash
//! transform-cli --snapshot selection.json show
//! transform-cli --snapshot selection.json edit width 40
//! transform-cli --snapshot selection.json edit x -12.5
//! TRANSFORM_SNAPSHOT=selection.json transform-cli edit uniform-scaling
//! ```
//!
//! ## Architecture
//!
//! - `CliArgs` - Command-line arguments parsed with clap
//! - `CliConfig` - What to run, resolved from the arguments
//! - `FileSnapshot` - Snapshot source that re-reads the JSON file on every query
//! - `input` - Parsing and clamping of typed values before they reach the dispatcher

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

pub mod input;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use transform_core::{
    Bound, CommandQueue, Dispatch, EditCommand, EditorSnapshot, SkipReason, SnapshotSource,
    TransformError, TransformResult, TransformationPanel,
};

/// Errors surfaced to the command line.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The edit needs a value but none was given.
    #[error("Field `{0}` needs a value")]
    MissingValue(&'static str),
    /// Error from the transformation core.
    #[error(transparent)]
    Core(#[from] TransformError),
}

/// Command-line arguments for transform-cli.
#[derive(Debug, Clone, Parser)]
#[command(name = "transform-cli")]
#[command(about = "Inspect and edit the transformation of a selection in machine coordinates")]
#[command(version)]
pub struct CliArgs {
    /// Path to the editor snapshot (JSON)
    #[arg(long, env = "TRANSFORM_SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Treat the whole panel as disabled
    #[arg(long, env = "TRANSFORM_DISABLED")]
    pub disabled: bool,

    /// What to do
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Print the panel view for the snapshot
    Show,
    /// Apply one edit and print the resulting command
    Edit {
        /// Field to edit
        #[arg(value_enum)]
        field: Field,
        /// New value; omit for flips, or to toggle uniform scaling
        #[arg(allow_negative_numbers = true)]
        value: Option<String>,
    },
}

/// Editable panel fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Field {
    /// Logical X in mm.
    X,
    /// Logical Y in mm.
    Y,
    /// Width in mm.
    Width,
    /// Height in mm.
    Height,
    /// Angle in degrees.
    Angle,
    /// Mirror about the vertical axis.
    FlipHorizontal,
    /// Mirror about the horizontal axis.
    FlipVertical,
    /// Aspect-ratio lock.
    UniformScaling,
}

impl Field {
    /// Name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Width => "width",
            Self::Height => "height",
            Self::Angle => "angle",
            Self::FlipHorizontal => "flip-horizontal",
            Self::FlipVertical => "flip-vertical",
            Self::UniformScaling => "uniform-scaling",
        }
    }
}

/// Resolved action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print the panel view.
    Show,
    /// Apply one edit.
    Edit {
        /// Field to edit.
        field: Field,
        /// Raw value as typed.
        value: Option<String>,
    },
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Snapshot file.
    pub snapshot: PathBuf,
    /// Panel-wide disabled flag.
    pub disabled: bool,
    /// What to run.
    pub action: Action,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        let action = match args.command {
            CliCommand::Show => Action::Show,
            CliCommand::Edit { field, value } => Action::Edit { field, value },
        };
        Self {
            snapshot: args.snapshot,
            disabled: args.disabled,
            action,
        }
    }
}

/// Snapshot source backed by a JSON file, read on every query.
#[derive(Debug, Clone)]
pub struct FileSnapshot {
    path: PathBuf,
}

impl FileSnapshot {
    /// Create a source for `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSource for FileSnapshot {
    fn snapshot(&self) -> TransformResult<EditorSnapshot> {
        let contents = std::fs::read_to_string(&self.path)?;
        tracing::debug!("Read snapshot from {}", self.path.display());
        EditorSnapshot::from_json(&contents)
    }
}

/// Result of one edit, as printed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditReport {
    /// Edited field.
    pub field: &'static str,
    /// Value passed to the dispatcher after parsing and clamping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Command sent to the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<EditCommand>,
    /// Why nothing was sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<SkipReason>,
}

/// Run the configured action and return its JSON output.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be read, the value cannot be
/// parsed, or output serialization fails.
pub fn run(config: &CliConfig) -> Result<String, CliError> {
    let panel =
        TransformationPanel::new(FileSnapshot::new(&config.snapshot)).with_disabled(config.disabled);

    match &config.action {
        Action::Show => {
            let view = panel.view()?;
            Ok(to_json(&view)?)
        }
        Action::Edit { field, value } => {
            let report = apply_edit(&panel, *field, value.as_deref())?;
            Ok(to_json(&report)?)
        }
    }
}

/// Parse `raw` for `field` and submit the edit through `panel`.
///
/// # Errors
///
/// Returns an error if a required value is missing or invalid, or the panel
/// fails to read its snapshot.
pub fn apply_edit<Src: SnapshotSource>(
    panel: &TransformationPanel<Src>,
    field: Field,
    raw: Option<&str>,
) -> Result<EditReport, CliError> {
    let bounds = panel.view()?.bounds;
    let mut queue = CommandQueue::new();

    let numeric = |bound: Option<Bound>| -> Result<f64, CliError> {
        let raw = raw.ok_or(CliError::MissingValue(field.name()))?;
        Ok(input::parse_value(raw, bound)?)
    };

    let (value, dispatch) = match field {
        Field::X => {
            let v = numeric(Some(bounds.x))?;
            (Some(v), panel.set_logical_x(v, &mut queue)?)
        }
        Field::Y => {
            let v = numeric(Some(bounds.y))?;
            (Some(v), panel.set_logical_y(v, &mut queue)?)
        }
        Field::Width => {
            let v = numeric(Some(bounds.width))?;
            (Some(v), panel.set_width(v, &mut queue)?)
        }
        Field::Height => {
            let v = numeric(Some(bounds.height))?;
            (Some(v), panel.set_height(v, &mut queue)?)
        }
        Field::Angle => {
            let v = numeric(None)?;
            (Some(v), panel.set_logical_angle(v, &mut queue)?)
        }
        Field::FlipHorizontal => (None, panel.flip_horizontal(&mut queue)?),
        Field::FlipVertical => (None, panel.flip_vertical(&mut queue)?),
        Field::UniformScaling => match raw {
            Some(raw) => {
                let locked = input::parse_switch(raw)?;
                (None, panel.set_uniform_scaling(locked, &mut queue)?)
            }
            None => (None, panel.toggle_uniform_scaling(&mut queue)?),
        },
    };

    let (command, skipped) = match dispatch {
        Dispatch::Sent(command) => (Some(command), None),
        Dispatch::Skipped(reason) => {
            tracing::info!("Edit of {} skipped: {reason}", field.name());
            (None, Some(reason))
        }
    };

    Ok(EditReport {
        field: field.name(),
        value,
        command,
        skipped,
    })
}

fn to_json<T: Serialize>(value: &T) -> TransformResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
