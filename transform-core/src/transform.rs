//! Transform types in shape space and logical space.

use serde::{Deserialize, Serialize};

/// Usable area of the machine bed, as half-extents in millimetres.
///
/// Logical X spans `[-x, x]` and logical Y spans `[-y, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkArea {
    /// Half-extent along X.
    pub x: f64,
    /// Half-extent along Y.
    pub y: f64,
}

impl WorkArea {
    /// Create a work area from its half-extents.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for WorkArea {
    fn default() -> Self {
        Self::new(200.0, 200.0)
    }
}

const fn one() -> f64 {
    1.0
}

/// Bounding transform of the selection in shape space (origin top-left, Y down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeTransform {
    /// X position.
    #[serde(default)]
    pub x: f64,
    /// Y position, increasing downward.
    #[serde(default)]
    pub y: f64,
    /// Unscaled width.
    #[serde(default)]
    pub width: f64,
    /// Unscaled height.
    #[serde(default)]
    pub height: f64,
    /// Horizontal scale; negative when mirrored.
    #[serde(default = "one", alias = "scaleX")]
    pub scale_x: f64,
    /// Vertical scale; negative when mirrored.
    #[serde(default = "one", alias = "scaleY")]
    pub scale_y: f64,
    /// Rotation in degrees, shape convention.
    #[serde(default)]
    pub angle: f64,
}

impl Default for ShapeTransform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            angle: 0.0,
        }
    }
}

impl ShapeTransform {
    /// Width after applying the horizontal scale magnitude.
    #[must_use]
    pub fn scaled_width(&self) -> f64 {
        self.width * self.scale_x.abs()
    }

    /// Height after applying the vertical scale magnitude.
    #[must_use]
    pub fn scaled_height(&self) -> f64 {
        self.height * self.scale_y.abs()
    }
}

/// Transform as shown to the user (centered on the work area, Y up).
///
/// Always derived from a [`ShapeTransform`] and a [`WorkArea`]; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LogicalTransform {
    /// X relative to the work area center.
    pub x: f64,
    /// Y relative to the work area center, increasing upward.
    pub y: f64,
    /// Absolute width.
    pub width: f64,
    /// Absolute height.
    pub height: f64,
    /// Rotation in degrees, sign-flipped from shape space.
    pub angle: f64,
}

/// A point in shape space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShapePoint {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate, increasing downward.
    pub y: f64,
}

/// A point in logical space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LogicalPoint {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate, increasing upward.
    pub y: f64,
}
