//! Conversion between shape space and logical space.
//!
//! ```text
//!  shape space                 logical space
//!  (0,0) ──────► x             y ▲
//!    │                           │
//!    │                 (-a.x,0) ─┼─ (a.x,0) ──► x
//!    ▼ y                         │
//! ```
//!
//! The two spaces differ by a translation of the work area half-extents and a
//! flip of the Y axis, so every mapping here has an exact algebraic inverse.

use crate::transform::{LogicalPoint, LogicalTransform, ShapePoint, ShapeTransform, WorkArea};

/// Maps transforms between shape space and logical space for one work area.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateMapper {
    area: WorkArea,
}

impl CoordinateMapper {
    /// Create a mapper for the given work area.
    #[must_use]
    pub const fn new(area: WorkArea) -> Self {
        Self { area }
    }

    /// The work area this mapper is centered on.
    #[must_use]
    pub const fn area(&self) -> WorkArea {
        self.area
    }

    /// Derive the logical transform shown to the user.
    #[must_use]
    pub fn to_logical(&self, shape: &ShapeTransform) -> LogicalTransform {
        let origin = self.point_to_logical(ShapePoint {
            x: shape.x,
            y: shape.y,
        });
        LogicalTransform {
            x: origin.x,
            y: origin.y,
            width: shape.scaled_width(),
            height: shape.scaled_height(),
            angle: logical_angle(shape.angle),
        }
    }

    /// Convert a shape-space point to logical space.
    #[must_use]
    pub fn point_to_logical(&self, p: ShapePoint) -> LogicalPoint {
        LogicalPoint {
            x: p.x - self.area.x,
            y: -p.y + self.area.y,
        }
    }

    /// Convert a logical point back to shape space.
    #[must_use]
    pub fn point_to_shape(&self, p: LogicalPoint) -> ShapePoint {
        ShapePoint {
            x: self.shape_x(p.x),
            y: self.shape_y(p.y),
        }
    }

    /// Shape-space X for a logical X.
    #[must_use]
    pub fn shape_x(&self, logical_x: f64) -> f64 {
        logical_x + self.area.x
    }

    /// Shape-space Y for a logical Y.
    #[must_use]
    pub fn shape_y(&self, logical_y: f64) -> f64 {
        -logical_y + self.area.y
    }
}

/// Derive the logical transform for `shape` on `area`.
#[must_use]
pub fn to_logical(shape: &ShapeTransform, area: WorkArea) -> LogicalTransform {
    CoordinateMapper::new(area).to_logical(shape)
}

/// Logical angle for a shape-space angle.
#[must_use]
pub fn logical_angle(shape_angle: f64) -> f64 {
    -shape_angle
}

/// Shape-space angle for a logical angle.
#[must_use]
pub fn shape_angle(logical_angle: f64) -> f64 {
    -logical_angle
}
