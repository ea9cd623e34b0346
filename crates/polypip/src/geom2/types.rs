//! Basic 2D types for polygon membership.
//!
//! - `Point`: alias for `nalgebra::Vector2<f64>`.
//! - `Orientation`: winding of a vertex sequence, derived from the shoelace sum.
//! - `PolygonError`: the invalid-polygon class (too few vertices, zero area).
//! - `Verdict`, `Resolution`, `RemovalStep`: reporting types for the
//!   decomposition driver.
//!
//! Code cross-refs: `util::{cross, signed_area, orientation}`, `concave::classify`

use nalgebra::Vector2;
use std::fmt;

/// Query and vertex type. Coordinates must be finite (not validated).
pub type Point = Vector2<f64>;

/// Winding of a polygon's vertex sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Counter-clockwise: positive doubled signed area.
    Ccw,
    /// Clockwise: negative doubled signed area.
    Cw,
}

impl Orientation {
    /// Orientation with the opposite winding.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Ccw => Orientation::Cw,
            Orientation::Cw => Orientation::Ccw,
        }
    }

    /// True if `turn` (a `cross` value) agrees with this winding up to `eps`.
    ///
    /// Collinear turns (|turn| <= eps) agree with both windings.
    #[inline]
    pub(crate) fn admits(self, turn: f64, eps: f64) -> bool {
        match self {
            Orientation::Ccw => turn >= -eps,
            Orientation::Cw => turn <= eps,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Ccw => write!(f, "ccw"),
            Orientation::Cw => write!(f, "cw"),
        }
    }
}

/// Invalid polygon input. Distinct from a `false` membership answer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PolygonError {
    /// Fewer than three vertices.
    TooFewVertices { count: usize },
    /// Doubled signed area within `EPS` of zero (collinear or coincident vertices).
    ZeroArea { area: f64 },
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolygonError::TooFewVertices { count } => {
                write!(f, "polygon needs at least 3 vertices, got {count}")
            }
            PolygonError::ZeroArea { area } => {
                write!(f, "degenerate polygon: doubled signed area {area:e} is within tolerance of zero")
            }
        }
    }
}

impl std::error::Error for PolygonError {}

/// How the decomposition driver reached its answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The point fell into the concavity triangle at working-copy index `vertex`.
    ConcavityPocket { vertex: usize },
    /// The working copy became convex (or a triangle) with `vertices` left.
    ConvexRemainder { vertices: usize },
}

/// Outcome of a traced membership query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub inside: bool,
    /// Reflex vertices removed before resolving.
    pub removals: usize,
    pub resolution: Resolution,
}

/// One state of the point-independent concavity-removal trace.
#[derive(Clone, Debug, PartialEq)]
pub struct RemovalStep {
    /// Working polygon before this step's removal.
    pub polygon: Vec<Point>,
    /// Reflex vertex found in `polygon`, `None` on the terminal state.
    pub concavity: Option<usize>,
    /// `(prev, reflex, next)` when `concavity` is set.
    pub triangle: Option<[Point; 3]>,
}
