//! 2D point-in-polygon membership (convex and concave simple polygons).
//!
//! Purpose
//! - Answer "is this point inside this polygon?" for ordered vertex lists of
//!   either winding, boundary included, under one shared tolerance (`EPS`).
//! - Keep the API minimal and numerically explicit: every sign test goes
//!   through `cross`, every tolerance through `cfg::EPS`.
//!
//! Layout
//! - `util`: `cross`, shoelace `signed_area`, `orientation`, `convex_hull`.
//! - `contain`: convex half-plane test, triangle test, even-odd oracle.
//! - `concave`: reflex-vertex search and the removal driver (`classify`).
//! - `rand`: reproducible convex/star polygon samplers.
//!
//! Contract
//! - Input polygons are simple (no self-intersections); this is not checked.
//! - Coordinates are finite; non-finite input gives unspecified answers.
//! - `Err(PolygonError)` means the query was invalid, `Ok(false)` means outside.

pub mod cfg;
mod concave;
mod contain;
pub mod rand;
mod types;
mod util;

pub use cfg::EPS;
pub use concave::{classify, find_first_concavity, inside_concave, is_convex, trace_concavity_removal};
pub use contain::{inside_convex, inside_even_odd, inside_triangle};
pub use types::{Orientation, Point, PolygonError, RemovalStep, Resolution, Verdict};
pub use util::{convex_hull, cross, orientation, signed_area};

/// General membership entry: validates, then runs the concave decomposition
/// (a single convex test when the polygon has no reflex vertex).
#[inline]
pub fn test(point: Point, polygon: &[Point]) -> Result<bool, PolygonError> {
    inside_concave(point, polygon)
}
