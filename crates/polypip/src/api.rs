//! Curated surface for tooling (CLI, benches, experiments).
//!
//! Prefer these re-exports over reaching into `geom2` submodules; the module
//! layout below them may change.

// Membership queries
pub use crate::geom2::{
    classify, find_first_concavity, inside_concave, inside_convex, inside_even_odd,
    inside_triangle, is_convex, test, trace_concavity_removal,
};
// Primitives and types
pub use crate::geom2::{
    convex_hull, cross, orientation, signed_area, Orientation, Point, PolygonError, RemovalStep,
    Resolution, Verdict, EPS,
};
// Random polygons
pub use crate::geom2::rand::{
    draw_convex_radial, draw_star_radial, RadialCfg, ReplayToken as PolygonReplay, VertexCount,
};
