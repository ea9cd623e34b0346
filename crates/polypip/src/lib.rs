//! Point-in-polygon membership for simple 2D polygons.
//!
//! The query engine lives in `geom2`: a cross-product primitive, shoelace
//! orientation, a convex half-plane test, a triangle test, and the
//! concavity-removal driver that reduces any simple polygon to a convex one.
//!
//! API Policy
//! - Entry points: `test` (any simple polygon) and `inside_convex` (caller
//!   already knows the polygon is convex). Everything else is exposed for
//!   tooling and tests via `api` and `prelude`.
//! - Invalid polygons surface as `Err(PolygonError)`, never as `false`.

pub mod api;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{inside_convex, test, Orientation, Point, PolygonError, EPS};

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_convex_radial, draw_star_radial, RadialCfg, ReplayToken, VertexCount,
    };
    pub use crate::geom2::{
        classify, cross, inside_concave, inside_convex, inside_even_odd, orientation, test,
        Orientation, Point, PolygonError, Resolution, Verdict,
    };
    pub use nalgebra::Vector2 as Vec2;
}
