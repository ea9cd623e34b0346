//! Tolerance defaults for 2D membership queries.
//!
//! Policy
//! - One fixed constant governs every boundary decision (convex edges, triangle
//!   signs, reflex turns, degenerate areas). Sharing it keeps the convex, triangle
//!   and concave tests consistent at edges and vertices.
//! - The value is absolute, not relative: very large coordinates need rescaling
//!   by the caller before querying.

/// Boundary-inclusion and degeneracy epsilon.
pub const EPS: f64 = 1e-9;
