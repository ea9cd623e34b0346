//! Concave membership via concavity-triangle removal.
//!
//! Model
//! - A reflex vertex `v` with cyclic neighbours `(p, s)` adds the triangle
//!   `(p, v, s)` as a notch outside the polygon. A query point inside that
//!   triangle is outside the polygon. A point outside it keeps its membership
//!   when `v` is dropped and the edge `p → s` replaces `p → v → s`.
//! - Repeating on an owned working copy ends in a convex polygon (at worst a
//!   triangle), where the half-plane test decides.
//!
//! Assumptions
//! - Simple polygons only. Self-intersecting input is unsupported; the result
//!   for such input is unspecified.
//! - Non-finite coordinates are a precondition violation and are not checked.
//!
//! Code cross-refs: `contain::{inside_convex, inside_triangle}`, `util::orientation`

use super::cfg::EPS;
use super::contain::{inside_convex, inside_triangle};
use super::types::{Orientation, Point, PolygonError, RemovalStep, Resolution, Verdict};
use super::util::{cross, orientation};

/// Index of the first reflex vertex scanning from 0, or `None` if convex.
///
/// Vertex `i` is reflex when `cross(prev, vᵢ, next)` turns against
/// `orientation` by more than `EPS`.
pub fn find_first_concavity(polygon: &[Point], orientation: Orientation) -> Option<usize> {
    let n = polygon.len();
    if n < 3 {
        return None;
    }
    (0..n).find(|&i| {
        let prev = polygon[(i + n - 1) % n];
        let next = polygon[(i + 1) % n];
        !orientation.admits(cross(prev, polygon[i], next), EPS)
    })
}

/// True if `polygon` is valid and has no reflex vertex.
pub fn is_convex(polygon: &[Point]) -> Result<bool, PolygonError> {
    let o = orientation(polygon)?;
    Ok(find_first_concavity(polygon, o).is_none())
}

/// Membership for simple (convex or concave) polygons, boundary-inclusive.
pub fn inside_concave(point: Point, polygon: &[Point]) -> Result<bool, PolygonError> {
    classify(point, polygon).map(|v| v.inside)
}

/// Run the removal loop and report how the answer was reached.
///
/// Always removes the first-found reflex vertex. Performs at most `n − 3`
/// removals; the caller's slice is never touched.
pub fn classify(point: Point, polygon: &[Point]) -> Result<Verdict, PolygonError> {
    let o = orientation(polygon)?;
    let mut work: Vec<Point> = polygon.to_vec();
    let mut removals = 0usize;
    loop {
        let found = if work.len() == 3 {
            None
        } else {
            find_first_concavity(&work, o)
        };
        let Some(idx) = found else {
            let inside = inside_convex(point, &work, o)?;
            tracing::trace!(removals, vertices = work.len(), inside, "convex remainder");
            return Ok(Verdict {
                inside,
                removals,
                resolution: Resolution::ConvexRemainder {
                    vertices: work.len(),
                },
            });
        };
        let n = work.len();
        let prev = work[(idx + n - 1) % n];
        let next = work[(idx + 1) % n];
        if inside_triangle(point, prev, work[idx], next) {
            tracing::trace!(removals, vertex = idx, "point in concavity triangle");
            return Ok(Verdict {
                inside: false,
                removals,
                resolution: Resolution::ConcavityPocket { vertex: idx },
            });
        }
        work.remove(idx);
        removals += 1;
    }
}

/// Point-independent record of the removal sequence.
///
/// One step per removal plus a terminal step (`concavity == None`) for the
/// convex remainder or the final triangle.
pub fn trace_concavity_removal(polygon: &[Point]) -> Result<Vec<RemovalStep>, PolygonError> {
    let o = orientation(polygon)?;
    let mut work: Vec<Point> = polygon.to_vec();
    let mut steps = Vec::new();
    loop {
        let found = if work.len() == 3 {
            None
        } else {
            find_first_concavity(&work, o)
        };
        let Some(idx) = found else {
            steps.push(RemovalStep {
                polygon: work,
                concavity: None,
                triangle: None,
            });
            tracing::debug!(steps = steps.len(), "concavity removal traced");
            return Ok(steps);
        };
        let n = work.len();
        let triangle = [work[(idx + n - 1) % n], work[idx], work[(idx + 1) % n]];
        steps.push(RemovalStep {
            polygon: work.clone(),
            concavity: Some(idx),
            triangle: Some(triangle),
        });
        work.remove(idx);
    }
}
