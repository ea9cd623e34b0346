//! Half-plane and triangle containment (boundary-inclusive).
//!
//! - `inside_convex`: O(n) edge-side test, valid for convex input only.
//! - `inside_triangle`: O(1) sign test with an explicit degenerate-triangle guard.
//! - `inside_even_odd`: ray-casting oracle; handles concave input without
//!   decomposition and is used to cross-check the concave path.
//!
//! Code cross-refs: `util::cross`, `cfg::EPS`, `concave::classify`

use super::cfg::EPS;
use super::types::{Orientation, Point, PolygonError};
use super::util::cross;

/// Half-plane test for a convex polygon with known winding.
///
/// CCW requires `cross(vᵢ, vᵢ₊₁, p) >= −EPS` on every edge, CW requires
/// `<= EPS`. On a concave polygon this may report false positives.
pub fn inside_convex(
    point: Point,
    polygon: &[Point],
    orientation: Orientation,
) -> Result<bool, PolygonError> {
    let n = polygon.len();
    if n < 3 {
        return Err(PolygonError::TooFewVertices { count: n });
    }
    Ok((0..n).all(|i| {
        let side = cross(polygon[i], polygon[(i + 1) % n], point);
        orientation.admits(side, EPS)
    }))
}

/// Point-in-triangle under either winding, boundary included.
///
/// Triangles with `|cross(a, b, c)| <= EPS` contain nothing: collinear corners
/// collapse every edge test toward zero and would otherwise pass trivially.
pub fn inside_triangle(point: Point, a: Point, b: Point, c: Point) -> bool {
    if cross(a, b, c).abs() <= EPS {
        return false;
    }
    let d1 = cross(a, b, point);
    let d2 = cross(b, c, point);
    let d3 = cross(c, a, point);
    let all_left = d1 >= -EPS && d2 >= -EPS && d3 >= -EPS;
    let all_right = d1 <= EPS && d2 <= EPS && d3 <= EPS;
    all_left || all_right
}

/// Even-odd (ray casting) membership; points within `EPS` of an edge count as inside.
///
/// Independent of winding and convexity. Fewer than 3 vertices yields `false`.
pub fn inside_even_odd(point: Point, polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let (x, y) = (point.x, point.y);
    let mut inside = false;
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        if on_segment(point, a, b) {
            return true;
        }
        if (a.y > y) != (b.y > y) {
            let x_cross = a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y);
            if x_cross > x {
                inside = !inside;
            }
        }
    }
    inside
}

#[inline]
fn on_segment(p: Point, a: Point, b: Point) -> bool {
    let in_box = p.x >= a.x.min(b.x) - EPS
        && p.x <= a.x.max(b.x) + EPS
        && p.y >= a.y.min(b.y) - EPS
        && p.y <= a.y.max(b.y) + EPS;
    in_box && cross(a, b, p).abs() <= EPS
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn square() -> Vec<Point> {
        vec![
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![4.0, 4.0],
            vector![0.0, 4.0],
        ]
    }

    #[test]
    fn convex_square_inside_outside_boundary() {
        let sq = square();
        assert_eq!(inside_convex(vector![2.0, 2.0], &sq, Orientation::Ccw), Ok(true));
        assert_eq!(inside_convex(vector![5.0, 5.0], &sq, Orientation::Ccw), Ok(false));
        assert_eq!(inside_convex(vector![2.0, 0.0], &sq, Orientation::Ccw), Ok(true));
        assert_eq!(inside_convex(vector![4.0, 4.0], &sq, Orientation::Ccw), Ok(true));
        assert_eq!(
            inside_convex(vector![2.0, -1e-6], &sq, Orientation::Ccw),
            Ok(false)
        );
    }

    #[test]
    fn convex_respects_given_winding() {
        let rev: Vec<_> = square().into_iter().rev().collect();
        assert_eq!(inside_convex(vector![2.0, 2.0], &rev, Orientation::Cw), Ok(true));
        // Wrong winding flips every edge test; interior points fail.
        assert_eq!(inside_convex(vector![2.0, 2.0], &rev, Orientation::Ccw), Ok(false));
    }

    #[test]
    fn convex_too_few_vertices_is_error() {
        let two = vec![vector![0.0, 0.0], vector![1.0, 0.0]];
        assert_eq!(
            inside_convex(vector![0.5, 0.0], &two, Orientation::Ccw),
            Err(PolygonError::TooFewVertices { count: 2 })
        );
        assert_eq!(
            inside_convex(vector![0.0, 0.0], &[], Orientation::Cw),
            Err(PolygonError::TooFewVertices { count: 0 })
        );
    }

    #[test]
    fn triangle_both_windings_and_edges() {
        let (a, b, c) = (vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 4.0]);
        for (p, want) in [
            (vector![1.0, 1.0], true),
            (vector![3.0, 3.0], false),
            (vector![2.0, 2.0], true),
            (vector![0.0, 0.0], true),
            (vector![-0.1, 1.0], false),
        ] {
            assert_eq!(inside_triangle(p, a, b, c), want, "{p:?}");
            assert_eq!(inside_triangle(p, a, c, b), want, "{p:?} reversed");
        }
    }

    #[test]
    fn degenerate_triangle_contains_nothing() {
        let (a, b, c) = (vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]);
        assert!(!inside_triangle(vector![1.0, 1.0], a, b, c));
        assert!(!inside_triangle(vector![0.5, 0.5], a, b, c));
        assert!(!inside_triangle(a, a, a, a));
    }

    #[test]
    fn even_odd_concave_notch() {
        let l_shape = vec![
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![4.0, 2.0],
            vector![2.0, 2.0],
            vector![2.0, 4.0],
            vector![0.0, 4.0],
        ];
        assert!(inside_even_odd(vector![1.0, 1.0], &l_shape));
        assert!(inside_even_odd(vector![1.0, 3.0], &l_shape));
        assert!(!inside_even_odd(vector![3.0, 3.0], &l_shape));
        assert!(inside_even_odd(vector![2.0, 3.0], &l_shape));
        assert!(!inside_even_odd(vector![1.0, 1.0], &l_shape[..2]));
    }
}
