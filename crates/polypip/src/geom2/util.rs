use std::cmp::Ordering;

use super::cfg::EPS;
use super::types::{Orientation, Point, PolygonError};

/// Twice the signed area of triangle `(o, a, b)`.
///
/// Positive when `b` is counter-clockwise from `a` about `o`, negative when
/// clockwise, zero when collinear. No tolerance is applied here.
#[inline]
pub fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Shoelace sum Σ(xᵢ·yᵢ₊₁ − xᵢ₊₁·yᵢ) over cyclic edges (doubled signed area).
pub fn signed_area(polygon: &[Point]) -> f64 {
    let n = polygon.len();
    let mut area = 0.0;
    for i in 0..n {
        let p = polygon[i];
        let q = polygon[(i + 1) % n];
        area += p.x * q.y - q.x * p.y;
    }
    area
}

/// Winding of `polygon`, or the reason it cannot be queried.
pub fn orientation(polygon: &[Point]) -> Result<Orientation, PolygonError> {
    if polygon.len() < 3 {
        return Err(PolygonError::TooFewVertices {
            count: polygon.len(),
        });
    }
    let area = signed_area(polygon);
    if area.abs() <= EPS {
        return Err(PolygonError::ZeroArea { area });
    }
    if area > 0.0 {
        Ok(Orientation::Ccw)
    } else {
        Ok(Orientation::Cw)
    }
}

/// Andrew’s monotone chain convex hull (returns hull in CCW order).
///
/// Collinear points are dropped. Returns `None` when fewer than 3 hull
/// vertices remain.
pub fn convex_hull(points: &[Point]) -> Option<Vec<Point>> {
    if points.len() < 3 {
        return None;
    }
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    });
    pts.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if pts.len() < 3 {
        return None;
    }
    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    if hull.len() < 3 {
        None
    } else {
        Some(hull)
    }
}
