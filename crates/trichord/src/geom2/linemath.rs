//! Stateless line math on general-form coefficients.
//!
//! - `general_form`: coefficients for the line through two points.
//! - `intersect`: solve the 2×2 system; parallel and coincident lines both
//!   yield `None`.
//! - `segment_contains*`: is a crossing point inside an edge's bounds.
//! - `orientation`: exact side of a point relative to a two-point line.

use std::cmp::Ordering;

use robust::{orient2d, Coord};

use super::cfg::Boundary;
use super::types::{ensure_finite, GeneralForm, Line, Point2};
use crate::error::{GeomError, Result};

/// General-form coefficients of the line through `line.p1` and `line.p2`.
///
/// Normalization: `a = 0, b = 1` for horizontal lines; otherwise `a = 1` and
/// `b = (x1 - x2) / (y2 - y1)`. Then `c = -(a·x1 + b·y1)`.
///
/// Errors with `InvalidInput` when the points coincide or are not finite.
pub fn general_form(line: &Line) -> Result<GeneralForm> {
    let (p1, p2) = (line.p1, line.p2);
    ensure_finite(p1, "line point p1")?;
    ensure_finite(p2, "line point p2")?;
    if p1 == p2 {
        return Err(GeomError::invalid(format!(
            "line through coincident points ({}, {})",
            p1.x, p1.y
        )));
    }
    let a = if p1.y == p2.y { 0.0 } else { 1.0 };
    let b = if a != 0.0 {
        (p1.x - p2.x) / (p2.y - p1.y)
    } else {
        1.0
    };
    let c = -(a * p1.x + b * p1.y);
    Ok(GeneralForm { a, b, c })
}

/// Intersection point of two lines, `None` when `a1·b2 == a2·b1`.
///
/// Identical lines are reported the same way as distinct parallels.
pub fn intersect(l1: &GeneralForm, l2: &GeneralForm) -> Option<Point2> {
    let det = l1.a * l2.b - l2.a * l1.b;
    if l1.a * l2.b == l2.a * l1.b {
        return None;
    }
    if l1.a != 0.0 {
        let y = (l2.a * l1.c - l1.a * l2.c) / det;
        let x = -(l1.b * y + l1.c) / l1.a;
        Some(Point2::new(x, y))
    } else {
        // l1 horizontal: b1 != 0 and a2 != 0, otherwise the lines would be parallel.
        let y = -l1.c / l1.b;
        let x = -(l2.b * y + l2.c) / l2.a;
        Some(Point2::new(x, y))
    }
}

/// `intersect` on two-point lines.
pub fn intersect_lines(l1: &Line, l2: &Line) -> Result<Option<Point2>> {
    Ok(intersect(&general_form(l1)?, &general_form(l2)?))
}

#[inline]
fn between(v: f64, lo: f64, hi: f64, boundary: Boundary) -> bool {
    match boundary {
        Boundary::Exclusive => (lo < v && v < hi) || (hi < v && v < lo),
        Boundary::Inclusive => (lo <= v && v <= hi) || (hi <= v && v <= lo),
    }
}

/// Whether `cross` (assumed on the edge's line) lies strictly inside `a..b`.
///
/// The test runs on x; vertical edges (`a.x == b.x`) test y instead.
/// A crossing that equals an endpoint coordinate is outside.
#[inline]
pub fn segment_contains(cross: Point2, a: Point2, b: Point2) -> bool {
    segment_contains_with(cross, a, b, Boundary::Exclusive)
}

/// `segment_contains` with an explicit boundary policy.
pub fn segment_contains_with(cross: Point2, a: Point2, b: Point2, boundary: Boundary) -> bool {
    if a.x == b.x {
        between(cross.y, a.y, b.y, boundary)
    } else {
        between(cross.x, a.x, b.x, boundary)
    }
}

/// Crossing of `candidate` with the edge `a..b` lying on `edge`, if contained.
pub fn crossing_on_segment(
    candidate: &GeneralForm,
    edge: &GeneralForm,
    a: Point2,
    b: Point2,
    boundary: Boundary,
) -> Option<Point2> {
    intersect(candidate, edge).filter(|&p| segment_contains_with(p, a, b, boundary))
}

/// `intersect` then `segment_contains`.
#[inline]
pub fn line_crosses_segment(
    candidate: &GeneralForm,
    edge: &GeneralForm,
    a: Point2,
    b: Point2,
) -> bool {
    crossing_on_segment(candidate, edge, a, b, Boundary::Exclusive).is_some()
}

/// Exact side of `q` relative to the line through `p1` and `p2`.
///
/// `Greater` when `p1, p2, q` turn counterclockwise, `Less` when clockwise,
/// `Equal` only when `q` lies exactly on the line.
pub fn orientation(p1: Point2, p2: Point2, q: Point2) -> Ordering {
    let coord = |p: Point2| Coord { x: p.x, y: p.y };
    let o = orient2d(coord(p1), coord(p2), coord(q));
    if o > 0.0 {
        Ordering::Greater
    } else if o < 0.0 {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}
