//! Basic 2D value types.
//!
//! - `Point2`: plain `nalgebra` column vector; equality is exact and field-wise.
//! - `Line`: two member points. `SlopeIntercept` is the alternative `(k, b)`
//!   form; conversions are explicit and the two are never kept in sync.
//! - `GeneralForm`: `a·x + b·y + c = 0`.
//! - `Triangle`: ordered vertex triple with edges `ab`, `bc`, `ca`.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::linemath::orientation;
use crate::error::{GeomError, Result};

pub type Point2 = Vector2<f64>;

/// Reject NaN and infinite coordinates.
pub fn ensure_finite(p: Point2, what: &str) -> Result<()> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(())
    } else {
        Err(GeomError::invalid(format!(
            "{what} has non-finite coordinates ({}, {})",
            p.x, p.y
        )))
    }
}

/// Line through two member points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub p1: Point2,
    pub p2: Point2,
}

impl Line {
    #[inline]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    /// Direction vector `p1 - p2`.
    #[inline]
    pub fn direction(&self) -> Point2 {
        self.p1 - self.p2
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.p1.x == self.p2.x
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.p1.y == self.p2.y
    }

    /// Slope/intercept form, `None` for vertical lines (slope undefined).
    pub fn slope_intercept(&self) -> Option<SlopeIntercept> {
        if self.is_vertical() {
            return None;
        }
        let k = (self.p2.y - self.p1.y) / (self.p2.x - self.p1.x);
        let b = self.p2.y - self.p2.x * k;
        Some(SlopeIntercept { k, b })
    }
}

/// Line `y = k·x + b`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlopeIntercept {
    pub k: f64,
    pub b: f64,
}

impl SlopeIntercept {
    #[inline]
    pub fn new(k: f64, b: f64) -> Self {
        Self { k, b }
    }

    /// Two member points at `x = 0` and `x = 1`.
    #[inline]
    pub fn to_line(&self) -> Line {
        Line::new(Point2::new(0.0, self.b), Point2::new(1.0, self.k + self.b))
    }

    /// General form normalized the same way as `linemath::general_form`:
    /// `a = 0, b = 1` for horizontal lines, `a = 1` otherwise.
    pub fn general_form(&self) -> Result<GeneralForm> {
        if !(self.k.is_finite() && self.b.is_finite()) {
            return Err(GeomError::invalid(format!(
                "slope/intercept ({}, {}) is not finite",
                self.k, self.b
            )));
        }
        if self.k == 0.0 {
            return Ok(GeneralForm {
                a: 0.0,
                b: 1.0,
                c: -self.b,
            });
        }
        Ok(GeneralForm {
            a: 1.0,
            b: -1.0 / self.k,
            c: self.b / self.k,
        })
    }
}

/// Line `a·x + b·y + c = 0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneralForm {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl GeneralForm {
    /// Residual `a·x + b·y + c`; zero on the line.
    #[inline]
    pub fn eval(&self, p: Point2) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }
}

/// Edge identifiers in the fixed triangle order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeId {
    Ab,
    Bc,
    Ca,
}

impl EdgeId {
    pub const ALL: [EdgeId; 3] = [EdgeId::Ab, EdgeId::Bc, EdgeId::Ca];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            EdgeId::Ab => 0,
            EdgeId::Bc => 1,
            EdgeId::Ca => 2,
        }
    }
}

/// Bounded triangle side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub from: Point2,
    pub to: Point2,
}

impl Edge {
    #[inline]
    pub fn line(&self) -> Line {
        Line::new(self.from, self.to)
    }
}

/// Triangle with vertices `a`, `b`, `c`. Collinear or coincident vertices are
/// accepted; such triangles simply produce no chords.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Point2,
    pub b: Point2,
    pub c: Point2,
}

impl Triangle {
    #[inline]
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn vertices(&self) -> [Point2; 3] {
        [self.a, self.b, self.c]
    }

    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge {
                id: EdgeId::Ab,
                from: self.a,
                to: self.b,
            },
            Edge {
                id: EdgeId::Bc,
                from: self.b,
                to: self.c,
            },
            Edge {
                id: EdgeId::Ca,
                from: self.c,
                to: self.a,
            },
        ]
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> Edge {
        self.edges()[id.index()]
    }

    /// Twice the signed area; positive for counterclockwise vertex order.
    #[inline]
    pub fn signed_area2(&self) -> f64 {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.x * ac.y - ab.y * ac.x
    }

    /// Zero area, either exactly (collinear vertices) or as computed by
    /// `signed_area2`.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        orientation(self.a, self.b, self.c).is_eq() || self.signed_area2() == 0.0
    }

    pub fn perimeter(&self) -> f64 {
        (self.b - self.a).norm() + (self.c - self.b).norm() + (self.a - self.c).norm()
    }

    pub fn ensure_finite(&self) -> Result<()> {
        ensure_finite(self.a, "triangle vertex a")?;
        ensure_finite(self.b, "triangle vertex b")?;
        ensure_finite(self.c, "triangle vertex c")
    }
}
