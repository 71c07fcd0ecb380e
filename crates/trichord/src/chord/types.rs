//! Result types and per-triangle edge bookkeeping for the chord search.

use std::cmp::Ordering;

use serde::Serialize;

use crate::geom2::{
    crossing_on_segment, general_form, orientation, Boundary, Edge, EdgeId, GeneralForm, Line,
    Point2, Triangle,
};

/// Pair of triangle edges a chord runs between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum EdgePair {
    AbBc,
    BcCa,
    AbCa,
}

impl EdgePair {
    /// Evaluation order; the first match wins.
    pub const PRIORITY: [EdgePair; 3] = [EdgePair::AbBc, EdgePair::BcCa, EdgePair::AbCa];

    #[inline]
    pub fn edges(self) -> (EdgeId, EdgeId) {
        match self {
            EdgePair::AbBc => (EdgeId::Ab, EdgeId::Bc),
            EdgePair::BcCa => (EdgeId::Bc, EdgeId::Ca),
            EdgePair::AbCa => (EdgeId::Ab, EdgeId::Ca),
        }
    }
}

/// Winning chord: the source pair, its two edge crossings and their distance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Chord {
    pub source_m: Point2,
    pub source_n: Point2,
    pub cross_1: Point2,
    pub cross_2: Point2,
    pub length: f64,
    pub edges: EdgePair,
}

/// Outcome of a search. `NoSolution` is a normal result, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChordResult {
    Found(Chord),
    NoSolution,
}

impl ChordResult {
    /// Chord length, `0.0` when nothing was found.
    #[inline]
    pub fn length(&self) -> f64 {
        match self {
            ChordResult::Found(c) => c.length,
            ChordResult::NoSolution => 0.0,
        }
    }

    #[inline]
    pub fn chord(&self) -> Option<&Chord> {
        match self {
            ChordResult::Found(c) => Some(c),
            ChordResult::NoSolution => None,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, ChordResult::Found(_))
    }
}

/// Crossings of one candidate line with each edge, indexed by `EdgeId`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeCrossings(pub [Option<Point2>; 3]);

impl EdgeCrossings {
    #[inline]
    pub fn get(&self, id: EdgeId) -> Option<Point2> {
        self.0[id.index()]
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.0.iter().flatten().count()
    }

    /// First edge pair in priority order with two present, distinct crossings.
    ///
    /// Distinctness only matters under `Boundary::Inclusive`, where a vertex
    /// hit shows up on both adjacent edges as the same point.
    pub fn first_chord(&self) -> Option<(EdgePair, Point2, Point2)> {
        EdgePair::PRIORITY.into_iter().find_map(|pair| {
            let (e1, e2) = pair.edges();
            match (self.get(e1), self.get(e2)) {
                (Some(p), Some(q)) if p != q => Some((pair, p, q)),
                _ => None,
            }
        })
    }
}

/// The triangle's vertices and edges with precomputed edge lines. Edges
/// whose endpoints coincide have no line and never report a crossing.
#[derive(Clone, Debug)]
pub struct TriangleEdges {
    vertices: [Point2; 3],
    edges: [(Edge, Option<GeneralForm>); 3],
}

impl TriangleEdges {
    pub fn new(triangle: &Triangle) -> Self {
        let edges = triangle.edges().map(|e| (e, general_form(&e.line()).ok()));
        Self {
            vertices: triangle.vertices(),
            edges,
        }
    }

    /// Crossings of the line through `line.p1, line.p2` (with general form
    /// `candidate`) with each edge.
    ///
    /// Vertex sides are classified exactly with `orientation`:
    /// - an edge counts only when its endpoints lie strictly on opposite
    ///   sides and the crossing passes `segment_contains_with`;
    /// - `Exclusive`: a line touching any vertex, or with all vertices on one
    ///   side, crosses nothing;
    /// - `Inclusive`: a vertex exactly on the line is the crossing of both
    ///   adjacent edges, reported as the vertex itself.
    pub fn crossings(
        &self,
        line: &Line,
        candidate: &GeneralForm,
        boundary: Boundary,
    ) -> EdgeCrossings {
        let sides = self.vertices.map(|v| orientation(line.p1, line.p2, v));
        let spans = sides.contains(&Ordering::Less) && sides.contains(&Ordering::Greater);
        let touches = sides.contains(&Ordering::Equal);
        let skip = match boundary {
            Boundary::Exclusive => !spans || touches,
            Boundary::Inclusive => !(spans || touches) || sides.iter().all(|s| s.is_eq()),
        };
        if skip {
            return EdgeCrossings::default();
        }
        let mut out = [None; 3];
        for (k, (edge, form)) in self.edges.iter().enumerate() {
            let (from, to) = (sides[k], sides[(k + 1) % 3]);
            out[k] = if from.is_eq() {
                Some(edge.from)
            } else if to.is_eq() {
                Some(edge.to)
            } else if from != to {
                form.and_then(|l| crossing_on_segment(candidate, &l, edge.from, edge.to, boundary))
            } else {
                None
            };
        }
        EdgeCrossings(out)
    }
}
