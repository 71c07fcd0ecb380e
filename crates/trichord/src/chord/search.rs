//! O(n²) pair enumeration with a running maximum.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, trace, warn};

use super::types::{Chord, ChordResult, TriangleEdges};
use crate::error::{GeomError, Result};
use crate::geom2::{ensure_finite, general_form, GeomCfg, Line, Point2, Triangle};

/// Longest chord with default configuration (exclusive edge bounds).
pub fn find_longest_chord(triangle: &Triangle, points: &[Point2]) -> Result<ChordResult> {
    find_longest_chord_with(triangle, points, GeomCfg::default())
}

/// Longest chord with an explicit configuration.
pub fn find_longest_chord_with(
    triangle: &Triangle,
    points: &[Point2],
    cfg: GeomCfg,
) -> Result<ChordResult> {
    ChordSearch::new(triangle, points, cfg).run()
}

/// Search runner over borrowed inputs. Holds no state between runs.
pub struct ChordSearch<'a> {
    triangle: &'a Triangle,
    points: &'a [Point2],
    cfg: GeomCfg,
    cancel: Option<&'a AtomicBool>,
}

impl<'a> ChordSearch<'a> {
    pub fn new(triangle: &'a Triangle, points: &'a [Point2], cfg: GeomCfg) -> Self {
        Self {
            triangle,
            points,
            cfg,
            cancel: None,
        }
    }

    /// Check `flag` once per outer iteration; a raised flag aborts with
    /// `GeomError::Cancelled`.
    pub fn with_cancel(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn validate(&self) -> Result<()> {
        self.triangle.ensure_finite()?;
        for (i, &p) in self.points.iter().enumerate() {
            ensure_finite(p, &format!("point #{i}"))?;
        }
        Ok(())
    }

    fn cancelled(&self) -> bool {
        self.cancel.is_some_and(|f| f.load(Ordering::Relaxed))
    }

    pub fn run(&self) -> Result<ChordResult> {
        self.validate()?;
        if self.triangle.is_degenerate() {
            warn!(triangle = ?self.triangle, "zero-area triangle; no chord can qualify");
            return Ok(ChordResult::NoSolution);
        }
        let edges = TriangleEdges::new(self.triangle);
        let boundary = self.cfg.boundary;

        let mut best: Option<Chord> = None;
        let mut best_len = 0.0;
        let mut pairs = 0usize;
        for (i, &m) in self.points.iter().enumerate() {
            if self.cancelled() {
                debug!(row = i, pairs, "chord search cancelled");
                return Err(GeomError::Cancelled);
            }
            for (j, &n) in self.points.iter().enumerate() {
                // Coincident pairs (including i == j) define no line.
                if i == j || m == n {
                    continue;
                }
                pairs += 1;
                let line = Line::new(m, n);
                let candidate = general_form(&line)?;
                let Some((pair, c1, c2)) = edges.crossings(&line, &candidate, boundary).first_chord()
                else {
                    continue;
                };
                let length = (c2 - c1).norm();
                if length > best_len {
                    trace!(i, j, length, edges = ?pair, "new longest chord");
                    best_len = length;
                    best = Some(Chord {
                        source_m: m,
                        source_n: n,
                        cross_1: c1,
                        cross_2: c2,
                        length,
                        edges: pair,
                    });
                }
            }
        }
        debug!(
            points = self.points.len(),
            pairs,
            best_len,
            boundary = ?boundary,
            "chord search done"
        );
        Ok(best.map_or(ChordResult::NoSolution, ChordResult::Found))
    }
}
