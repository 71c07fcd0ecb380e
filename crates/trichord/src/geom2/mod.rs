//! Planar primitives for the chord search.
//!
//! Purpose
//! - Value types for points, lines (two-point and slope/intercept forms) and
//!   triangles with a fixed edge order `ab`, `bc`, `ca`.
//! - Stateless line math: general-form coefficients, line–line intersection,
//!   and segment containment under an explicit boundary policy.
//!
//! Numerics
//! - Comparisons are exact (`==` on `f64`). There is no epsilon anywhere in
//!   this module; `Boundary` is the only knob on containment.
//! - `orientation` is an exact predicate (adaptive arithmetic), so "on the
//!   line" means exactly on it for the given coordinates.

mod cfg;
pub mod linemath;
mod types;

pub use cfg::{Boundary, GeomCfg};
pub use linemath::{
    crossing_on_segment, general_form, intersect, intersect_lines, line_crosses_segment,
    orientation, segment_contains, segment_contains_with,
};
pub use types::{ensure_finite, Edge, EdgeId, GeneralForm, Line, Point2, SlopeIntercept, Triangle};

#[cfg(test)]
mod tests;
