//! Curated internal API (UNSTABLE).
//!
//! Not a public API; a flat surface for the CLI and experiments.

// 2D primitives
pub use crate::geom2::{
    crossing_on_segment, general_form, intersect, intersect_lines, line_crosses_segment,
    orientation, segment_contains, segment_contains_with, Boundary, Edge, EdgeId, GeneralForm,
    GeomCfg, Line, Point2, SlopeIntercept, Triangle,
};
// Searches
pub use crate::chord::{
    find_longest_chord, find_longest_chord_with, Chord, ChordResult, ChordSearch, EdgeCrossings,
    EdgePair, TriangleEdges,
};
pub use crate::dupes::{group_duplicates, DuplicatePartition};
// Scene and sampling
pub use crate::rand::{draw_grid_points, draw_triangle, Bounds2, GridCfg, ReplayToken};
pub use crate::scene::{Scene, SceneFile};
