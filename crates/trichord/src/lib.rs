//! Longest triangle chord through a pair of points, plus duplicate grouping.
//!
//! Layout
//! - `geom2`: points, lines, triangles and the line-math primitives.
//! - `chord`: O(n²) pair search for the longest chord clipped by a triangle.
//! - `dupes`: partition of a point set into duplicated and unique positions.
//! - `scene`: owned point set + triangle with solve/cancel state.
//! - `rand`: reproducible grid sampling of points and triangles.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Breaking changes are fine when they improve clarity.

pub mod api;
pub mod chord;
pub mod dupes;
pub mod error;
pub mod geom2;
pub mod rand;
pub mod scene;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GeomError;
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::chord::{find_longest_chord, find_longest_chord_with, Chord, ChordResult};
    pub use crate::dupes::{group_duplicates, DuplicatePartition};
    pub use crate::error::GeomError;
    pub use crate::geom2::{Boundary, GeomCfg, Line, Point2, Triangle};
    pub use crate::rand::{Bounds2, GridCfg, ReplayToken};
    pub use crate::scene::Scene;
}
