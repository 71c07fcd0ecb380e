//! Longest chord search: which point pair's line cuts the longest segment
//! out of a triangle.
//!
//! Purpose
//! - Enumerate ordered point pairs, cross each connecting line with the three
//!   triangle edges, and keep the longest two-edge chord.
//!
//! Contract
//! - Edge pairs are tried in `EdgePair::PRIORITY` order (`ab&bc`, `bc&ca`,
//!   `ab&ca`); the first pair with two present, distinct crossings gives the
//!   chord for that line.
//! - The incumbent is replaced only on strictly greater length, so ties keep
//!   the first pair in `(i, j)` enumeration order.
//! - A search with no two-edge crossing yields `ChordResult::NoSolution`.
//!
//! Split: `types.rs` (result and edge bookkeeping), `search.rs` (runner).

mod search;
mod types;

pub use search::{find_longest_chord, find_longest_chord_with, ChordSearch};
pub use types::{Chord, ChordResult, EdgeCrossings, EdgePair, TriangleEdges};
