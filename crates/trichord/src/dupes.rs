//! Duplicate grouping: which points share their exact position with another.

use serde::Serialize;
use tracing::debug;

use crate::geom2::Point2;

/// `crossed`: every input instance that coincides with at least one other
/// instance. `single`: the rest. Both keep input order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DuplicatePartition {
    pub crossed: Vec<Point2>,
    pub single: Vec<Point2>,
}

/// Pairwise exact-equality partition, O(n²).
///
/// Each instance lands in `crossed` at most once, however many duplicates it has.
pub fn group_duplicates(points: &[Point2]) -> DuplicatePartition {
    let mut out = DuplicatePartition::default();
    for (i, &p) in points.iter().enumerate() {
        let duplicated = points
            .iter()
            .enumerate()
            .any(|(j, &q)| i != j && p == q);
        if duplicated {
            out.crossed.push(p);
        } else {
            out.single.push(p);
        }
    }
    debug!(
        crossed = out.crossed.len(),
        single = out.single.len(),
        "grouped duplicates"
    );
    out
}
