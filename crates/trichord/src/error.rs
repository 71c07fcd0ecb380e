//! Error kinds shared by the geometry, search and sampling layers.

use thiserror::Error;

/// Failures surfaced before or during a search.
///
/// "No chord found" is not an error; see `chord::ChordResult::NoSolution`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeomError {
    /// A precondition on the input was violated (coincident line points,
    /// non-finite coordinates, missing triangle, empty grid).
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The cancellation flag passed to `ChordSearch::with_cancel` was raised.
    #[error("search cancelled")]
    Cancelled,
}

impl GeomError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = GeomError> = std::result::Result<T, E>;
