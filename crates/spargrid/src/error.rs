//! Error types used across the crate.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by grid construction, indexing and assignment.
///
/// Reads with well-formed keys are total: looking up a label that appears
/// nowhere in the grid yields an empty subset, not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Construction input could not be coerced to an integer label.
    #[error("cannot convert {0} to an integer label")]
    Conversion(String),

    /// A label-shaped key was used for assignment. Writing is only defined
    /// for coordinate keys; the message text is part of the API contract.
    #[error("Index must be tuple")]
    IndexMustBeTuple,

    /// A coordinate component lies outside its axis extent.
    #[error("index {index} out of bounds for axis {axis} with extent {extent}")]
    OutOfBounds {
        /// Axis the offending component addresses.
        axis: usize,
        /// The out-of-range component value.
        index: usize,
        /// Extent of that axis.
        extent: usize,
    },

    /// A coordinate names the wrong number of axes for the grid.
    #[error("key selects {given} axes but the grid has {rank}")]
    RankMismatch {
        /// Number of axis selectors in the key.
        given: usize,
        /// Number of axes in the grid.
        rank: usize,
    },

    /// Supplied data does not match the shape it is being fitted to.
    #[error("shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch {
        /// Description of the required extent.
        expected: String,
        /// Description of what was supplied.
        found: String,
    },

    /// A shape with no axes, a zero-length axis, or an overflowing size.
    #[error("invalid shape: {0}")]
    InvalidShape(String),
}
