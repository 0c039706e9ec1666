//! Error types for partitioning operations.

use thiserror::Error;

/// Errors that can occur during polygon partitioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PartitionError {
    /// A polygon has fewer than three vertices.
    #[error("polygon has {count} vertices, at least 3 required")]
    TooFewVertices {
        /// Number of vertices in the offending polygon.
        count: usize,
    },

    /// A polygon has no measurable area.
    #[error("degenerate input: polygon has no area")]
    DegenerateInput,

    /// No vertex of any outer polygon is visible from a hole.
    #[error("hole is not visible from any outer polygon vertex")]
    HoleNotVisible,

    /// Ear clipping found no ear to cut.
    #[error("no ear found; polygon is not simple or degenerate")]
    NoEarFound,

    /// The sweep line status lost track of an active edge.
    #[error("sweep line status is missing an expected edge")]
    SweepLineError,

    /// A polygon expected to be y-monotone is not.
    #[error("polygon is not y-monotone")]
    NotMonotone,

    /// Dynamic programming reconstruction reached an unreachable subproblem.
    #[error("no feasible split; polygon is not simple or degenerate")]
    NoFeasibleSplit,
}
