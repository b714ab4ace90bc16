//! Error type for polygonizer input handling.

use thiserror::Error;

/// Errors reported while feeding linework to a [`Polygonizer`](crate::Polygonizer).
///
/// Topological problems found during computation (dangles, cut edges,
/// invalid rings, orphan holes) are results, not errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolygonizeError {
    /// The chain has fewer than two distinct coordinates once repeated
    /// points are collapsed.
    #[error("degenerate input: line has {points} distinct point(s), need at least 2")]
    DegenerateInput { points: usize },

    /// A coordinate is NaN or infinite.
    #[error("non-finite coordinate ({x}, {y}) in input line")]
    NonFiniteCoordinate { x: f64, y: f64 },

    /// Lines were added after the result had already been computed.
    #[error("polygonizer result already computed; no more lines can be added")]
    AlreadyComputed,
}
