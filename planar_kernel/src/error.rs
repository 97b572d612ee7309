//! Error types returned by topology mutations and shape dispatch.
use crate::shape::ShapeKind;
use crate::topology::{EdgeId, FaceId};
use thiserror::Error;

/// Convenience alias for results carrying a [TopologyError].
pub type TopologyResult<R> = Result<R, TopologyError>;

/// Errors reported by polygon operations and the intersection/distance dispatch.
///
/// Any mutation returning an error has left the polygon unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    /// The arguments do not satisfy the operation's preconditions.
    #[error("invalid precondition: {0}")]
    InvalidPrecondition(#[from] PreconditionError),
    /// The dispatch table has no entry for this pair of shape kinds.
    #[error("unsupported shape kinds: {0} and {1}")]
    UnsupportedShapeKind(ShapeKind, ShapeKind),
    /// The polygon's rings are not consistent with each other.
    #[error("inconsistent topology: {0}")]
    InconsistentTopology(#[from] InconsistencyError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("point does not lie on the polygon boundary")]
    PointNotOnBoundary,
    #[error("point does not lie on edge {0:?}")]
    PointNotOnEdge(EdgeId),
    #[error("cut points lie on different faces ({0:?} and {1:?})")]
    DifferentFaces(FaceId, FaceId),
    #[error("cut points coincide")]
    CoincidentCutPoints,
    #[error("edge {0:?} is not part of the polygon")]
    UnknownEdge(EdgeId),
    #[error("face {0:?} is not part of the polygon")]
    UnknownFace(FaceId),
    #[error("edge {edge:?} does not belong to face {face:?}")]
    EdgeNotInFace { edge: EdgeId, face: FaceId },
    #[error("edge {to:?} is not reachable from edge {from:?}")]
    ChainNotReachable { from: EdgeId, to: EdgeId },
    #[error("polygon has no faces")]
    EmptyPolygon,
    #[error("invalid loop: {0}")]
    InvalidLoop(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InconsistencyError {
    /// A hole ring is not covered by any island ring.
    #[error("hole ring {hole_index} is not covered by any island")]
    OrphanHole { hole_index: usize },
}
