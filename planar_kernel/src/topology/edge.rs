use super::FaceId;
use crate::index::arena::impl_arena_key;
use crate::shape::EdgeShape;

/// Stable handle to an edge of a [Polygon](super::Polygon).
///
/// Handles are only meaningful for the polygon that created them and become stale once the edge
/// is removed.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId {
    index: u32,
    generation: u32,
}

impl_arena_key!(EdgeId);

/// One shape of a face boundary, linked to its neighbours in the face loop.
#[derive(Debug, Clone)]
pub struct Edge<T> {
    pub(crate) shape: EdgeShape<T>,
    pub(crate) next: EdgeId,
    pub(crate) prev: EdgeId,
    pub(crate) face: FaceId,
}

impl<T> Edge<T> {
    #[inline]
    pub fn shape(&self) -> &EdgeShape<T> {
        &self.shape
    }

    /// Edge following this one in its face loop.
    #[inline]
    pub fn next(&self) -> EdgeId {
        self.next
    }

    /// Edge preceding this one in its face loop.
    #[inline]
    pub fn prev(&self) -> EdgeId {
        self.prev
    }

    #[inline]
    pub fn face(&self) -> FaceId {
        self.face
    }
}
