use super::EdgeId;
use crate::index::arena::impl_arena_key;
use crate::{
    core::traits::Real,
    shape::{Box2, EdgeShape},
};

/// Stable handle to a face of a [Polygon](super::Polygon).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FaceId {
    index: u32,
    generation: u32,
}

impl_arena_key!(FaceId);

/// Represents the orientation of a face loop.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    /// Loop is directionally counter clockwise (positive signed area).
    CounterClockwise,
    /// Loop is directionally clockwise (negative signed area).
    Clockwise,
    /// Loop encloses no area.
    NotOrientable,
}

impl Orientation {
    /// Orientation implied by a signed area, areas within `eps` of zero are not orientable.
    #[inline]
    pub fn from_signed_area<T>(signed_area: T, eps: T) -> Self
    where
        T: Real,
    {
        if signed_area.fuzzy_eq_zero_eps(eps) {
            Orientation::NotOrientable
        } else if signed_area > T::zero() {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        }
    }
}

/// One closed boundary loop of a polygon.
///
/// The face only records where its loop starts and how long it is, the edges themselves live in
/// the polygon. Bounding box and signed area are cached and refreshed by every mutation touching
/// the loop.
#[derive(Debug, Clone)]
pub struct Face<T> {
    pub(crate) first: EdgeId,
    pub(crate) len: usize,
    pub(crate) bbox: Box2<T>,
    pub(crate) signed_area: T,
}

impl<T> Face<T>
where
    T: Real,
{
    /// Edge the loop starts at.
    #[inline]
    pub fn first_edge(&self) -> EdgeId {
        self.first
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn bbox(&self) -> Box2<T> {
        self.bbox
    }

    /// Signed area of the loop, positive if counter clockwise.
    #[inline]
    pub fn signed_area(&self) -> T {
        self.signed_area
    }

    #[inline]
    pub fn area(&self) -> T {
        self.signed_area.abs()
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        Orientation::from_signed_area(self.signed_area, T::fuzzy_epsilon())
    }
}

/// Signed area enclosed by a closed loop of shapes (positive if counter clockwise).
///
/// Shoelace sum over the shape chords plus the circular segment of every arc. Shared by the face
/// cache, orientation checks and island classification.
///
/// # Examples
///
/// ```
/// # use planar_kernel::core::math::*;
/// # use planar_kernel::core::traits::*;
/// # use planar_kernel::shape::{Arc, EdgeShape, Segment};
/// # use planar_kernel::topology::loop_signed_area;
/// use std::f64::consts::PI;
/// // half disk of radius 1 above the x axis
/// let shapes = [
///     EdgeShape::Segment(Segment::new(vec2(-1.0, 0.0), vec2(1.0, 0.0))),
///     EdgeShape::Arc(Arc::new(vec2(0.0, 0.0), 1.0, 0.0, PI, true)),
/// ];
/// assert!(loop_signed_area(&shapes).fuzzy_eq(PI / 2.0));
/// ```
pub fn loop_signed_area<'a, T, I>(shapes: I) -> T
where
    T: Real,
    I: IntoIterator<Item = &'a EdgeShape<T>>,
{
    shapes
        .into_iter()
        .fold(T::zero(), |acc, s| acc + s.signed_area_term())
}
