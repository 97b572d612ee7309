use super::Box2;
use crate::core::{
    math::{Vector2, line_seg_closest_point, midpoint, parametric_from_point, point_from_parametric},
    traits::Real,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Directed line segment from `ps` to `pe`.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment<T = f64> {
    /// Start point.
    pub ps: Vector2<T>,
    /// End point.
    pub pe: Vector2<T>,
}

impl<T> Segment<T>
where
    T: Real,
{
    #[inline]
    pub fn new(ps: Vector2<T>, pe: Vector2<T>) -> Self {
        Segment { ps, pe }
    }

    #[inline]
    pub fn start(&self) -> Vector2<T> {
        self.ps
    }

    #[inline]
    pub fn end(&self) -> Vector2<T> {
        self.pe
    }

    #[inline]
    pub fn length(&self) -> T {
        self.ps.distance_to(self.pe)
    }

    #[inline]
    pub fn is_zero_length_eps(&self, eps: T) -> bool {
        self.ps.fuzzy_eq_eps(self.pe, eps)
    }

    #[inline]
    pub fn bbox(&self) -> Box2<T> {
        Box2::from_points(self.ps, self.pe)
    }

    #[inline]
    pub fn middle(&self) -> Vector2<T> {
        midpoint(self.ps, self.pe)
    }

    /// Point at parametric value `t` (0 = start, 1 = end).
    #[inline]
    pub fn point_at(&self, t: T) -> Vector2<T> {
        point_from_parametric(self.ps, self.pe, t)
    }

    /// Parametric value of the projection of `point` onto the segment line, zero for a zero length
    /// segment.
    #[inline]
    pub fn param_of(&self, point: Vector2<T>) -> T {
        if self.ps == self.pe {
            return T::zero();
        }
        parametric_from_point(self.ps, self.pe, point)
    }

    /// Segment with start and end swapped.
    #[inline]
    pub fn reverse(&self) -> Self {
        Segment::new(self.pe, self.ps)
    }

    #[inline]
    pub fn closest_point(&self, point: Vector2<T>) -> Vector2<T> {
        if self.ps == self.pe {
            return self.ps;
        }
        line_seg_closest_point(self.ps, self.pe, point)
    }

    /// Returns `true` if `point` lies within `eps` distance of the segment.
    #[inline]
    pub fn contains_point_eps(&self, point: Vector2<T>, eps: T) -> bool {
        self.closest_point(point).distance_to(point) < eps
    }

    #[inline]
    pub fn contains_point(&self, point: Vector2<T>) -> bool {
        self.contains_point_eps(point, T::fuzzy_epsilon())
    }

    /// Split the segment at `point` (assumed to lie on it) into head and tail pieces.
    ///
    /// A point coinciding with the start yields no head, a point coinciding with the end yields no
    /// tail.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_kernel::core::math::*;
    /// # use planar_kernel::shape::Segment;
    /// let seg = Segment::new(vec2(0.0, 0.0), vec2(4.0, 0.0));
    /// let [head, tail] = seg.split_at_eps(vec2(1.0, 0.0), 1e-8);
    /// assert_eq!(head, Some(Segment::new(vec2(0.0, 0.0), vec2(1.0, 0.0))));
    /// assert_eq!(tail, Some(Segment::new(vec2(1.0, 0.0), vec2(4.0, 0.0))));
    ///
    /// let [head, tail] = seg.split_at_eps(vec2(0.0, 0.0), 1e-8);
    /// assert_eq!(head, None);
    /// assert_eq!(tail, Some(seg));
    /// ```
    pub fn split_at_eps(&self, point: Vector2<T>, eps: T) -> [Option<Self>; 2] {
        if self.ps.fuzzy_eq_eps(point, eps) {
            return [None, Some(*self)];
        }

        if self.pe.fuzzy_eq_eps(point, eps) {
            return [Some(*self), None];
        }

        [
            Some(Segment::new(self.ps, point)),
            Some(Segment::new(point, self.pe)),
        ]
    }

    pub fn translate(&self, v: Vector2<T>) -> Self {
        Segment::new(self.ps + v, self.pe + v)
    }

    pub fn rotate(&self, angle: T, center: Vector2<T>) -> Self {
        Segment::new(
            self.ps.rotate_about(center, angle),
            self.pe.rotate_about(center, angle),
        )
    }
}
