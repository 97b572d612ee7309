use super::Box2;
use crate::core::{
    math::{Vector2, vec2},
    traits::Real,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Infinite line through `pt` with unit normal `norm`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line<T = f64> {
    pub pt: Vector2<T>,
    pub norm: Vector2<T>,
}

impl<T> Line<T>
where
    T: Real,
{
    /// Create a line through `pt` with normal `norm` (normalized on construction).
    #[inline]
    pub fn new(pt: Vector2<T>, norm: Vector2<T>) -> Self {
        Line {
            pt,
            norm: norm.normalize(),
        }
    }

    /// Line through two distinct points, directed from `p1` to `p2`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_kernel::core::math::*;
    /// # use planar_kernel::core::traits::*;
    /// # use planar_kernel::shape::Line;
    /// let line: Line = Line::through_points(vec2(0.0, 0.0), vec2(2.0, 0.0));
    /// assert!(line.signed_distance(vec2(5.0, 3.0)).fuzzy_eq(3.0));
    /// assert!(line.project(vec2(5.0, 3.0)).fuzzy_eq(vec2(5.0, 0.0)));
    /// ```
    #[inline]
    pub fn through_points(p1: Vector2<T>, p2: Vector2<T>) -> Self {
        Line {
            pt: p1,
            norm: (p2 - p1).unit_perp(),
        }
    }

    /// Unit direction vector (the normal rotated 90 degrees clockwise).
    #[inline]
    pub fn direction(&self) -> Vector2<T> {
        vec2(self.norm.y, -self.norm.x)
    }

    /// A second point on the line, one unit along the direction from `pt`.
    #[inline]
    pub fn second_point(&self) -> Vector2<T> {
        self.pt + self.direction()
    }

    /// Distance from the line to `point`, positive on the side the normal points to.
    #[inline]
    pub fn signed_distance(&self, point: Vector2<T>) -> T {
        self.norm.dot(point - self.pt)
    }

    /// Orthogonal projection of `point` onto the line.
    #[inline]
    pub fn project(&self, point: Vector2<T>) -> Vector2<T> {
        point - self.norm.scale(self.signed_distance(point))
    }

    #[inline]
    pub fn contains_point_eps(&self, point: Vector2<T>, eps: T) -> bool {
        self.signed_distance(point).abs() < eps
    }

    #[inline]
    pub fn bbox(&self) -> Box2<T> {
        Box2::unbounded()
    }

    #[inline]
    pub fn translate(&self, v: Vector2<T>) -> Self {
        Line {
            pt: self.pt + v,
            norm: self.norm,
        }
    }
}
