use super::Segment;
use crate::core::{
    math::{Vector2, vec2},
    traits::Real,
};
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis aligned bounding box.
///
/// Serves both as a shape and as the key of the spatial index. A box may be empty, in which case
/// `xmin > xmax`; an empty box is the identity for [Box2::merge] and intersects nothing.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Box2<T = f64> {
    pub xmin: T,
    pub ymin: T,
    pub xmax: T,
    pub ymax: T,
}

impl<T> Default for Box2<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Box2<T>
where
    T: Real,
{
    #[inline]
    pub fn new(xmin: T, ymin: T, xmax: T, ymax: T) -> Self {
        Box2 {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// Box with no extent (merging anything into it yields the other box).
    #[inline]
    pub fn empty() -> Self {
        Box2::new(
            <T as Real>::max_value(),
            <T as Real>::max_value(),
            <T as Real>::min_value(),
            <T as Real>::min_value(),
        )
    }

    /// Box covering the whole plane, used for unbounded shapes (lines).
    #[inline]
    pub fn unbounded() -> Self {
        Box2::new(
            <T as Real>::min_value(),
            <T as Real>::min_value(),
            <T as Real>::max_value(),
            <T as Real>::max_value(),
        )
    }

    /// Smallest box holding both points, in any order.
    #[inline]
    pub fn from_points(p1: Vector2<T>, p2: Vector2<T>) -> Self {
        Box2::new(
            num_traits::real::Real::min(p1.x, p2.x),
            num_traits::real::Real::min(p1.y, p2.y),
            num_traits::real::Real::max(p1.x, p2.x),
            num_traits::real::Real::max(p1.y, p2.y),
        )
    }

    #[inline]
    pub fn from_point(p: Vector2<T>) -> Self {
        Box2::new(p.x, p.y, p.x, p.y)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xmin > self.xmax || self.ymin > self.ymax
    }

    /// Lower left corner.
    #[inline]
    pub fn low(&self) -> Vector2<T> {
        vec2(self.xmin, self.ymin)
    }

    /// Upper right corner.
    #[inline]
    pub fn high(&self) -> Vector2<T> {
        vec2(self.xmax, self.ymax)
    }

    #[inline]
    pub fn width(&self) -> T {
        self.xmax - self.xmin
    }

    #[inline]
    pub fn height(&self) -> T {
        self.ymax - self.ymin
    }

    #[inline]
    pub fn center(&self) -> Vector2<T> {
        vec2(
            (self.xmin + self.xmax) / T::two(),
            (self.ymin + self.ymax) / T::two(),
        )
    }

    /// Returns `true` if the boxes share at least one point (touching counts).
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_kernel::shape::Box2;
    /// let b = Box2::new(0.0, 0.0, 10.0, 10.0);
    /// assert!(b.intersects(&Box2::new(5.0, 5.0, 15.0, 15.0)));
    /// assert!(b.intersects(&Box2::new(10.0, 10.0, 15.0, 15.0)));
    /// assert!(!b.intersects(&Box2::new(11.0, 11.0, 20.0, 20.0)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.xmax < other.xmin
            || self.xmin > other.xmax
            || self.ymax < other.ymin
            || self.ymin > other.ymax)
    }

    /// Bounding union of the two boxes.
    #[inline]
    pub fn merge(&self, other: &Self) -> Self {
        Box2::new(
            num_traits::real::Real::min(self.xmin, other.xmin),
            num_traits::real::Real::min(self.ymin, other.ymin),
            num_traits::real::Real::max(self.xmax, other.xmax),
            num_traits::real::Real::max(self.ymax, other.ymax),
        )
    }

    #[inline]
    pub fn contains_point(&self, p: Vector2<T>) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }

    #[inline]
    pub fn contains_box(&self, other: &Self) -> bool {
        !other.is_empty()
            && other.xmin >= self.xmin
            && other.xmax <= self.xmax
            && other.ymin >= self.ymin
            && other.ymax <= self.ymax
    }

    /// Key order used by the spatial index: `low` corner lexicographically, then `high`.
    #[inline]
    pub fn key_cmp(&self, other: &Self) -> Ordering {
        self.low()
            .lex_cmp(&other.low())
            .then_with(|| self.high().lex_cmp(&other.high()))
    }

    /// Returns `true` if this box orders before `other` (see [Box2::key_cmp]).
    #[inline]
    pub fn less_than(&self, other: &Self) -> bool {
        self.key_cmp(other) == Ordering::Less
    }

    /// Fuzzy equality of both corners.
    #[inline]
    pub fn equal_to(&self, other: &Self) -> bool {
        self.low().fuzzy_eq(other.low()) && self.high().fuzzy_eq(other.high())
    }

    /// Box grown by `amount` on every side.
    #[inline]
    pub fn expand(&self, amount: T) -> Self {
        Box2::new(
            self.xmin - amount,
            self.ymin - amount,
            self.xmax + amount,
            self.ymax + amount,
        )
    }

    /// Lower bound of the distance between any point of this box and any point of `other`,
    /// zero when they intersect.
    pub fn gap_distance(&self, other: &Self) -> T {
        let dx = num_traits::real::Real::max(
            T::zero(),
            num_traits::real::Real::max(other.xmin - self.xmax, self.xmin - other.xmax),
        );
        let dy = num_traits::real::Real::max(
            T::zero(),
            num_traits::real::Real::max(other.ymin - self.ymax, self.ymin - other.ymax),
        );
        (dx * dx + dy * dy).sqrt()
    }

    /// Corner points in counter clockwise order starting at `low`.
    pub fn to_points(&self) -> [Vector2<T>; 4] {
        [
            vec2(self.xmin, self.ymin),
            vec2(self.xmax, self.ymin),
            vec2(self.xmax, self.ymax),
            vec2(self.xmin, self.ymax),
        ]
    }

    /// Boundary segments in counter clockwise order.
    pub fn to_segments(&self) -> [Segment<T>; 4] {
        let [p0, p1, p2, p3] = self.to_points();
        [
            Segment::new(p0, p1),
            Segment::new(p1, p2),
            Segment::new(p2, p3),
            Segment::new(p3, p0),
        ]
    }

    pub fn translate(&self, v: Vector2<T>) -> Self {
        Box2::new(self.xmin + v.x, self.ymin + v.y, self.xmax + v.x, self.ymax + v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_box_is_merge_identity() {
        let b = Box2::new(1.0, 2.0, 3.0, 4.0);
        assert!(Box2::<f64>::empty().is_empty());
        assert_eq!(Box2::empty().merge(&b), b);
        assert!(!Box2::empty().intersects(&b));
    }

    #[test]
    fn key_order() {
        let a = Box2::new(0.0, 0.0, 1.0, 1.0);
        let b = Box2::new(0.0, 0.0, 2.0, 1.0);
        let c = Box2::new(0.0, 1.0, 0.5, 1.5);
        assert!(a.less_than(&b));
        assert!(b.less_than(&c));
        assert!(!c.less_than(&a));
        assert!(a.equal_to(&Box2::new(0.0, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn gap_distance() {
        let a = Box2::new(0.0, 0.0, 1.0, 1.0);
        assert_eq!(a.gap_distance(&Box2::new(4.0, 5.0, 6.0, 6.0)), 5.0);
        assert_eq!(a.gap_distance(&Box2::new(0.5, 0.5, 6.0, 6.0)), 0.0);
    }
}
