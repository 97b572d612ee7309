use super::{Arc, Box2};
use crate::core::{math::Vector2, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Circle defined by center and radius.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Circle<T = f64> {
    #[cfg_attr(feature = "serde", serde(rename = "pc"))]
    pub center: Vector2<T>,
    pub r: T,
}

impl<T> Circle<T>
where
    T: Real,
{
    #[inline]
    pub fn new(center: Vector2<T>, r: T) -> Self {
        Circle { center, r }
    }

    #[inline]
    pub fn bbox(&self) -> Box2<T> {
        Box2::new(
            self.center.x - self.r,
            self.center.y - self.r,
            self.center.x + self.r,
            self.center.y + self.r,
        )
    }

    /// The circle as a single full sweep arc starting at angle 0.
    #[inline]
    pub fn to_arc(&self, counter_clockwise: bool) -> Arc<T> {
        Arc::full_circle(self.center, self.r, counter_clockwise)
    }

    /// Returns `true` if `point` is inside the disk or on its boundary.
    #[inline]
    pub fn contains_point(&self, point: Vector2<T>) -> bool {
        point.distance_to(self.center).fuzzy_lt(self.r)
    }

    /// Returns `true` if `point` lies on the circumference within `eps`.
    #[inline]
    pub fn on_boundary_eps(&self, point: Vector2<T>, eps: T) -> bool {
        (point.distance_to(self.center) - self.r).abs() < eps
    }

    #[inline]
    pub fn translate(&self, v: Vector2<T>) -> Self {
        Circle::new(self.center + v, self.r)
    }
}
