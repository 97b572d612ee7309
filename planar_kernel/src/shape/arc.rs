use super::Box2;
use crate::core::{
    math::{Vector2, angle, angle_is_within_sweep, angle_is_within_sweep_eps, normalize_radians, point_on_circle, vec2},
    traits::Real,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Circular arc defined by center, radius, start/end angles (radians) and direction.
///
/// A full circle is represented with a sweep of `2PI`, e.g. start angle `0` and end angle `2PI`
/// (see [Arc::full_circle]).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Arc<T = f64> {
    #[cfg_attr(feature = "serde", serde(rename = "pc"))]
    pub center: Vector2<T>,
    pub r: T,
    pub start_angle: T,
    pub end_angle: T,
    pub counter_clockwise: bool,
}

impl<T> Arc<T>
where
    T: Real,
{
    #[inline]
    pub fn new(
        center: Vector2<T>,
        r: T,
        start_angle: T,
        end_angle: T,
        counter_clockwise: bool,
    ) -> Self {
        Arc {
            center,
            r,
            start_angle,
            end_angle,
            counter_clockwise,
        }
    }

    /// Arc covering the whole circle, starting and ending at angle 0.
    #[inline]
    pub fn full_circle(center: Vector2<T>, r: T, counter_clockwise: bool) -> Self {
        let end_angle = if counter_clockwise { T::tau() } else { -T::tau() };
        Arc::new(center, r, T::zero(), end_angle, counter_clockwise)
    }

    #[inline]
    pub fn start(&self) -> Vector2<T> {
        point_on_circle(self.r, self.center, self.start_angle)
    }

    #[inline]
    pub fn end(&self) -> Vector2<T> {
        point_on_circle(self.r, self.center, self.end_angle)
    }

    /// Absolute sweep angle in `[0, 2PI]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_kernel::core::math::*;
    /// # use planar_kernel::core::traits::*;
    /// # use planar_kernel::shape::Arc;
    /// use std::f64::consts::PI;
    /// let ccw = Arc::new(vec2(0.0, 0.0), 1.0, 0.0, PI / 2.0, true);
    /// assert!(ccw.sweep().fuzzy_eq(PI / 2.0));
    /// // same angles going clockwise take the long way around
    /// let cw = Arc::new(vec2(0.0, 0.0), 1.0, 0.0, PI / 2.0, false);
    /// assert!(cw.sweep().fuzzy_eq(1.5 * PI));
    /// assert!(Arc::full_circle(vec2(0.0, 0.0), 1.0, false).sweep().fuzzy_eq(2.0 * PI));
    /// ```
    pub fn sweep(&self) -> T {
        let diff = self.end_angle - self.start_angle;
        if diff.fuzzy_eq_zero() {
            return T::zero();
        }

        if diff.abs().fuzzy_eq(T::tau()) {
            return T::tau();
        }

        normalize_radians(if self.counter_clockwise { diff } else { -diff })
    }

    /// Sweep angle signed by direction (negative for clockwise).
    #[inline]
    pub fn signed_sweep(&self) -> T {
        if self.counter_clockwise {
            self.sweep()
        } else {
            -self.sweep()
        }
    }

    #[inline]
    pub fn is_full_circle(&self) -> bool {
        self.sweep().fuzzy_eq(T::tau())
    }

    #[inline]
    pub fn length(&self) -> T {
        self.r * self.sweep()
    }

    /// Point at parametric value `t` along the sweep (0 = start, 1 = end).
    #[inline]
    pub fn point_at(&self, t: T) -> Vector2<T> {
        point_on_circle(self.r, self.center, self.start_angle + self.signed_sweep() * t)
    }

    /// Parametric value (fraction of the sweep) at which `point` lies, measured in the arc direction
    /// from the start angle.
    pub fn param_of(&self, point: Vector2<T>) -> T {
        let sweep = self.sweep();
        if sweep.fuzzy_eq_zero() {
            return T::zero();
        }
        self.offset_of_angle(angle(self.center, point)) / sweep
    }

    #[inline]
    pub fn middle(&self) -> Vector2<T> {
        self.point_at(T::half())
    }

    /// Angular distance from the start angle to `a`, travelling in the arc direction.
    #[inline]
    fn offset_of_angle(&self, a: T) -> T {
        if self.counter_clockwise {
            normalize_radians(a - self.start_angle)
        } else {
            normalize_radians(self.start_angle - a)
        }
    }

    /// Bounding box, including the circle extreme points the arc sweeps through.
    pub fn bbox(&self) -> Box2<T> {
        let mut b = Box2::from_points(self.start(), self.end());
        let sweep = self.signed_sweep();
        let c = self.center;
        let quadrant_points = [
            (T::zero(), vec2(c.x + self.r, c.y)),
            (T::half_pi(), vec2(c.x, c.y + self.r)),
            (T::pi(), vec2(c.x - self.r, c.y)),
            (T::pi() + T::half_pi(), vec2(c.x, c.y - self.r)),
        ];

        for (a, p) in quadrant_points {
            if angle_is_within_sweep(a, self.start_angle, sweep) {
                b = b.merge(&Box2::from_point(p));
            }
        }

        b
    }

    /// Returns `true` if `point` lies on the arc, within `eps` of the circle and inside the sweep.
    pub fn contains_point_eps(&self, point: Vector2<T>, eps: T) -> bool {
        if (point.distance_to(self.center) - self.r).abs() >= eps {
            return false;
        }

        if point.fuzzy_eq_eps(self.start(), eps) || point.fuzzy_eq_eps(self.end(), eps) {
            return true;
        }

        let angle_eps = if self.r > eps { eps / self.r } else { eps };
        angle_is_within_sweep_eps(
            angle(self.center, point),
            self.start_angle,
            self.signed_sweep(),
            angle_eps,
        )
    }

    #[inline]
    pub fn contains_point(&self, point: Vector2<T>) -> bool {
        self.contains_point_eps(point, T::fuzzy_epsilon())
    }

    /// Split the arc at `point` (assumed to lie on it) into head and tail pieces.
    ///
    /// A point coinciding with the start yields no head, a point coinciding with the end yields no
    /// tail.
    pub fn split_at_eps(&self, point: Vector2<T>, eps: T) -> [Option<Self>; 2] {
        if point.fuzzy_eq_eps(self.start(), eps) {
            return [None, Some(*self)];
        }

        if point.fuzzy_eq_eps(self.end(), eps) {
            return [Some(*self), None];
        }

        let a = angle(self.center, point);
        [
            Some(Arc::new(self.center, self.r, self.start_angle, a, self.counter_clockwise)),
            Some(Arc::new(self.center, self.r, a, self.end_angle, self.counter_clockwise)),
        ]
    }

    /// Split the arc at every angle of `angles` lying strictly inside its sweep, returning the
    /// pieces in arc direction.
    pub fn split_at_angles(&self, angles: &[T]) -> Vec<Self> {
        let sweep = self.sweep();
        let eps = T::fuzzy_epsilon();
        let mut offsets: Vec<T> = angles
            .iter()
            .map(|&a| self.offset_of_angle(a))
            .filter(|&off| off > eps && off < sweep - eps)
            .collect();
        offsets.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        offsets.dedup_by(|a, b| a.fuzzy_eq(*b));

        let dir = if self.counter_clockwise {
            T::one()
        } else {
            -T::one()
        };

        let mut result = Vec::with_capacity(offsets.len() + 1);
        let mut piece_start = self.start_angle;
        for off in offsets {
            let piece_end = self.start_angle + dir * off;
            result.push(Arc::new(
                self.center,
                self.r,
                piece_start,
                piece_end,
                self.counter_clockwise,
            ));
            piece_start = piece_end;
        }
        result.push(Arc::new(
            self.center,
            self.r,
            piece_start,
            self.end_angle,
            self.counter_clockwise,
        ));

        result
    }

    /// Pieces of the arc that are each monotone in y (split at the top and bottom of the circle).
    pub fn y_monotone_parts(&self) -> Vec<Self> {
        self.split_at_angles(&[T::half_pi(), T::pi() + T::half_pi()])
    }

    /// Arc traversed in the opposite direction.
    #[inline]
    pub fn reverse(&self) -> Self {
        Arc::new(
            self.center,
            self.r,
            self.end_angle,
            self.start_angle,
            !self.counter_clockwise,
        )
    }

    /// Closest point on the arc to `point`.
    pub fn closest_point(&self, point: Vector2<T>) -> Vector2<T> {
        let start = self.start();
        if point.fuzzy_eq(self.center) {
            return start;
        }

        let a = angle(self.center, point);
        if angle_is_within_sweep(a, self.start_angle, self.signed_sweep()) {
            return point_on_circle(self.r, self.center, a);
        }

        let end = self.end();
        if point.distance_to(start) <= point.distance_to(end) {
            start
        } else {
            end
        }
    }

    /// Signed area between the chord and the arc (positive for counter clockwise arcs).
    pub fn segment_area(&self) -> T {
        let sweep = self.sweep();
        let area = self.r * self.r * T::half() * (sweep - sweep.sin());
        if self.counter_clockwise { area } else { -area }
    }

    pub fn translate(&self, v: Vector2<T>) -> Self {
        Arc { center: self.center + v, ..*self }
    }

    pub fn rotate(&self, angle: T, center: Vector2<T>) -> Self {
        Arc {
            center: self.center.rotate_about(center, angle),
            start_angle: self.start_angle + angle,
            end_angle: self.end_angle + angle,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;
    use std::f64::consts::PI;

    #[test]
    fn bbox_quarter_and_half() {
        let quarter = Arc::new(vec2(0.0, 0.0), 2.0, 0.0, PI / 2.0, true);
        let b = quarter.bbox();
        assert_fuzzy_eq!(b.xmin, 0.0);
        assert_fuzzy_eq!(b.ymin, 0.0);
        assert_fuzzy_eq!(b.xmax, 2.0);
        assert_fuzzy_eq!(b.ymax, 2.0);

        let lower_half = Arc::new(vec2(0.0, 0.0), 1.0, 0.0, PI, false);
        let b = lower_half.bbox();
        assert_fuzzy_eq!(b.ymin, -1.0);
        assert_fuzzy_eq!(b.ymax, 0.0);
    }

    #[test]
    fn split_full_circle() {
        let circle: Arc = Arc::full_circle(vec2(0.0, 0.0), 1.0, true);
        let [head, tail] = circle.split_at_eps(vec2(0.0, -1.0), 1e-8);
        let (head, tail) = (head.unwrap(), tail.unwrap());
        assert_fuzzy_eq!(head.sweep(), 1.5 * PI);
        assert_fuzzy_eq!(tail.sweep(), 0.5 * PI);
        assert_fuzzy_eq!(head.length() + tail.length(), 2.0 * PI);
    }

    #[test]
    fn y_monotone_parts_of_circle() {
        let parts = Arc::full_circle(vec2(1.0, 1.0), 1.0, true).y_monotone_parts();
        assert_eq!(parts.len(), 3);
        let total: f64 = parts.iter().map(|a| a.sweep()).sum();
        assert_fuzzy_eq!(total, 2.0 * PI);
    }

    #[test]
    fn contains_point_respects_direction() {
        let cw = Arc::new(vec2(0.0, 0.0), 1.0, PI, 0.0, false);
        assert!(cw.contains_point(vec2(0.0, 1.0)));
        assert!(!cw.contains_point(vec2(0.0, -1.0)));
        assert!(cw.reverse().contains_point(vec2(0.0, 1.0)));
    }

    #[test]
    fn segment_area_of_half_circle() {
        let half = Arc::new(vec2(0.0, 0.0), 1.0, 0.0, PI, true);
        assert_fuzzy_eq!(half.segment_area(), PI / 2.0);
        assert_fuzzy_eq!(half.reverse().segment_area(), -PI / 2.0);
    }
}
