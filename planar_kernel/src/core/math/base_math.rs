use super::Vector2;
use crate::core::traits::Real;

/// Orders two values, smaller first.
///
/// # Examples
///
/// ```
/// # use planar_kernel::core::math::*;
/// assert_eq!(min_max(8, 4), (4, 8));
/// assert_eq!(min_max(-1.0, 3.0), (-1.0, 3.0));
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 { (v1, v2) } else { (v2, v1) }
}

/// Maps an angle in radians into `[0, 2PI]`. Angles already in range (including `2PI`, which
/// marks the end of a full circle arc) are returned untouched.
///
/// # Examples
///
/// ```
/// # use planar_kernel::core::math::*;
/// # use planar_kernel::core::traits::*;
/// use std::f64::consts::PI;
/// assert!(normalize_radians(3.0 * PI).fuzzy_eq(PI));
/// assert!(normalize_radians(-PI / 2.0).fuzzy_eq(1.5 * PI));
/// assert!(normalize_radians(2.0 * PI).fuzzy_eq(2.0 * PI));
/// ```
#[inline]
pub fn normalize_radians<T>(angle: T) -> T
where
    T: Real,
{
    let tau = T::tau();
    if angle >= T::zero() && angle <= tau {
        angle
    } else {
        angle - (angle / tau).floor() * tau
    }
}

/// True if `test_angle` lies on the counter clockwise sweep from `start_angle` to `end_angle`,
/// end points included within `epsilon`.
///
/// # Examples
///
/// ```
/// # use planar_kernel::core::math::*;
/// use std::f64::consts::PI;
/// assert!(angle_is_between_eps(PI / 2.0, 0.0, PI, 1e-5));
/// assert!(angle_is_between_eps(PI, 0.0, PI, 1e-5));
/// assert!(!angle_is_between_eps(1.5 * PI, 0.0, PI, 1e-5));
/// // counter clockwise from PI to PI / 2 passes through 0
/// assert!(angle_is_between_eps(0.0, PI, PI / 2.0, 1e-5));
/// ```
#[inline]
pub fn angle_is_between_eps<T>(test_angle: T, start_angle: T, end_angle: T, epsilon: T) -> bool
where
    T: Real,
{
    normalize_radians(test_angle - start_angle) < normalize_radians(end_angle - start_angle) + epsilon
}

/// True if `test_angle` is covered by the sweep of `sweep_angle` radians starting at
/// `start_angle` (clockwise when `sweep_angle` is negative). Sweeps of a full turn cover
/// everything.
#[inline]
pub fn angle_is_within_sweep_eps<T>(
    test_angle: T,
    start_angle: T,
    sweep_angle: T,
    epsilon: T,
) -> bool
where
    T: Real,
{
    if sweep_angle.abs() >= T::tau() {
        return true;
    }

    let end_angle = start_angle + sweep_angle;
    if sweep_angle < T::zero() {
        angle_is_between_eps(test_angle, end_angle, start_angle, epsilon)
    } else {
        angle_is_between_eps(test_angle, start_angle, end_angle, epsilon)
    }
}

#[inline]
pub fn angle_is_within_sweep<T>(test_angle: T, start_angle: T, sweep_angle: T) -> bool
where
    T: Real,
{
    angle_is_within_sweep_eps(test_angle, start_angle, sweep_angle, T::fuzzy_epsilon())
}

/// Polar angle of `p1` as seen from `p0`.
#[inline]
pub fn angle<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p1 - p0;
    d.y.atan2(d.x)
}

#[inline]
pub fn midpoint<T>(p0: Vector2<T>, p1: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    (p0 + p1).scale(T::half())
}

/// Point at polar `angle` on the circle around `center`.
#[inline]
pub fn point_on_circle<T>(radius: T, center: Vector2<T>, angle: T) -> Vector2<T>
where
    T: Real,
{
    let (sin, cos) = angle.sin_cos();
    center + Vector2::new(cos, sin).scale(radius)
}

/// `p0 + t * (p1 - p0)`.
#[inline]
pub fn point_from_parametric<T>(p0: Vector2<T>, p1: Vector2<T>, t: T) -> Vector2<T>
where
    T: Real,
{
    p0 + (p1 - p0).scale(t)
}

/// Inverse of [point_from_parametric] for the projection of `point` on the line through `p0`
/// and `p1` (which must differ).
///
/// # Examples
///
/// ```
/// # use planar_kernel::core::math::*;
/// # use planar_kernel::core::traits::*;
/// let t: f64 = parametric_from_point(vec2(2.0, 0.0), vec2(6.0, 0.0), vec2(3.0, 5.0));
/// assert!(t.fuzzy_eq(0.25));
/// ```
#[inline]
pub fn parametric_from_point<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    let dir = p1 - p0;
    (point - p0).dot(dir) / dir.length_squared()
}

/// Point of the segment `p0 -> p1` closest to `point`, snapping to the end points within the
/// fuzzy epsilon.
#[inline]
pub fn line_seg_closest_point<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    let dir = p1 - p0;
    let along = (point - p0).dot(dir);
    if along < T::fuzzy_epsilon() {
        return p0;
    }

    let len_sq = dir.length_squared();
    if len_sq < along + T::fuzzy_epsilon() {
        return p1;
    }

    p0 + dir.scale(along / len_sq)
}
