use super::Vector2;
use super::base_math::{min_max, parametric_from_point};
use crate::core::traits::Real;

/// Holds the result of finding the intersect between a line and a circle.
#[derive(Debug, Copy, Clone)]
pub enum LineCircleIntr<T>
where
    T: Real,
{
    /// No intersects found.
    NoIntersect,
    /// One tangent intersect point found.
    TangentIntersect {
        /// Line parametric value for the intersect point.
        t0: T,
    },
    /// Two intersect points found.
    TwoIntersects {
        /// Line parametric value for the first intersect point.
        t0: T,
        /// Line parametric value for the second intersect point (`t1 >= t0`).
        t1: T,
    },
}

/// Finds the intersects between the line through `p0` and `p1` and a circle.
///
/// Returns parametric solution(s) for `P(t) = p0 + t * (p1 - p0)`, values outside `[0, 1]` are
/// intersects beyond the segment end points, so the same function serves segments and infinite
/// lines. Intersects snap to a single tangent point when the line is within `epsilon` of tangent.
///
/// # Examples
///
/// ```
/// # use planar_kernel::core::math::*;
/// let p0 = Vector2::new(0.0, 0.0);
/// let p1 = Vector2::new(1.0, 0.0);
/// if let LineCircleIntr::TangentIntersect { t0 } =
///     line_circle_intr(p0, p1, 1.0, Vector2::new(0.0, 1.0), 1e-5)
/// {
///     assert_eq!(t0, 0.0);
/// } else {
///     unreachable!("expected tangent intersect");
/// }
/// ```
pub fn line_circle_intr<T>(
    p0: Vector2<T>,
    p1: Vector2<T>,
    radius: T,
    circle_center: Vector2<T>,
    epsilon: T,
) -> LineCircleIntr<T>
where
    T: Real,
{
    use LineCircleIntr::*;

    let eps = epsilon;

    if p0.fuzzy_eq_eps(p1, eps) {
        if p0.distance_to(circle_center).fuzzy_eq_eps(radius, eps) {
            return TangentIntersect { t0: T::zero() };
        }
        return NoIntersect;
    }

    // project the center onto the line, then walk +/- half chord length along the direction
    let dir = p1 - p0;
    let t_foot = parametric_from_point(p0, p1, circle_center);
    let foot = p0 + dir.scale(t_foot);
    let shortest_dist = foot.distance_to(circle_center);

    if shortest_dist > radius + eps {
        return NoIntersect;
    }

    if shortest_dist.fuzzy_eq_eps(radius, eps) {
        return TangentIntersect { t0: t_foot };
    }

    // abs guards sqrt against tiny negative values
    let half_chord = (radius * radius - shortest_dist * shortest_dist).abs().sqrt();
    let dt = half_chord / dir.length();
    let (t0, t1) = min_max(t_foot - dt, t_foot + dt);
    TwoIntersects { t0, t1 }
}
