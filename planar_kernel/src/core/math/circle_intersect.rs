use super::Vector2;
use crate::core::traits::Real;

/// Points shared by two circles.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CircleIntr<T>
where
    T: Real,
{
    Disjoint,
    Tangent(Vector2<T>),
    Crossing(Vector2<T>, Vector2<T>),
    /// Same center and radius.
    Coincident,
}

/// Intersection of the circle of radius `r1` around `c1` with the circle of radius `r2` around
/// `c2`.
///
/// # Examples
///
/// ```
/// # use planar_kernel::core::math::*;
/// let r = circle_intr(vec2(0.0, 0.0), 1.0, vec2(2.0, 0.0), 1.0, 1e-8);
/// assert!(matches!(r, CircleIntr::Tangent(p) if p.fuzzy_eq(vec2(1.0, 0.0))));
/// ```
pub fn circle_intr<T>(c1: Vector2<T>, r1: T, c2: Vector2<T>, r2: T, epsilon: T) -> CircleIntr<T>
where
    T: Real,
{
    let between = c2 - c1;
    let dist_sq = between.length_squared();
    let dist = dist_sq.sqrt();

    if dist.fuzzy_eq_zero_eps(epsilon) {
        return if r1.fuzzy_eq_eps(r2, epsilon) {
            CircleIntr::Coincident
        } else {
            CircleIntr::Disjoint
        };
    }

    let too_far = !dist.fuzzy_lt_eps(r1 + r2, epsilon);
    let nested = !dist.fuzzy_gt_eps((r1 - r2).abs(), epsilon);
    if too_far || nested {
        return CircleIntr::Disjoint;
    }

    // distance from c1 to the chord through both points, measured along `between`
    let to_chord = (r1 * r1 - r2 * r2 + dist_sq) / (T::two() * dist);
    let dir = between.scale(T::one() / dist);
    let foot = c1 + dir.scale(to_chord);
    let half_chord_sq = r1 * r1 - to_chord * to_chord;
    if half_chord_sq <= T::zero() {
        return CircleIntr::Tangent(foot);
    }

    let offset = dir.perp().scale(half_chord_sq.sqrt());
    let (p1, p2) = (foot - offset, foot + offset);
    if p1.fuzzy_eq_eps(p2, epsilon) {
        CircleIntr::Tangent(foot)
    } else {
        CircleIntr::Crossing(p1, p2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn crossing_points() {
        let r: CircleIntr<f64> = circle_intr(vec2(0.0, 0.0), 5.0, vec2(8.0, 0.0), 5.0, 1e-8);
        match r {
            CircleIntr::Crossing(p1, p2) => {
                assert!(p1.fuzzy_eq(vec2(4.0, -3.0)) || p1.fuzzy_eq(vec2(4.0, 3.0)));
                assert!(p2.fuzzy_eq(vec2(4.0, -p1.y)));
            }
            other => panic!("expected two points, got {other:?}"),
        }
    }

    #[test]
    fn nested_and_coincident() {
        let center = vec2(1.0, 1.0);
        assert_eq!(circle_intr(center, 5.0, center, 5.0, 1e-8), CircleIntr::Coincident);
        assert_eq!(circle_intr(center, 5.0, center, 2.0, 1e-8), CircleIntr::Disjoint);
        assert_eq!(
            circle_intr(center, 5.0, vec2(2.0, 1.0), 2.0, 1e-8),
            CircleIntr::Disjoint
        );
    }
}
