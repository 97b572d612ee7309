use super::{Vector2, base_math::parametric_from_point};
use crate::core::traits::Real;

/// Where two segments `a0 -> a1` and `b0 -> b1` meet, in parametric form `P(t) = p0 + t * (p1 - p0)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SegmentIntr<T>
where
    T: Real,
{
    Disjoint,
    /// Single shared point at `ta` along the first segment and `tb` along the second.
    Point { ta: T, tb: T },
    /// Collinear segments sharing the stretch `tb0..=tb1` of the second segment.
    Overlap { tb0: T, tb1: T },
}

/// Intersection of the segments `a0 -> a1` and `b0 -> b1`.
///
/// Degenerate (zero length) segments are treated as points. `epsilon` is compared against
/// distances, not parametric values.
///
/// # Examples
///
/// ```
/// # use planar_kernel::core::math::*;
/// let r = segment_intr(vec2(0.0, 0.0), vec2(4.0, 0.0), vec2(1.0, -1.0), vec2(1.0, 1.0), 1e-8);
/// assert_eq!(r, SegmentIntr::Point { ta: 0.25, tb: 0.5 });
///
/// let r = segment_intr(vec2(0.0, 0.0), vec2(4.0, 0.0), vec2(2.0, 0.0), vec2(6.0, 0.0), 1e-8);
/// assert_eq!(r, SegmentIntr::Overlap { tb0: 0.0, tb1: 0.5 });
/// ```
pub fn segment_intr<T>(
    a0: Vector2<T>,
    a1: Vector2<T>,
    b0: Vector2<T>,
    b1: Vector2<T>,
    epsilon: T,
) -> SegmentIntr<T>
where
    T: Real,
{
    let da = a1 - a0;
    let db = b1 - b0;
    let len_a = da.length();
    let len_b = db.length();
    let offset = a0 - b0;
    let denom = da.perp_dot(db);

    // param along a segment of length `len`, accepted when its distance from the ends is in eps
    let on_segment = |t: T, len: T| (t * len).fuzzy_in_range_eps(T::zero(), len, epsilon);

    if !denom.fuzzy_eq_zero_eps(epsilon) {
        let ta = db.perp_dot(offset) / denom;
        let tb = da.perp_dot(offset) / denom;
        return if on_segment(ta, len_a) && on_segment(tb, len_b) {
            SegmentIntr::Point { ta, tb }
        } else {
            SegmentIntr::Disjoint
        };
    }

    let off_line = !da.perp_dot(offset).fuzzy_eq_zero_eps(epsilon)
        || !db.perp_dot(offset).fuzzy_eq_zero_eps(epsilon);
    if off_line {
        return SegmentIntr::Disjoint;
    }

    let a_degenerate = a0.fuzzy_eq_eps(a1, epsilon);
    let b_degenerate = b0.fuzzy_eq_eps(b1, epsilon);
    if a_degenerate && b_degenerate {
        return if a0.fuzzy_eq_eps(b0, epsilon) {
            SegmentIntr::Point {
                ta: T::zero(),
                tb: T::zero(),
            }
        } else {
            SegmentIntr::Disjoint
        };
    }

    if a_degenerate {
        let tb = parametric_from_point(b0, b1, a0);
        return if on_segment(tb, len_b) {
            SegmentIntr::Point { ta: T::zero(), tb }
        } else {
            SegmentIntr::Disjoint
        };
    }

    if b_degenerate {
        let ta = parametric_from_point(a0, a1, b0);
        return if on_segment(ta, len_a) {
            SegmentIntr::Point { ta, tb: T::zero() }
        } else {
            SegmentIntr::Disjoint
        };
    }

    collinear_intr(a0, a1, b0, b1, len_b, epsilon)
}

/// Both segments lie on one line; clip the first to the second in the second's parameter space.
fn collinear_intr<T>(
    a0: Vector2<T>,
    a1: Vector2<T>,
    b0: Vector2<T>,
    b1: Vector2<T>,
    len_b: T,
    epsilon: T,
) -> SegmentIntr<T>
where
    T: Real,
{
    let (lo, hi) = super::min_max(
        parametric_from_point(b0, b1, a0),
        parametric_from_point(b0, b1, a1),
    );

    // touching within eps still counts
    let starts_before_b_end = (lo * len_b).fuzzy_lt_eps(len_b, epsilon);
    let ends_after_b_start = (hi * len_b).fuzzy_gt_eps(T::zero(), epsilon);
    if !starts_before_b_end || !ends_after_b_start {
        return SegmentIntr::Disjoint;
    }

    let tb0 = num_traits::real::Real::max(lo, T::zero());
    let tb1 = num_traits::real::Real::min(hi, T::one());
    if !((tb1 - tb0) * len_b).fuzzy_eq_zero_eps(epsilon) {
        return SegmentIntr::Overlap { tb0, tb1 };
    }

    // end to end contact
    let shared = b0 + (b1 - b0).scale(tb0);
    let ta = if shared.fuzzy_eq_eps(a0, epsilon) {
        T::zero()
    } else {
        T::one()
    };
    SegmentIntr::Point { ta, tb: tb0 }
}
