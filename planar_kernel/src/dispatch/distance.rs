use super::{Shape, intersect};
use crate::{
    core::{
        math::{Vector2, vec2},
        traits::Real,
    },
    error::{PreconditionError, TopologyError, TopologyResult},
    shape::{Arc, Circle, EdgeShape, Line, Segment},
    topology::Polygon,
};

/// Shortest distance between `a` and `b` together with a segment from the closest point on `a`
/// to the closest point on `b`.
///
/// Shapes that intersect are at distance zero (witness collapsed onto an intersection point).
/// Circles and polygons are measured to their boundary. A box is supported only against points
/// and circles, other box pairs fail with [TopologyError::UnsupportedShapeKind]. Measuring against
/// a polygon without faces fails with [PreconditionError::EmptyPolygon].
///
/// # Examples
///
/// ```
/// # use planar_kernel::core::math::*;
/// # use planar_kernel::core::traits::*;
/// # use planar_kernel::dispatch::{distance, Shape};
/// # use planar_kernel::shape::Circle;
/// let c1: Circle = Circle::new(vec2(0.0, 0.0), 1.0);
/// let c2 = Circle::new(vec2(5.0, 0.0), 2.0);
/// let (dist, witness) = distance(&Shape::from(c1), &Shape::from(c2)).unwrap();
/// assert!(dist.fuzzy_eq(2.0));
/// assert!(witness.start().fuzzy_eq(vec2(1.0, 0.0)));
/// assert!(witness.end().fuzzy_eq(vec2(3.0, 0.0)));
/// ```
pub fn distance<'a, T>(a: &Shape<'a, T>, b: &Shape<'a, T>) -> TopologyResult<(T, Segment<T>)>
where
    T: Real,
{
    let eps = a.pair_eps(b);

    let result = match (a, b) {
        (Shape::Point(p), Shape::Point(q)) => (p.distance_to(*q), Segment::new(*p, *q)),
        (Shape::Point(p), Shape::Line(l)) => point_line(*p, l),
        (Shape::Point(p), Shape::Segment(s)) => point_segment(*p, s),
        (Shape::Point(p), Shape::Arc(arc)) => point_arc(*p, arc),
        (Shape::Point(p), Shape::Circle(c)) => point_circle(*p, c),
        (Shape::Point(p), Shape::Box(bx)) => {
            min_of(bx.to_segments().iter().map(|s| point_segment(*p, s)))
        }
        (Shape::Line(l1), Shape::Line(l2)) => line_line(l1, l2, eps),
        (Shape::Line(l), Shape::Segment(s)) => line_segment(l, s),
        (Shape::Line(l), Shape::Arc(arc)) => line_arc(l, arc),
        (Shape::Line(l), Shape::Circle(c)) => line_arc(l, &c.to_arc(true)),
        (Shape::Segment(s1), Shape::Segment(s2)) => segment_segment(s1, s2),
        (Shape::Segment(s), Shape::Arc(arc)) => segment_arc(s, arc),
        (Shape::Segment(s), Shape::Circle(c)) => segment_arc(s, &c.to_arc(true)),
        (Shape::Arc(a1), Shape::Arc(a2)) => arc_arc(a1, a2),
        (Shape::Arc(arc), Shape::Circle(c)) => arc_arc(arc, &c.to_arc(true)),
        (Shape::Circle(c1), Shape::Circle(c2)) => circle_circle(c1, c2),
        (Shape::Circle(c), Shape::Box(bx)) => min_of(bx.to_segments().iter().map(|s| {
            let (d, w) = segment_arc(s, &c.to_arc(true));
            (d, w.reverse())
        })),
        (Shape::Box(_), Shape::Point(_) | Shape::Circle(_)) => {
            let (d, w) = distance(b, a)?;
            (d, w.reverse())
        }
        (Shape::Box(_), _) | (_, Shape::Box(_)) => {
            return Err(TopologyError::UnsupportedShapeKind(a.kind(), b.kind()));
        }
        (Shape::Polygon(p1), Shape::Polygon(p2)) => polygon_polygon(p1, p2)?,
        (Shape::Polygon(poly), other) => {
            let (d, w) = shape_polygon(other, poly, None)?;
            (d, w.reverse())
        }
        (other, Shape::Polygon(poly)) => shape_polygon(other, poly, None)?,
        _ => {
            let (d, w) = distance(b, a)?;
            (d, w.reverse())
        }
    };

    Ok(result)
}

fn min_of<T, I>(candidates: I) -> (T, Segment<T>)
where
    T: Real,
    I: IntoIterator<Item = (T, Segment<T>)>,
{
    candidates.into_iter().fold(
        (<T as Real>::max_value(), Segment::default()),
        |best, c| if c.0 < best.0 { c } else { best },
    )
}

fn point_line<T>(p: Vector2<T>, l: &Line<T>) -> (T, Segment<T>)
where
    T: Real,
{
    let q = l.project(p);
    (l.signed_distance(p).abs(), Segment::new(p, q))
}

fn point_segment<T>(p: Vector2<T>, s: &Segment<T>) -> (T, Segment<T>)
where
    T: Real,
{
    let q = s.closest_point(p);
    (p.distance_to(q), Segment::new(p, q))
}

fn point_arc<T>(p: Vector2<T>, arc: &Arc<T>) -> (T, Segment<T>)
where
    T: Real,
{
    let q = arc.closest_point(p);
    (p.distance_to(q), Segment::new(p, q))
}

fn point_circle<T>(p: Vector2<T>, c: &Circle<T>) -> (T, Segment<T>)
where
    T: Real,
{
    let q = circle_point_toward(c.center, c.r, p);
    (p.distance_to(q), Segment::new(p, q))
}

/// Point of the circle closest to `p` (an arbitrary one if `p` is the center).
fn circle_point_toward<T>(center: Vector2<T>, r: T, p: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    let v = p - center;
    if v.length().fuzzy_eq_zero() {
        return center + vec2(r, T::zero());
    }
    center + v.normalize().scale(r)
}

/// Zero distance result if `a` and `b` intersect.
fn touching<'a, T>(a: Shape<'a, T>, b: Shape<'a, T>) -> Option<(T, Segment<T>)>
where
    T: Real,
{
    let points = intersect(&a, &b).ok()?;
    points
        .first()
        .map(|&p| (T::zero(), Segment::new(p, p)))
}

fn line_line<T>(l1: &Line<T>, l2: &Line<T>, eps: T) -> (T, Segment<T>)
where
    T: Real,
{
    if !l1.norm.perp_dot(l2.norm).fuzzy_eq_zero_eps(eps) {
        if let Some(r) = touching(Shape::Line(*l1), Shape::Line(*l2)) {
            return r;
        }
    }
    let q = l2.pt;
    (l1.signed_distance(q).abs(), Segment::new(l1.project(q), q))
}

fn line_segment<T>(l: &Line<T>, s: &Segment<T>) -> (T, Segment<T>)
where
    T: Real,
{
    if let Some(r) = touching(Shape::Line(*l), Shape::Segment(*s)) {
        return r;
    }
    min_of([s.start(), s.end()].map(|p| {
        let (d, w) = point_line(p, l);
        (d, w.reverse())
    }))
}

fn line_arc<T>(l: &Line<T>, arc: &Arc<T>) -> (T, Segment<T>)
where
    T: Real,
{
    if let Some(r) = touching(Shape::Line(*l), Shape::Arc(*arc)) {
        return r;
    }

    let mut candidates: Vec<(T, Segment<T>)> = [arc.start(), arc.end()]
        .into_iter()
        .map(|p| {
            let (d, w) = point_line(p, l);
            (d, w.reverse())
        })
        .collect();

    // circle point nearest the line
    let side = if l.signed_distance(arc.center) > T::zero() {
        -T::one()
    } else {
        T::one()
    };
    let q = arc.center + l.norm.scale(side * arc.r);
    if arc.contains_point(q) {
        let (d, w) = point_line(q, l);
        candidates.push((d, w.reverse()));
    }

    min_of(candidates)
}

fn segment_segment<T>(s1: &Segment<T>, s2: &Segment<T>) -> (T, Segment<T>)
where
    T: Real,
{
    if let Some(r) = touching(Shape::Segment(*s1), Shape::Segment(*s2)) {
        return r;
    }
    let from_s1 = [s1.start(), s1.end()].map(|p| point_segment(p, s2));
    let from_s2 = [s2.start(), s2.end()].map(|p| {
        let (d, w) = point_segment(p, s1);
        (d, w.reverse())
    });
    min_of(from_s1.into_iter().chain(from_s2))
}

fn segment_arc<T>(s: &Segment<T>, arc: &Arc<T>) -> (T, Segment<T>)
where
    T: Real,
{
    if let Some(r) = touching(Shape::Segment(*s), Shape::Arc(*arc)) {
        return r;
    }

    let mut candidates: Vec<(T, Segment<T>)> = Vec::with_capacity(5);
    for p in [s.start(), s.end()] {
        candidates.push(point_arc(p, arc));
    }
    for p in [arc.start(), arc.end()] {
        let (d, w) = point_segment(p, s);
        candidates.push((d, w.reverse()));
    }

    let foot = s.closest_point(arc.center);
    let q = circle_point_toward(arc.center, arc.r, foot);
    if arc.contains_point(q) {
        candidates.push((foot.distance_to(q), Segment::new(foot, q)));
    }

    min_of(candidates)
}

fn arc_arc<T>(a1: &Arc<T>, a2: &Arc<T>) -> (T, Segment<T>)
where
    T: Real,
{
    if let Some(r) = touching(Shape::Arc(*a1), Shape::Arc(*a2)) {
        return r;
    }

    let mut candidates: Vec<(T, Segment<T>)> = Vec::with_capacity(8);
    for p in [a1.start(), a1.end()] {
        candidates.push(point_arc(p, a2));
    }
    for p in [a2.start(), a2.end()] {
        let (d, w) = point_arc(p, a1);
        candidates.push((d, w.reverse()));
    }

    // extreme points along the line through both centers
    let axis = a2.center - a1.center;
    if !axis.length().fuzzy_eq_zero() {
        let u = axis.normalize();
        for sign in [T::one(), -T::one()] {
            let p = a1.center + u.scale(sign * a1.r);
            if a1.contains_point(p) {
                candidates.push(point_arc(p, a2));
            }
            let q = a2.center + u.scale(sign * a2.r);
            if a2.contains_point(q) {
                let (d, w) = point_arc(q, a1);
                candidates.push((d, w.reverse()));
            }
        }
    }

    min_of(candidates)
}

fn circle_circle<T>(c1: &Circle<T>, c2: &Circle<T>) -> (T, Segment<T>)
where
    T: Real,
{
    if let Some(r) = touching(Shape::Circle(*c1), Shape::Circle(*c2)) {
        return r;
    }

    let axis = c2.center - c1.center;
    let u = if axis.length().fuzzy_eq_zero() {
        vec2(T::one(), T::zero())
    } else {
        axis.normalize()
    };

    let mut candidates = Vec::with_capacity(4);
    for s1 in [T::one(), -T::one()] {
        for s2 in [T::one(), -T::one()] {
            let p = c1.center + u.scale(s1 * c1.r);
            let q = c2.center + u.scale(s2 * c2.r);
            candidates.push((p.distance_to(q), Segment::new(p, q)));
        }
    }
    min_of(candidates)
}

/// Distance from `shape` to the boundary of `polygon`, witness running from `shape` to the
/// polygon. Edges whose box is already `bound` or further away are skipped.
fn shape_polygon<T>(
    shape: &Shape<'_, T>,
    polygon: &Polygon<T>,
    bound: Option<T>,
) -> TopologyResult<(T, Segment<T>)>
where
    T: Real,
{
    if polygon.is_empty() {
        return Err(PreconditionError::EmptyPolygon.into());
    }

    let shape_box = shape.bbox();
    let mut best = (bound.unwrap_or(<T as Real>::max_value()), Segment::default());
    for e in polygon.edges() {
        let edge_shape = *polygon.edge_ref(e).shape();
        if edge_shape.bbox().gap_distance(&shape_box) >= best.0 {
            continue;
        }
        let (d, w) = distance(shape, &Shape::from(edge_shape))?;
        if d < best.0 {
            best = (d, w);
        }
    }
    Ok(best)
}

fn polygon_polygon<T>(p1: &Polygon<T>, p2: &Polygon<T>) -> TopologyResult<(T, Segment<T>)>
where
    T: Real,
{
    if p1.is_empty() || p2.is_empty() {
        return Err(PreconditionError::EmptyPolygon.into());
    }

    let mut best = (<T as Real>::max_value(), Segment::default());
    for e in p1.edges() {
        let edge_shape: EdgeShape<T> = *p1.edge_ref(e).shape();
        if edge_shape.bbox().gap_distance(&p2.bbox()) >= best.0 {
            continue;
        }
        let candidate = shape_polygon(&Shape::from(edge_shape), p2, Some(best.0))?;
        if candidate.0 < best.0 {
            best = candidate;
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{math::vec2, traits::FuzzyEq},
        shape::Box2,
    };

    #[test]
    fn point_to_circle_inside() {
        let c: Circle = Circle::new(vec2(0.0, 0.0), 5.0);
        let (d, w) = distance(&Shape::Point(vec2(1.0, 0.0)), &Shape::Circle(c)).unwrap();
        assert_fuzzy_eq!(d, 4.0);
        assert_fuzzy_eq!(w.end(), vec2(5.0, 0.0));
    }

    #[test]
    fn box_pairs() {
        let b: Box2 = Box2::new(0.0, 0.0, 10.0, 10.0);
        let (d, w) = distance(&Shape::Box(b), &Shape::Point(vec2(15.0, 5.0))).unwrap();
        assert_fuzzy_eq!(d, 5.0);
        assert_fuzzy_eq!(w.start(), vec2(10.0, 5.0));
        assert_fuzzy_eq!(w.end(), vec2(15.0, 5.0));

        let seg = Segment::new(vec2(20.0, 0.0), vec2(20.0, 1.0));
        let err = distance(&Shape::Box(b), &Shape::Segment(seg)).unwrap_err();
        assert_eq!(
            err,
            TopologyError::UnsupportedShapeKind(
                crate::shape::ShapeKind::Box,
                crate::shape::ShapeKind::Segment
            )
        );
        assert!(distance(&Shape::Box(b), &Shape::Box(b)).is_err());
    }

    #[test]
    fn parallel_segments() {
        let s1: Segment = Segment::new(vec2(0.0, 0.0), vec2(10.0, 0.0));
        let s2 = Segment::new(vec2(2.0, 3.0), vec2(4.0, 3.0));
        let (d, w) = distance(&Shape::Segment(s1), &Shape::Segment(s2)).unwrap();
        assert_fuzzy_eq!(d, 3.0);
        assert_fuzzy_eq!(w.end().y, 3.0);
        assert_fuzzy_eq!(w.start().y, 0.0);
    }

    #[test]
    fn line_to_arc() {
        use std::f64::consts::PI;
        let l = Line::through_points(vec2(0.0, 0.0), vec2(1.0, 0.0));
        let arc = Arc::new(vec2(0.0, 5.0), 2.0, PI, 2.0 * PI, true);
        let (d, w) = distance(&Shape::Line(l), &Shape::Arc(arc)).unwrap();
        assert_fuzzy_eq!(d, 3.0);
        assert_fuzzy_eq!(w.end(), vec2(0.0, 3.0));
    }
}
