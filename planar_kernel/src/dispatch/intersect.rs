use super::Shape;
use crate::{
    core::{
        math::{
            CircleIntr, LineCircleIntr, SegmentIntr, Vector2, circle_intr, line_circle_intr,
            segment_intr, vec2,
        },
        traits::Real,
    },
    error::TopologyResult,
    shape::{Arc, Box2, Circle, EdgeShape, Line, Segment},
    topology::{PointInclusion, Polygon, ray_shoot},
};

/// Intersection points of `a` and `b`, duplicates removed.
///
/// A point intersects a shape it lies on (a polygon it is inside of or on the boundary of).
/// Overlapping collinear segments yield the ends of the overlap, arcs on the same circle yield the
/// arc end points lying on the other arc, coincident circles and coincident lines yield nothing.
///
/// # Examples
///
/// ```
/// # use planar_kernel::core::math::*;
/// # use planar_kernel::dispatch::{intersect, Shape};
/// # use planar_kernel::shape::{Circle, Segment};
/// let seg = Segment::new(vec2(-10.0, 0.0), vec2(10.0, 0.0));
/// let circle = Circle::new(vec2(0.0, 0.0), 5.0);
/// let points = intersect(&Shape::from(seg), &Shape::from(circle)).unwrap();
/// assert_eq!(points.len(), 2);
/// assert!(points[0].fuzzy_eq(vec2(-5.0, 0.0)));
/// assert!(points[1].fuzzy_eq(vec2(5.0, 0.0)));
/// ```
pub fn intersect<'a, T>(a: &Shape<'a, T>, b: &Shape<'a, T>) -> TopologyResult<Vec<Vector2<T>>>
where
    T: Real,
{
    use Shape::*;
    let eps = a.pair_eps(b);

    let points = match (a, b) {
        (Point(p), other) | (other, Point(p)) => {
            if point_on(*p, other, eps) {
                vec![*p]
            } else {
                Vec::new()
            }
        }
        (Polygon(p1), Polygon(p2)) => polygon_polygon(p1, p2, eps),
        (Polygon(p), other) | (other, Polygon(p)) => {
            let mut result = Vec::new();
            for shape in curve_parts(other) {
                result.extend(polygon_curve(p, &shape, eps));
            }
            result
        }
        _ => {
            let mut result = Vec::new();
            for s1 in curve_parts(a) {
                for s2 in curve_parts(b) {
                    result.extend(curve_curve(&s1, &s2, eps));
                }
            }
            result
        }
    };

    Ok(dedup_points(points, eps))
}

/// Intersection points of two edge shapes.
pub(crate) fn intersect_edge_shapes<T>(
    a: &EdgeShape<T>,
    b: &EdgeShape<T>,
    eps: T,
) -> Vec<Vector2<T>>
where
    T: Real,
{
    match (a, b) {
        (EdgeShape::Segment(s1), EdgeShape::Segment(s2)) => segment_segment(s1, s2, eps),
        (EdgeShape::Segment(s), EdgeShape::Arc(arc)) | (EdgeShape::Arc(arc), EdgeShape::Segment(s)) => {
            segment_arc(s, arc, eps)
        }
        (EdgeShape::Arc(a1), EdgeShape::Arc(a2)) => arc_arc(a1, a2, eps),
    }
}

/// Curve primitives a non point, non polygon shape decomposes into.
#[derive(Debug, Copy, Clone)]
enum Curve<T> {
    Line(Line<T>),
    Segment(Segment<T>),
    Arc(Arc<T>),
    Circle(Circle<T>),
}

impl<T> Curve<T>
where
    T: Real,
{
    fn bbox(&self) -> Box2<T> {
        match self {
            Curve::Line(l) => l.bbox(),
            Curve::Segment(s) => s.bbox(),
            Curve::Arc(a) => a.bbox(),
            Curve::Circle(c) => c.bbox(),
        }
    }
}

impl<T> From<EdgeShape<T>> for Curve<T> {
    fn from(s: EdgeShape<T>) -> Self {
        match s {
            EdgeShape::Segment(s) => Curve::Segment(s),
            EdgeShape::Arc(a) => Curve::Arc(a),
        }
    }
}

fn curve_parts<T>(shape: &Shape<'_, T>) -> Vec<Curve<T>>
where
    T: Real,
{
    match shape {
        Shape::Line(l) => vec![Curve::Line(*l)],
        Shape::Segment(s) => vec![Curve::Segment(*s)],
        Shape::Arc(a) => vec![Curve::Arc(*a)],
        Shape::Circle(c) => vec![Curve::Circle(*c)],
        Shape::Box(b) => b.to_segments().into_iter().map(Curve::Segment).collect(),
        Shape::Point(_) | Shape::Polygon(_) => Vec::new(),
    }
}

fn point_on<T>(p: Vector2<T>, shape: &Shape<'_, T>, eps: T) -> bool
where
    T: Real,
{
    match shape {
        Shape::Point(q) => p.fuzzy_eq_eps(*q, eps),
        Shape::Line(l) => l.contains_point_eps(p, eps),
        Shape::Segment(s) => s.contains_point_eps(p, eps),
        Shape::Arc(a) => a.contains_point_eps(p, eps),
        Shape::Circle(c) => c.on_boundary_eps(p, eps),
        Shape::Box(b) => b.to_segments().iter().any(|s| s.contains_point_eps(p, eps)),
        Shape::Polygon(poly) => ray_shoot(poly, p) != PointInclusion::Outside,
    }
}

fn curve_curve<T>(c1: &Curve<T>, c2: &Curve<T>, eps: T) -> Vec<Vector2<T>>
where
    T: Real,
{
    use Curve::*;
    match (c1, c2) {
        (Line(l1), Line(l2)) => line_line(l1, l2, eps),
        (Line(l), Segment(s)) | (Segment(s), Line(l)) => line_segment(l, s, eps),
        (Line(l), Arc(a)) | (Arc(a), Line(l)) => line_circle(l, a.center, a.r, eps)
            .into_iter()
            .filter(|p| a.contains_point_eps(*p, eps))
            .collect(),
        (Line(l), Circle(c)) | (Circle(c), Line(l)) => line_circle(l, c.center, c.r, eps),
        (Segment(s1), Segment(s2)) => segment_segment(s1, s2, eps),
        (Segment(s), Arc(a)) | (Arc(a), Segment(s)) => segment_arc(s, a, eps),
        (Segment(s), Circle(c)) | (Circle(c), Segment(s)) => segment_circle(s, c.center, c.r, eps),
        (Arc(a1), Arc(a2)) => arc_arc(a1, a2, eps),
        (Arc(a), Circle(c)) | (Circle(c), Arc(a)) => arc_circle(a, c, eps),
        (Circle(c1), Circle(c2)) => circle_circle(c1, c2, eps),
    }
}

fn polygon_curve<T>(polygon: &Polygon<T>, curve: &Curve<T>, eps: T) -> Vec<Vector2<T>>
where
    T: Real,
{
    let mut result = Vec::new();
    for e in polygon.edges.search(&curve.bbox().expand(eps)) {
        let edge_curve = Curve::from(*polygon.edge_ref(e).shape());
        result.extend(curve_curve(&edge_curve, curve, eps));
    }
    result
}

fn polygon_polygon<T>(p1: &Polygon<T>, p2: &Polygon<T>, eps: T) -> Vec<Vector2<T>>
where
    T: Real,
{
    if !p1.bbox().intersects(&p2.bbox().expand(eps)) {
        return Vec::new();
    }

    let mut result = Vec::new();
    for e in p1.edges() {
        result.extend(polygon_curve(p2, &Curve::from(*p1.edge_ref(e).shape()), eps));
    }
    result
}

fn line_line<T>(l1: &Line<T>, l2: &Line<T>, eps: T) -> Vec<Vector2<T>>
where
    T: Real,
{
    let det = l1.norm.perp_dot(l2.norm);
    if det.fuzzy_eq_zero_eps(eps) {
        return Vec::new();
    }
    let c1 = l1.norm.dot(l1.pt);
    let c2 = l2.norm.dot(l2.pt);
    let x = (c1 * l2.norm.y - c2 * l1.norm.y) / det;
    let y = (l1.norm.x * c2 - l2.norm.x * c1) / det;
    vec![vec2(x, y)]
}

fn line_segment<T>(l: &Line<T>, s: &Segment<T>, eps: T) -> Vec<Vector2<T>>
where
    T: Real,
{
    let d0 = l.signed_distance(s.start());
    let d1 = l.signed_distance(s.end());
    let mut result = Vec::new();
    if d0.abs() < eps {
        result.push(s.start());
    }
    if d1.abs() < eps {
        result.push(s.end());
    }
    if !result.is_empty() {
        return result;
    }

    if (d0 > T::zero()) != (d1 > T::zero()) {
        result.push(s.point_at(d0 / (d0 - d1)));
    }
    result
}

fn line_circle<T>(l: &Line<T>, center: Vector2<T>, r: T, eps: T) -> Vec<Vector2<T>>
where
    T: Real,
{
    params_to_points(l.pt, l.second_point(), line_circle_intr(l.pt, l.second_point(), r, center, eps))
}

fn params_to_points<T>(p0: Vector2<T>, p1: Vector2<T>, intr: LineCircleIntr<T>) -> Vec<Vector2<T>>
where
    T: Real,
{
    let at = |t: T| p0 + (p1 - p0).scale(t);
    match intr {
        LineCircleIntr::NoIntersect => Vec::new(),
        LineCircleIntr::TangentIntersect { t0 } => vec![at(t0)],
        LineCircleIntr::TwoIntersects { t0, t1 } => vec![at(t0), at(t1)],
    }
}

fn segment_segment<T>(s1: &Segment<T>, s2: &Segment<T>, eps: T) -> Vec<Vector2<T>>
where
    T: Real,
{
    match segment_intr(s1.start(), s1.end(), s2.start(), s2.end(), eps) {
        SegmentIntr::Point { ta, .. } => vec![s1.point_at(ta)],
        SegmentIntr::Overlap { tb0, tb1 } => vec![s2.point_at(tb0), s2.point_at(tb1)],
        SegmentIntr::Disjoint => Vec::new(),
    }
}

fn segment_circle<T>(s: &Segment<T>, center: Vector2<T>, r: T, eps: T) -> Vec<Vector2<T>>
where
    T: Real,
{
    params_to_points(s.start(), s.end(), line_circle_intr(s.start(), s.end(), r, center, eps))
        .into_iter()
        .filter(|p| s.contains_point_eps(*p, eps))
        .collect()
}

fn segment_arc<T>(s: &Segment<T>, a: &Arc<T>, eps: T) -> Vec<Vector2<T>>
where
    T: Real,
{
    segment_circle(s, a.center, a.r, eps)
        .into_iter()
        .filter(|p| a.contains_point_eps(*p, eps))
        .collect()
}

fn arc_arc<T>(a1: &Arc<T>, a2: &Arc<T>, eps: T) -> Vec<Vector2<T>>
where
    T: Real,
{
    let candidates = match circle_intr(a1.center, a1.r, a2.center, a2.r, eps) {
        CircleIntr::Disjoint => Vec::new(),
        CircleIntr::Tangent(point) => vec![point],
        CircleIntr::Crossing(p1, p2) => vec![p1, p2],
        CircleIntr::Coincident => {
            let mut result = Vec::with_capacity(4);
            for p in [a1.start(), a1.end()] {
                if a2.contains_point_eps(p, eps) {
                    result.push(p);
                }
            }
            for p in [a2.start(), a2.end()] {
                if a1.contains_point_eps(p, eps) {
                    result.push(p);
                }
            }
            return dedup_points(result, eps);
        }
    };

    candidates
        .into_iter()
        .filter(|p| a1.contains_point_eps(*p, eps) && a2.contains_point_eps(*p, eps))
        .collect()
}

fn arc_circle<T>(a: &Arc<T>, c: &Circle<T>, eps: T) -> Vec<Vector2<T>>
where
    T: Real,
{
    let candidates = match circle_intr(a.center, a.r, c.center, c.r, eps) {
        CircleIntr::Disjoint => Vec::new(),
        CircleIntr::Tangent(point) => vec![point],
        CircleIntr::Crossing(p1, p2) => vec![p1, p2],
        // arc lies on the circle
        CircleIntr::Coincident => return dedup_points(vec![a.start(), a.end()], eps),
    };

    candidates
        .into_iter()
        .filter(|p| a.contains_point_eps(*p, eps))
        .collect()
}

fn circle_circle<T>(c1: &Circle<T>, c2: &Circle<T>, eps: T) -> Vec<Vector2<T>>
where
    T: Real,
{
    match circle_intr(c1.center, c1.r, c2.center, c2.r, eps) {
        CircleIntr::Disjoint | CircleIntr::Coincident => Vec::new(),
        CircleIntr::Tangent(point) => vec![point],
        CircleIntr::Crossing(p1, p2) => vec![p1, p2],
    }
}

/// Removes points within `eps` of an earlier point, keeping order.
fn dedup_points<T>(points: Vec<Vector2<T>>, eps: T) -> Vec<Vector2<T>>
where
    T: Real,
{
    let mut result: Vec<Vector2<T>> = Vec::with_capacity(points.len());
    for p in points {
        if !result.iter().any(|q| q.fuzzy_eq_eps(p, eps)) {
            result.push(p);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    const EPS: f64 = 1e-6;

    #[test]
    fn overlapping_segments() {
        let s1 = Segment::new(vec2(0.0, 0.0), vec2(10.0, 0.0));
        let s2 = Segment::new(vec2(5.0, 0.0), vec2(15.0, 0.0));
        let points = segment_segment(&s1, &s2, EPS);
        assert_eq!(points.len(), 2);
        assert!(points.iter().any(|p| p.fuzzy_eq(vec2(5.0, 0.0))));
        assert!(points.iter().any(|p| p.fuzzy_eq(vec2(10.0, 0.0))));
    }

    #[test]
    fn arcs_on_same_circle() {
        use std::f64::consts::PI;
        let a1 = Arc::new(vec2(0.0, 0.0), 1.0, 0.0, PI, true);
        let a2 = Arc::new(vec2(0.0, 0.0), 1.0, PI / 2.0, 1.5 * PI, true);
        let points = arc_arc(&a1, &a2, EPS);
        assert_eq!(points.len(), 2);
        assert!(points.iter().any(|p| p.fuzzy_eq(vec2(-1.0, 0.0))));
        assert!(points.iter().any(|p| p.fuzzy_eq(vec2(0.0, 1.0))));
    }

    #[test]
    fn line_segment_endpoint_on_line() {
        let l = Line::through_points(vec2(0.0, 0.0), vec2(1.0, 0.0));
        let s = Segment::new(vec2(3.0, 0.0), vec2(3.0, 5.0));
        assert_eq!(line_segment(&l, &s, EPS), vec![vec2(3.0, 0.0)]);
        let crossing = Segment::new(vec2(2.0, -1.0), vec2(2.0, 3.0));
        let points = line_segment(&l, &crossing, EPS);
        assert_eq!(points.len(), 1);
        assert!(points[0].fuzzy_eq(vec2(2.0, 0.0)));
    }

    #[test]
    fn crossing_lines() {
        let l1 = Line::through_points(vec2(0.0, 0.0), vec2(1.0, 1.0));
        let l2 = Line::through_points(vec2(0.0, 2.0), vec2(2.0, 0.0));
        let points = line_line(&l1, &l2, EPS);
        assert_eq!(points.len(), 1);
        assert!(points[0].fuzzy_eq(vec2(1.0, 1.0)));
        assert!(line_line(&l1, &l1.translate(vec2(0.0, 1.0)), EPS).is_empty());
    }
}
