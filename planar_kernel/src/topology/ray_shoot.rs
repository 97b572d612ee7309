use super::{FaceId, Polygon};
use crate::{
    core::{math::Vector2, traits::Real},
    shape::{Arc, Box2, EdgeShape},
};

/// Classification of a point against a polygon.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointInclusion {
    Inside,
    Outside,
    /// Point lies on an edge (within the polygon's `pos_equal_eps`).
    Boundary,
}

/// Classify `point` against `polygon` by counting crossings of a horizontal ray cast to +x.
///
/// Holes are handled by parity, so the result does not depend on face orientations.
///
/// # Examples
///
/// ```
/// # use planar_kernel::core::math::*;
/// # use planar_kernel::polygon;
/// # use planar_kernel::topology::{PointInclusion, ray_shoot};
/// let square = polygon![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
/// assert_eq!(ray_shoot(&square, vec2(5.0, 5.0)), PointInclusion::Inside);
/// assert_eq!(ray_shoot(&square, vec2(5.0, 10.0)), PointInclusion::Boundary);
/// assert_eq!(ray_shoot(&square, vec2(20.0, 20.0)), PointInclusion::Outside);
/// ```
pub fn ray_shoot<T>(polygon: &Polygon<T>, point: Vector2<T>) -> PointInclusion
where
    T: Real,
{
    if polygon.find_edge_by_point(point).is_some() {
        return PointInclusion::Boundary;
    }

    let bounds = polygon.bbox();
    if !bounds.contains_point(point) {
        return PointInclusion::Outside;
    }

    let ray = Box2::new(point.x, point.y, bounds.xmax, point.y);
    let mut crossings = 0;
    polygon.edges.visit_search(&ray, |e| {
        crossings += shape_crossings(polygon.edge_ref(e).shape(), point);
    });

    if crossings % 2 == 1 {
        PointInclusion::Inside
    } else {
        PointInclusion::Outside
    }
}

/// Number of times the +x ray from `point` crosses the loop of `face`.
///
/// Odd means `point` is enclosed by that loop. Boundary points are not detected, callers check
/// them first.
pub fn face_crossings<T>(polygon: &Polygon<T>, face: FaceId, point: Vector2<T>) -> usize
where
    T: Real,
{
    polygon
        .face_edges(face)
        .map(|e| shape_crossings(polygon.edge_ref(e).shape(), point))
        .sum()
}

fn shape_crossings<T>(shape: &EdgeShape<T>, point: Vector2<T>) -> usize
where
    T: Real,
{
    match shape {
        EdgeShape::Segment(s) => segment_crosses(s.start(), s.end(), point) as usize,
        EdgeShape::Arc(a) => a
            .y_monotone_parts()
            .iter()
            .filter(|part| arc_part_crosses(part, point))
            .count(),
    }
}

/// Half open rule: one end strictly above the ray line, the other on or below it, so a ray
/// through a shared vertex counts once.
#[inline]
fn straddles<T>(y0: T, y1: T, y: T) -> bool
where
    T: Real,
{
    (y0 > y) != (y1 > y)
}

fn segment_crosses<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> bool
where
    T: Real,
{
    if !straddles(p0.y, p1.y, point.y) {
        return false;
    }
    let x = p0.x + (point.y - p0.y) * (p1.x - p0.x) / (p1.y - p0.y);
    x > point.x
}

/// `part` must be monotone in y, i.e. entirely on the left or right half of its circle.
fn arc_part_crosses<T>(part: &Arc<T>, point: Vector2<T>) -> bool
where
    T: Real,
{
    if !straddles(part.start().y, part.end().y, point.y) {
        return false;
    }
    let dy = point.y - part.center.y;
    let dx = num_traits::real::Real::max(part.r * part.r - dy * dy, T::zero()).sqrt();
    let x = if part.middle().x >= part.center.x {
        part.center.x + dx
    } else {
        part.center.x - dx
    };
    x > point.x
}
