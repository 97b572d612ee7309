//! Pairwise intersection and distance between any two shapes of the closed [Shape] union.
//!
//! Both tables `match` on the pair of shape kinds. A box takes part as its four boundary segments,
//! a circle as its boundary curve, and a polygon as its edges (point membership aside, where a
//! polygon is treated as a region).
mod distance;
mod intersect;

pub use distance::distance;
pub use intersect::intersect;
pub(crate) use intersect::intersect_edge_shapes;

use crate::{
    core::{math::Vector2, traits::Real},
    error::TopologyResult,
    shape::{Arc, Box2, Circle, EdgeShape, Line, Segment, ShapeKind},
    topology::{Polygon, TopologyOptions},
};

/// Any shape accepted by [intersect] and [distance].
#[derive(Debug, Copy, Clone)]
pub enum Shape<'a, T = f64>
where
    T: Real,
{
    Point(Vector2<T>),
    Line(Line<T>),
    Segment(Segment<T>),
    Arc(Arc<T>),
    Circle(Circle<T>),
    Box(Box2<T>),
    Polygon(&'a Polygon<T>),
}

impl<T> Shape<'_, T>
where
    T: Real,
{
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Segment(_) => ShapeKind::Segment,
            Shape::Arc(_) => ShapeKind::Arc,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Box(_) => ShapeKind::Box,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    /// Bounding box (unbounded for lines).
    pub fn bbox(&self) -> Box2<T> {
        match self {
            Shape::Point(p) => Box2::from_point(*p),
            Shape::Line(l) => l.bbox(),
            Shape::Segment(s) => s.bbox(),
            Shape::Arc(a) => a.bbox(),
            Shape::Circle(c) => c.bbox(),
            Shape::Box(b) => *b,
            Shape::Polygon(p) => p.bbox(),
        }
    }

    /// Position tolerance for a pair: the polygon's own tolerance if either shape is a polygon.
    fn pair_eps(&self, other: &Self) -> T {
        match (self, other) {
            (Shape::Polygon(p), _) | (_, Shape::Polygon(p)) => p.options().pos_equal_eps,
            _ => TopologyOptions::new().pos_equal_eps,
        }
    }
}

impl<T> From<Vector2<T>> for Shape<'_, T>
where
    T: Real,
{
    fn from(p: Vector2<T>) -> Self {
        Shape::Point(p)
    }
}

impl<T> From<Line<T>> for Shape<'_, T>
where
    T: Real,
{
    fn from(l: Line<T>) -> Self {
        Shape::Line(l)
    }
}

impl<T> From<Segment<T>> for Shape<'_, T>
where
    T: Real,
{
    fn from(s: Segment<T>) -> Self {
        Shape::Segment(s)
    }
}

impl<T> From<Arc<T>> for Shape<'_, T>
where
    T: Real,
{
    fn from(a: Arc<T>) -> Self {
        Shape::Arc(a)
    }
}

impl<T> From<Circle<T>> for Shape<'_, T>
where
    T: Real,
{
    fn from(c: Circle<T>) -> Self {
        Shape::Circle(c)
    }
}

impl<T> From<Box2<T>> for Shape<'_, T>
where
    T: Real,
{
    fn from(b: Box2<T>) -> Self {
        Shape::Box(b)
    }
}

impl<T> From<EdgeShape<T>> for Shape<'_, T>
where
    T: Real,
{
    fn from(s: EdgeShape<T>) -> Self {
        match s {
            EdgeShape::Segment(s) => Shape::Segment(s),
            EdgeShape::Arc(a) => Shape::Arc(a),
        }
    }
}

impl<'a, T> From<&'a Polygon<T>> for Shape<'a, T>
where
    T: Real,
{
    fn from(p: &'a Polygon<T>) -> Self {
        Shape::Polygon(p)
    }
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// Intersection points between the polygon boundary and `other` (see [intersect]).
    pub fn intersect<'a, S>(&'a self, other: S) -> TopologyResult<Vec<Vector2<T>>>
    where
        S: Into<Shape<'a, T>>,
    {
        intersect(&Shape::Polygon(self), &other.into())
    }

    /// Distance from the polygon boundary to `other`, with the shortest segment running from the
    /// polygon to `other` (see [distance]).
    pub fn distance_to<'a, S>(&'a self, other: S) -> TopologyResult<(T, Segment<T>)>
    where
        S: Into<Shape<'a, T>>,
    {
        distance(&Shape::Polygon(self), &other.into())
    }
}
