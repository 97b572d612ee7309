//! Primitive shapes: boxes, segments, arcs, circles and infinite lines.
mod arc;
mod bbox;
mod circle;
mod line;
mod segment;

pub use arc::Arc;
pub use bbox::Box2;
pub use circle::Circle;
pub use line::Line;
pub use segment::Segment;

use crate::core::{math::Vector2, traits::Real};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed set of shape kinds understood by the intersection and distance dispatch.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Point,
    Line,
    Segment,
    Arc,
    Circle,
    Box,
    Polygon,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Point => "point",
            ShapeKind::Line => "line",
            ShapeKind::Segment => "segment",
            ShapeKind::Arc => "arc",
            ShapeKind::Circle => "circle",
            ShapeKind::Box => "box",
            ShapeKind::Polygon => "polygon",
        };
        f.write_str(name)
    }
}

/// Shape held by a polygon edge.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "name", rename_all = "lowercase"))]
pub enum EdgeShape<T = f64> {
    Segment(Segment<T>),
    Arc(Arc<T>),
}

impl<T> From<Segment<T>> for EdgeShape<T> {
    fn from(s: Segment<T>) -> Self {
        EdgeShape::Segment(s)
    }
}

impl<T> From<Arc<T>> for EdgeShape<T> {
    fn from(a: Arc<T>) -> Self {
        EdgeShape::Arc(a)
    }
}

impl<T> EdgeShape<T>
where
    T: Real,
{
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            EdgeShape::Segment(_) => ShapeKind::Segment,
            EdgeShape::Arc(_) => ShapeKind::Arc,
        }
    }

    #[inline]
    pub fn start(&self) -> Vector2<T> {
        match self {
            EdgeShape::Segment(s) => s.start(),
            EdgeShape::Arc(a) => a.start(),
        }
    }

    #[inline]
    pub fn end(&self) -> Vector2<T> {
        match self {
            EdgeShape::Segment(s) => s.end(),
            EdgeShape::Arc(a) => a.end(),
        }
    }

    #[inline]
    pub fn bbox(&self) -> Box2<T> {
        match self {
            EdgeShape::Segment(s) => s.bbox(),
            EdgeShape::Arc(a) => a.bbox(),
        }
    }

    #[inline]
    pub fn length(&self) -> T {
        match self {
            EdgeShape::Segment(s) => s.length(),
            EdgeShape::Arc(a) => a.length(),
        }
    }

    #[inline]
    pub fn middle(&self) -> Vector2<T> {
        match self {
            EdgeShape::Segment(s) => s.middle(),
            EdgeShape::Arc(a) => a.middle(),
        }
    }

    /// Point at parametric value `t` (0 = start, 1 = end).
    #[inline]
    pub fn point_at(&self, t: T) -> Vector2<T> {
        match self {
            EdgeShape::Segment(s) => s.point_at(t),
            EdgeShape::Arc(a) => a.point_at(t),
        }
    }

    /// Parametric value of `point` (assumed to lie on the shape).
    #[inline]
    pub fn param_of(&self, point: Vector2<T>) -> T {
        match self {
            EdgeShape::Segment(s) => s.param_of(point),
            EdgeShape::Arc(a) => a.param_of(point),
        }
    }

    #[inline]
    pub fn reverse(&self) -> Self {
        match self {
            EdgeShape::Segment(s) => EdgeShape::Segment(s.reverse()),
            EdgeShape::Arc(a) => EdgeShape::Arc(a.reverse()),
        }
    }

    #[inline]
    pub fn closest_point(&self, point: Vector2<T>) -> Vector2<T> {
        match self {
            EdgeShape::Segment(s) => s.closest_point(point),
            EdgeShape::Arc(a) => a.closest_point(point),
        }
    }

    #[inline]
    pub fn contains_point_eps(&self, point: Vector2<T>, eps: T) -> bool {
        match self {
            EdgeShape::Segment(s) => s.contains_point_eps(point, eps),
            EdgeShape::Arc(a) => a.contains_point_eps(point, eps),
        }
    }

    /// Split at `point` into head and tail pieces, `None` if `point` is not on the shape.
    pub fn split_at_eps(&self, point: Vector2<T>, eps: T) -> Option<[Option<Self>; 2]> {
        if !self.contains_point_eps(point, eps) {
            return None;
        }

        let [head, tail] = match self {
            EdgeShape::Segment(s) => {
                let [h, t] = s.split_at_eps(point, eps);
                [h.map(EdgeShape::Segment), t.map(EdgeShape::Segment)]
            }
            EdgeShape::Arc(a) => {
                let [h, t] = a.split_at_eps(point, eps);
                [h.map(EdgeShape::Arc), t.map(EdgeShape::Arc)]
            }
        };

        Some([head, tail])
    }

    /// Split at every point of `points` lying strictly inside the shape, returning the pieces in
    /// shape direction (just `self` if no point splits it).
    pub fn split_at_points(&self, points: &[Vector2<T>], eps: T) -> Vec<Self> {
        match self {
            EdgeShape::Segment(s) => {
                let len = s.length();
                let mut params: Vec<T> = points
                    .iter()
                    .map(|&p| s.param_of(p))
                    .filter(|&t| t * len > eps && (T::one() - t) * len > eps)
                    .collect();
                params.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
                params.dedup_by(|a, b| ((*a - *b) * len).abs() < eps);

                let mut result = Vec::with_capacity(params.len() + 1);
                let mut piece_start = s.start();
                for t in params {
                    let p = s.point_at(t);
                    result.push(EdgeShape::Segment(Segment::new(piece_start, p)));
                    piece_start = p;
                }
                result.push(EdgeShape::Segment(Segment::new(piece_start, s.end())));
                result
            }
            EdgeShape::Arc(a) => {
                let angles: Vec<T> = points
                    .iter()
                    .filter(|p| !p.fuzzy_eq_eps(a.start(), eps) && !p.fuzzy_eq_eps(a.end(), eps))
                    .map(|&p| crate::core::math::angle(a.center, p))
                    .collect();
                a.split_at_angles(&angles)
                    .into_iter()
                    .map(EdgeShape::Arc)
                    .collect()
            }
        }
    }

    /// Contribution of this shape to the signed area of a closed loop it is part of.
    ///
    /// Chord term of the shoelace formula plus, for arcs, the signed circular segment between
    /// chord and arc.
    #[inline]
    pub fn signed_area_term(&self) -> T {
        let chord = self.start().perp_dot(self.end()) * T::half();
        match self {
            EdgeShape::Segment(_) => chord,
            EdgeShape::Arc(a) => chord + a.segment_area(),
        }
    }

    pub fn translate(&self, v: Vector2<T>) -> Self {
        match self {
            EdgeShape::Segment(s) => EdgeShape::Segment(s.translate(v)),
            EdgeShape::Arc(a) => EdgeShape::Arc(a.translate(v)),
        }
    }

    pub fn rotate(&self, angle: T, center: Vector2<T>) -> Self {
        match self {
            EdgeShape::Segment(s) => EdgeShape::Segment(s.rotate(angle, center)),
            EdgeShape::Arc(a) => EdgeShape::Arc(a.rotate(angle, center)),
        }
    }
}
