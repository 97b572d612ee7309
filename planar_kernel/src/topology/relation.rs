use super::{PointInclusion, Polygon, ray_shoot};
use crate::{
    core::{math::Vector2, traits::Real},
    dispatch::intersect_edge_shapes,
    shape::EdgeShape,
};

impl<T> Polygon<T>
where
    T: Real,
{
    /// Whether `point` is inside the polygon or on its boundary.
    #[inline]
    pub fn contains(&self, point: Vector2<T>) -> bool {
        ray_shoot(self, point) != PointInclusion::Outside
    }

    /// Whether every point of `shape` is inside the polygon or on its boundary.
    ///
    /// The shape is split wherever it meets the boundary and each piece is classified by its
    /// middle point, so a shape that leaves and re-enters the polygon is rejected even if both of
    /// its ends are inside.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_kernel::core::math::*;
    /// # use planar_kernel::polygon;
    /// # use planar_kernel::shape::{EdgeShape, Segment};
    /// // U shape opening upwards
    /// let u = polygon![
    ///     (0.0, 0.0), (9.0, 0.0), (9.0, 9.0), (6.0, 9.0),
    ///     (6.0, 3.0), (3.0, 3.0), (3.0, 9.0), (0.0, 9.0)
    /// ];
    /// let inside = EdgeShape::Segment(Segment::new(vec2(1.0, 1.0), vec2(8.0, 1.0)));
    /// let bridging = EdgeShape::Segment(Segment::new(vec2(1.0, 6.0), vec2(8.0, 6.0)));
    /// assert!(u.contains_shape(&inside));
    /// assert!(!u.contains_shape(&bridging));
    /// ```
    pub fn contains_shape(&self, shape: &EdgeShape<T>) -> bool {
        if !self.contains(shape.start()) || !self.contains(shape.end()) {
            return false;
        }

        let eps = self.options().pos_equal_eps;
        let mut crossings = Vec::new();
        for e in self.edges.search(&shape.bbox().expand(eps)) {
            crossings.extend(intersect_edge_shapes(shape, self.edge_ref(e).shape(), eps));
        }

        shape
            .split_at_points(&crossings, eps)
            .iter()
            .all(|piece| self.contains(piece.middle()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::math::vec2,
        shape::{Arc, Segment},
    };
    use std::f64::consts::PI;

    fn square_with_hole() -> Polygon {
        let outer = [vec2(0.0, 0.0), vec2(10.0, 0.0), vec2(10.0, 10.0), vec2(0.0, 10.0)];
        let hole = [vec2(4.0, 4.0), vec2(4.0, 6.0), vec2(6.0, 6.0), vec2(6.0, 4.0)];
        Polygon::from_loops(&[&outer[..], &hole[..]]).unwrap()
    }

    #[test]
    fn contains_points() {
        let p = square_with_hole();
        assert!(p.contains(vec2(1.0, 1.0)));
        assert!(p.contains(vec2(0.0, 5.0)));
        assert!(p.contains(vec2(4.0, 5.0)));
        assert!(!p.contains(vec2(5.0, 5.0)));
        assert!(!p.contains(vec2(-1.0, 5.0)));
    }

    #[test]
    fn shape_crossing_hole_not_contained() {
        let p = square_with_hole();
        let across = EdgeShape::Segment(Segment::new(vec2(1.0, 5.0), vec2(9.0, 5.0)));
        assert!(!p.contains_shape(&across));
        let below = EdgeShape::Segment(Segment::new(vec2(1.0, 2.0), vec2(9.0, 2.0)));
        assert!(p.contains_shape(&below));
        // along the boundary
        let on_edge = EdgeShape::Segment(Segment::new(vec2(0.0, 0.0), vec2(10.0, 0.0)));
        assert!(p.contains_shape(&on_edge));
    }

    #[test]
    fn arc_bulging_out() {
        let p = square_with_hole();
        // half circle from (2, 1) to (8, 1) through (5, -2)
        let arc = Arc::new(vec2(5.0, 1.0), 3.0, PI, 2.0 * PI, true);
        assert!(!p.contains_shape(&EdgeShape::Arc(arc)));
        let small = Arc::new(vec2(5.0, 2.0), 1.0, PI, 2.0 * PI, true);
        assert!(p.contains_shape(&EdgeShape::Arc(small)));
    }
}
