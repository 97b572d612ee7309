use super::{Edge, EdgeId, FaceId, Orientation, Polygon, face_crossings};
use crate::{
    core::{math::Vector2, traits::Real},
    dispatch::intersect_edge_shapes,
    shape::EdgeShape,
};
use std::cmp::Ordering;

impl<T> Polygon<T>
where
    T: Real,
{
    /// Points where two edges of `face` meet other than at the vertex shared by neighbouring
    /// edges. Empty for a simple loop.
    pub fn self_intersections(&self, face: FaceId) -> Vec<Vector2<T>> {
        let eps = self.options().pos_equal_eps;
        let mut result = Vec::new();
        for e in self.face_edges(face) {
            let edge = self.edge_ref(e);
            for o in self.edges.search(&edge.shape.bbox().expand(eps)) {
                // each pair once
                if o <= e {
                    continue;
                }
                let other = self.edge_ref(o);
                if other.face != face {
                    continue;
                }
                for p in intersect_edge_shapes(&edge.shape, &other.shape, eps) {
                    if !is_shared_vertex((e, edge), (o, other), p, eps) {
                        result.push(p);
                    }
                }
            }
        }
        result
    }

    /// Whether the loop of `face` does not touch or cross itself.
    #[inline]
    pub fn is_simple(&self, face: FaceId) -> bool {
        self.self_intersections(face).is_empty()
    }

    /// Whether the polygon is a well formed set of islands and holes.
    ///
    /// Requires that
    /// * every face encloses some area and is simple,
    /// * edges of different faces meet at most at vertices (no interior crossings),
    /// * each face has the orientation implied by its nesting depth: faces enclosed by an even
    ///   number of other faces have the orientation of the largest face, the others the opposite.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_kernel::core::math::*;
    /// # use planar_kernel::topology::Polygon;
    /// let outer = [vec2(0.0, 0.0), vec2(10.0, 0.0), vec2(10.0, 10.0), vec2(0.0, 10.0)];
    /// let hole = [vec2(2.0, 2.0), vec2(2.0, 4.0), vec2(4.0, 4.0), vec2(4.0, 2.0)];
    /// assert!(Polygon::from_loops(&[&outer[..], &hole[..]]).unwrap().is_valid());
    ///
    /// // hole with the island orientation
    /// let bad_hole = [vec2(2.0, 2.0), vec2(4.0, 2.0), vec2(4.0, 4.0), vec2(2.0, 4.0)];
    /// assert!(!Polygon::from_loops(&[&outer[..], &bad_hole[..]]).unwrap().is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        let faces: Vec<FaceId> = self.faces().collect();
        if faces.is_empty() {
            return true;
        }

        for &f in faces.iter() {
            if self.face_ref(f).orientation() == Orientation::NotOrientable || !self.is_simple(f) {
                return false;
            }
        }

        if self.has_cross_face_crossing() {
            return false;
        }

        let island_orientation = faces
            .iter()
            .map(|&f| self.face_ref(f))
            .max_by(|a, b| {
                a.area()
                    .partial_cmp(&b.area())
                    .unwrap_or(Ordering::Equal)
            })
            .map(|face| face.orientation())
            .unwrap_or(Orientation::CounterClockwise);

        faces.iter().all(|&f| {
            let sample = self.edge_ref(self.face_ref(f).first).shape.middle();
            let depth = faces
                .iter()
                .filter(|&&g| g != f && face_crossings(self, g, sample) % 2 == 1)
                .count();
            let is_island = self.face_ref(f).orientation() == island_orientation;
            is_island == (depth % 2 == 0)
        })
    }

    fn has_cross_face_crossing(&self) -> bool {
        let eps = self.options().pos_equal_eps;
        for e in self.edges() {
            let edge = self.edge_ref(e);
            for o in self.edges.search(&edge.shape.bbox().expand(eps)) {
                if o <= e {
                    continue;
                }
                let other = self.edge_ref(o);
                if other.face == edge.face {
                    continue;
                }
                let crossing = intersect_edge_shapes(&edge.shape, &other.shape, eps)
                    .into_iter()
                    .any(|p| {
                        !is_endpoint(&edge.shape, p, eps) && !is_endpoint(&other.shape, p, eps)
                    });
                if crossing {
                    log::debug!("edges {e:?} and {o:?} of different faces cross");
                    return true;
                }
            }
        }
        false
    }
}

#[inline]
fn is_endpoint<T>(shape: &EdgeShape<T>, p: Vector2<T>, eps: T) -> bool
where
    T: Real,
{
    p.fuzzy_eq_eps(shape.start(), eps) || p.fuzzy_eq_eps(shape.end(), eps)
}

/// Whether `p` is the vertex joining `edge` to its neighbour `other`.
fn is_shared_vertex<T>(
    (edge_id, edge): (EdgeId, &Edge<T>),
    (other_id, other): (EdgeId, &Edge<T>),
    p: Vector2<T>,
    eps: T,
) -> bool
where
    T: Real,
{
    let at_end = edge.next == other_id
        && other.prev == edge_id
        && p.fuzzy_eq_eps(edge.shape.end(), eps);
    let at_start = edge.prev == other_id
        && other.next == edge_id
        && p.fuzzy_eq_eps(edge.shape.start(), eps);
    at_end || at_start
}
