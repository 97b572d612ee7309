use super::{Edge, EdgeId, FaceId, PointInclusion, Polygon, ray_shoot};
use crate::{
    core::{math::Vector2, traits::Real},
    error::{PreconditionError, TopologyResult},
    shape::{Box2, EdgeShape, Segment},
};

impl<T> Polygon<T>
where
    T: Real,
{
    /// First edge whose shape contains `point` (within `pos_equal_eps`), `None` if the point is
    /// not on the boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_kernel::core::math::*;
    /// # use planar_kernel::polygon;
    /// let square = polygon![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
    /// let edge = square.find_edge_by_point(vec2(5.0, 0.0)).unwrap();
    /// assert_eq!(square.edge(edge).unwrap().shape().start(), vec2(0.0, 0.0));
    /// assert!(square.find_edge_by_point(vec2(5.0, 5.0)).is_none());
    /// ```
    pub fn find_edge_by_point(&self, point: Vector2<T>) -> Option<EdgeId> {
        let eps = self.options().pos_equal_eps;
        self.edges
            .search(&Box2::from_point(point).expand(eps))
            .find(|&e| self.edge_ref(e).shape.contains_point_eps(point, eps))
    }

    /// Like [Polygon::find_edge_by_point] but only considers edges of `face`.
    fn find_face_edge_by_point(&self, point: Vector2<T>, face: FaceId) -> Option<EdgeId> {
        let eps = self.options().pos_equal_eps;
        self.edges
            .search(&Box2::from_point(point).expand(eps))
            .find(|&e| {
                let edge = self.edge_ref(e);
                edge.face == face && edge.shape.contains_point_eps(point, eps)
            })
    }

    /// Remove the run of edges `edge_from..=edge_to` (walking forward) from `face`.
    ///
    /// Removing the whole loop deletes the face. Otherwise the edges on either side of the run are
    /// linked to each other, the loop may then have a geometric gap there until the caller splices
    /// a replacement chain in.
    pub fn remove_chain(
        &mut self,
        face: FaceId,
        edge_from: EdgeId,
        edge_to: EdgeId,
    ) -> TopologyResult<()> {
        let face_len = self
            .face(face)
            .ok_or(PreconditionError::UnknownFace(face))?
            .len;
        for e in [edge_from, edge_to] {
            let edge = self.edge(e).ok_or(PreconditionError::UnknownEdge(e))?;
            if edge.face != face {
                return Err(PreconditionError::EdgeNotInFace { edge: e, face }.into());
            }
        }

        // collect the chain first so nothing is mutated if `edge_to` cannot be reached
        let mut chain = Vec::new();
        let mut cur = edge_from;
        loop {
            chain.push(cur);
            if cur == edge_to {
                break;
            }
            cur = self.edge_ref(cur).next;
            if chain.len() >= face_len {
                return Err(PreconditionError::ChainNotReachable {
                    from: edge_from,
                    to: edge_to,
                }
                .into());
            }
        }

        if self.edge_ref(edge_to).next == edge_from {
            log::debug!("removing whole loop of face {face:?}");
            self.delete_face(face);
            return Ok(());
        }

        let before = self.edge_ref(edge_from).prev;
        let after = self.edge_ref(edge_to).next;
        for &e in chain.iter() {
            self.edges.delete(&e);
            self.free_edge(e);
        }
        self.edge_mut(before).next = after;
        self.edge_mut(after).prev = before;

        let f = self.face_mut(face);
        f.first = after;
        f.len -= chain.len();

        log::debug!("removed chain of {} edges from face {face:?}", chain.len());
        self.refresh_face(face);
        Ok(())
    }

    /// Split `edge` at `point`, returning the edge that now ends at `point`.
    ///
    /// If `point` is the edge start the preceding edge is returned, if it is the edge end `edge`
    /// itself is returned, in both cases nothing changes. Otherwise a new edge holding the head
    /// piece is inserted before `edge`, `edge` keeps its handle and links but now holds the tail
    /// piece, and the new edge is returned.
    pub fn add_vertex(&mut self, point: Vector2<T>, edge: EdgeId) -> TopologyResult<EdgeId> {
        let eps = self.options().pos_equal_eps;
        let current = self.edge(edge).ok_or(PreconditionError::UnknownEdge(edge))?;
        let [head, tail] = current
            .shape
            .split_at_eps(point, eps)
            .ok_or(PreconditionError::PointNotOnEdge(edge))?;

        let (head, tail) = match (head, tail) {
            (None, _) => return Ok(current.prev),
            (_, None) => return Ok(edge),
            (Some(h), Some(t)) => (h, t),
        };

        let face = current.face;
        let before = current.prev;
        let new_edge = self.alloc_edge(Edge {
            shape: head,
            next: edge,
            prev: before,
            face,
        });
        self.edge_mut(before).next = new_edge;
        let e = self.edge_mut(edge);
        e.prev = new_edge;
        e.shape = tail;

        // box of the split edge changed
        self.edges.delete(&edge);
        self.edges.add(edge, tail.bbox());
        self.edges.add(new_edge, head.bbox());
        self.face_mut(face).len += 1;

        Ok(new_edge)
    }

    /// Cut the face whose boundary holds `pt1` and `pt2` with the chord between them.
    ///
    /// Both points must lie on the boundary of the same face. The polygon itself ends up with the
    /// two new faces in place of the old one, copies of them are returned as standalone polygons
    /// (the face containing the chord `pt1 -> pt2` first).
    pub fn cut_face(&mut self, pt1: Vector2<T>, pt2: Vector2<T>) -> TopologyResult<[Self; 2]> {
        let eps = self.options().pos_equal_eps;
        let edge1 = self
            .find_edge_by_point(pt1)
            .ok_or(PreconditionError::PointNotOnBoundary)?;
        let edge2 = self
            .find_edge_by_point(pt2)
            .ok_or(PreconditionError::PointNotOnBoundary)?;
        let face = self.edge_ref(edge1).face;
        let face2 = self.edge_ref(edge2).face;
        if face != face2 {
            return Err(PreconditionError::DifferentFaces(face, face2).into());
        }
        if pt1.fuzzy_eq_eps(pt2, eps) {
            return Err(PreconditionError::CoincidentCutPoints.into());
        }

        let before1 = self.add_vertex(pt1, edge1)?;
        // the first split may have replaced the edge holding pt2
        let edge2 = self
            .find_face_edge_by_point(pt2, face)
            .ok_or(PreconditionError::PointNotOnBoundary)?;
        let before2 = self.add_vertex(pt2, edge2)?;

        // ends are stable under splitting so both vertices can be read back now
        let v1 = self.edge_ref(before1).shape.end();
        let v2 = self.edge_ref(before2).shape.end();
        let after1 = self.edge_ref(before1).next;
        let after2 = self.edge_ref(before2).next;

        let chord1_shape = EdgeShape::Segment(Segment::new(v1, v2));
        let chord2_shape = EdgeShape::Segment(Segment::new(v2, v1));
        let chord1 = self.alloc_edge(Edge {
            shape: chord1_shape,
            next: after2,
            prev: before1,
            face,
        });
        let chord2 = self.alloc_edge(Edge {
            shape: chord2_shape,
            next: after1,
            prev: before2,
            face,
        });

        self.edge_mut(after1).prev = chord2;
        self.edge_mut(before1).next = chord1;
        self.edge_mut(after2).prev = chord1;
        self.edge_mut(before2).next = chord2;
        self.edges.add(chord1, chord1_shape.bbox());
        self.edges.add(chord2, chord2_shape.bbox());

        let face1 = self.adopt_chain(chord1);
        let face2 = self.adopt_chain(chord2);
        self.forget_face(face);

        log::debug!(
            "cut face {face:?} into {face1:?} ({} edges) and {face2:?} ({} edges)",
            self.face_ref(face1).len,
            self.face_ref(face2).len
        );

        Ok([self.face_to_polygon(face1)?, self.face_to_polygon(face2)?])
    }

    /// Cut a copy of the polygon with a sequence of chords, returning the resulting pieces.
    ///
    /// A chord is applied only if its midpoint lies inside this polygon. It then splits every
    /// current piece whose boundary holds both chord ends and whose interior holds the chord
    /// midpoint, other pieces pass through unchanged. Chords not interior to this polygon are
    /// skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_kernel::core::math::*;
    /// # use planar_kernel::core::traits::*;
    /// # use planar_kernel::polygon;
    /// # use planar_kernel::shape::Segment;
    /// # use planar_kernel::topology::Polygon;
    /// let square: Polygon = polygon![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
    /// let chords = [
    ///     Segment::new(vec2(5.0, 0.0), vec2(5.0, 10.0)),
    ///     // outside the square, skipped
    ///     Segment::new(vec2(20.0, 0.0), vec2(20.0, 10.0)),
    /// ];
    /// let pieces = square.cut(&chords).unwrap();
    /// assert_eq!(pieces.len(), 2);
    /// assert!(pieces[0].area().fuzzy_eq(50.0));
    /// assert!(pieces[1].area().fuzzy_eq(50.0));
    /// ```
    pub fn cut(&self, chords: &[Segment<T>]) -> TopologyResult<Vec<Self>> {
        let mut pieces = vec![self.clone()];
        for chord in chords {
            if ray_shoot(self, chord.middle()) != PointInclusion::Inside {
                log::trace!("skipping chord {chord:?}, it is not interior");
                continue;
            }

            let mut next_pieces = Vec::with_capacity(pieces.len() + 1);
            for mut piece in pieces {
                if !piece.is_cut_by(chord) {
                    next_pieces.push(piece);
                    continue;
                }
                let [p1, p2] = piece.cut_face(chord.start(), chord.end())?;
                next_pieces.push(p1);
                next_pieces.push(p2);
            }
            pieces = next_pieces;
        }

        Ok(pieces)
    }

    /// `chord` runs through the interior of this piece between two points of its boundary.
    fn is_cut_by(&self, chord: &Segment<T>) -> bool {
        self.find_edge_by_point(chord.start()).is_some()
            && self.find_edge_by_point(chord.end()).is_some()
            && ray_shoot(self, chord.middle()) == PointInclusion::Inside
    }
}
