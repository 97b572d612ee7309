use super::{Edge, EdgeId, Face, FaceId, TopologyOptions, loop_signed_area};
use crate::{
    core::{math::Vector2, traits::Real},
    error::{PreconditionError, TopologyResult},
    index::{SpatialSet, arena::Arena},
    shape::{Box2, Circle, EdgeShape, Segment},
};

/// Planar polygon made of any number of closed boundary loops (faces).
///
/// Edges and faces live in arenas owned by the polygon and are addressed by [EdgeId] and
/// [FaceId] handles. Two spatial sets index the live faces and edges by bounding box, every
/// mutation keeps both in lockstep with the arenas. By convention counter clockwise loops are
/// islands and clockwise loops are holes, but any consistent convention works (see
/// [Polygon::split_to_islands]).
///
/// # Examples
///
/// ```
/// # use planar_kernel::core::math::*;
/// # use planar_kernel::core::traits::*;
/// # use planar_kernel::topology::Polygon;
/// let outer = [vec2(0.0, 0.0), vec2(10.0, 0.0), vec2(10.0, 10.0), vec2(0.0, 10.0)];
/// let hole = [vec2(2.0, 2.0), vec2(2.0, 4.0), vec2(4.0, 4.0), vec2(4.0, 2.0)];
/// let polygon: Polygon = Polygon::from_loops(&[&outer[..], &hole[..]]).unwrap();
/// assert_eq!(polygon.face_count(), 2);
/// assert!(polygon.area().fuzzy_eq(96.0));
/// ```
#[derive(Debug)]
pub struct Polygon<T = f64>
where
    T: Real,
{
    edge_arena: Arena<EdgeId, Edge<T>>,
    face_arena: Arena<FaceId, Face<T>>,
    pub(crate) faces: SpatialSet<FaceId, T>,
    pub(crate) edges: SpatialSet<EdgeId, T>,
    options: TopologyOptions<T>,
}

impl<T> Default for Polygon<T>
where
    T: Real,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Polygon<T>
where
    T: Real,
{
    /// Structural rebuild: fresh arenas and spatial sets, handles are not preserved.
    fn clone(&self) -> Self {
        let mut result = Polygon::with_options(self.options);
        for face in self.faces() {
            result.insert_loop(self.face_shapes(face));
        }
        result
    }
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// Create a new empty polygon.
    #[inline]
    pub fn new() -> Self {
        Self::with_options(TopologyOptions::new())
    }

    pub fn with_options(options: TopologyOptions<T>) -> Self {
        Polygon {
            edge_arena: Arena::new(),
            face_arena: Arena::new(),
            faces: SpatialSet::new(),
            edges: SpatialSet::new(),
            options,
        }
    }

    #[inline]
    pub fn options(&self) -> &TopologyOptions<T> {
        &self.options
    }

    /// Single face polygon from a closed loop of points (the closing segment is implied).
    pub fn from_points(points: &[Vector2<T>]) -> TopologyResult<Self> {
        Self::from_points_opt(points, &TopologyOptions::new())
    }

    /// Same as [Polygon::from_points] but with the `options` given.
    pub fn from_points_opt(
        points: &[Vector2<T>],
        options: &TopologyOptions<T>,
    ) -> TopologyResult<Self> {
        let mut result = Self::with_options(*options);
        result.add_face(points)?;
        Ok(result)
    }

    /// Polygon with one face per loop of points.
    pub fn from_loops<L>(loops: &[L]) -> TopologyResult<Self>
    where
        L: AsRef<[Vector2<T>]>,
    {
        Self::from_loops_opt(loops, &TopologyOptions::new())
    }

    /// Same as [Polygon::from_loops] but with the `options` given.
    pub fn from_loops_opt<L>(loops: &[L], options: &TopologyOptions<T>) -> TopologyResult<Self>
    where
        L: AsRef<[Vector2<T>]>,
    {
        let mut result = Self::with_options(*options);
        for l in loops {
            result.add_face(l.as_ref())?;
        }
        Ok(result)
    }

    /// Polygon with one face per closed loop of shapes.
    pub fn from_shape_loops<L>(loops: &[L]) -> TopologyResult<Self>
    where
        L: AsRef<[EdgeShape<T>]>,
    {
        Self::from_shape_loops_opt(loops, &TopologyOptions::new())
    }

    /// Same as [Polygon::from_shape_loops] but with the `options` given.
    pub fn from_shape_loops_opt<L>(
        loops: &[L],
        options: &TopologyOptions<T>,
    ) -> TopologyResult<Self>
    where
        L: AsRef<[EdgeShape<T>]>,
    {
        let mut result = Self::with_options(*options);
        for l in loops {
            result.add_face_shapes(l.as_ref())?;
        }
        Ok(result)
    }

    /// Counter clockwise rectangle face covering `bbox`.
    pub fn from_box(bbox: &Box2<T>) -> TopologyResult<Self> {
        Self::from_box_opt(bbox, &TopologyOptions::new())
    }

    pub fn from_box_opt(bbox: &Box2<T>, options: &TopologyOptions<T>) -> TopologyResult<Self> {
        Self::from_points_opt(&bbox.to_points(), options)
    }

    /// Counter clockwise single arc face following `circle`.
    pub fn from_circle(circle: &Circle<T>) -> TopologyResult<Self> {
        Self::from_circle_opt(circle, &TopologyOptions::new())
    }

    pub fn from_circle_opt(
        circle: &Circle<T>,
        options: &TopologyOptions<T>,
    ) -> TopologyResult<Self> {
        if circle.r <= options.pos_equal_eps {
            return Err(PreconditionError::InvalidLoop("circle radius must be positive").into());
        }
        let mut result = Self::with_options(*options);
        result.add_face_shapes(&[EdgeShape::Arc(circle.to_arc(true))])?;
        Ok(result)
    }

    /// Add a face from a closed loop of points.
    ///
    /// Consecutive duplicate points (and a repeated closing point) are dropped, at least three
    /// distinct points must remain.
    pub fn add_face(&mut self, points: &[Vector2<T>]) -> TopologyResult<FaceId> {
        let eps = self.options.pos_equal_eps;
        let mut pts: Vec<Vector2<T>> = Vec::with_capacity(points.len());
        for &p in points {
            if pts.last().is_some_and(|last| last.fuzzy_eq_eps(p, eps)) {
                continue;
            }
            pts.push(p);
        }

        while pts.len() > 1 && pts[0].fuzzy_eq_eps(pts[pts.len() - 1], eps) {
            pts.pop();
        }

        if pts.len() < 3 {
            return Err(PreconditionError::InvalidLoop("fewer than three distinct points").into());
        }

        let n = pts.len();
        let shapes = (0..n).map(|i| EdgeShape::Segment(Segment::new(pts[i], pts[(i + 1) % n])));
        Ok(self.insert_loop(shapes))
    }

    /// Add a face from a connected closed loop of shapes.
    pub fn add_face_shapes(&mut self, shapes: &[EdgeShape<T>]) -> TopologyResult<FaceId> {
        if shapes.is_empty() {
            return Err(PreconditionError::InvalidLoop("loop has no shapes").into());
        }

        let eps = self.options.pos_equal_eps;
        for (i, shape) in shapes.iter().enumerate() {
            let next = &shapes[(i + 1) % shapes.len()];
            if !shape.end().fuzzy_eq_eps(next.start(), eps) {
                return Err(PreconditionError::InvalidLoop("consecutive shapes are not connected").into());
            }
        }

        Ok(self.insert_loop(shapes.iter().copied()))
    }

    /// Remove `face` and all of its edges. Returns `false` if the face does not exist.
    pub fn delete_face(&mut self, face: FaceId) -> bool {
        if self.face(face).is_none() {
            return false;
        }

        let edges: Vec<EdgeId> = self.face_edges(face).collect();
        for e in edges {
            self.edges.delete(&e);
            self.free_edge(e);
        }

        self.faces.delete(&face);
        self.free_face(face);
        true
    }

    /// Returns `true` if the polygon has no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All face handles in bounding box order.
    pub fn faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces.iter().map(|(f, _)| f)
    }

    /// All edge handles in bounding box order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.iter().map(|(e, _)| e)
    }

    #[inline]
    pub fn face(&self, face: FaceId) -> Option<&Face<T>> {
        self.face_arena.get(face)
    }

    #[inline]
    pub fn edge(&self, edge: EdgeId) -> Option<&Edge<T>> {
        self.edge_arena.get(edge)
    }

    /// Edges of `face` in loop order starting at its first edge (empty if the face does not exist).
    pub fn face_edges(&self, face: FaceId) -> FaceEdges<'_, T> {
        match self.face(face) {
            Some(f) => FaceEdges {
                polygon: self,
                next: f.first,
                remaining: f.len,
            },
            None => FaceEdges {
                polygon: self,
                next: EdgeId::default(),
                remaining: 0,
            },
        }
    }

    /// Shapes of `face` in loop order.
    pub fn face_shapes(&self, face: FaceId) -> Vec<EdgeShape<T>> {
        self.face_edges(face)
            .map(|e| self.edge_ref(e).shape)
            .collect()
    }

    /// Bounding box of all faces (empty box for an empty polygon).
    #[inline]
    pub fn bbox(&self) -> Box2<T> {
        self.faces.bounds()
    }

    /// Start point of every edge, face by face.
    pub fn vertices(&self) -> Vec<Vector2<T>> {
        self.faces()
            .flat_map(|f| self.face_edges(f))
            .map(|e| self.edge_ref(e).shape.start())
            .collect()
    }

    /// Total area, islands add and holes subtract.
    pub fn area(&self) -> T {
        self.faces()
            .map(|f| self.face_ref(f).signed_area)
            .fold(T::zero(), |acc, a| acc + a)
            .abs()
    }

    /// Average of all vertices, `None` for an empty polygon.
    pub fn middle(&self) -> Option<Vector2<T>> {
        let vertices = self.vertices();
        if vertices.is_empty() {
            return None;
        }
        let n = T::from(vertices.len())?;
        let sum = vertices
            .iter()
            .fold(Vector2::zero(), |acc: Vector2<T>, v| acc + *v);
        Some(Vector2::new(sum.x / n, sum.y / n))
    }

    /// Reverse the direction of every face in place.
    pub fn reverse(&mut self) {
        let faces: Vec<FaceId> = self.faces().collect();
        for face in faces {
            let edges: Vec<EdgeId> = self.face_edges(face).collect();
            for e in edges {
                let edge = self.edge_mut(e);
                edge.shape = edge.shape.reverse();
                std::mem::swap(&mut edge.next, &mut edge.prev);
            }
            self.refresh_face(face);
        }
    }

    /// New polygon translated by `v`.
    pub fn translate(&self, v: Vector2<T>) -> Self {
        self.map_shapes(|s| s.translate(v))
    }

    /// New polygon rotated by `angle` radians (counter clockwise) about `center`.
    pub fn rotate(&self, angle: T, center: Vector2<T>) -> Self {
        self.map_shapes(|s| s.rotate(angle, center))
    }

    /// Split into single face polygons.
    pub fn to_array(&self) -> Vec<Self> {
        self.faces()
            .map(|f| self.single_face_polygon(f))
            .collect()
    }

    /// Standalone polygon holding a copy of `face`.
    pub fn face_to_polygon(&self, face: FaceId) -> TopologyResult<Self> {
        if self.face(face).is_none() {
            return Err(PreconditionError::UnknownFace(face).into());
        }
        Ok(self.single_face_polygon(face))
    }

    /// Validates every face loop (links, face handles, edge count) and that the spatial sets hold
    /// exactly the live faces and edges under their current boxes.
    ///
    /// Intended for tests and debug assertions, runs in O(n log n).
    pub fn check_invariants(&self) -> bool {
        let live_faces = self.face_arena.len();
        let live_edges = self.edge_arena.len();
        if live_faces != self.faces.len() || live_edges != self.edges.len() {
            return false;
        }

        let mut loop_edges = 0;
        for (face_id, face) in self.face_arena.iter() {
            if self.faces.bbox_of(&face_id).is_none() {
                return false;
            }

            let mut cur = face.first;
            for _ in 0..face.len {
                let Some(edge) = self.edge(cur) else {
                    return false;
                };
                let next_links_back = self.edge(edge.next).is_some_and(|n| n.prev == cur);
                let indexed = self.edges.bbox_of(&cur) == Some(edge.shape.bbox());
                if edge.face != face_id || !next_links_back || !indexed {
                    return false;
                }
                cur = edge.next;
            }

            if cur != face.first {
                return false;
            }
            loop_edges += face.len;
        }

        loop_edges == live_edges && self.faces.check() && self.edges.check()
    }

    /// Creates a face from a non-empty sequence of connected shapes.
    pub(crate) fn insert_loop<I>(&mut self, shapes: I) -> FaceId
    where
        I: IntoIterator<Item = EdgeShape<T>>,
    {
        let face = self.alloc_face(Face {
            first: EdgeId::default(),
            len: 0,
            bbox: Box2::empty(),
            signed_area: T::zero(),
        });

        let mut first = None;
        let mut prev: Option<EdgeId> = None;
        let mut len = 0;
        for shape in shapes {
            let id = self.alloc_edge(Edge {
                shape,
                next: EdgeId::default(),
                prev: EdgeId::default(),
                face,
            });
            match prev {
                Some(p) => {
                    self.edge_mut(p).next = id;
                    self.edge_mut(id).prev = p;
                }
                None => first = Some(id),
            }
            self.edges.add(id, shape.bbox());
            prev = Some(id);
            len += 1;
        }

        let first = first.expect("loop has at least one shape");
        let last = prev.expect("loop has at least one shape");
        self.edge_mut(last).next = first;
        self.edge_mut(first).prev = last;

        let f = self.face_mut(face);
        f.first = first;
        f.len = len;
        self.refresh_face(face);
        face
    }

    /// Turns the closed chain through `start` into a new face, returning it.
    pub(crate) fn adopt_chain(&mut self, start: EdgeId) -> FaceId {
        let face = self.alloc_face(Face {
            first: start,
            len: 0,
            bbox: Box2::empty(),
            signed_area: T::zero(),
        });

        let mut len = 0;
        let mut cur = start;
        loop {
            let edge = self.edge_mut(cur);
            edge.face = face;
            cur = edge.next;
            len += 1;
            if cur == start {
                break;
            }
            debug_assert!(len <= self.edge_arena.len(), "edge chain is not closed");
        }

        self.face_mut(face).len = len;
        self.refresh_face(face);
        face
    }

    /// Recomputes the cached box and signed area of `face` and re-indexes it.
    pub(crate) fn refresh_face(&mut self, face: FaceId) {
        let bbox = self
            .face_edges(face)
            .fold(Box2::empty(), |acc, e| acc.merge(&self.edge_ref(e).shape.bbox()));
        let signed_area = loop_signed_area(self.face_edges(face).map(|e| &self.edge_ref(e).shape));

        let f = self.face_mut(face);
        f.bbox = bbox;
        f.signed_area = signed_area;
        self.faces.delete(&face);
        self.faces.add(face, bbox);
    }

    /// Drops `face` from the face set and arena, its edges are left untouched.
    pub(crate) fn forget_face(&mut self, face: FaceId) {
        self.faces.delete(&face);
        self.free_face(face);
    }

    #[inline]
    pub(crate) fn alloc_edge(&mut self, edge: Edge<T>) -> EdgeId {
        self.edge_arena.insert(edge)
    }

    pub(crate) fn free_edge(&mut self, edge: EdgeId) -> Edge<T> {
        self.edge_arena
            .remove(edge)
            .expect("edge handle refers to a live edge")
    }

    #[inline]
    fn alloc_face(&mut self, face: Face<T>) -> FaceId {
        self.face_arena.insert(face)
    }

    fn free_face(&mut self, face: FaceId) -> Face<T> {
        self.face_arena
            .remove(face)
            .expect("face handle refers to a live face")
    }

    #[inline]
    pub(crate) fn edge_ref(&self, edge: EdgeId) -> &Edge<T> {
        self.edge(edge).expect("edge handle refers to a live edge")
    }

    #[inline]
    pub(crate) fn edge_mut(&mut self, edge: EdgeId) -> &mut Edge<T> {
        self.edge_arena
            .get_mut(edge)
            .expect("edge handle refers to a live edge")
    }

    #[inline]
    pub(crate) fn face_ref(&self, face: FaceId) -> &Face<T> {
        self.face(face).expect("face handle refers to a live face")
    }

    #[inline]
    pub(crate) fn face_mut(&mut self, face: FaceId) -> &mut Face<T> {
        self.face_arena
            .get_mut(face)
            .expect("face handle refers to a live face")
    }

    fn single_face_polygon(&self, face: FaceId) -> Self {
        let mut result = Polygon::with_options(self.options);
        result.insert_loop(self.face_shapes(face));
        result
    }

    fn map_shapes<F>(&self, f: F) -> Self
    where
        F: Fn(&EdgeShape<T>) -> EdgeShape<T>,
    {
        let mut result = Polygon::with_options(self.options);
        for face in self.faces() {
            let shapes: Vec<_> = self.face_shapes(face).iter().map(&f).collect();
            result.insert_loop(shapes);
        }
        result
    }
}

/// Iterator over the edges of one face, returned by [Polygon::face_edges].
pub struct FaceEdges<'a, T>
where
    T: Real,
{
    polygon: &'a Polygon<T>,
    next: EdgeId,
    remaining: usize,
}

impl<T> Iterator for FaceEdges<'_, T>
where
    T: Real,
{
    type Item = EdgeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.next;
        self.next = self.polygon.edge_ref(id).next;
        self.remaining -= 1;
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
