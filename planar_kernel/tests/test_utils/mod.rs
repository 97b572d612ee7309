#![allow(dead_code)]

use planar_kernel::{
    core::{
        math::{Vector2, vec2},
        traits::FuzzyEq,
    },
    shape::Box2,
    topology::{FaceId, Polygon},
};

/// Holds a set of properties of a polygon for comparison in tests.
#[derive(Debug, Copy, Clone)]
pub struct PolygonProperties {
    pub face_count: usize,
    pub edge_count: usize,
    pub area: f64,
    pub extents: Box2<f64>,
}

impl PolygonProperties {
    // property comparer epsilon
    pub const PROP_CMP_EPS: f64 = 1e-5;

    pub fn new(
        face_count: usize,
        edge_count: usize,
        area: f64,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Self {
        Self {
            face_count,
            edge_count,
            area,
            extents: Box2::new(min_x, min_y, max_x, max_y),
        }
    }

    pub fn from_polygon(polygon: &Polygon) -> Self {
        Self {
            face_count: polygon.face_count(),
            edge_count: polygon.edge_count(),
            area: polygon.area(),
            extents: polygon.bbox(),
        }
    }

    pub fn fuzzy_eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.face_count == other.face_count
            && self.edge_count == other.edge_count
            && self.area.fuzzy_eq_eps(other.area, eps)
            && box_fuzzy_eq_eps(&self.extents, &other.extents, eps)
    }
}

/// Fuzzy compare boxes.
pub fn box_fuzzy_eq_eps(a: &Box2<f64>, b: &Box2<f64>, eps: f64) -> bool {
    a.xmin.fuzzy_eq_eps(b.xmin, eps)
        && a.ymin.fuzzy_eq_eps(b.ymin, eps)
        && a.xmax.fuzzy_eq_eps(b.xmax, eps)
        && a.ymax.fuzzy_eq_eps(b.ymax, eps)
}

pub fn assert_properties(polygon: &Polygon, expected: &PolygonProperties) {
    let actual = PolygonProperties::from_polygon(polygon);
    assert!(
        actual.fuzzy_eq_eps(expected, PolygonProperties::PROP_CMP_EPS),
        "property mismatch\n  actual: {actual:?}\nexpected: {expected:?}"
    );
}

/// Counter clockwise rectangle loop.
pub fn rect_loop(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Vec<Vector2<f64>> {
    vec![
        vec2(xmin, ymin),
        vec2(xmax, ymin),
        vec2(xmax, ymax),
        vec2(xmin, ymax),
    ]
}

/// Clockwise rectangle loop (a hole under the default convention).
pub fn rect_hole_loop(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Vec<Vector2<f64>> {
    let mut points = rect_loop(xmin, ymin, xmax, ymax);
    points.reverse();
    points
}

pub fn rectangle(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Polygon {
    Polygon::from_points(&rect_loop(xmin, ymin, xmax, ymax)).unwrap()
}

/// Checks the structural invariants plus geometric closure of every face loop (each edge starts
/// where its predecessor ends).
pub fn assert_topology(polygon: &Polygon) {
    assert!(polygon.check_invariants(), "structural invariants broken");
    let eps = polygon.options().pos_equal_eps;
    for face in polygon.faces() {
        assert_closed_loop(polygon, face, eps);
    }
}

pub fn assert_closed_loop(polygon: &Polygon, face: FaceId, eps: f64) {
    let edges: Vec<_> = polygon.face_edges(face).collect();
    assert_eq!(edges.len(), polygon.face(face).unwrap().edge_count());
    for e in edges {
        let edge = polygon.edge(e).unwrap();
        let next = polygon.edge(edge.next()).unwrap();
        assert_eq!(next.prev(), e);
        assert_eq!(edge.face(), face);
        assert!(
            edge.shape().end().fuzzy_eq_eps(next.shape().start(), eps),
            "gap between {:?} and {:?}",
            edge.shape(),
            next.shape()
        );
    }
}
