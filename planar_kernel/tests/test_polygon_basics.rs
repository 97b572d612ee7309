mod test_utils;

mod test_polygon_basics {
    use super::test_utils::*;
    use planar_kernel::{
        assert_fuzzy_eq,
        core::{math::vec2, traits::FuzzyEq},
        error::{PreconditionError, TopologyError},
        polygon,
        shape::{Arc, Box2, Circle, EdgeShape, Segment},
        topology::{Orientation, Polygon, TopologyOptions},
    };
    use std::f64::consts::PI;

    #[test]
    fn square_area_and_validity() {
        let square = Polygon::from_points(&rect_loop(0.0, 0.0, 10.0, 10.0)).unwrap();
        assert_properties(&square, &PolygonProperties::new(1, 4, 100.0, 0.0, 0.0, 10.0, 10.0));
        assert!(square.is_valid());
        assert_topology(&square);
        let face = square.faces().next().unwrap();
        assert_eq!(
            square.face(face).unwrap().orientation(),
            Orientation::CounterClockwise
        );
    }

    #[test]
    fn from_box_and_circle() {
        let b = Polygon::from_box(&Box2::new(-1.0, -2.0, 3.0, 4.0)).unwrap();
        assert_properties(&b, &PolygonProperties::new(1, 4, 24.0, -1.0, -2.0, 3.0, 4.0));

        let c = Polygon::from_circle(&Circle::new(vec2(1.0, 1.0), 2.0)).unwrap();
        assert_properties(&c, &PolygonProperties::new(1, 1, 4.0 * PI, -1.0, -1.0, 3.0, 3.0));
        assert!(c.is_valid());

        let degenerate = Polygon::from_circle(&Circle::new(vec2(0.0, 0.0), 0.0));
        assert!(degenerate.is_err());
    }

    #[test]
    fn mixed_segment_arc_loop() {
        // rectangle 0..4 x 0..2 with a half disk of radius 2 on top
        let shapes = [
            EdgeShape::Segment(Segment::new(vec2(0.0, 0.0), vec2(4.0, 0.0))),
            EdgeShape::Segment(Segment::new(vec2(4.0, 0.0), vec2(4.0, 2.0))),
            EdgeShape::Arc(Arc::new(vec2(2.0, 2.0), 2.0, 0.0, PI, true)),
            EdgeShape::Segment(Segment::new(vec2(0.0, 2.0), vec2(0.0, 0.0))),
        ];
        let p = Polygon::from_shape_loops(&[&shapes[..]]).unwrap();
        assert_properties(
            &p,
            &PolygonProperties::new(1, 4, 8.0 + 2.0 * PI, 0.0, 0.0, 4.0, 4.0),
        );
        assert!(p.is_valid());
        assert!(p.contains(vec2(2.0, 3.9)));
        assert!(!p.contains(vec2(0.1, 3.9)));
    }

    #[test]
    fn invalid_loops_rejected() {
        let mut p = Polygon::new();
        let err = p.add_face(&[vec2(0.0, 0.0), vec2(1.0, 0.0)]).unwrap_err();
        assert!(matches!(
            err,
            TopologyError::InvalidPrecondition(PreconditionError::InvalidLoop(_))
        ));
        // all duplicates collapse to two points
        let err = p
            .add_face(&[vec2(0.0, 0.0), vec2(0.0, 0.0), vec2(1.0, 1.0), vec2(0.0, 0.0)])
            .unwrap_err();
        assert!(matches!(err, TopologyError::InvalidPrecondition(_)));
        assert!(p.is_empty());
        assert!(p.check_invariants());
    }

    #[test]
    fn add_and_delete_faces() {
        let mut p = Polygon::new();
        let a = p.add_face(&rect_loop(0.0, 0.0, 10.0, 10.0)).unwrap();
        let b = p.add_face(&rect_hole_loop(2.0, 2.0, 4.0, 4.0)).unwrap();
        let c = p.add_face(&rect_loop(20.0, 0.0, 25.0, 5.0)).unwrap();
        assert_properties(&p, &PolygonProperties::new(3, 12, 121.0, 0.0, 0.0, 25.0, 10.0));
        assert_topology(&p);

        assert!(p.delete_face(c));
        assert!(!p.delete_face(c));
        assert_properties(&p, &PolygonProperties::new(2, 8, 96.0, 0.0, 0.0, 10.0, 10.0));
        assert!(p.face(c).is_none());

        assert!(p.delete_face(b));
        assert!(p.delete_face(a));
        assert!(p.is_empty());
        assert_eq!(p.edge_count(), 0);
        assert!(p.bbox().is_empty());
        assert_topology(&p);
    }

    #[test]
    fn arena_slots_reused() {
        let mut p = Polygon::new();
        let a = p.add_face(&rect_loop(0.0, 0.0, 1.0, 1.0)).unwrap();
        p.delete_face(a);
        let b = p.add_face(&rect_loop(5.0, 5.0, 6.0, 6.0)).unwrap();
        assert_topology(&p);
        assert_eq!(p.face_count(), 1);
        assert!(p.face(b).is_some());
    }

    #[test]
    fn constructors_with_options() {
        let options = TopologyOptions { pos_equal_eps: 0.01 };
        // the 0.005 step collapses under the coarser tolerance
        let points = [
            vec2(0.0, 0.0),
            vec2(0.005, 0.0),
            vec2(4.0, 0.0),
            vec2(4.0, 4.0),
            vec2(0.0, 4.0),
        ];
        let p = Polygon::from_points_opt(&points, &options).unwrap();
        assert_eq!(p.edge_count(), 4);
        assert_eq!(p.options().pos_equal_eps, 0.01);
        assert_eq!(Polygon::from_points(&points).unwrap().edge_count(), 5);

        let loops = [rect_loop(0.0, 0.0, 4.0, 4.0), rect_hole_loop(1.0, 1.0, 2.0, 2.0)];
        let p = Polygon::from_loops_opt(&loops, &options).unwrap();
        assert_properties(&p, &PolygonProperties::new(2, 8, 15.0, 0.0, 0.0, 4.0, 4.0));
        assert_eq!(p.options(), &options);

        let b = Polygon::from_box_opt(&Box2::new(0.0, 0.0, 2.0, 1.0), &options).unwrap();
        assert_eq!(b.options(), &options);
        assert_fuzzy_eq!(b.area(), 2.0);

        let c = Polygon::from_circle_opt(&Circle::new(vec2(0.0, 0.0), 1.0), &options).unwrap();
        assert_eq!(c.options(), &options);
        assert!(Polygon::from_circle_opt(&Circle::new(vec2(0.0, 0.0), 0.005), &options).is_err());

        let shapes = [
            EdgeShape::Segment(Segment::new(vec2(0.0, 0.0), vec2(2.0, 0.0))),
            EdgeShape::Arc(Arc::new(vec2(1.0, 0.0), 1.0, 0.0, PI, true)),
        ];
        let half_disk = Polygon::from_shape_loops_opt(&[&shapes[..]], &options).unwrap();
        assert_eq!(half_disk.options(), &options);
        assert_fuzzy_eq!(half_disk.area(), PI / 2.0);
    }

    #[test]
    fn stale_handles_do_not_alias_reused_slots() {
        let mut p = Polygon::new();
        let a = p.add_face(&rect_loop(0.0, 0.0, 1.0, 1.0)).unwrap();
        let stale_edge = p.face(a).unwrap().first_edge();
        assert!(p.delete_face(a));

        let b = p.add_face(&rect_loop(5.0, 5.0, 6.0, 6.0)).unwrap();
        assert_ne!(a, b);
        assert!(p.face(a).is_none());
        assert!(!p.delete_face(a));
        assert_eq!(p.face_count(), 1);
        assert!(p.face(b).is_some());

        // edge handles of the deleted face are stale too
        assert!(p.edge(stale_edge).is_none());
        let err = p.add_vertex(vec2(5.5, 5.0), stale_edge).unwrap_err();
        assert_eq!(
            err,
            TopologyError::InvalidPrecondition(PreconditionError::UnknownEdge(stale_edge))
        );
        let err = p.remove_chain(b, stale_edge, stale_edge).unwrap_err();
        assert_eq!(
            err,
            TopologyError::InvalidPrecondition(PreconditionError::UnknownEdge(stale_edge))
        );
        assert_properties(&p, &PolygonProperties::new(1, 4, 1.0, 5.0, 5.0, 6.0, 6.0));
        assert_topology(&p);
    }

    #[test]
    fn reverse_and_transforms() {
        let mut p = rectangle(0.0, 0.0, 4.0, 2.0);
        p.reverse();
        let face = p.faces().next().unwrap();
        assert_eq!(p.face(face).unwrap().orientation(), Orientation::Clockwise);
        assert_fuzzy_eq!(p.face(face).unwrap().signed_area(), -8.0);
        assert_topology(&p);

        let moved = p.translate(vec2(1.0, 1.0));
        assert_properties(&moved, &PolygonProperties::new(1, 4, 8.0, 1.0, 1.0, 5.0, 3.0));

        let turned = rectangle(0.0, 0.0, 4.0, 2.0).rotate(PI / 2.0, vec2(0.0, 0.0));
        assert_properties(&turned, &PolygonProperties::new(1, 4, 8.0, -2.0, 0.0, 0.0, 4.0));
    }

    #[test]
    fn vertices_and_middle() {
        let p = polygon![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
        let vertices = p.vertices();
        assert_eq!(vertices.len(), 4);
        assert!(vertices.contains(&vec2(4.0, 4.0)));
        assert!(p.middle().unwrap().fuzzy_eq(vec2(2.0, 2.0)));
        assert!(Polygon::<f64>::new().middle().is_none());
    }

    #[test]
    fn to_array_and_face_to_polygon() {
        let outer = rect_loop(0.0, 0.0, 10.0, 10.0);
        let hole = rect_hole_loop(1.0, 1.0, 2.0, 2.0);
        let p = Polygon::from_loops(&[outer, hole]).unwrap();
        let parts = p.to_array();
        assert_eq!(parts.len(), 2);
        let total: f64 = parts.iter().map(|part| part.area()).sum();
        assert_fuzzy_eq!(total, 101.0);

        let face = p.faces().next().unwrap();
        let single = p.face_to_polygon(face).unwrap();
        assert_eq!(single.face_count(), 1);

        let mut other = p.clone();
        let stale = other.faces().next().unwrap();
        other.delete_face(stale);
        // handles are per polygon, a deleted one is reported
        assert!(other.face_to_polygon(stale).is_err());
    }

    #[test]
    fn custom_tolerance() {
        let options = TopologyOptions { pos_equal_eps: 0.1 };
        let mut p = Polygon::with_options(options);
        p.add_face(&rect_loop(0.0, 0.0, 10.0, 10.0)).unwrap();
        assert!(p.find_edge_by_point(vec2(5.0, 0.05)).is_some());
        assert!(rectangle(0.0, 0.0, 10.0, 10.0)
            .find_edge_by_point(vec2(5.0, 0.05))
            .is_none());
    }

    #[test]
    fn clone_is_independent() {
        let original = rectangle(0.0, 0.0, 10.0, 10.0);
        let mut copy = original.clone();
        copy.cut_face(vec2(5.0, 0.0), vec2(5.0, 10.0)).unwrap();
        assert_eq!(copy.face_count(), 2);
        assert_eq!(original.face_count(), 1);
        assert_topology(&original);
        assert_topology(&copy);
    }
}
