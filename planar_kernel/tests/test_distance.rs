mod test_utils;

mod test_distance {
    use super::test_utils::*;
    use planar_kernel::{
        assert_fuzzy_eq,
        core::{math::vec2, traits::FuzzyEq},
        dispatch::{Shape, distance},
        error::{PreconditionError, TopologyError},
        shape::{Arc, Box2, Circle, Line, Segment, ShapeKind},
        topology::Polygon,
    };
    use std::f64::consts::PI;

    #[test]
    fn point_polygon() {
        let square = rectangle(0.0, 0.0, 10.0, 10.0);
        let (d, w) = square.distance_to(vec2(15.0, 5.0)).unwrap();
        assert_fuzzy_eq!(d, 5.0);
        assert!(w.start().fuzzy_eq(vec2(10.0, 5.0)));
        assert!(w.end().fuzzy_eq(vec2(15.0, 5.0)));

        // measured to the boundary from inside too
        let (d, w) = distance(&Shape::Point(vec2(5.0, 4.0)), &Shape::from(&square)).unwrap();
        assert_fuzzy_eq!(d, 4.0);
        assert!(w.start().fuzzy_eq(vec2(5.0, 4.0)));
        assert!(w.end().fuzzy_eq(vec2(5.0, 0.0)));
    }

    #[test]
    fn polygon_polygon() {
        let p1 = rectangle(0.0, 0.0, 10.0, 10.0);
        let p2 = rectangle(13.0, 0.0, 20.0, 10.0);
        let (d, w) = p1.distance_to(&p2).unwrap();
        assert_fuzzy_eq!(d, 3.0);
        assert_fuzzy_eq!(w.start().x, 10.0);
        assert_fuzzy_eq!(w.end().x, 13.0);
        assert_fuzzy_eq!(w.length(), 3.0);

        let overlapping = rectangle(5.0, 5.0, 15.0, 15.0);
        let (d, w) = p1.distance_to(&overlapping).unwrap();
        assert_fuzzy_eq!(d, 0.0);
        assert!(w.start().fuzzy_eq(w.end()));
    }

    #[test]
    fn polygon_with_arcs() {
        let c: Polygon = Polygon::from_circle(&Circle::new(vec2(0.0, 0.0), 2.0)).unwrap();
        let (d, w) = c.distance_to(vec2(0.0, 5.0)).unwrap();
        assert_fuzzy_eq!(d, 3.0);
        assert!(w.start().fuzzy_eq(vec2(0.0, 2.0)));

        let s = Segment::new(vec2(-5.0, -4.0), vec2(5.0, -4.0));
        let (d, _) = c.distance_to(s).unwrap();
        assert_fuzzy_eq!(d, 2.0);
    }

    #[test]
    fn curve_pairs() {
        let s: Segment = Segment::new(vec2(0.0, 0.0), vec2(10.0, 0.0));
        let l = Line::through_points(vec2(0.0, 3.0), vec2(1.0, 3.0));
        let (d, w) = distance(&Shape::from(s), &Shape::from(l)).unwrap();
        assert_fuzzy_eq!(d, 3.0);
        assert_fuzzy_eq!(w.start().y, 0.0);
        assert_fuzzy_eq!(w.end().y, 3.0);

        // upper half of the unit circle around (0, 5), closest at its ends
        let arc = Arc::new(vec2(0.0, 5.0), 1.0, 0.0, PI, true);
        let (d, _) = distance(&Shape::from(s), &Shape::from(arc)).unwrap();
        assert_fuzzy_eq!(d, 5.0);

        let c = Circle::new(vec2(20.0, 0.0), 4.0);
        let (d, w) = distance(&Shape::from(s), &Shape::from(c)).unwrap();
        assert_fuzzy_eq!(d, 6.0);
        assert!(w.start().fuzzy_eq(vec2(10.0, 0.0)));
        assert!(w.end().fuzzy_eq(vec2(16.0, 0.0)));

        // crossing shapes are at distance zero
        let cross = Segment::new(vec2(5.0, -1.0), vec2(5.0, 1.0));
        let (d, w) = distance(&Shape::from(s), &Shape::from(cross)).unwrap();
        assert_fuzzy_eq!(d, 0.0);
        assert!(w.start().fuzzy_eq(vec2(5.0, 0.0)));
    }

    #[test]
    fn box_support() {
        let b: Box2 = Box2::new(0.0, 0.0, 10.0, 10.0);
        let (d, w) = distance(&Shape::from(b), &Shape::Point(vec2(15.0, 5.0))).unwrap();
        assert_fuzzy_eq!(d, 5.0);
        assert!(w.start().fuzzy_eq(vec2(10.0, 5.0)));

        let c = Circle::new(vec2(5.0, 20.0), 4.0);
        let (d, _) = distance(&Shape::from(c), &Shape::from(b)).unwrap();
        assert_fuzzy_eq!(d, 6.0);

        let s = Segment::new(vec2(20.0, 0.0), vec2(20.0, 10.0));
        assert_eq!(
            distance(&Shape::from(b), &Shape::from(s)).unwrap_err(),
            TopologyError::UnsupportedShapeKind(ShapeKind::Box, ShapeKind::Segment)
        );
        let square = rectangle(0.0, 0.0, 1.0, 1.0);
        assert_eq!(
            square.distance_to(b).unwrap_err(),
            TopologyError::UnsupportedShapeKind(ShapeKind::Polygon, ShapeKind::Box)
        );
    }

    #[test]
    fn empty_polygon() {
        let empty: Polygon = Polygon::new();
        let err = empty.distance_to(vec2(0.0, 0.0)).unwrap_err();
        assert_eq!(
            err,
            TopologyError::InvalidPrecondition(PreconditionError::EmptyPolygon)
        );

        let square = rectangle(0.0, 0.0, 1.0, 1.0);
        assert!(square.distance_to(&empty).is_err());
        assert!(empty.distance_to(&square).is_err());
    }
}
