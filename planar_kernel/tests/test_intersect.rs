mod test_utils;

mod test_intersect {
    use super::test_utils::*;
    use planar_kernel::{
        core::{math::vec2, traits::FuzzyEq},
        dispatch::{Shape, intersect},
        shape::{Arc, Box2, Circle, Line, Segment},
    };
    use std::f64::consts::PI;

    fn has_point(points: &[planar_kernel::core::math::Vector2<f64>], x: f64, y: f64) -> bool {
        points.iter().any(|p| p.fuzzy_eq(vec2(x, y)))
    }

    #[test]
    fn box_box() {
        let b1 = Box2::new(0.0, 0.0, 10.0, 10.0);
        let b2 = Box2::new(5.0, 5.0, 15.0, 15.0);
        let b3 = Box2::new(11.0, 11.0, 20.0, 20.0);

        assert!(b1.intersects(&b2));
        let points = intersect(&Shape::from(b1), &Shape::from(b2)).unwrap();
        assert_eq!(points.len(), 2);
        assert!(has_point(&points, 10.0, 5.0));
        assert!(has_point(&points, 5.0, 10.0));

        assert!(!b1.intersects(&b3));
        assert!(intersect(&Shape::from(b1), &Shape::from(b3)).unwrap().is_empty());
    }

    #[test]
    fn segment_circle() {
        let c = Circle::new(vec2(0.0, 0.0), 5.0);
        // one end inside the circle
        let s = Segment::new(vec2(0.0, 0.0), vec2(10.0, 0.0));
        let points = intersect(&Shape::from(s), &Shape::from(c)).unwrap();
        assert_eq!(points.len(), 1);
        assert!(points[0].fuzzy_eq(vec2(5.0, 0.0)));

        // tangent
        let s = Segment::new(vec2(-10.0, 5.0), vec2(10.0, 5.0));
        let points = intersect(&Shape::from(c), &Shape::from(s)).unwrap();
        assert_eq!(points.len(), 1);
        assert!(points[0].fuzzy_eq(vec2(0.0, 5.0)));

        let s = Segment::new(vec2(-1.0, 1.0), vec2(1.0, 1.0));
        assert!(intersect(&Shape::from(s), &Shape::from(c)).unwrap().is_empty());
    }

    #[test]
    fn circle_circle() {
        let c1 = Circle::new(vec2(0.0, 0.0), 5.0);
        let c2 = Circle::new(vec2(8.0, 0.0), 5.0);
        let points = intersect(&Shape::from(c1), &Shape::from(c2)).unwrap();
        assert_eq!(points.len(), 2);
        assert!(has_point(&points, 4.0, 3.0));
        assert!(has_point(&points, 4.0, -3.0));

        // coincident circles have no isolated intersection points
        assert!(intersect(&Shape::from(c1), &Shape::from(c1)).unwrap().is_empty());
        // nested
        let inner = Circle::new(vec2(1.0, 0.0), 1.0);
        assert!(intersect(&Shape::from(c1), &Shape::from(inner)).unwrap().is_empty());
    }

    #[test]
    fn lines() {
        let l1 = Line::through_points(vec2(0.0, 0.0), vec2(1.0, 1.0));
        let l2 = Line::through_points(vec2(0.0, 2.0), vec2(2.0, 0.0));
        let points = intersect(&Shape::from(l1), &Shape::from(l2)).unwrap();
        assert_eq!(points.len(), 1);
        assert!(points[0].fuzzy_eq(vec2(1.0, 1.0)));

        let parallel = Line::through_points(vec2(0.0, 1.0), vec2(1.0, 2.0));
        assert!(intersect(&Shape::from(l1), &Shape::from(parallel)).unwrap().is_empty());

        let s = Segment::new(vec2(3.0, 0.0), vec2(3.0, 10.0));
        let points = intersect(&Shape::from(l1), &Shape::from(s)).unwrap();
        assert_eq!(points.len(), 1);
        assert!(points[0].fuzzy_eq(vec2(3.0, 3.0)));
    }

    #[test]
    fn overlapping_segments_and_arcs() {
        let s1 = Segment::new(vec2(0.0, 0.0), vec2(10.0, 0.0));
        let s2 = Segment::new(vec2(5.0, 0.0), vec2(15.0, 0.0));
        let points = intersect(&Shape::from(s1), &Shape::from(s2)).unwrap();
        assert_eq!(points.len(), 2);
        assert!(has_point(&points, 5.0, 0.0));
        assert!(has_point(&points, 10.0, 0.0));

        // quarter arcs of the same circle sharing the end point (0, 5)
        let a1 = Arc::new(vec2(0.0, 0.0), 5.0, 0.0, PI / 2.0, true);
        let a2 = Arc::new(vec2(0.0, 0.0), 5.0, PI / 2.0, PI, true);
        let points = intersect(&Shape::from(a1), &Shape::from(a2)).unwrap();
        assert_eq!(points.len(), 1);
        assert!(points[0].fuzzy_eq(vec2(0.0, 5.0)));
    }

    #[test]
    fn polygon_segment() {
        let square = rectangle(0.0, 0.0, 10.0, 10.0);
        let s = Segment::new(vec2(-5.0, 5.0), vec2(15.0, 5.0));
        let points = square.intersect(s).unwrap();
        assert_eq!(points.len(), 2);
        assert!(has_point(&points, 0.0, 5.0));
        assert!(has_point(&points, 10.0, 5.0));

        // entirely inside, no boundary crossing
        let inner = Segment::new(vec2(2.0, 2.0), vec2(8.0, 8.0));
        assert!(square.intersect(inner).unwrap().is_empty());

        // through a corner, reported once
        let diagonal = Segment::new(vec2(-1.0, -1.0), vec2(5.0, 5.0));
        let points = square.intersect(diagonal).unwrap();
        assert_eq!(points.len(), 1);
        assert!(points[0].fuzzy_eq(vec2(0.0, 0.0)));
    }

    #[test]
    fn point_in_polygon() {
        let square = rectangle(0.0, 0.0, 10.0, 10.0);
        assert_eq!(square.intersect(vec2(5.0, 5.0)).unwrap(), vec![vec2(5.0, 5.0)]);
        assert_eq!(square.intersect(vec2(10.0, 5.0)).unwrap(), vec![vec2(10.0, 5.0)]);
        assert!(square.intersect(vec2(11.0, 5.0)).unwrap().is_empty());

        let c = Circle::new(vec2(0.0, 0.0), 5.0);
        assert_eq!(
            intersect(&Shape::Point(vec2(0.0, 5.0)), &Shape::from(c))
                .unwrap()
                .len(),
            1
        );
        assert!(
            intersect(&Shape::Point(vec2(0.0, 0.0)), &Shape::from(c))
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn polygon_polygon() {
        let p1 = rectangle(0.0, 0.0, 10.0, 10.0);
        let p2 = rectangle(5.0, 5.0, 15.0, 15.0);
        let points = p1.intersect(&p2).unwrap();
        assert_eq!(points.len(), 2);
        assert!(has_point(&points, 10.0, 5.0));
        assert!(has_point(&points, 5.0, 10.0));

        let far = rectangle(20.0, 20.0, 30.0, 30.0);
        assert!(p1.intersect(&far).unwrap().is_empty());
    }
}
