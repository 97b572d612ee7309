use log::info;
use planar_kernel::{
    Polygon,
    core::{Control, math::vec2},
    dispatch::{Shape, distance, intersect},
    index::SpatialSet,
    shape::{Box2, Circle, Segment},
    topology::{PointInclusion, ray_shoot},
};

fn main() {
    env_logger::init();
    point_classification();
    intersections();
    distances();
    spatial_set();
}

fn square() -> Polygon {
    Polygon::from_points(&[
        vec2(0.0, 0.0),
        vec2(10.0, 0.0),
        vec2(10.0, 10.0),
        vec2(0.0, 10.0),
    ])
    .unwrap()
}

fn point_classification() {
    let p = square();
    assert_eq!(ray_shoot(&p, vec2(5.0, 5.0)), PointInclusion::Inside);
    assert_eq!(ray_shoot(&p, vec2(10.0, 5.0)), PointInclusion::Boundary);
    assert_eq!(ray_shoot(&p, vec2(15.0, 5.0)), PointInclusion::Outside);
    assert!(p.contains(vec2(5.0, 5.0)));
}

fn intersections() {
    let seg = Segment::new(vec2(-5.0, 5.0), vec2(15.0, 5.0));
    let circle = Circle::new(vec2(0.0, 0.0), 5.0);

    let points = intersect(&Shape::from(seg), &Shape::from(circle)).unwrap();
    assert_eq!(points.len(), 1, "Segment is tangent to the circle");

    let p = square();
    let points = p.intersect(seg).unwrap();
    assert_eq!(points.len(), 2);
    info!("segment crosses the square at {points:?}");
}

fn distances() {
    let p = square();
    let (dist, witness) = p.distance_to(vec2(13.0, 14.0)).unwrap();
    assert!((dist - 5.0).abs() < 1e-9);
    info!("closest points {:?} -> {:?}", witness.start(), witness.end());

    // boxes only measure against points and circles
    let b = Box2::new(0.0, 0.0, 1.0, 1.0);
    assert!(distance(&Shape::from(b), &Shape::from(Segment::new(vec2(3.0, 0.0), vec2(3.0, 1.0)))).is_err());
}

fn spatial_set() {
    let mut set = SpatialSet::new();
    for i in 0..10u32 {
        let x = i as f64 * 2.0;
        set.add(i, Box2::new(x, 0.0, x + 1.0, 1.0));
    }

    let mut hits: Vec<u32> = set.search(&Box2::new(3.5, 0.0, 8.5, 1.0)).collect();
    hits.sort_unstable();
    assert_eq!(hits, vec![2, 3, 4]);

    // stop at the first hit
    let first = set.visit_search(&Box2::new(0.0, 0.0, 20.0, 1.0), |item| Control::Break(item));
    assert!(matches!(first, Control::Break(_)));

    set.delete(&3);
    assert_eq!(set.len(), 9);
}
