use log::info;
use planar_kernel::{
    Polygon,
    core::math::vec2,
    shape::{Arc, Box2, Circle, EdgeShape, Segment},
    topology::{Orientation, SvgAttrs},
};
use std::f64::consts::PI;

fn main() {
    env_logger::init();
    polygon_creation();
    faces_and_holes();
    mixed_shapes();
}

fn polygon_creation() {
    // Empty polygon
    let empty = Polygon::<f64>::new();
    assert!(empty.is_empty(), "New polygon should have no faces");
    assert_eq!(empty.area(), 0.0, "Empty polygon should have zero area");

    // From a point loop, counter clockwise loops have positive area
    let square = Polygon::<f64>::from_points(&[
        vec2(0.0, 0.0),
        vec2(10.0, 0.0),
        vec2(10.0, 10.0),
        vec2(0.0, 10.0),
    ])
    .unwrap();
    assert_eq!(square.face_count(), 1);
    assert_eq!(square.edge_count(), 4);
    assert!((square.area() - 100.0).abs() < 1e-9);
    assert!(square.is_valid(), "Square should be valid");

    // From a box and from a circle
    let from_box = Polygon::<f64>::from_box(&Box2::new(0.0, 0.0, 4.0, 2.0)).unwrap();
    assert!((from_box.area() - 8.0).abs() < 1e-9);

    let disk = Polygon::from_circle(&Circle::new(vec2(0.0, 0.0), 1.0)).unwrap();
    assert_eq!(disk.edge_count(), 1, "Circle is a single full arc edge");
    assert!((disk.area() - PI).abs() < 1e-9);

    info!("square as svg: {}", square.svg(&SvgAttrs::default()));
}

fn faces_and_holes() {
    let mut p = Polygon::<f64>::new();
    let outer = p
        .add_face(&[
            vec2(0.0, 0.0),
            vec2(10.0, 0.0),
            vec2(10.0, 10.0),
            vec2(0.0, 10.0),
        ])
        .unwrap();
    // clockwise loop is a hole
    let hole = p
        .add_face(&[
            vec2(2.0, 2.0),
            vec2(2.0, 4.0),
            vec2(4.0, 4.0),
            vec2(4.0, 2.0),
        ])
        .unwrap();

    assert_eq!(
        p.face(outer).unwrap().orientation(),
        Orientation::CounterClockwise
    );
    assert_eq!(p.face(hole).unwrap().orientation(), Orientation::Clockwise);
    assert!((p.area() - 96.0).abs() < 1e-9, "Hole area is subtracted");
    assert!(p.is_valid());

    // walk the edges of a face
    for e in p.face_edges(hole) {
        let edge = p.edge(e).unwrap();
        info!("hole edge {:?} -> {:?}", edge.shape().start(), edge.shape().end());
    }

    p.delete_face(hole);
    assert!((p.area() - 100.0).abs() < 1e-9);
}

fn mixed_shapes() {
    // rectangle with a half disk on top
    let shapes = [
        EdgeShape::Segment(Segment::new(vec2(0.0, 0.0), vec2(4.0, 0.0))),
        EdgeShape::Segment(Segment::new(vec2(4.0, 0.0), vec2(4.0, 2.0))),
        EdgeShape::Arc(Arc::new(vec2(2.0, 2.0), 2.0, 0.0, PI, true)),
        EdgeShape::Segment(Segment::new(vec2(0.0, 2.0), vec2(0.0, 0.0))),
    ];
    let p = Polygon::from_shape_loops(&[&shapes[..]]).unwrap();
    assert!((p.area() - (8.0 + 2.0 * PI)).abs() < 1e-9);
    assert!((p.bbox().ymax - 4.0).abs() < 1e-9, "Arc bulge extends the bounding box");

    let moved = p.translate(vec2(10.0, 0.0));
    assert!((moved.area() - p.area()).abs() < 1e-9);
    info!("moved bbox: {:?}", moved.bbox());
}
