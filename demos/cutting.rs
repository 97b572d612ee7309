use log::info;
use planar_kernel::{Polygon, core::math::vec2, shape::Segment};

fn main() {
    env_logger::init();
    cut_single_face();
    cut_with_chords();
    islands();
}

fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
    Polygon::from_points(&[vec2(x0, y0), vec2(x1, y0), vec2(x1, y1), vec2(x0, y1)]).unwrap()
}

fn cut_single_face() {
    let mut p = square(0.0, 0.0, 10.0, 10.0);

    // both end points must lie on the boundary of the same face
    let [left, right] = p.cut_face(vec2(5.0, 0.0), vec2(5.0, 10.0)).unwrap();
    assert_eq!(p.face_count(), 2, "Cut replaces the face with two faces");
    assert!((left.area() - 50.0).abs() < 1e-9);
    assert!((right.area() - 50.0).abs() < 1e-9);

    // an interior point is rejected and the polygon is left as is
    assert!(p.cut_face(vec2(2.0, 2.0), vec2(2.0, 10.0)).is_err());
    assert_eq!(p.face_count(), 2);

    // a vertex can be added anywhere on an edge
    let edge = p.find_edge_by_point(vec2(2.0, 0.0)).unwrap();
    p.add_vertex(vec2(2.0, 0.0), edge).unwrap();
    info!("after cut and add_vertex: {} faces, {} edges", p.face_count(), p.edge_count());
}

fn cut_with_chords() {
    let p = square(0.0, 0.0, 10.0, 10.0);
    let chords = [
        Segment::new(vec2(5.0, 0.0), vec2(5.0, 10.0)),
        Segment::new(vec2(0.0, 5.0), vec2(5.0, 5.0)),
    ];
    let pieces = p.cut(&chords).unwrap();
    assert_eq!(pieces.len(), 3);
    for piece in pieces.iter() {
        info!("piece area {}", piece.area());
    }
}

fn islands() {
    let p = Polygon::from_loops(&[
        vec![vec2(0.0, 0.0), vec2(10.0, 0.0), vec2(10.0, 10.0), vec2(0.0, 10.0)],
        vec![vec2(2.0, 2.0), vec2(2.0, 4.0), vec2(4.0, 4.0), vec2(4.0, 2.0)],
        vec![vec2(20.0, 0.0), vec2(25.0, 0.0), vec2(25.0, 5.0), vec2(20.0, 5.0)],
    ])
    .unwrap();

    let islands = p.split_to_islands().unwrap();
    assert_eq!(islands.len(), 2);
    assert_eq!(islands[0].face_count(), 2, "Largest island keeps its hole");
    assert_eq!(islands[1].face_count(), 1);
}
