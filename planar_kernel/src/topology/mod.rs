//! Boundary topology of planar polygons: faces made of closed loops of linked edges, the mutation
//! algorithms that cut and split them, and the queries built on top (point classification,
//! validity, islands).
mod edge;
mod face;
mod islands;
mod mutate;
mod options;
mod polygon;
mod ray_shoot;
mod relation;
#[cfg(feature = "serde")]
mod serde_impl;
mod svg;
mod validity;

pub use edge::{Edge, EdgeId};
pub use face::{Face, FaceId, Orientation, loop_signed_area};
pub use options::TopologyOptions;
pub use polygon::{FaceEdges, Polygon};
pub use ray_shoot::{PointInclusion, face_crossings, ray_shoot};
pub use svg::SvgAttrs;
