//! 2D polygon topology kernel.
//!
//! Polygons are stored as faces (closed loops of segment and arc edges) kept in two box indexed
//! [SpatialSet](index::SpatialSet)s, each backed by an augmented red-black
//! [IntervalTree](index::IntervalTree). On top of that the crate provides face mutation (vertex
//! insertion, chain removal, cutting), island decomposition, ray shooting point classification
//! and a pairwise intersection/distance table over all supported shape kinds.
extern crate static_aabb2d_index;

#[macro_use]
mod macros;

pub mod core;
pub mod dispatch;
pub mod error;
pub mod index;
pub mod shape;
pub mod topology;

pub use crate::error::{TopologyError, TopologyResult};
pub use crate::topology::{Polygon, TopologyOptions};
