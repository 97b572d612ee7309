//! Spatial indexes: an augmented interval tree and the set of boxed handles built on it.
pub(crate) mod arena;
mod interval_tree;
mod spatial_set;

pub use interval_tree::{IntervalTree, Iter, NodeId, Search};
pub use spatial_set::{SetSearch, SpatialSet};
