use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Struct to hold the tolerances a polygon uses for its topology operations.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TopologyOptions<T> {
    /// Fuzzy comparison epsilon used for determining if two positions are equal, also used as the
    /// distance below which a point is considered to lie on an edge.
    pub pos_equal_eps: T,
}

impl<T> TopologyOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            pos_equal_eps: T::from(1e-6).unwrap(),
        }
    }
}

impl<T> Default for TopologyOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
