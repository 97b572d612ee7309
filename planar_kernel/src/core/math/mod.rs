//! Angles, vectors and the low level intersection kernels shared by the shape code.
mod base_math;
mod circle_intersect;
mod line_circle_intersect;
mod segment_intersect;
mod vector2;

pub use base_math::*;
pub use circle_intersect::{CircleIntr, circle_intr};
pub use line_circle_intersect::{LineCircleIntr, line_circle_intr};
pub use segment_intersect::{SegmentIntr, segment_intr};
pub use vector2::{Vector2, vec2};
