//! Numeric traits and math shared by the shapes, the spatial index and the topology.
pub mod math;
pub mod traits;

use self::traits::ControlFlow;

/// Result of a visitor passed to a spatial search: keep going, or stop and hand back a value.
#[derive(Debug, Default)]
pub enum Control<B = ()> {
    #[default]
    Continue,
    Break(B),
}

impl<B> ControlFlow for Control<B> {
    #[inline]
    fn continuing() -> Self {
        Control::Continue
    }

    #[inline]
    fn should_break(&self) -> bool {
        matches!(self, Control::Break(_))
    }
}
