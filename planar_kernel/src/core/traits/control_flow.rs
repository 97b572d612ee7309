/// Trait for control flow inside visiting methods.
///
/// Visitor closures passed to spatial queries return a value implementing this trait, which lets
/// the query stop early once the caller has what it needs.
///
/// # Examples
///
/// ```
/// # use planar_kernel::core::*;
/// # use planar_kernel::index::SpatialSet;
/// # use planar_kernel::shape::Box2;
/// let mut set = SpatialSet::new();
/// for i in 0..10u32 {
///     let x = i as f64;
///     set.add(i, Box2::new(x, 0.0, x + 1.0, 1.0));
/// }
///
/// let mut visited = 0;
/// set.visit_search(&Box2::new(0.0, 0.0, 20.0, 1.0), |_item| {
///     visited += 1;
///     Control::Break(())
/// });
///
/// assert_eq!(visited, 1);
/// ```
pub trait ControlFlow {
    /// Constructs state indicating to continue iteration/visiting.
    fn continuing() -> Self;

    /// Returns `true` if control flow should break/stop iteration.
    fn should_break(&self) -> bool;
}

impl ControlFlow for () {
    #[inline]
    fn continuing() -> Self {}

    #[inline]
    fn should_break(&self) -> bool {
        false
    }
}

impl<C, E> ControlFlow for Result<C, E>
where
    C: ControlFlow,
{
    #[inline]
    fn continuing() -> Self {
        Ok(C::continuing())
    }

    #[inline]
    fn should_break(&self) -> bool {
        match self {
            Ok(c) => c.should_break(),
            Err(_) => true,
        }
    }
}
