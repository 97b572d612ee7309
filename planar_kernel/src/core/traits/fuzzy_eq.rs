/// Equality within a tolerance.
///
/// Positions produced by splitting, cutting and intersecting rarely match bit for bit (a vertex
/// added on an arc, the crossing point shared by two edges), so geometry is compared this way.
///
/// # Examples
///
/// ```
/// # use planar_kernel::core::traits::*;
/// let sum = 0.1f64 + 0.2;
/// assert_ne!(sum, 0.3);
/// assert!(sum.fuzzy_eq(0.3));
/// assert!(!1.0f64.fuzzy_eq_eps(1.01, 1e-3));
/// assert!(1e-9f64.fuzzy_eq_zero());
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Tolerance used by the methods without an explicit epsilon.
    fn fuzzy_epsilon() -> Self;

    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_eq_zero(&self) -> bool {
        self.fuzzy_eq_zero_eps(Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_eq {
    ($ty:ty, $eps:expr) => {
        impl FuzzyEq for $ty {
            #[inline]
            fn fuzzy_epsilon() -> Self {
                $eps
            }

            #[inline]
            fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                (*self - other).fuzzy_eq_zero_eps(fuzzy_epsilon)
            }

            #[inline]
            fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool {
                self.abs() < fuzzy_epsilon
            }
        }
    };
}

impl_fuzzy_eq!(f32, 1.0e-5);
impl_fuzzy_eq!(f64, 1.0e-8);
