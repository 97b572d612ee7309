use super::FuzzyEq;

/// Tolerant ordering: `fuzzy_gt`/`fuzzy_lt` also accept values within epsilon of each other.
pub trait FuzzyOrd: FuzzyEq {
    /// `self >= other - fuzzy_epsilon`.
    fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// `self <= other + fuzzy_epsilon`.
    fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_lt(&self, other: Self) -> bool {
        self.fuzzy_lt_eps(other, Self::fuzzy_epsilon())
    }

    /// True if `self` lies in `[min, max]` widened by `fuzzy_epsilon` on both sides.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_kernel::core::traits::*;
    /// assert!(0.99f64.fuzzy_in_range_eps(1.0, 2.0, 0.05));
    /// assert!(!2.1f64.fuzzy_in_range_eps(1.0, 2.0, 1e-5));
    /// ```
    #[inline]
    fn fuzzy_in_range_eps(&self, min: Self, max: Self, fuzzy_epsilon: Self) -> bool {
        self.fuzzy_gt_eps(min, fuzzy_epsilon) && self.fuzzy_lt_eps(max, fuzzy_epsilon)
    }
}

macro_rules! impl_fuzzy_ord {
    ($($ty:ty),*) => {
        $(
            impl FuzzyOrd for $ty {
                #[inline]
                fn fuzzy_gt_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                    *self + fuzzy_epsilon > other
                }

                #[inline]
                fn fuzzy_lt_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                    *self < other + fuzzy_epsilon
                }
            }
        )*
    };
}

impl_fuzzy_ord!(f32, f64);
