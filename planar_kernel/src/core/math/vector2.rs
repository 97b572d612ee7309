use crate::core::traits::Real;
use std::cmp::Ordering;
use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D vector, also used as the point type of every shape.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T>
where
    T: Real,
{
    pub fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }

    /// The origin.
    pub fn zero() -> Self {
        Vector2::new(T::zero(), T::zero())
    }

    /// Both components multiplied by `factor`.
    pub fn scale(&self, factor: T) -> Self {
        vec2(self.x * factor, self.y * factor)
    }

    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// z component of the 3D cross product, positive when `other` is counter clockwise of
    /// `self`.
    pub fn perp_dot(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Same direction, unit length. Zero vectors produce `NaN` components.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        vec2(self.x / len, self.y / len)
    }

    pub fn distance_to(&self, other: Self) -> T {
        (other - self).length()
    }

    /// Component wise fuzzy equality within `eps`.
    pub fn fuzzy_eq_eps(&self, other: Self, eps: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, eps) && self.y.fuzzy_eq_eps(other.y, eps)
    }

    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }

    /// Exact lexicographic comparison, x first then y.
    ///
    /// This is the point order used to key boxes in the interval tree. `NaN` components compare
    /// as equal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_kernel::core::math::*;
    /// use std::cmp::Ordering;
    /// assert_eq!(vec2(1.0, 5.0).lex_cmp(&vec2(2.0, 0.0)), Ordering::Less);
    /// assert_eq!(vec2(1.0, 5.0).lex_cmp(&vec2(1.0, 0.0)), Ordering::Greater);
    /// assert_eq!(vec2(1.0, 5.0).lex_cmp(&vec2(1.0, 5.0)), Ordering::Equal);
    /// ```
    pub fn lex_cmp(&self, other: &Self) -> Ordering {
        let by = |a: T, b: T| a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        by(self.x, other.x).then_with(|| by(self.y, other.y))
    }

    pub fn lex_lt(&self, other: &Self) -> bool {
        self.lex_cmp(other).is_lt()
    }

    /// Quarter turn counter clockwise.
    pub fn perp(&self) -> Self {
        vec2(-self.y, self.x)
    }

    pub fn unit_perp(&self) -> Self {
        self.perp().normalize()
    }

    /// Rotates the point counter clockwise by `angle` radians around `origin`.
    pub fn rotate_about(&self, origin: Self, angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        let d = self - origin;
        origin + vec2(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
    }
}

/// Shorthand for [Vector2::new].
#[inline(always)]
pub fn vec2<T>(x: T, y: T) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(x, y)
}

/// Component wise operator for every owned/borrowed operand combination.
macro_rules! component_wise_op {
    ($trait:ident, $method:ident, $op:tt) => {
        component_wise_op!(@impl $trait, $method, $op, Vector2<T>, Vector2<T>);
        component_wise_op!(@impl $trait, $method, $op, Vector2<T>, &Vector2<T>);
        component_wise_op!(@impl $trait, $method, $op, &Vector2<T>, Vector2<T>);
        component_wise_op!(@impl $trait, $method, $op, &Vector2<T>, &Vector2<T>);
    };
    (@impl $trait:ident, $method:ident, $op:tt, $lhs:ty, $rhs:ty) => {
        impl<T: Real> ops::$trait<$rhs> for $lhs {
            type Output = Vector2<T>;
            fn $method(self, rhs: $rhs) -> Vector2<T> {
                vec2(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

component_wise_op!(Add, add, +);
component_wise_op!(Sub, sub, -);

impl<T: Real> ops::Neg for Vector2<T> {
    type Output = Vector2<T>;
    fn neg(self) -> Vector2<T> {
        vec2(-self.x, -self.y)
    }
}

impl<T: Real> ops::Neg for &Vector2<T> {
    type Output = Vector2<T>;
    fn neg(self) -> Vector2<T> {
        -*self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_binary_op {
        ($v1:ident, $v2:ident, $op:tt, $expected:expr) => {
            assert!(($v1 $op $v2).fuzzy_eq($expected));
            assert!((&$v1 $op $v2).fuzzy_eq($expected));
            assert!(($v1 $op &$v2).fuzzy_eq($expected));
            assert!((&$v1 $op &$v2).fuzzy_eq($expected));
        };
    }

    #[test]
    fn ops() {
        let v1: Vector2<f64> = vec2(4.0, 5.0);
        let v2 = vec2(1.0, 2.0);
        test_binary_op!(v1, v2, +, vec2(5.0, 7.0));
        test_binary_op!(v1, v2, -, vec2(3.0, 3.0));
        assert!((-v1).fuzzy_eq(vec2(-4.0, -5.0)));
    }

    #[test]
    fn rotate_quarter_turn() {
        let p = vec2(2.0, 1.0);
        let r = p.rotate_about(vec2(1.0, 1.0), std::f64::consts::FRAC_PI_2);
        assert!(r.fuzzy_eq(vec2(1.0, 2.0)));
    }

    #[test]
    fn lexicographic_order() {
        let mut pts = vec![vec2(1.0, 1.0), vec2(0.0, 3.0), vec2(1.0, -1.0)];
        pts.sort_by(|a, b| a.lex_cmp(b));
        assert_eq!(pts, vec![vec2(0.0, 3.0), vec2(1.0, -1.0), vec2(1.0, 1.0)]);
    }
}
