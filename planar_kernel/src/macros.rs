/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Internal macro used for try return on control flow.
macro_rules! try_cf {
    ($e:expr) => {
        match $e {
            x => {
                if x.should_break() {
                    return x;
                }
            }
        }
    };
}

/// Construct a single face polygon from a closed loop of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use planar_kernel::polygon;
/// # use planar_kernel::core::traits::*;
/// # use planar_kernel::topology::Polygon;
/// let square: Polygon = polygon![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
/// assert_eq!(square.face_count(), 1);
/// assert_eq!(square.edge_count(), 4);
/// assert!(square.area().fuzzy_eq(100.0));
/// ```
#[macro_export]
macro_rules! polygon {
    ($( $x:expr ),* $(,)?) => {
        {
            let points = [$($crate::core::math::Vector2::new($x.0, $x.1)),*];
            $crate::topology::Polygon::from_points(&points)
                .expect("polygon! requires at least three distinct points")
        }
    };
}
