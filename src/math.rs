//! Small scalar helpers shared by the geometry and beam code.

use crate::traits::FloatScalar;

/// IEEE 754 remainder: `x - n·y` where `n` is `x / y` rounded to the nearest
/// integer, ties to even. The result lies in `[-|y|/2, |y|/2]`.
///
/// ```
/// use jnum::math::ieee_remainder;
///
/// assert_eq!(ieee_remainder(5.0_f64, 2.0), 1.0);
/// assert_eq!(ieee_remainder(7.0_f64, 2.0), -1.0);
/// assert_eq!(ieee_remainder(-0.75_f64, 1.0), 0.25);
/// ```
pub fn ieee_remainder<T: FloatScalar>(x: T, y: T) -> T {
    let one = T::one();
    let two = one + one;
    let half = one / two;

    let q = x / y;
    let mut n = q.round();
    // `round` breaks ties away from zero; move back to the even neighbour.
    if (q - q.trunc()).abs() == half && n % two != T::zero() {
        n = n - q.signum();
    }
    x - n * y
}

/// Wrap an angle (radians) into `(-π, π]`.
///
/// ```
/// use jnum::math::wrap_angle;
/// use core::f64::consts::PI;
///
/// assert!((wrap_angle(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-12);
/// assert_eq!(wrap_angle(-PI), PI);
/// ```
pub fn wrap_angle<T: FloatScalar>(angle: T) -> T {
    let pi = T::from(core::f64::consts::PI).unwrap();
    let r = ieee_remainder(angle, pi + pi);
    if r <= -pi {
        r + pi + pi
    } else {
        r
    }
}
