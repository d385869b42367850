//! Cubic-convolution resampling weights.
//!
//! [`SplineCoeffs`] caches the four weights of the cubic convolution kernel
//! (Keys, `a = -0.5`) for a fractional sample position together with the
//! integer window `[i0, i0 + 3]` they apply to. [`CubicSpline`] uses them to
//! resample 1-D sample runs and [`BicubicSplineCoeffs`] builds the separable
//! 2-D stencil for grids.
//!
//! # Examples
//!
//! ```
//! use jnum::interp::SplineCoeffs;
//!
//! let mut s = SplineCoeffs::<f64>::new();
//! s.center_on(2.0);
//! assert_eq!(s.coefficients(), &[0.0, 1.0, 0.0, 0.0]);
//! assert_eq!((s.min_index(), s.max_index()), (1, 4));
//! ```

mod bicubic;
mod spline;

#[cfg(test)]
mod tests;

pub use bicubic::BicubicSplineCoeffs;
pub use spline::{CubicSpline, SplineCoeffs};

use crate::traits::FloatScalar;

/// Cubic convolution kernel with `a = -0.5`.
///
/// `w(0) = 1`, `w(±1) = w(±2) = 0`, and `w(x) = 0` for `|x| > 2`.
pub fn cubic_kernel<T: FloatScalar>(x: T) -> T {
    let one = T::one();
    let two = one + one;
    let half = one / two;
    let x = x.abs();
    if x <= one {
        // (1.5x - 2.5)x² + 1
        let a = two - half;
        let b = two + half;
        (a * x - b) * x * x + one
    } else if x <= two {
        // ((-0.5x + 2.5)x - 4)x + 2
        let b = two + half;
        let four = two + two;
        ((b - half * x) * x - four) * x + two
    } else {
        T::zero()
    }
}
