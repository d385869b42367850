//! # jnum
//!
//! Numeric core for scientific data reduction: generic-element dense matrices
//! with LU and Gauss-Jordan inversion, cubic convolution resampling weights,
//! elliptical Gaussian beam algebra, and small real vectors.
//!
//! ## Quick start
//!
//! ```
//! use jnum::{GenericMatrix, GenericVector};
//!
//! // Solve a linear system Ax = b
//! let a = GenericMatrix::from_rows(&[
//!     vec![2.0_f64, 1.0, -1.0],
//!     vec![-3.0, -1.0, 2.0],
//!     vec![-2.0, 1.0, 2.0],
//! ])
//! .unwrap();
//! let b = GenericVector::from_vec(vec![8.0, -11.0, -3.0]);
//! let x = a.lu().unwrap().solve(&b).unwrap(); // x = [2, 3, -1]
//! assert!((x[1] - 3.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — Heap-allocated `GenericMatrix<T>` with runtime dimensions
//!   and column-major `Vec<T>` storage. The element type is anything
//!   implementing [`Element`]: `f32`, `f64`, `Complex<_>`, or square
//!   `GenericMatrix` blocks. Arithmetic, row/column access, iteration,
//!   inversion (`inverse`, `invert`, `gauss_inverse`), solving (`solve`,
//!   `solutions_to`) and `det`. [`GenericVector<T>`] holds right-hand sides.
//!
//! - [`linalg`] — Crout LU decomposition with implicit scaling, partial
//!   pivoting and tiny-pivot substitution ([`linalg::decompose_lu`],
//!   [`linalg::LuDecomposition`]), and Gauss-Jordan elimination
//!   ([`linalg::gauss_jordan`]). Free functions operate on
//!   `&mut impl MatrixMut<T>`.
//!
//! - [`interp`] — Cubic convolution kernel weights: [`interp::SplineCoeffs`]
//!   (1-D, memoized), [`interp::BicubicSplineCoeffs`] (2-D) and the
//!   [`interp::CubicSpline`] resampler.
//!
//! - [`psf`] — Elliptical Gaussian beams: convolution, deconvolution and
//!   encompassing ([`GaussianPsf`]).
//!
//! - [`vector`] — [`Vector2D`] and [`Vector3D`].
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — plain numeric values (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats, used by splines, beams and vectors
//!   - [`LinalgScalar`] — real floats and complex numbers
//!   - [`Element`] — everything the matrix algorithms need from an element
//!   - [`MatrixRef`] / [`MatrixMut`] — generic read/write access for algorithms
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade: `warn` when
//! an LU pivot is substituted, `debug` for singular rows and clamped
//! deconvolutions, `trace` for spline weight evaluation. No logger is
//! installed by the library.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Hardware FPU via system libm, `std::error::Error` impls |
//! | `libm`    | no       | Pure-Rust software float fallback for `no_std` |
//! | `complex` | yes      | `Complex<f32>` / `Complex<f64>` elements via `num-complex` |
//! | `all`     | no       | All features: `std` + `complex` |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod interp;
pub mod linalg;
pub mod math;
pub mod matrix;
pub mod psf;
pub mod traits;
pub mod vector;

pub use matrix::{GenericMatrix, GenericVector, MatrixIter};
pub use psf::GaussianPsf;
pub use traits::{Element, FloatScalar, LinalgScalar, MatrixMut, MatrixRef, Scalar};
pub use vector::{Vector2D, Vector3D};

#[cfg(feature = "complex")]
pub use num_complex::Complex;
