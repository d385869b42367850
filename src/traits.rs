use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

#[cfg(feature = "complex")]
use num_complex::Complex;

use crate::linalg::LinalgError;

/// Trait for plain numeric values that can be stored in matrices and vectors.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for real floating-point values.
///
/// Required by everything that needs `sqrt`, `sin`, `floor`, etc.
/// (splines, beam algebra, vectors, magnitudes).
pub trait FloatScalar: Scalar + Float + LinalgScalar<Real = Self> {}

impl<T: Scalar + Float + LinalgScalar<Real = T>> FloatScalar for T {}

/// Scalars that carry a real magnitude: real floats and complex numbers.
pub trait LinalgScalar: Scalar {
    /// The real component type (`Self` for reals, `T` for `Complex<T>`).
    type Real: FloatScalar;

    /// Absolute value / modulus: `|z|` for complex, `.abs()` for real.
    fn modulus(self) -> Self::Real;

    /// Promote a real value into `Self`.
    fn from_real(r: Self::Real) -> Self;
}

macro_rules! impl_linalg_scalar_real {
    ($($t:ty),*) => {
        $(
            impl LinalgScalar for $t {
                type Real = $t;

                #[inline] fn modulus(self) -> $t { Float::abs(self) }
                #[inline] fn from_real(r: $t) -> $t { r }
            }
        )*
    };
}

impl_linalg_scalar_real!(f32, f64);

#[cfg(feature = "complex")]
impl<T: FloatScalar> LinalgScalar for Complex<T> {
    type Real = T;

    #[inline]
    fn modulus(self) -> T {
        self.norm()
    }

    #[inline]
    fn from_real(r: T) -> Self {
        Complex::new(r, T::zero())
    }
}

/// Algebraic element of a [`GenericMatrix`](crate::GenericMatrix).
///
/// Bundles exactly the operations the matrix algorithms (LU, Gauss-Jordan,
/// products) need. Elements need not be `Copy` and multiplication need not
/// commute, so square matrices can themselves be elements (block matrices).
///
/// Shape-dependent constants (`null_like`, `identity_like`) are derived from an
/// existing element, because a block element has no shape-free zero.
///
/// ```
/// use jnum::Element;
///
/// let x = 4.0_f64;
/// assert_eq!(x.null_like(), 0.0);
/// assert_eq!(x.identity_like(), 1.0);
/// assert_eq!(x.inverse().unwrap(), 0.25);
/// assert!(0.0_f64.inverse().is_err());
/// ```
pub trait Element: Clone + Debug + PartialEq {
    /// Real type of magnitudes and scale factors.
    type Real: FloatScalar;

    /// Additive identity with the same shape as `self`.
    fn null_like(&self) -> Self;

    /// Multiplicative identity with the same shape as `self`.
    fn identity_like(&self) -> Self;

    /// Whether `self` is the additive identity.
    fn is_null(&self) -> bool;

    /// Absolute value (modulus for complex, Frobenius norm for matrices).
    fn magnitude(&self) -> Self::Real;

    fn added(&self, rhs: &Self) -> Self;

    fn subtracted(&self, rhs: &Self) -> Self;

    fn scaled(&self, factor: Self::Real) -> Self;

    /// `self · rhs`.
    fn product(&self, rhs: &Self) -> Self;

    /// Multiplicative inverse. Fails with [`LinalgError::Singular`] when none
    /// exists.
    fn inverse(&self) -> Result<Self, LinalgError>;
}

impl<T: LinalgScalar> Element for T {
    type Real = T::Real;

    #[inline]
    fn null_like(&self) -> Self {
        T::zero()
    }

    #[inline]
    fn identity_like(&self) -> Self {
        T::one()
    }

    #[inline]
    fn is_null(&self) -> bool {
        *self == T::zero()
    }

    #[inline]
    fn magnitude(&self) -> T::Real {
        self.modulus()
    }

    #[inline]
    fn added(&self, rhs: &Self) -> Self {
        *self + *rhs
    }

    #[inline]
    fn subtracted(&self, rhs: &Self) -> Self {
        *self - *rhs
    }

    #[inline]
    fn scaled(&self, factor: T::Real) -> Self {
        *self * T::from_real(factor)
    }

    #[inline]
    fn product(&self, rhs: &Self) -> Self {
        *self * *rhs
    }

    fn inverse(&self) -> Result<Self, LinalgError> {
        if self.is_null() {
            return Err(LinalgError::Singular);
        }
        Ok(T::one() / *self)
    }
}

/// Read-only access to a matrix-like type.
///
/// Lets the decomposition free functions run on any rectangular storage.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;
}

/// Mutable access to a matrix-like type.
///
/// Extends `MatrixRef` with mutable element access, enabling
/// in-place algorithms (LU, Gauss-Jordan) to work generically.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;

    /// Exchange two rows in place.
    fn swap_rows(&mut self, a: usize, b: usize);
}
