use alloc::vec::Vec;

use num_traits::{Float, Zero};

use crate::linalg::{gauss_jordan, LinalgError, LuDecomposition, LuSettings};
use crate::traits::Element;

use super::{GenericMatrix, GenericVector};

/// Square-matrix operations: inversion, linear solving, determinant, trace.
///
/// Every method fails with [`LinalgError::NotSquare`] on a rectangular
/// receiver.
impl<T: Element> GenericMatrix<T> {
    /// LU decomposition (Crout, partial pivoting) with default settings.
    pub fn lu(&self) -> Result<LuDecomposition<T>, LinalgError> {
        LuDecomposition::new(self)
    }

    /// LU decomposition with explicit settings.
    pub fn lu_with(&self, settings: &LuSettings<T::Real>) -> Result<LuDecomposition<T>, LinalgError> {
        LuDecomposition::with_settings(self, settings)
    }

    /// Inverse via LU decomposition. The receiver is not modified.
    ///
    /// ```
    /// use jnum::GenericMatrix;
    /// let a = GenericMatrix::from_rows(&[vec![4.0_f64, 7.0], vec![2.0, 6.0]]).unwrap();
    /// let id = &a * &a.inverse().unwrap();
    /// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!(id[(0, 1)].abs() < 1e-12);
    /// ```
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        self.lu_inverse()
    }

    /// Inverse via LU decomposition.
    pub fn lu_inverse(&self) -> Result<Self, LinalgError> {
        self.lu()?.inverse()
    }

    /// Replace the receiver with its inverse. On error the receiver is left
    /// unchanged.
    pub fn invert(&mut self) -> Result<(), LinalgError> {
        *self = self.lu_inverse()?;
        Ok(())
    }

    /// Inverse via Gauss-Jordan elimination of the augmented matrix `[A | I]`.
    ///
    /// Independent of the LU path; useful for cross-validation.
    pub fn gauss_inverse(&self) -> Result<Self, LinalgError> {
        self.check_square()?;
        let n = self.nrows;
        if n == 0 {
            return Ok(self.clone());
        }
        let identity = Self::identity(n, &self.data[0]);
        let mut aug = self.augmented(&identity);
        gauss_jordan(&mut aug)?;
        Ok(aug.right_block(n))
    }

    /// Solve `A·X = B` in place: each vector of `vectors` is a column of `B`
    /// and is overwritten with the matching column of `X`.
    ///
    /// ```
    /// use jnum::{GenericMatrix, GenericVector};
    /// let a = GenericMatrix::from_rows(&[vec![3.0_f64, 2.0], vec![1.0, 4.0]]).unwrap();
    /// let mut rhs = [GenericVector::from_vec(vec![7.0, 9.0])];
    /// a.solve(&mut rhs).unwrap();
    /// assert!((rhs[0][0] - 1.0).abs() < 1e-12);
    /// assert!((rhs[0][1] - 2.0).abs() < 1e-12);
    /// ```
    pub fn solve(&self, vectors: &mut [GenericVector<T>]) -> Result<(), LinalgError> {
        self.check_square()?;
        let n = self.nrows;
        if vectors.is_empty() {
            return Ok(());
        }
        for v in vectors.iter() {
            if v.len() != n {
                return Err(LinalgError::DimensionMismatch {
                    expected: (n, 1),
                    got: (v.len(), 1),
                });
            }
        }
        if n == 0 {
            return Ok(());
        }
        let mut b = Vec::with_capacity(n * vectors.len());
        for v in vectors.iter() {
            b.extend(v.iter().cloned());
        }
        let b = GenericMatrix::from_vec(n, vectors.len(), b);
        let x = self.solutions_to(&b)?;
        for (j, v) in vectors.iter_mut().enumerate() {
            *v = x.col(j);
        }
        Ok(())
    }

    /// Solution `X` of `A·X = B` by Gauss-Jordan elimination of `[A | B]`.
    pub fn solutions_to(&self, b: &Self) -> Result<Self, LinalgError> {
        self.check_square()?;
        let n = self.nrows;
        if b.nrows != n {
            return Err(LinalgError::DimensionMismatch {
                expected: (n, b.ncols),
                got: (b.nrows, b.ncols),
            });
        }
        if n == 0 {
            return Ok(b.clone());
        }
        let mut aug = self.augmented(b);
        gauss_jordan(&mut aug)?;
        Ok(aug.right_block(n))
    }

    /// Determinant via LU decomposition.
    ///
    /// For non-commuting elements this is the ordered product of the U
    /// diagonal with the permutation sign.
    pub fn det(&self) -> Result<T, LinalgError> {
        Ok(self.lu()?.det())
    }

    /// Sum of the diagonal. Fails on non-square or empty matrices.
    pub fn trace(&self) -> Result<T, LinalgError> {
        self.check_square()?;
        if self.nrows == 0 {
            return Err(LinalgError::DimensionMismatch {
                expected: (1, 1),
                got: (0, 0),
            });
        }
        let mut sum = self[(0, 0)].clone();
        for i in 1..self.nrows {
            sum = sum.added(&self[(i, i)]);
        }
        Ok(sum)
    }

    /// `[self | rhs]`, both with the same row count.
    fn augmented(&self, rhs: &Self) -> Self {
        debug_assert_eq!(self.nrows, rhs.nrows);
        let mut data = Vec::with_capacity(self.data.len() + rhs.data.len());
        data.extend(self.data.iter().cloned());
        data.extend(rhs.data.iter().cloned());
        Self {
            data,
            nrows: self.nrows,
            ncols: self.ncols + rhs.ncols,
        }
    }

    /// Columns `first_col..` as a new matrix.
    fn right_block(&self, first_col: usize) -> Self {
        Self {
            data: self.data[first_col * self.nrows..].to_vec(),
            nrows: self.nrows,
            ncols: self.ncols - first_col,
        }
    }
}

/// Square matrices are elements themselves, which gives block matrices.
impl<T: Element> Element for GenericMatrix<T> {
    type Real = T::Real;

    fn null_like(&self) -> Self {
        Self {
            data: self.data.iter().map(|e| e.null_like()).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    fn identity_like(&self) -> Self {
        let mut out = self.null_like();
        for i in 0..self.nrows.min(self.ncols) {
            out[(i, i)] = self[(i, i)].identity_like();
        }
        out
    }

    fn is_null(&self) -> bool {
        self.data.iter().all(|e| e.is_null())
    }

    /// Frobenius norm.
    fn magnitude(&self) -> T::Real {
        self.data
            .iter()
            .map(|e| {
                let m = e.magnitude();
                m * m
            })
            .fold(T::Real::zero(), |acc, x| acc + x)
            .sqrt()
    }

    fn added(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn subtracted(&self, rhs: &Self) -> Self {
        self - rhs
    }

    fn scaled(&self, factor: T::Real) -> Self {
        let mut out = self.clone();
        out.scale(factor);
        out
    }

    fn product(&self, rhs: &Self) -> Self {
        self * rhs
    }

    fn inverse(&self) -> Result<Self, LinalgError> {
        self.lu_inverse()
    }
}
