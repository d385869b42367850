mod display;
mod iter;
mod ops;
mod square;
mod vector;

pub use iter::MatrixIter;
pub use vector::GenericVector;

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::linalg::LinalgError;
use crate::traits::{Element, MatrixMut, MatrixRef};

/// Dense heap-allocated matrix over any algebraic [`Element`].
///
/// Column-major `Vec<T>` storage with runtime dimensions. Elements can be
/// reals, complex numbers, or square `GenericMatrix` blocks. Copies are deep
/// (`Clone`); nothing is shared between matrices.
///
/// # Examples
///
/// ```
/// use jnum::GenericMatrix;
///
/// let a = GenericMatrix::from_rows(&[vec![2.0_f64, 0.0], vec![0.0, 2.0]]).unwrap();
/// assert_eq!(a[(0, 1)], 0.0);
/// assert_eq!(a.nrows(), 2);
///
/// let inv = a.inverse().unwrap();
/// assert!((inv[(0, 0)] - 0.5).abs() < 1e-15);
/// assert!((inv[(1, 1)] - 0.5).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GenericMatrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Element> GenericMatrix<T> {
    /// Create an `nrows x ncols` matrix filled with copies of `value`.
    pub fn filled(nrows: usize, ncols: usize, value: T) -> Self {
        Self {
            data: alloc::vec![value; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `nrows x ncols` null matrix.
    ///
    /// `template` fixes the element shape (it matters for block elements);
    /// its value is ignored.
    ///
    /// ```
    /// use jnum::GenericMatrix;
    /// let m = GenericMatrix::null(2, 3, &0.0_f64);
    /// assert_eq!(m.ncols(), 3);
    /// assert!(m.is_null());
    /// ```
    pub fn null(nrows: usize, ncols: usize, template: &T) -> Self {
        Self::filled(nrows, ncols, template.null_like())
    }

    /// Create an `n x n` identity matrix with elements shaped like `template`.
    ///
    /// ```
    /// use jnum::GenericMatrix;
    /// let id = GenericMatrix::identity(3, &0.0_f64);
    /// assert_eq!(id[(1, 1)], 1.0);
    /// assert_eq!(id[(0, 2)], 0.0);
    /// ```
    pub fn identity(n: usize, template: &T) -> Self {
        let mut m = Self::null(n, n, template);
        for i in 0..n {
            m[(i, i)] = template.identity_like();
        }
        m
    }

    /// Create a matrix from nested rows.
    ///
    /// Fails with [`LinalgError::NotRectangular`] if the rows differ in length.
    /// An empty slice gives a `0 x 0` matrix.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, LinalgError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        for (i, r) in rows.iter().enumerate() {
            if r.len() != ncols {
                return Err(LinalgError::NotRectangular {
                    row: i,
                    expected: ncols,
                    got: r.len(),
                });
            }
        }
        let mut data = Vec::with_capacity(nrows * ncols);
        for j in 0..ncols {
            for r in rows {
                data.push(r[j].clone());
            }
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Create a matrix from an owned `Vec<T>` in column-major order.
    ///
    /// Panics if `data.len() != nrows * ncols`.
    ///
    /// ```
    /// use jnum::GenericMatrix;
    /// // Column-major: col0=[1,3], col1=[2,4]
    /// let m = GenericMatrix::from_vec(2, 2, vec![1.0, 3.0, 2.0, 4.0]);
    /// assert_eq!(m[(0, 1)], 2.0);
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "vec length {} does not match {}x{} matrix",
            data.len(),
            nrows,
            ncols,
        );
        Self { data, nrows, ncols }
    }

    /// Whether every element is null.
    pub fn is_null(&self) -> bool {
        self.data.iter().all(|e| e.is_null())
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                data.push(self[(i, j)].clone());
            }
        }
        Self {
            data,
            nrows: self.ncols,
            ncols: self.nrows,
        }
    }

    /// Copy of row `i`.
    pub fn row(&self, i: usize) -> GenericVector<T> {
        assert!(i < self.nrows, "row {} out of range for {} rows", i, self.nrows);
        (0..self.ncols).map(|j| self[(i, j)].clone()).collect()
    }

    /// Copy of column `j`.
    pub fn col(&self, j: usize) -> GenericVector<T> {
        assert!(j < self.ncols, "column {} out of range for {} columns", j, self.ncols);
        GenericVector::from_vec(self.data[j * self.nrows..(j + 1) * self.nrows].to_vec())
    }

    /// Scale every element in place.
    pub fn scale(&mut self, factor: T::Real) {
        for e in self.data.iter_mut() {
            *e = e.scaled(factor);
        }
    }

    /// Matrix product `self · rhs`, checked.
    ///
    /// ```
    /// use jnum::GenericMatrix;
    /// let a = GenericMatrix::from_rows(&[vec![1.0_f64, 2.0]]).unwrap();
    /// let b = GenericMatrix::from_rows(&[vec![3.0], vec![4.0]]).unwrap();
    /// assert_eq!(a.dot(&b).unwrap()[(0, 0)], 11.0);
    /// assert!(b.dot(&b).is_err());
    /// ```
    pub fn dot(&self, rhs: &Self) -> Result<Self, LinalgError> {
        if self.ncols != rhs.nrows || (self.ncols == 0 && self.nrows > 0 && rhs.ncols > 0) {
            return Err(LinalgError::DimensionMismatch {
                expected: (self.ncols, rhs.ncols),
                got: (rhs.nrows, rhs.ncols),
            });
        }
        Ok(self.product_unchecked(rhs))
    }

    /// Matrix-vector product `self · v`, treating `v` as a column.
    pub fn dot_vector(&self, v: &GenericVector<T>) -> Result<GenericVector<T>, LinalgError> {
        if self.ncols != v.len() || (self.ncols == 0 && self.nrows > 0) {
            return Err(LinalgError::DimensionMismatch {
                expected: (self.ncols, 1),
                got: (v.len(), 1),
            });
        }
        Ok((0..self.nrows)
            .map(|i| inner_sum((0..self.ncols).map(|k| self[(i, k)].product(&v[k]))))
            .collect())
    }

    pub(crate) fn product_unchecked(&self, rhs: &Self) -> Self {
        debug_assert_eq!(self.ncols, rhs.nrows);
        assert!(
            self.ncols > 0 || self.nrows == 0 || rhs.ncols == 0,
            "product with an empty inner dimension has no element shape"
        );
        let mut data = Vec::with_capacity(self.nrows * rhs.ncols);
        for j in 0..rhs.ncols {
            for i in 0..self.nrows {
                data.push(inner_sum(
                    (0..self.ncols).map(|k| self[(i, k)].product(&rhs[(k, j)])),
                ));
            }
        }
        Self {
            data,
            nrows: self.nrows,
            ncols: rhs.ncols,
        }
    }
}

/// Sum of a non-empty sequence of elements.
fn inner_sum<T: Element>(mut terms: impl Iterator<Item = T>) -> T {
    let first = terms.next().expect("inner dimension must be non-zero");
    terms.fold(first, |acc, t| acc.added(&t))
}

impl<T> GenericMatrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use jnum::GenericMatrix;
    /// let m = GenericMatrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 });
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for j in 0..ncols {
            for i in 0..nrows {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Column-major view of the elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Row-major iterator over `(row, col, &element)`.
    ///
    /// ```
    /// use jnum::GenericMatrix;
    /// let m = GenericMatrix::from_fn(2, 2, |i, j| (10 * i + j) as f64);
    /// let visited: Vec<f64> = m.iter().map(|(_, _, &v)| v).collect();
    /// assert_eq!(visited, vec![0.0, 1.0, 10.0, 11.0]);
    /// ```
    pub fn iter(&self) -> MatrixIter<'_, T> {
        MatrixIter::new(self)
    }

    pub(crate) fn check_square(&self) -> Result<(), LinalgError> {
        if self.is_square() {
            Ok(())
        } else {
            Err(LinalgError::NotSquare {
                nrows: self.nrows,
                ncols: self.ncols,
            })
        }
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T> MatrixRef<T> for GenericMatrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[col * self.nrows + row]
    }
}

impl<T> MatrixMut<T> for GenericMatrix<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[col * self.nrows + row]
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.ncols {
            self.data.swap(j * self.nrows + a, j * self.nrows + b);
        }
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for GenericMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[col * self.nrows + row]
    }
}

impl<T> IndexMut<(usize, usize)> for GenericMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[col * self.nrows + row]
    }
}
