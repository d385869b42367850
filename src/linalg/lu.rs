use alloc::vec;
use alloc::vec::Vec;

use log::{debug, warn};
use num_traits::{Float, NumCast, One, Zero};

use crate::linalg::LinalgError;
use crate::matrix::{GenericMatrix, GenericVector};
use crate::traits::{Element, FloatScalar, MatrixMut, MatrixRef};

/// Settings for LU decomposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuSettings<R> {
    /// Placeholder magnitude substituted (times identity) for an exactly null
    /// pivot met mid-decomposition (default: 1e-20).
    pub tiny_value: R,
}

impl<R: FloatScalar> Default for LuSettings<R> {
    fn default() -> Self {
        Self {
            tiny_value: <R as NumCast>::from(1e-20).unwrap_or_else(R::min_positive_value),
        }
    }
}

/// Outcome of [`decompose_lu`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuStatus {
    /// `true` if an even number of row swaps occurred (determinant sign).
    pub even: bool,
    /// Number of null pivots replaced by `tiny_value · identity`.
    /// Non-zero means the factors describe a perturbed matrix.
    pub tiny_pivots: usize,
}

/// Crout LU decomposition with implicit row scaling and partial pivoting,
/// in place.
///
/// On return, `a` holds L and U packed together:
/// - Upper triangle (including diagonal): U
/// - Lower triangle (excluding diagonal): L (diagonal of L is implicitly identity)
///
/// `index[j]` receives the row swapped into position `j`. Pivot candidates are
/// compared with `>=`, so among equally scaled candidates the last one scanned
/// wins.
///
/// Fails with [`LinalgError::Singular`] only if some row is entirely null
/// before pivoting. A null pivot found later is replaced by
/// `tiny_value · identity` and counted in [`LuStatus::tiny_pivots`].
///
/// Works for non-commuting elements: L entries are right-multiplied by the
/// inverse of the pivot.
pub fn decompose_lu<T: Element>(
    a: &mut impl MatrixMut<T>,
    index: &mut [usize],
    tiny_value: T::Real,
) -> Result<LuStatus, LinalgError> {
    let n = a.nrows();
    if a.ncols() != n {
        return Err(LinalgError::NotSquare {
            nrows: n,
            ncols: a.ncols(),
        });
    }
    if index.len() != n {
        return Err(LinalgError::DimensionMismatch {
            expected: (n, 1),
            got: (index.len(), 1),
        });
    }

    let zero = T::Real::zero();

    // Implicit scaling of each row
    let mut scale = Vec::with_capacity(n);
    for i in 0..n {
        let mut big = zero;
        for j in 0..n {
            let m = a.get(i, j).magnitude();
            if m > big {
                big = m;
            }
        }
        if big == zero {
            debug!("LU: row {} of {}x{} matrix is null", i, n, n);
            return Err(LinalgError::Singular);
        }
        scale.push(big.recip());
    }

    let mut status = LuStatus {
        even: true,
        tiny_pivots: 0,
    };

    for j in 0..n {
        // Upper triangle above the diagonal
        for i in 0..j {
            let mut sum = a.get(i, j).clone();
            for k in 0..i {
                sum = sum.subtracted(&a.get(i, k).product(a.get(k, j)));
            }
            *a.get_mut(i, j) = sum;
        }

        // Diagonal and below, searching for the pivot
        let mut big = zero;
        let mut imax = j;
        for i in j..n {
            let mut sum = a.get(i, j).clone();
            for k in 0..j {
                sum = sum.subtracted(&a.get(i, k).product(a.get(k, j)));
            }
            let dum = scale[i] * sum.magnitude();
            *a.get_mut(i, j) = sum;
            if dum >= big {
                big = dum;
                imax = i;
            }
        }

        if imax != j {
            a.swap_rows(imax, j);
            status.even = !status.even;
            scale[imax] = scale[j];
        }
        index[j] = imax;

        if a.get(j, j).is_null() {
            warn!("LU: null pivot in column {}, substituting tiny value", j);
            let tiny = a.get(j, j).identity_like().scaled(tiny_value);
            *a.get_mut(j, j) = tiny;
            status.tiny_pivots += 1;
        }

        if j + 1 < n {
            let inv = a.get(j, j).inverse()?;
            for i in (j + 1)..n {
                let l = a.get(i, j).product(&inv);
                *a.get_mut(i, j) = l;
            }
        }
    }

    Ok(status)
}

/// Solve `A·x = b` in place given the packed factors and pivot record from
/// [`decompose_lu`].
///
/// `b` is overwritten with `x`. The permutation is undone on the fly during
/// forward substitution.
pub fn lu_back_substitute<T: Element>(
    lu: &impl MatrixRef<T>,
    index: &[usize],
    b: &mut [T],
) -> Result<(), LinalgError> {
    let n = lu.nrows();
    if b.len() != n || index.len() != n {
        return Err(LinalgError::DimensionMismatch {
            expected: (n, 1),
            got: (b.len(), 1),
        });
    }

    // Forward substitution: L·y = P·b
    for i in 0..n {
        let ip = index[i];
        let mut sum = b[ip].clone();
        b[ip] = b[i].clone();
        for j in 0..i {
            sum = sum.subtracted(&lu.get(i, j).product(&b[j]));
        }
        b[i] = sum;
    }

    // Back substitution: U·x = y
    for i in (0..n).rev() {
        let mut sum = b[i].clone();
        for j in (i + 1)..n {
            sum = sum.subtracted(&lu.get(i, j).product(&b[j]));
        }
        b[i] = lu.get(i, i).inverse()?.product(&sum);
    }

    Ok(())
}

/// LU decomposition of a square [`GenericMatrix`].
///
/// Owns its own copy of the factors; the source matrix is never modified.
/// Use `solve()`, `inverse()`, or `det()` to work with the decomposition.
///
/// # Example
///
/// ```
/// use jnum::{GenericMatrix, GenericVector};
///
/// let a = GenericMatrix::from_rows(&[vec![2.0_f64, 1.0], vec![5.0, 3.0]]).unwrap();
/// let lu = a.lu().unwrap();
///
/// let x = lu.solve(&GenericVector::from_vec(vec![4.0, 11.0])).unwrap();
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
///
/// assert!((lu.det() - 1.0).abs() < 1e-12);
/// assert!(!lu.is_degraded());
/// ```
#[derive(Debug, Clone)]
pub struct LuDecomposition<T> {
    lu: GenericMatrix<T>,
    index: Vec<usize>,
    status: LuStatus,
}

impl<T: Element> LuDecomposition<T> {
    /// Decompose with default [`LuSettings`].
    pub fn new(a: &GenericMatrix<T>) -> Result<Self, LinalgError> {
        Self::with_settings(a, &LuSettings::default())
    }

    /// Decompose with explicit settings.
    ///
    /// Fails on non-square or empty matrices and on matrices with a null row.
    pub fn with_settings(
        a: &GenericMatrix<T>,
        settings: &LuSettings<T::Real>,
    ) -> Result<Self, LinalgError> {
        a.check_square()?;
        if a.nrows() == 0 {
            return Err(LinalgError::DimensionMismatch {
                expected: (1, 1),
                got: (0, 0),
            });
        }
        let mut lu = a.clone();
        let mut index = vec![0usize; a.nrows()];
        let status = decompose_lu(&mut lu, &mut index, settings.tiny_value)?;
        Ok(Self { lu, index, status })
    }

    /// Solve `A·x = b` for `x`.
    pub fn solve(&self, b: &GenericVector<T>) -> Result<GenericVector<T>, LinalgError> {
        let mut x = b.clone();
        lu_back_substitute(&self.lu, &self.index, x.as_mut_slice())?;
        Ok(x)
    }

    /// Solve `A·X = B` for `X`, column by column.
    pub fn solve_matrix(&self, b: &GenericMatrix<T>) -> Result<GenericMatrix<T>, LinalgError> {
        let n = self.lu.nrows();
        if b.nrows() != n {
            return Err(LinalgError::DimensionMismatch {
                expected: (n, b.ncols()),
                got: (b.nrows(), b.ncols()),
            });
        }
        let mut data = Vec::with_capacity(n * b.ncols());
        for j in 0..b.ncols() {
            let mut col = b.col(j).into_vec();
            lu_back_substitute(&self.lu, &self.index, &mut col)?;
            data.extend(col);
        }
        Ok(GenericMatrix::from_vec(n, b.ncols(), data))
    }

    /// Compute the matrix inverse by back-substituting the identity columns.
    pub fn inverse(&self) -> Result<GenericMatrix<T>, LinalgError> {
        let n = self.lu.nrows();
        let template = &self.lu[(0, 0)];
        let null = template.null_like();
        let one = template.identity_like();
        let mut data = Vec::with_capacity(n * n);
        let mut e = vec![null.clone(); n];

        for col in 0..n {
            e.iter_mut().for_each(|x| *x = null.clone());
            e[col] = one.clone();
            lu_back_substitute(&self.lu, &self.index, &mut e)?;
            data.extend(e.iter().cloned());
        }

        Ok(GenericMatrix::from_vec(n, n, data))
    }

    /// Ordered product of the U diagonal, negated for an odd permutation.
    pub fn det(&self) -> T {
        let n = self.lu.nrows();
        let mut d = self.lu[(0, 0)].clone();
        for i in 1..n {
            d = d.product(&self.lu[(i, i)]);
        }
        if self.status.even {
            d
        } else {
            d.scaled(T::Real::zero() - T::Real::one())
        }
    }

    /// Whether any pivot had to be replaced by the tiny placeholder.
    pub fn is_degraded(&self) -> bool {
        self.status.tiny_pivots > 0
    }

    pub fn tiny_pivots(&self) -> usize {
        self.status.tiny_pivots
    }

    /// `true` if an even number of row swaps occurred.
    pub fn is_even(&self) -> bool {
        self.status.even
    }

    /// Pivot record: `index()[j]` is the row swapped into position `j`.
    pub fn index(&self) -> &[usize] {
        &self.index
    }

    /// Packed L/U factors.
    pub fn packed(&self) -> &GenericMatrix<T> {
        &self.lu
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_rows(rows: &[&[f64]]) -> GenericMatrix<f64> {
        let rows: Vec<Vec<f64>> = rows.iter().map(|r| r.to_vec()).collect();
        GenericMatrix::from_rows(&rows).unwrap()
    }

    #[test]
    fn lu_solve_2x2() {
        // 3x + 2y = 7
        // x + 4y = 9
        let a = from_rows(&[&[3.0, 2.0], &[1.0, 4.0]]);
        let x = a.lu().unwrap().solve(&GenericVector::from_vec(vec![7.0, 9.0])).unwrap();
        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn lu_solve_3x3() {
        let a = from_rows(&[&[2.0, 1.0, -1.0], &[-3.0, -1.0, 2.0], &[-2.0, 1.0, 2.0]]);
        let b = GenericVector::from_vec(vec![8.0, -11.0, -3.0]);
        let x = a.lu().unwrap().solve(&b).unwrap();
        assert!((x[0] - 2.0).abs() < 1e-12);
        assert!((x[1] - 3.0).abs() < 1e-12);
        assert!((x[2] - (-1.0)).abs() < 1e-12);
    }

    #[test]
    fn lu_det() {
        let a = from_rows(&[&[3.0, 8.0], &[4.0, 6.0]]);
        let lu = a.lu().unwrap();
        assert!((lu.det() - (-14.0)).abs() < 1e-12);
    }

    #[test]
    fn null_row_is_singular() {
        let mut a = from_rows(&[&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0], &[4.0, 5.0, 6.0]]);
        let mut index = [0usize; 3];
        let err = decompose_lu(&mut a, &mut index, 1e-20).unwrap_err();
        assert_eq!(err, LinalgError::Singular);
        assert_eq!(a.lu().unwrap_err(), LinalgError::Singular);
    }

    #[test]
    fn pivot_ties_favor_later_row() {
        // Both rows scale to 1/2 and give scaled pivot candidates of 1.0.
        let mut a = from_rows(&[&[2.0, 1.0], &[2.0, 1.5]]);
        let mut index = [0usize; 2];
        let status = decompose_lu(&mut a, &mut index, 1e-20).unwrap();
        assert_eq!(index[0], 1);
        assert!(!status.even);
        assert_eq!(status.tiny_pivots, 0);
        // Row 1 moved to the top
        assert_eq!(a[(0, 0)], 2.0);
        assert_eq!(a[(0, 1)], 1.5);

        let lu = from_rows(&[&[2.0, 1.0], &[2.0, 1.5]]).lu().unwrap();
        assert!((lu.det() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn largest_scaled_pivot_wins() {
        // Scaled candidates: 1/2 for row 0, 1/3 for row 1
        let mut a = from_rows(&[&[1.0, 2.0], &[1.0, 3.0]]);
        let mut index = [0usize; 2];
        let status = decompose_lu(&mut a, &mut index, 1e-20).unwrap();
        assert_eq!(index, [0, 1]);
        assert!(status.even);
    }

    #[test]
    fn null_pivot_is_substituted() {
        // Rank-deficient without a null row: column 1 eliminates to zero.
        let a = from_rows(&[&[1.0, 2.0], &[2.0, 4.0]]);
        let lu = a.lu().unwrap();
        assert!(lu.is_degraded());
        assert_eq!(lu.tiny_pivots(), 1);
        assert_eq!(lu.packed()[(1, 1)], 1e-20);

        let custom = a.lu_with(&LuSettings { tiny_value: 1e-3 }).unwrap();
        assert_eq!(custom.packed()[(1, 1)], 1e-3);
    }

    #[test]
    fn well_conditioned_is_not_degraded() {
        let a = from_rows(&[&[4.0, 7.0], &[2.0, 6.0]]);
        let lu = a.lu().unwrap();
        assert!(!lu.is_degraded());
        assert_eq!(lu.index().len(), 2);
    }

    #[test]
    fn inverse_identity() {
        let a = from_rows(&[&[1.0, 2.0, 3.0], &[0.0, 1.0, 4.0], &[5.0, 6.0, 0.0]]);
        let inv = a.lu().unwrap().inverse().unwrap();
        let id = &a * &inv;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (id[(i, j)] - expected).abs() < 1e-10,
                    "id[({},{})] = {}, expected {}",
                    i,
                    j,
                    id[(i, j)],
                    expected
                );
            }
        }
    }

    #[test]
    fn solve_matrix_residual() {
        let a = from_rows(&[
            &[1.0, 2.0, 3.0, 4.0],
            &[5.0, 6.0, 7.0, 8.0],
            &[2.0, 6.0, 4.0, 1.0],
            &[3.0, 1.0, 9.0, 2.0],
        ]);
        let b = from_rows(&[&[10.0, 1.0], &[26.0, 0.0], &[13.0, 0.0], &[15.0, 0.0]]);
        let x = a.lu().unwrap().solve_matrix(&b).unwrap();
        let r = &a * &x;
        for (i, j, &v) in r.iter() {
            assert!((v - b[(i, j)]).abs() < 1e-10, "residual at ({}, {})", i, j);
        }
    }

    #[test]
    fn rejects_bad_shapes() {
        let mut a = GenericMatrix::null(2, 3, &0.0_f64);
        let mut index = [0usize; 2];
        assert_eq!(
            decompose_lu(&mut a, &mut index, 1e-20).unwrap_err(),
            LinalgError::NotSquare { nrows: 2, ncols: 3 }
        );

        let mut sq = GenericMatrix::identity(3, &0.0_f64);
        assert!(matches!(
            decompose_lu(&mut sq, &mut index, 1e-20),
            Err(LinalgError::DimensionMismatch { .. })
        ));

        let empty = GenericMatrix::<f64>::from_rows(&[]).unwrap();
        assert!(empty.lu().is_err());
    }

    #[test]
    fn back_substitute_length_mismatch() {
        let lu = from_rows(&[&[2.0, 0.0], &[0.0, 2.0]]).lu().unwrap();
        let b = GenericVector::from_vec(vec![1.0]);
        assert!(matches!(
            lu.solve(&b),
            Err(LinalgError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn default_tiny_value() {
        assert_eq!(LuSettings::<f64>::default().tiny_value, 1e-20);
        assert!(LuSettings::<f32>::default().tiny_value > 0.0);
    }
}
