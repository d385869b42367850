use log::debug;
use num_traits::Zero;

use crate::linalg::LinalgError;
use crate::traits::{Element, MatrixMut};

/// Gauss-Jordan elimination of an augmented matrix `[A | B]`, in place.
///
/// `aug` is `n x (n + m)`. On success the left `n x n` block is reduced to
/// the identity and the right block holds `A⁻¹·B`.
///
/// In each column the entry of largest magnitude at or below the diagonal is
/// the pivot; ties keep the first row scanned. The pivot row is
/// left-multiplied by the inverse of the pivot, so non-commuting elements
/// are handled. Fails with [`LinalgError::Singular`] when a pivot column is
/// entirely null.
pub fn gauss_jordan<T: Element>(aug: &mut impl MatrixMut<T>) -> Result<(), LinalgError> {
    let n = aug.nrows();
    let width = aug.ncols();
    if width < n {
        return Err(LinalgError::DimensionMismatch {
            expected: (n, n),
            got: (n, width),
        });
    }

    for col in 0..n {
        let mut big = T::Real::zero();
        let mut pivot = col;
        for row in col..n {
            let m = aug.get(row, col).magnitude();
            if m > big {
                big = m;
                pivot = row;
            }
        }
        if big == T::Real::zero() {
            debug!("Gauss-Jordan: column {} has no non-null pivot", col);
            return Err(LinalgError::Singular);
        }

        aug.swap_rows(col, pivot);

        let inv = aug.get(col, col).inverse()?;
        for j in col..width {
            let v = inv.product(aug.get(col, j));
            *aug.get_mut(col, j) = v;
        }

        for row in 0..n {
            if row == col || aug.get(row, col).is_null() {
                continue;
            }
            let factor = aug.get(row, col).clone();
            for j in col..width {
                let v = aug
                    .get(row, j)
                    .subtracted(&factor.product(aug.get(col, j)));
                *aug.get_mut(row, j) = v;
            }
        }
    }

    Ok(())
}
