use crate::matrix::GenericMatrix;
use crate::traits::FloatScalar;

use super::SplineCoeffs;

/// Separable 4x4 cubic convolution stencil for grids.
///
/// Row and column weights are two independent [`SplineCoeffs`] caches, each
/// with its own memoization.
///
/// # Example
///
/// ```
/// use jnum::GenericMatrix;
/// use jnum::interp::BicubicSplineCoeffs;
///
/// // f(i, j) = i + 2j is reproduced exactly inside the grid
/// let grid = GenericMatrix::from_fn(6, 6, |i, j| i as f64 + 2.0 * j as f64);
/// let mut s = BicubicSplineCoeffs::new();
/// let v = s.interpolate(&grid, 2.5, 2.25).unwrap();
/// assert!((v - 7.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct BicubicSplineCoeffs<T> {
    rows: SplineCoeffs<T>,
    cols: SplineCoeffs<T>,
}

impl<T: FloatScalar> BicubicSplineCoeffs<T> {
    pub fn new() -> Self {
        Self {
            rows: SplineCoeffs::new(),
            cols: SplineCoeffs::new(),
        }
    }

    /// Center the stencil on fractional row `i` and column `j`.
    pub fn center_on(&mut self, i: T, j: T) {
        self.rows.center_on(i);
        self.cols.center_on(j);
    }

    /// Weight of grid point `(i, j)`. Panics outside the current stencil.
    #[inline]
    pub fn value_at(&self, i: isize, j: isize) -> T {
        self.rows.value_at(i) * self.cols.value_at(j)
    }

    pub fn row_coeffs(&self) -> &SplineCoeffs<T> {
        &self.rows
    }

    pub fn col_coeffs(&self) -> &SplineCoeffs<T> {
        &self.cols
    }

    /// Value of `grid` at fractional position `(i, j)`.
    ///
    /// Grid points outside the matrix or non-finite are skipped and the
    /// remaining weights renormalized. Returns `None` when nothing carries
    /// weight.
    pub fn interpolate(&mut self, grid: &GenericMatrix<T>, i: T, j: T) -> Option<T> {
        self.center_on(i, j);

        let mut sum = T::zero();
        let mut weight = T::zero();
        for (k, &wr) in self.rows.coefficients().iter().enumerate() {
            let row = self.rows.min_index() + k as isize;
            if row < 0 || row as usize >= grid.nrows() || wr == T::zero() {
                continue;
            }
            let row = row as usize;
            let (s, w) = self
                .cols
                .accumulate(|col| (col < grid.ncols()).then(|| grid[(row, col)]));
            sum = sum + wr * s;
            weight = weight + wr * w;
        }

        if weight == T::zero() {
            None
        } else {
            Some(sum / weight)
        }
    }
}

impl<T: FloatScalar> Default for BicubicSplineCoeffs<T> {
    fn default() -> Self {
        Self::new()
    }
}
