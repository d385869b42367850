pub(crate) mod gauss;
pub(crate) mod lu;

pub use gauss::gauss_jordan;
pub use lu::{decompose_lu, lu_back_substitute, LuDecomposition, LuSettings, LuStatus};

/// Errors from linear algebra operations.
///
/// Returned by decompositions, inversion, solving and the checked products.
///
/// ```
/// use jnum::GenericMatrix;
/// use jnum::linalg::LinalgError;
///
/// let null_row = GenericMatrix::from_rows(&[vec![1.0_f64, 2.0], vec![0.0, 0.0]]).unwrap();
/// assert_eq!(null_row.inverse().unwrap_err(), LinalgError::Singular);
///
/// let wide = GenericMatrix::null(2, 3, &0.0_f64);
/// assert_eq!(wide.inverse().unwrap_err(), LinalgError::NotSquare { nrows: 2, ncols: 3 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinalgError {
    /// Matrix is singular: a row (or Gauss-Jordan pivot column) is entirely null.
    Singular,
    /// Operation requires a square matrix.
    NotSquare { nrows: usize, ncols: usize },
    /// Operand shapes do not agree. Shapes are `(rows, cols)`.
    DimensionMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },
    /// Nested-row input where `row` has a different length than row 0.
    NotRectangular {
        row: usize,
        expected: usize,
        got: usize,
    },
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::Singular => write!(f, "matrix is singular"),
            LinalgError::NotSquare { nrows, ncols } => {
                write!(f, "square matrix required, got {}x{}", nrows, ncols)
            }
            LinalgError::DimensionMismatch { expected, got } => write!(
                f,
                "dimension mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, got.0, got.1
            ),
            LinalgError::NotRectangular { row, expected, got } => write!(
                f,
                "row {} has {} columns, expected {}",
                row, got, expected
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}
