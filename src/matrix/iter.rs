use super::GenericMatrix;

/// Row-major iterator over the elements of a [`GenericMatrix`].
///
/// Yields `(row, col, &element)`. Created by [`GenericMatrix::iter`].
#[derive(Debug, Clone)]
pub struct MatrixIter<'a, T> {
    matrix: &'a GenericMatrix<T>,
    row: usize,
    col: usize,
}

impl<'a, T> MatrixIter<'a, T> {
    pub(super) fn new(matrix: &'a GenericMatrix<T>) -> Self {
        Self {
            matrix,
            row: 0,
            col: 0,
        }
    }

    fn remaining(&self) -> usize {
        let (nrows, ncols) = (self.matrix.nrows(), self.matrix.ncols());
        if self.row >= nrows || ncols == 0 {
            return 0;
        }
        (nrows - self.row) * ncols - self.col
    }
}

impl<'a, T> Iterator for MatrixIter<'a, T> {
    type Item = (usize, usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }
        let matrix: &'a GenericMatrix<T> = self.matrix;
        let item = (self.row, self.col, &matrix[(self.row, self.col)]);
        self.col += 1;
        if self.col == matrix.ncols() {
            self.col = 0;
            self.row += 1;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for MatrixIter<'_, T> {}

impl<T> core::iter::FusedIterator for MatrixIter<'_, T> {}

impl<'a, T> IntoIterator for &'a GenericMatrix<T> {
    type Item = (usize, usize, &'a T);
    type IntoIter = MatrixIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
