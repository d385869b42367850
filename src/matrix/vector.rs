use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::traits::Element;

/// Heap-allocated vector of algebraic elements.
///
/// Used as right-hand side and solution of linear systems and as the
/// result of row/column extraction.
///
/// # Examples
///
/// ```
/// use jnum::GenericVector;
///
/// let v = GenericVector::from_vec(vec![1.0_f64, 2.0, 3.0]);
/// assert_eq!(v[0], 1.0);
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.dot(&v), 14.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GenericVector<T> {
    data: Vec<T>,
}

impl<T> GenericVector<T> {
    /// Wrap an owned `Vec`.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Element> GenericVector<T> {
    /// Vector of `n` null elements shaped like `template`.
    pub fn null(n: usize, template: &T) -> Self {
        Self {
            data: alloc::vec![template.null_like(); n],
        }
    }

    /// Dot product `Σ self[i] · rhs[i]`.
    ///
    /// Panics if the lengths differ or the vectors are empty.
    pub fn dot(&self, rhs: &Self) -> T {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        assert!(!self.is_empty(), "dot product of empty vectors");
        let mut sum = self.data[0].product(&rhs.data[0]);
        for i in 1..self.len() {
            sum = sum.added(&self.data[i].product(&rhs.data[i]));
        }
        sum
    }

    pub fn added(&self, rhs: &Self) -> Self {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        self.data.iter().zip(&rhs.data).map(|(a, b)| a.added(b)).collect()
    }

    pub fn subtracted(&self, rhs: &Self) -> Self {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        self.data
            .iter()
            .zip(&rhs.data)
            .map(|(a, b)| a.subtracted(b))
            .collect()
    }

    pub fn scaled(&self, factor: T::Real) -> Self {
        self.data.iter().map(|a| a.scaled(factor)).collect()
    }

    pub fn is_null(&self) -> bool {
        self.data.iter().all(|e| e.is_null())
    }
}

impl<T> FromIterator<T> for GenericVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> From<Vec<T>> for GenericVector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> Index<usize> for GenericVector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for GenericVector<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}
