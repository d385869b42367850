use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

use crate::traits::Element;

use super::GenericMatrix;

fn assert_same_shape<T>(a: &GenericMatrix<T>, b: &GenericMatrix<T>, op: &str) {
    assert_eq!(
        (a.nrows, a.ncols),
        (b.nrows, b.ncols),
        "dimension mismatch: {}x{} {} {}x{}",
        a.nrows,
        a.ncols,
        op,
        b.nrows,
        b.ncols,
    );
}

// ── Element-wise addition ───────────────────────────────────────────

impl<T: Element> Add<&GenericMatrix<T>> for &GenericMatrix<T> {
    type Output = GenericMatrix<T>;

    fn add(self, rhs: &GenericMatrix<T>) -> GenericMatrix<T> {
        assert_same_shape(self, rhs, "+");
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(a, b)| a.added(b))
            .collect();
        GenericMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Element> Add for GenericMatrix<T> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += &rhs;
        self
    }
}

impl<T: Element> AddAssign<&GenericMatrix<T>> for GenericMatrix<T> {
    fn add_assign(&mut self, rhs: &GenericMatrix<T>) {
        assert_same_shape(self, rhs, "+=");
        for (a, b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = a.added(b);
        }
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Element> Sub<&GenericMatrix<T>> for &GenericMatrix<T> {
    type Output = GenericMatrix<T>;

    fn sub(self, rhs: &GenericMatrix<T>) -> GenericMatrix<T> {
        assert_same_shape(self, rhs, "-");
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(a, b)| a.subtracted(b))
            .collect();
        GenericMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Element> Sub for GenericMatrix<T> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= &rhs;
        self
    }
}

impl<T: Element> SubAssign<&GenericMatrix<T>> for GenericMatrix<T> {
    fn sub_assign(&mut self, rhs: &GenericMatrix<T>) {
        assert_same_shape(self, rhs, "-=");
        for (a, b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = a.subtracted(b);
        }
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Element> Neg for &GenericMatrix<T> {
    type Output = GenericMatrix<T>;

    fn neg(self) -> GenericMatrix<T> {
        let mut out = self.clone();
        out.scale(T::Real::zero() - T::Real::one());
        out
    }
}

impl<T: Element> Neg for GenericMatrix<T> {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.scale(T::Real::zero() - T::Real::one());
        self
    }
}

// ── Matrix product ──────────────────────────────────────────────────

impl<T: Element> Mul<&GenericMatrix<T>> for &GenericMatrix<T> {
    type Output = GenericMatrix<T>;

    /// Matrix product. Panics on an inner-dimension mismatch; use
    /// [`GenericMatrix::dot`] for the checked form.
    fn mul(self, rhs: &GenericMatrix<T>) -> GenericMatrix<T> {
        assert_eq!(
            self.ncols, rhs.nrows,
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        self.product_unchecked(rhs)
    }
}

impl<T: Element> Mul for GenericMatrix<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn m(rows: &[[f64; 2]]) -> GenericMatrix<f64> {
        let rows: alloc::vec::Vec<_> = rows.iter().map(|r| r.to_vec()).collect();
        GenericMatrix::from_rows(&rows).unwrap()
    }

    #[test]
    fn add_sub() {
        let a = m(&[[1.0, 2.0], [3.0, 4.0]]);
        let b = m(&[[0.5, 0.5], [-1.0, 1.0]]);
        assert_eq!(&a + &b, m(&[[1.5, 2.5], [2.0, 5.0]]));
        assert_eq!(&a - &b, m(&[[0.5, 1.5], [4.0, 3.0]]));
        assert_eq!(a.clone() + b.clone(), &a + &b);
        assert_eq!(a.clone() - b.clone(), &a - &b);
    }

    #[test]
    fn add_assign_sub_assign() {
        let mut a = m(&[[1.0, 2.0], [3.0, 4.0]]);
        let b = m(&[[1.0, 1.0], [1.0, 1.0]]);
        a += &b;
        assert_eq!(a, m(&[[2.0, 3.0], [4.0, 5.0]]));
        a -= &b;
        a -= &b;
        assert_eq!(a, m(&[[0.0, 1.0], [2.0, 3.0]]));
    }

    #[test]
    fn negate() {
        let a = m(&[[1.0, -2.0], [0.0, 4.0]]);
        assert_eq!(-&a, m(&[[-1.0, 2.0], [0.0, -4.0]]));
        assert_eq!(-a.clone(), -&a);
    }

    #[test]
    fn product() {
        let a = m(&[[1.0, 2.0], [3.0, 4.0]]);
        let b = m(&[[5.0, 6.0], [7.0, 8.0]]);
        assert_eq!(&a * &b, m(&[[19.0, 22.0], [43.0, 50.0]]));
        assert_eq!(a * b, m(&[[19.0, 22.0], [43.0, 50.0]]));
    }

    #[test]
    fn rectangular_product() {
        let a = GenericMatrix::from_rows(&[vec![1.0_f64, 2.0, 3.0]]).unwrap();
        let b = a.transpose();
        let outer = &b * &a;
        assert_eq!((outer.nrows(), outer.ncols()), (3, 3));
        assert_eq!(outer[(2, 1)], 6.0);
        let inner = &a * &b;
        assert_eq!(inner[(0, 0)], 14.0);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn add_shape_mismatch() {
        let a = GenericMatrix::null(2, 2, &0.0_f64);
        let b = GenericMatrix::null(2, 3, &0.0_f64);
        let _ = &a + &b;
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn mul_shape_mismatch() {
        let a = GenericMatrix::null(2, 3, &0.0_f64);
        let _ = &a * &a;
    }
}
