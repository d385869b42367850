//! Matrices whose elements are themselves square matrices.

use jnum::linalg::LinalgError;
use jnum::{Element, GenericMatrix, GenericVector};
use simplelog::{Config, LevelFilter, TestLogger};

type Block = GenericMatrix<f64>;

const TOL: f64 = 1e-10;

fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

fn flat_4x4() -> GenericMatrix<f64> {
    GenericMatrix::from_rows(&[
        vec![6.0, 1.0, 2.0, 0.5],
        vec![1.0, 5.0, -1.0, 1.0],
        vec![0.5, 2.0, 7.0, 1.0],
        vec![1.0, 0.0, 2.0, 4.0],
    ])
    .unwrap()
}

/// Split an `2n x 2n` matrix into an `n x n` matrix of 2x2 blocks.
fn to_blocks(m: &GenericMatrix<f64>) -> GenericMatrix<Block> {
    let n = m.nrows() / 2;
    GenericMatrix::from_fn(n, n, |bi, bj| {
        GenericMatrix::from_fn(2, 2, |i, j| m[(2 * bi + i, 2 * bj + j)])
    })
}

fn from_blocks(b: &GenericMatrix<Block>) -> GenericMatrix<f64> {
    let n = b.nrows() * 2;
    GenericMatrix::from_fn(n, n, |i, j| b[(i / 2, j / 2)][(i % 2, j % 2)])
}

fn assert_near(a: &GenericMatrix<f64>, b: &GenericMatrix<f64>) {
    assert_eq!((a.nrows(), a.ncols()), (b.nrows(), b.ncols()));
    for (i, j, &v) in a.iter() {
        assert!(
            (v - b[(i, j)]).abs() < TOL,
            "({}, {}): {} vs {}",
            i,
            j,
            v,
            b[(i, j)]
        );
    }
}

#[test]
fn block_identity_and_null() {
    let template = GenericMatrix::from_fn(2, 2, |_, _| 3.0_f64);
    let id = GenericMatrix::identity(2, &template);
    assert_near(&from_blocks(&id), &GenericMatrix::identity(4, &0.0));
    assert!(GenericMatrix::null(2, 2, &template).is_null());
}

#[test]
fn block_product_matches_flat() {
    init_logging();
    let a = flat_4x4();
    let b = a.transpose();
    let blocked = &to_blocks(&a) * &to_blocks(&b);
    assert_near(&from_blocks(&blocked), &(&a * &b));
}

#[test]
fn block_lu_inverse_matches_flat() {
    init_logging();
    let a = flat_4x4();
    let flat_inv = a.inverse().unwrap();
    let block_inv = to_blocks(&a).inverse().unwrap();
    assert_near(&from_blocks(&block_inv), &flat_inv);
}

#[test]
fn block_gauss_inverse_matches_flat() {
    init_logging();
    let a = flat_4x4();
    let block_inv = to_blocks(&a).gauss_inverse().unwrap();
    assert_near(&from_blocks(&block_inv), &a.gauss_inverse().unwrap());
}

#[test]
fn block_solve_in_place() {
    init_logging();
    let a = flat_4x4();
    let blocks = to_blocks(&a);

    // Right-hand side: a 4x2 matrix split into two 2x2 blocks
    let rhs = GenericMatrix::from_rows(&[
        vec![1.0, 0.0],
        vec![2.0, 1.0],
        vec![0.0, -1.0],
        vec![3.0, 0.5],
    ])
    .unwrap();
    let top = GenericMatrix::from_fn(2, 2, |i, j| rhs[(i, j)]);
    let bottom = GenericMatrix::from_fn(2, 2, |i, j| rhs[(i + 2, j)]);

    let mut vectors = [GenericVector::from_vec(vec![top, bottom])];
    blocks.solve(&mut vectors).unwrap();

    let x = GenericMatrix::from_fn(4, 2, |i, j| vectors[0][i / 2][(i % 2, j)]);
    assert_near(&(&a * &x), &rhs);
}

#[test]
fn block_lu_solve_vector() {
    init_logging();
    let a = flat_4x4();
    let lu = to_blocks(&a).lu().unwrap();
    assert!(!lu.is_degraded());

    let b0 = GenericMatrix::identity(2, &0.0_f64);
    let b1 = GenericMatrix::null(2, 2, &0.0_f64);
    let x = lu
        .solve(&GenericVector::from_vec(vec![b0, b1]))
        .unwrap();

    // First two columns of the flat inverse
    let inv = a.inverse().unwrap();
    for i in 0..4 {
        for j in 0..2 {
            assert!((x[i / 2][(i % 2, j)] - inv[(i, j)]).abs() < TOL);
        }
    }
}

#[test]
fn block_magnitude_is_frobenius() {
    let b = GenericMatrix::from_rows(&[vec![3.0_f64, 4.0], vec![0.0, 0.0]]).unwrap();
    assert_eq!(b.magnitude(), 5.0);
    assert_eq!(Element::inverse(&b), Err(LinalgError::Singular));
}

#[test]
fn singular_block_pivot_fails() {
    init_logging();
    // No block row is null, but the pivot block has a null row of its own
    let s = GenericMatrix::from_rows(&[vec![1.0_f64, 1.0], vec![0.0, 0.0]]).unwrap();
    let z = GenericMatrix::null(2, 2, &0.0_f64);
    let m = GenericMatrix::from_fn(2, 2, |i, j| if i == j { s.clone() } else { z.clone() });
    assert!(matches!(m.inverse(), Err(LinalgError::Singular)));
}
