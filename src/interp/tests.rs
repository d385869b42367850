use super::*;
use crate::matrix::GenericMatrix;

fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

// ======================== Kernel ========================

#[test]
fn kernel_values() {
    assert_eq!(cubic_kernel(0.0_f64), 1.0);
    assert_eq!(cubic_kernel(1.0_f64), 0.0);
    assert_eq!(cubic_kernel(-1.0_f64), 0.0);
    assert_eq!(cubic_kernel(2.0_f64), 0.0);
    assert_eq!(cubic_kernel(3.5_f64), 0.0);
    assert_eq!(cubic_kernel(0.5_f64), 0.5625);
    assert_eq!(cubic_kernel(-1.5_f64), -0.0625);
}

#[test]
fn kernel_is_symmetric() {
    for k in 0..40 {
        let x = k as f64 * 0.0625;
        assert_eq!(cubic_kernel(x), cubic_kernel(-x));
    }
}

// ======================== SplineCoeffs ========================

#[test]
fn integer_center_picks_sample() {
    let mut s = SplineCoeffs::<f64>::new();
    s.center_on(2.0);
    assert_eq!(s.coefficients(), &[0.0, 1.0, 0.0, 0.0]);
    assert_eq!(s.min_index(), 1);
    assert_eq!(s.max_index(), 4);
    assert_eq!(s.value_at(2), 1.0);
    assert_eq!(s.coefficient_at(4), 0.0);
}

#[test]
fn half_sample_weights() {
    let mut s = SplineCoeffs::<f64>::new();
    s.center_on(2.5);
    assert_eq!(s.min_index(), 1);
    assert_eq!(s.coefficients(), &[-0.0625, 0.5625, 0.5625, -0.0625]);
}

#[test]
fn coefficients_sum_to_one() {
    let mut s = SplineCoeffs::<f64>::new();
    for &i in &[0.0, 0.1, 1.3, 2.5, 7.77, -0.3, -4.01, 123.456] {
        s.center_on(i);
        let total: f64 = s.coefficients().iter().sum();
        assert!(approx_eq(total, 1.0, 1e-12), "sum at {} = {}", i, total);
        assert!(s.min_index() as f64 <= i && i <= s.max_index() as f64);
    }
}

#[test]
fn negative_center_window() {
    let mut s = SplineCoeffs::<f64>::new();
    s.center_on(-0.25);
    // floor(-1.25) = -2
    assert_eq!(s.min_index(), -2);
    assert_eq!(s.max_index(), 1);
    let total: f64 = s.coefficients().iter().sum();
    assert!(approx_eq(total, 1.0, 1e-12));
}

#[test]
fn recentering_is_idempotent() {
    let mut s = SplineCoeffs::<f64>::new();
    s.center_on(3.3);
    let first = *s.coefficients();
    s.center_on(3.3);
    assert_eq!(s.coefficients(), &first);
    assert_eq!(s.recomputations(), 1);
    assert_eq!(s.center(), 3.3);
}

#[test]
fn whole_sample_shift_reuses_weights() {
    let mut s = SplineCoeffs::<f64>::new();
    s.center_on(2.25);
    let first = *s.coefficients();
    s.center_on(5.25);
    assert_eq!(s.recomputations(), 1);
    assert_eq!(s.coefficients(), &first);
    assert_eq!(s.min_index(), 4);

    s.center_on(5.75);
    assert_eq!(s.recomputations(), 2);
}

#[test]
fn uncentered_cache() {
    let s = SplineCoeffs::<f64>::default();
    assert!(s.center().is_nan());
    assert_eq!(s.recomputations(), 0);
    assert_eq!(s.coefficients(), &[0.0; 4]);
}

#[test]
fn non_finite_center_gives_zero_weights() {
    let mut s = SplineCoeffs::<f64>::new();
    s.center_on(f64::NAN);
    assert_eq!(s.coefficients(), &[0.0; 4]);
}

#[test]
fn center_beyond_index_range_gives_zero_weights() {
    let mut s = SplineCoeffs::<f64>::new();
    s.center_on(2.25);
    assert_eq!(s.recomputations(), 1);

    s.center_on(1.0e30);
    assert_eq!(s.coefficients(), &[0.0; 4]);
    assert_eq!(s.min_index(), 0);

    // The next representable center recomputes instead of reusing stale weights
    s.center_on(3.25);
    assert_eq!(s.recomputations(), 2);
    let total: f64 = s.coefficients().iter().sum();
    assert!((total - 1.0).abs() < 1e-12);

    let mut spline = CubicSpline::<f64>::new();
    assert_eq!(spline.interpolate(&[1.0, 2.0, 3.0], -1.0e30), None);
}

#[test]
#[should_panic]
fn lookup_outside_window_panics() {
    let mut s = SplineCoeffs::<f64>::new();
    s.center_on(2.0);
    let _ = s.value_at(0);
}

#[test]
fn spline_f32() {
    let mut s = SplineCoeffs::<f32>::new();
    s.center_on(1.5);
    let total: f32 = s.coefficients().iter().sum();
    assert!((total - 1.0).abs() < 1e-6);
}

// ======================== CubicSpline ========================

#[test]
fn cubic_reproduces_quadratic() {
    let samples: [f64; 8] = core::array::from_fn(|i| {
        let x = i as f64;
        0.5 * x * x - x + 2.0
    });
    let mut spline = CubicSpline::new();
    for &x in &[2.0, 2.1, 3.5, 4.9] {
        let v = spline.interpolate(&samples, x).unwrap();
        let expected = 0.5 * x * x - x + 2.0;
        assert!(approx_eq(v, expected, 1e-12), "at {}: {} vs {}", x, v, expected);
    }
}

#[test]
fn cubic_edge_renormalizes() {
    let samples = [0.0_f64, 1.0, 2.0, 3.0];
    let mut spline = CubicSpline::new();
    // Window -1..=2; sample -1 is missing
    let v = spline.interpolate(&samples, 0.5).unwrap();
    let expected = (0.5625 * 1.0 - 0.0625 * 2.0) / (0.5625 + 0.5625 - 0.0625);
    assert!(approx_eq(v, expected, 1e-15));
    assert_eq!(spline.coeffs().min_index(), -1);
}

#[test]
fn cubic_skips_nan_samples() {
    let samples = [1.0_f64, f64::NAN, 1.0, 1.0, 1.0];
    let mut spline = CubicSpline::new();
    assert_eq!(spline.interpolate(&samples, 2.0), Some(1.0));
    let v = spline.interpolate(&samples, 1.5).unwrap();
    assert!(approx_eq(v, 1.0, 1e-15));
    // Only the NaN sample has weight
    assert_eq!(spline.interpolate(&samples, 1.0), None);
}

#[test]
fn cubic_outside_data() {
    let samples = [1.0_f64, 2.0];
    let mut spline = CubicSpline::new();
    assert_eq!(spline.interpolate(&samples, 10.0), None);
    assert_eq!(spline.interpolate(&[], 0.5), None);
}

#[test]
fn cubic_center_on_and_coefficients() {
    let mut spline = CubicSpline::<f64>::default();
    spline.center_on(2.0);
    assert_eq!(spline.coefficient_at(2), 1.0);
    assert_eq!(spline.coefficient_at(3), 0.0);
}

// ======================== Bicubic ========================

#[test]
fn bicubic_integer_center() {
    let mut s = BicubicSplineCoeffs::<f64>::new();
    s.center_on(2.0, 3.0);
    assert_eq!(s.value_at(2, 3), 1.0);
    assert_eq!(s.value_at(1, 3), 0.0);
    assert_eq!(s.row_coeffs().min_index(), 1);
    assert_eq!(s.col_coeffs().min_index(), 2);
}

#[test]
fn bicubic_weights_sum_to_one() {
    let mut s = BicubicSplineCoeffs::<f64>::new();
    s.center_on(4.3, -1.7);
    let mut total = 0.0;
    for i in s.row_coeffs().min_index()..=s.row_coeffs().max_index() {
        for j in s.col_coeffs().min_index()..=s.col_coeffs().max_index() {
            total += s.value_at(i, j);
        }
    }
    assert!(approx_eq(total, 1.0, 1e-12));
}

#[test]
fn bicubic_reproduces_plane() {
    let grid = GenericMatrix::from_fn(8, 8, |i, j| 3.0 * i as f64 - 0.5 * j as f64 + 1.0);
    let mut s = BicubicSplineCoeffs::new();
    for &(i, j) in &[(2.0, 2.0), (3.25, 4.5), (4.9, 2.1)] {
        let v = s.interpolate(&grid, i, j).unwrap();
        assert!(approx_eq(v, 3.0 * i - 0.5 * j + 1.0, 1e-12));
    }
}

#[test]
fn bicubic_corner_and_outside() {
    let grid = GenericMatrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
    let mut s = BicubicSplineCoeffs::new();
    assert_eq!(s.interpolate(&grid, 0.0, 0.0), Some(0.0));
    assert_eq!(s.interpolate(&grid, 2.0, 1.0), Some(7.0));
    assert_eq!(s.interpolate(&grid, 10.0, 10.0), None);
}

#[test]
fn bicubic_skips_nan() {
    let mut grid = GenericMatrix::from_fn(5, 5, |_, _| 2.0_f64);
    grid[(2, 2)] = f64::NAN;
    let mut s = BicubicSplineCoeffs::new();
    let v = s.interpolate(&grid, 2.5, 2.5).unwrap();
    assert!(approx_eq(v, 2.0, 1e-12));
    assert_eq!(s.interpolate(&grid, 2.0, 2.0), None);
}
