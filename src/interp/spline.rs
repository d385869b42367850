use log::trace;

use crate::traits::FloatScalar;

use super::cubic_kernel;

/// Four-tap cubic convolution weights around a fractional index.
///
/// After `center_on(i)` the weights apply to the integer window
/// `i0 ..= i0 + 3` with `i0 = floor(i - 1)`. Re-centering on the same `i` is a
/// no-op, and a center that differs by a whole number of samples only moves
/// the window: the weights depend on the local offset `i - i0` alone.
///
/// Equality tests are exact. Offsets that differ in the last bit recompute.
#[derive(Debug, Clone)]
pub struct SplineCoeffs<T> {
    coeffs: [T; 4],
    center: T,
    delta: T,
    i0: isize,
    recomputations: usize,
}

impl<T: FloatScalar> SplineCoeffs<T> {
    /// An uncentered cache. Weights are zero until the first `center_on`.
    pub fn new() -> Self {
        Self {
            coeffs: [T::zero(); 4],
            center: T::nan(),
            delta: T::nan(),
            i0: 0,
            recomputations: 0,
        }
    }

    /// Center the 4-tap window on fractional index `i`.
    ///
    /// A center whose window start does not fit in `isize` (non-finite or
    /// out of the index range) gives all-zero weights on the window at 0.
    pub fn center_on(&mut self, i: T) {
        if i == self.center {
            return;
        }
        self.center = i;

        let start = (i - T::one()).floor();
        let Some(i0) = start.to_isize() else {
            self.i0 = 0;
            self.delta = T::nan();
            self.coeffs = [T::zero(); 4];
            return;
        };
        self.i0 = i0;
        let delta = i - start;

        if delta == self.delta {
            return;
        }
        self.delta = delta;

        let mut k = T::zero();
        for c in self.coeffs.iter_mut() {
            *c = cubic_kernel(k - delta);
            k = k + T::one();
        }
        self.recomputations += 1;
        trace!("spline weights recomputed for offset {:?}", delta);
    }

    /// Weight of sample `i`.
    ///
    /// # Panics
    ///
    /// If `i` is outside `min_index() ..= max_index()`.
    #[inline]
    pub fn value_at(&self, i: isize) -> T {
        self.coeffs[(i - self.i0) as usize]
    }

    /// Same as [`value_at`](Self::value_at).
    #[inline]
    pub fn coefficient_at(&self, i: isize) -> T {
        self.value_at(i)
    }

    /// First sample index of the window.
    #[inline]
    pub fn min_index(&self) -> isize {
        self.i0
    }

    /// Last sample index of the window.
    #[inline]
    pub fn max_index(&self) -> isize {
        self.i0 + 3
    }

    /// Current center (NaN before the first `center_on`).
    #[inline]
    pub fn center(&self) -> T {
        self.center
    }

    /// Weights for `min_index() ..= max_index()`.
    #[inline]
    pub fn coefficients(&self) -> &[T; 4] {
        &self.coeffs
    }

    /// Number of times the weights were actually evaluated.
    #[inline]
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    /// Weighted sum of the finite samples `sample(idx)` over the window, and
    /// the sum of the weights that were used.
    pub(crate) fn accumulate(&self, mut sample: impl FnMut(usize) -> Option<T>) -> (T, T) {
        let mut sum = T::zero();
        let mut weight = T::zero();
        for (k, &w) in self.coeffs.iter().enumerate() {
            let idx = self.i0 + k as isize;
            if idx < 0 || w == T::zero() {
                continue;
            }
            if let Some(v) = sample(idx as usize) {
                if v.is_finite() {
                    sum = sum + w * v;
                    weight = weight + w;
                }
            }
        }
        (sum, weight)
    }
}

impl<T: FloatScalar> Default for SplineCoeffs<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cubic convolution resampler over uniformly spaced samples.
///
/// Samples outside the data or non-finite are skipped and the remaining
/// weights are renormalized, so edges and gaps degrade gracefully.
///
/// # Example
///
/// ```
/// use jnum::interp::CubicSpline;
///
/// let samples = [0.0_f64, 1.0, 4.0, 9.0, 16.0, 25.0];
/// let mut spline = CubicSpline::new();
///
/// // Exact at sample positions
/// assert_eq!(spline.interpolate(&samples, 3.0), Some(9.0));
///
/// let v = spline.interpolate(&samples, 2.5).unwrap();
/// assert!((v - 6.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline<T> {
    coeffs: SplineCoeffs<T>,
}

impl<T: FloatScalar> CubicSpline<T> {
    pub fn new() -> Self {
        Self {
            coeffs: SplineCoeffs::new(),
        }
    }

    pub fn center_on(&mut self, x: T) {
        self.coeffs.center_on(x);
    }

    pub fn coefficient_at(&self, i: isize) -> T {
        self.coeffs.coefficient_at(i)
    }

    /// The underlying weight cache.
    pub fn coeffs(&self) -> &SplineCoeffs<T> {
        &self.coeffs
    }

    /// Value of `samples` at fractional index `x`.
    ///
    /// Returns `None` when no finite sample carries weight.
    pub fn interpolate(&mut self, samples: &[T], x: T) -> Option<T> {
        self.coeffs.center_on(x);
        let (sum, weight) = self.coeffs.accumulate(|i| samples.get(i).copied());
        if weight == T::zero() {
            None
        } else {
            Some(sum / weight)
        }
    }
}

impl<T: FloatScalar> Default for CubicSpline<T> {
    fn default() -> Self {
        Self::new()
    }
}
