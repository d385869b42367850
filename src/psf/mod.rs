//! Elliptical Gaussian beams (point spread functions).
//!
//! A [`GaussianPsf`] is described by its major and minor full widths at half
//! maximum and the position angle of the major axis. Two beams combine under
//! convolution by adding their second-moment tensors; deconvolution
//! subtracts them.
//!
//! # Examples
//!
//! ```
//! use jnum::GaussianPsf;
//!
//! let mut beam = GaussianPsf::circular(3.0_f64);
//! beam.convolve_with(&GaussianPsf::circular(4.0));
//! assert!((beam.major_fwhm() - 5.0).abs() < 1e-12);
//!
//! let status = beam.deconvolve_with(&GaussianPsf::circular(4.0));
//! assert!(!status.is_clamped());
//! assert!((beam.major_fwhm() - 3.0).abs() < 1e-12);
//! ```

mod unit;


pub use unit::SizeUnit;

use alloc::format;
use alloc::string::String;

use log::debug;

use crate::math::{ieee_remainder, wrap_angle};
use crate::traits::FloatScalar;
use crate::vector::Vector2D;

/// FITS keyword prefix of telescope beams (`BMAJ`, `BMIN`, `BPA`).
pub const DEFAULT_FITS_ID: &str = "B";

/// How a beam combination was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combination {
    /// The combined beam is the exact algebraic result.
    Exact,
    /// A deconvolution had no real solution along at least one axis; that
    /// width was set to zero.
    Clamped,
}

impl Combination {
    pub fn is_clamped(self) -> bool {
        self == Combination::Clamped
    }
}

/// FWHM of a Gaussian with standard deviation `sigma`: `2·√(2 ln 2)·σ`.
pub fn sigma_to_fwhm<T: FloatScalar>(sigma: T) -> T {
    let two = T::one() + T::one();
    two * (two * two.ln()).sqrt() * sigma
}

/// Standard deviation of a Gaussian with full width at half maximum `fwhm`.
pub fn fwhm_to_sigma<T: FloatScalar>(fwhm: T) -> T {
    fwhm / sigma_to_fwhm(T::one())
}

/// Elliptical Gaussian beam.
///
/// Invariants: `major_fwhm() >= minor_fwhm()` and `position_angle()` lies
/// in `[-π/2, π/2]`. Every mutator renormalizes: when the minor width
/// exceeds the major one the axes are swapped and the angle turned by a
/// quarter turn.
///
/// Widths are stored in base units. The [`SizeUnit`] only affects display.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianPsf<T> {
    major_fwhm: T,
    minor_fwhm: T,
    position_angle: T,
    fits_id: String,
    name: Option<String>,
    unit: SizeUnit<T>,
}

// ── Constructors ─────────────────────────────────────────────────────

impl<T: FloatScalar> GaussianPsf<T> {
    /// Circular beam with the given FWHM.
    pub fn circular(fwhm: T) -> Self {
        Self::new(fwhm, fwhm, T::zero())
    }

    /// Elliptical beam. The axes are reordered if `minor > major`.
    pub fn new(major_fwhm: T, minor_fwhm: T, position_angle: T) -> Self {
        let mut psf = Self {
            major_fwhm: T::zero(),
            minor_fwhm: T::zero(),
            position_angle: T::zero(),
            fits_id: String::from(DEFAULT_FITS_ID),
            name: None,
            unit: SizeUnit::default(),
        };
        psf.set(major_fwhm, minor_fwhm, position_angle);
        psf
    }

    /// Beam from Gaussian standard deviations along its axes.
    pub fn from_sigmas(major_sigma: T, minor_sigma: T, position_angle: T) -> Self {
        Self::new(
            sigma_to_fwhm(major_sigma),
            sigma_to_fwhm(minor_sigma),
            position_angle,
        )
    }
}

// ── Accessors ────────────────────────────────────────────────────────

impl<T: FloatScalar> GaussianPsf<T> {
    /// Set both widths and the angle, then renormalize.
    pub fn set(&mut self, major_fwhm: T, minor_fwhm: T, position_angle: T) {
        let pi = T::from(core::f64::consts::PI).unwrap();
        let (major, minor, angle) = if minor_fwhm > major_fwhm {
            (minor_fwhm, major_fwhm, position_angle + pi / (T::one() + T::one()))
        } else {
            (major_fwhm, minor_fwhm, position_angle)
        };
        self.major_fwhm = major;
        self.minor_fwhm = minor;
        self.position_angle = ieee_remainder(angle, pi);
    }

    #[inline]
    pub fn major_fwhm(&self) -> T {
        self.major_fwhm
    }

    #[inline]
    pub fn minor_fwhm(&self) -> T {
        self.minor_fwhm
    }

    /// Position angle of the major axis, radians in `[-π/2, π/2]`.
    #[inline]
    pub fn position_angle(&self) -> T {
        self.position_angle
    }

    pub fn set_major_fwhm(&mut self, fwhm: T) {
        self.set(fwhm, self.minor_fwhm, self.position_angle);
    }

    pub fn set_minor_fwhm(&mut self, fwhm: T) {
        self.set(self.major_fwhm, fwhm, self.position_angle);
    }

    pub fn set_position_angle(&mut self, angle: T) {
        self.set(self.major_fwhm, self.minor_fwhm, angle);
    }

    pub fn major_sigma(&self) -> T {
        fwhm_to_sigma(self.major_fwhm)
    }

    pub fn minor_sigma(&self) -> T {
        fwhm_to_sigma(self.minor_fwhm)
    }

    /// Integral of the unit-peak beam: `π/(4 ln 2)·major·minor`.
    pub fn area(&self) -> T {
        let pi = T::from(core::f64::consts::PI).unwrap();
        let two = T::one() + T::one();
        pi / (two * two * two.ln()) * self.major_fwhm * self.minor_fwhm
    }

    /// FWHM of the circular beam with the same area.
    pub fn circular_equivalent_fwhm(&self) -> T {
        (self.major_fwhm * self.minor_fwhm).sqrt()
    }

    pub fn is_circular(&self) -> bool {
        self.major_fwhm == self.minor_fwhm
    }

    /// Multiply both widths by `factor`.
    pub fn scale(&mut self, factor: T) {
        self.set(
            self.major_fwhm * factor,
            self.minor_fwhm * factor,
            self.position_angle,
        );
    }

    /// Turn the beam by `angle` radians.
    pub fn rotate(&mut self, angle: T) {
        self.set(self.major_fwhm, self.minor_fwhm, self.position_angle + angle);
    }

    /// Full widths of the beam along the x and y axes.
    pub fn extent(&self) -> Vector2D<T> {
        let (s, c) = self.position_angle.sin_cos();
        Vector2D::new(
            (self.major_fwhm * c).hypot(self.minor_fwhm * s),
            (self.major_fwhm * s).hypot(self.minor_fwhm * c),
        )
    }

    /// Whether both widths agree within `precision` and, for non-circular
    /// beams, the angles agree within `precision` radians (modulo π).
    pub fn approx_eq(&self, psf: &Self, precision: T) -> bool {
        if (self.major_fwhm - psf.major_fwhm).abs() > precision {
            return false;
        }
        if (self.minor_fwhm - psf.minor_fwhm).abs() > precision {
            return false;
        }
        if self.is_circular() || psf.is_circular() {
            return true;
        }
        let pi = T::from(core::f64::consts::PI).unwrap();
        ieee_remainder(self.position_angle - psf.position_angle, pi).abs() <= precision
    }
}

// ── Metadata ─────────────────────────────────────────────────────────

impl<T: FloatScalar> GaussianPsf<T> {
    /// FITS keyword prefix (default `"B"`).
    pub fn fits_id(&self) -> &str {
        &self.fits_id
    }

    pub fn set_fits_id(&mut self, id: impl Into<String>) {
        self.fits_id = id.into();
    }

    /// Header keyword of the major FWHM, e.g. `BMAJ`.
    pub fn major_fwhm_key(&self) -> String {
        format!("{}MAJ", self.fits_id)
    }

    /// Header keyword of the minor FWHM, e.g. `BMIN`.
    pub fn minor_fwhm_key(&self) -> String {
        format!("{}MIN", self.fits_id)
    }

    /// Header keyword of the position angle, e.g. `BPA`.
    pub fn position_angle_key(&self) -> String {
        format!("{}PA", self.fits_id)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn unit(&self) -> &SizeUnit<T> {
        &self.unit
    }

    pub fn set_unit(&mut self, unit: SizeUnit<T>) {
        self.unit = unit;
    }
}

// ── Combination ──────────────────────────────────────────────────────

impl<T: FloatScalar> GaussianPsf<T> {
    /// Convolve (`deconvolve == false`) or deconvolve `self` with `psf`, in
    /// place.
    ///
    /// Deconvolution solves `X ⊛ psf = self` for `X`. When `psf` does not fit
    /// inside `self` along some axis that width of `X` is set to zero and
    /// [`Combination::Clamped`] is returned.
    pub fn combine_with(&mut self, psf: &Self, deconvolve: bool) -> Combination {
        let zero = T::zero();
        let one = T::one();
        let half = one / (one + one);

        let m2 = self.major_fwhm * self.major_fwhm;
        let n2 = self.minor_fwhm * self.minor_fwhm;
        let pm2 = psf.major_fwhm * psf.major_fwhm;
        let pn2 = psf.minor_fwhm * psf.minor_fwhm;

        let a = m2 - n2;
        let b = pm2 - pn2;
        let delta = wrap_angle((psf.position_angle - self.position_angle) * (one + one));
        let dir = if deconvolve { -one } else { one };
        let (sin_d, cos_d) = delta.sin_cos();

        let c = (a * a + b * b + (one + one) * dir * a * b * cos_d)
            .max(zero)
            .sqrt();
        let big_b = (m2 + n2) + dir * (pm2 + pn2);

        let mut major = (half * (big_b + c)).sqrt();
        let mut minor = (half * (big_b - c)).sqrt();

        let mut outcome = Combination::Exact;
        if deconvolve {
            if major.is_nan() {
                major = zero;
                outcome = Combination::Clamped;
            }
            if minor.is_nan() {
                minor = zero;
                outcome = Combination::Clamped;
            }
            if outcome.is_clamped() {
                debug!(
                    "deconvolution of {:?} x {:?} beam by {:?} x {:?} beam clamped",
                    self.major_fwhm, self.minor_fwhm, psf.major_fwhm, psf.minor_fwhm
                );
            }
        }

        let angle = if c == zero {
            zero
        } else {
            let beta = (dir * b * sin_d).atan2(a + dir * b * cos_d);
            self.position_angle + half * beta
        };

        self.set(major, minor, angle);
        outcome
    }

    /// Convolve with `psf` in place. Never clamps.
    pub fn convolve_with(&mut self, psf: &Self) -> Combination {
        self.combine_with(psf, false)
    }

    /// Deconvolve `psf` from `self` in place.
    pub fn deconvolve_with(&mut self, psf: &Self) -> Combination {
        self.combine_with(psf, true)
    }

    /// Set `self` to `a ⊛ b`. Metadata of `self` is kept.
    pub fn set_product(&mut self, a: &Self, b: &Self) -> Combination {
        self.set(a.major_fwhm, a.minor_fwhm, a.position_angle);
        self.convolve_with(b)
    }

    /// Set `self` to the deconvolution of `b` from `a`.
    pub fn set_ratio(&mut self, a: &Self, b: &Self) -> Combination {
        self.set(a.major_fwhm, a.minor_fwhm, a.position_angle);
        self.deconvolve_with(b)
    }

    /// `a ⊛ b`, with the metadata of `a`.
    pub fn product(a: &Self, b: &Self) -> Self {
        let mut psf = a.clone();
        psf.convolve_with(b);
        psf
    }

    /// Deconvolution of `b` from `a`, with the metadata of `a`.
    pub fn ratio(a: &Self, b: &Self) -> (Self, Combination) {
        let mut psf = a.clone();
        let outcome = psf.deconvolve_with(b);
        (psf, outcome)
    }
}

// ── Encompassing ─────────────────────────────────────────────────────

impl<T: FloatScalar> GaussianPsf<T> {
    /// Second moments of `self` in the frame of `psf`'s axes:
    /// `(along major, along minor, cross term)`, in squared FWHM.
    fn moments_in_frame_of(&self, psf: &Self) -> (T, T, T) {
        let (s, c) = (self.position_angle - psf.position_angle).sin_cos();
        let m2 = self.major_fwhm * self.major_fwhm;
        let n2 = self.minor_fwhm * self.minor_fwhm;
        (
            m2 * c * c + n2 * s * s,
            m2 * s * s + n2 * c * c,
            (m2 - n2) * s * c,
        )
    }

    /// Whether `self`, projected onto the axes of `psf`, is at least as wide
    /// as `psf` along both of them.
    pub fn is_encompassing(&self, psf: &Self) -> bool {
        let (p, q, _) = self.moments_in_frame_of(psf);
        p.sqrt() >= psf.major_fwhm && q.sqrt() >= psf.minor_fwhm
    }

    /// Grow `self` just enough to encompass `psf`. No-op when it already
    /// does.
    pub fn encompass(&mut self, psf: &Self) {
        if self.is_encompassing(psf) {
            return;
        }
        let (p, q, e) = self.moments_in_frame_of(psf);
        let p = p.max(psf.major_fwhm * psf.major_fwhm);
        let q = q.max(psf.minor_fwhm * psf.minor_fwhm);

        let one = T::one();
        let half = one / (one + one);
        let mean = half * (p + q);
        let r = (half * (p - q)).hypot(e);
        let major = (mean + r).sqrt();
        let minor = (mean - r).max(T::zero()).sqrt();
        let angle = psf.position_angle + half * (e + e).atan2(p - q);

        self.set(major, minor, angle);
    }
}

// ── Display ──────────────────────────────────────────────────────────

impl<T: FloatScalar + core::fmt::Display> core::fmt::Display for GaussianPsf<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{}: ", name)?;
        }
        let u = self.unit.value();
        if self.is_circular() {
            write!(f, "{}", self.major_fwhm / u)?;
        } else {
            write!(f, "{} x {}", self.major_fwhm / u, self.minor_fwhm / u)?;
        }
        if !self.unit.name().is_empty() {
            write!(f, " {}", self.unit.name())?;
        }
        if !self.is_circular() {
            write!(f, " @ {} deg", self.position_angle.to_degrees())?;
        }
        Ok(())
    }
}
