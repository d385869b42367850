use alloc::string::String;

use crate::traits::FloatScalar;

/// Named size unit: `value` is the size of one unit in base units.
///
/// ```
/// use jnum::psf::SizeUnit;
///
/// let arcsec = SizeUnit::new("arcsec", 1.0_f64 / 3600.0);
/// assert_eq!(arcsec.name(), "arcsec");
/// assert_eq!(SizeUnit::<f64>::default().value(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SizeUnit<T> {
    name: String,
    value: T,
}

impl<T: FloatScalar> SizeUnit<T> {
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> T {
        self.value
    }
}

impl<T: FloatScalar> Default for SizeUnit<T> {
    /// The unnamed unit of value 1.
    fn default() -> Self {
        Self {
            name: String::new(),
            value: T::one(),
        }
    }
}
