//! Real 2-D and 3-D vectors.
//!
//! Plain `Copy` value types with public components, used for beam extents
//! and geometric offsets.
//!
//! ```
//! use jnum::{Vector2D, Vector3D};
//!
//! let v = Vector2D::new(3.0_f64, 4.0);
//! assert_eq!(v.length(), 5.0);
//!
//! let x = Vector3D::new(1.0_f64, 0.0, 0.0);
//! let y = Vector3D::new(0.0, 1.0, 0.0);
//! assert_eq!(x.cross(&y), Vector3D::new(0.0, 0.0, 1.0));
//! ```

/// Component-wise arithmetic operators for a vector struct.
macro_rules! impl_vector_ops {
    ($name:ident { $($f:ident),+ }) => {
        impl<T: FloatScalar> core::ops::Add for $name<T> {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl<T: FloatScalar> core::ops::Sub for $name<T> {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl<T: FloatScalar> core::ops::Neg for $name<T> {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($f: -self.$f),+ }
            }
        }

        impl<T: FloatScalar> core::ops::Mul<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: T) -> Self {
                Self { $($f: self.$f * rhs),+ }
            }
        }

        impl<T: FloatScalar> core::ops::Div<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn div(self, rhs: T) -> Self {
                Self { $($f: self.$f / rhs),+ }
            }
        }

        impl<T: FloatScalar> core::ops::AddAssign for $name<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$f = self.$f + rhs.$f;)+
            }
        }

        impl<T: FloatScalar> core::ops::SubAssign for $name<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$f = self.$f - rhs.$f;)+
            }
        }

        impl<T: FloatScalar> core::ops::MulAssign<T> for $name<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: T) {
                $(self.$f = self.$f * rhs;)+
            }
        }
    };
}

mod vector2d;
mod vector3d;


pub use vector2d::Vector2D;
pub use vector3d::Vector3D;
