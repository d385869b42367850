use crate::traits::FloatScalar;

use super::Vector2D;

/// Real 3-D vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3D<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: FloatScalar> Vector3D<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Unit vector from spherical angles: `lon` around z from the x axis,
    /// `lat` above the xy plane.
    pub fn from_spherical(lon: T, lat: T) -> Self {
        let (slon, clon) = lon.sin_cos();
        let (slat, clat) = lat.sin_cos();
        Self::new(clat * clon, clat * slon, slat)
    }

    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    pub fn normalized(&self) -> Option<Self> {
        let len = self.length();
        if len == T::zero() {
            None
        } else {
            Some(*self / len)
        }
    }

    /// Angle between `self` and `other` in `[0, π]`.
    ///
    /// Uses `atan2(|a × b|, a · b)`, accurate for nearly parallel vectors.
    pub fn angle_to(&self, other: &Self) -> T {
        self.cross(other).length().atan2(self.dot(other))
    }

    /// Longitude of the direction, in `(-π, π]`.
    #[inline]
    pub fn longitude(&self) -> T {
        self.y.atan2(self.x)
    }

    /// Latitude of the direction, in `[-π/2, π/2]`.
    #[inline]
    pub fn latitude(&self) -> T {
        self.z.atan2(self.x.hypot(self.y))
    }

    /// Projection onto the xy plane.
    #[inline]
    pub fn xy(&self) -> Vector2D<T> {
        Vector2D::new(self.x, self.y)
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.x == T::zero() && self.y == T::zero() && self.z == T::zero()
    }
}

impl_vector_ops!(Vector3D { x, y, z });

impl<T> From<[T; 3]> for Vector3D<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}

impl<T> From<Vector3D<T>> for [T; 3] {
    fn from(v: Vector3D<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl<T: core::fmt::Display> core::fmt::Display for Vector3D<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
