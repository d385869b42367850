use crate::traits::FloatScalar;

/// Real 2-D vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D<T> {
    pub x: T,
    pub y: T,
}

// ── Constructors ─────────────────────────────────────────────────────

impl<T: FloatScalar> Vector2D<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Vector of length `r` at angle `theta` (radians, from the x axis).
    #[inline]
    pub fn from_polar(r: T, theta: T) -> Self {
        let (s, c) = theta.sin_cos();
        Self::new(r * c, r * s)
    }
}

// ── Core operations ──────────────────────────────────────────────────

impl<T: FloatScalar> Vector2D<T> {
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.x * rhs.x + self.y * rhs.y
    }

    /// z component of the 3-D cross product.
    #[inline]
    pub fn cross(&self, rhs: &Self) -> T {
        self.x * rhs.y - self.y * rhs.x
    }

    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn length(&self) -> T {
        self.x.hypot(self.y)
    }

    /// Angle from the x axis in `(-π, π]`.
    #[inline]
    pub fn angle(&self) -> T {
        self.y.atan2(self.x)
    }

    /// Unit vector in the same direction, or `None` for the null vector.
    pub fn normalized(&self) -> Option<Self> {
        let len = self.length();
        if len == T::zero() {
            None
        } else {
            Some(*self / len)
        }
    }

    /// Rotate counter-clockwise by `angle` radians, in place.
    pub fn rotate(&mut self, angle: T) {
        let (s, c) = angle.sin_cos();
        *self = Self::new(c * self.x - s * self.y, s * self.x + c * self.y);
    }

    #[inline]
    pub fn rotated(&self, angle: T) -> Self {
        let mut v = *self;
        v.rotate(angle);
        v
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.x == T::zero() && self.y == T::zero()
    }

    pub fn distance_to(&self, other: &Self) -> T {
        (*self - *other).length()
    }
}

impl_vector_ops!(Vector2D { x, y });

// ── Conversions ──────────────────────────────────────────────────────

impl<T> From<[T; 2]> for Vector2D<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> From<Vector2D<T>> for [T; 2] {
    fn from(v: Vector2D<T>) -> Self {
        [v.x, v.y]
    }
}

// ── Display ──────────────────────────────────────────────────────────

impl<T: core::fmt::Display> core::fmt::Display for Vector2D<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
