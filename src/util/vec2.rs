use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// 2D vector for physics calculations
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn magnitude_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Returns angle in radians, in (-PI, PI]
    #[inline]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Returns angle in degrees
    #[inline]
    pub fn degrees(&self) -> f64 {
        self.angle().to_degrees()
    }

    /// Returns the unit vector pointing in this vector's direction.
    ///
    /// Precondition: non-zero magnitude. A zero vector divides by zero and
    /// yields NaN components; callers must rule that input out upstream.
    pub fn unit(&self) -> Self {
        *self / self.magnitude()
    }

    /// Returns the unit vector perpendicular to this one, rotated clockwise.
    ///
    /// Same precondition as [`Vec2::unit`].
    pub fn normal(&self) -> Self {
        Vec2::new(self.y, -self.x).unit()
    }

    #[inline]
    pub fn dot(&self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Scalar projection of this vector onto `target`
    pub fn scalar_project(&self, target: Vec2) -> f64 {
        self.dot(target.unit())
    }

    /// Vector projection of this vector onto `target`
    pub fn vector_project(&self, target: Vec2) -> Vec2 {
        target.unit() * self.scalar_project(target)
    }

    /// Check if vector is approximately equal to another
    pub fn approx_eq(&self, other: Vec2, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        self * (1.0 / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        self * -1.0
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}
