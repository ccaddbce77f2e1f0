//! Point type for scan coordinates.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Scan point in sensor coordinates (f64).
///
/// Equality is exact and value-based. `PartialOrd` orders lexicographically
/// by x, then y.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point2D {
    /// Create a new point
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Zero point (origin)
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: Point2D) -> f64 {
        (*self - other).length()
    }

    /// Length (magnitude) of this point as a vector from origin
    #[inline]
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Squared length (avoids sqrt)
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Normalize to unit length. Zero vectors are returned unchanged.
    #[inline]
    pub fn normalized(&self) -> Point2D {
        let len = self.length();
        if len > 0.0 {
            Point2D::new(self.x / len, self.y / len)
        } else {
            *self
        }
    }

    /// Dot product with another point (as vectors)
    #[inline]
    pub fn dot(&self, other: Point2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Cross product (z-component of 3D cross product)
    #[inline]
    pub fn cross(&self, other: Point2D) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Rotate this point around `origin` by angle (radians, CCW)
    #[inline]
    pub fn rotate_about(&self, angle: f64, origin: Point2D) -> Point2D {
        let (sin_a, cos_a) = angle.sin_cos();
        let d = *self - origin;
        Point2D::new(
            origin.x + d.x * cos_a - d.y * sin_a,
            origin.y + d.x * sin_a + d.y * cos_a,
        )
    }

    /// Check if two points are within `epsilon` in both coordinates
    #[inline]
    pub fn approx_eq(&self, other: Point2D, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl Add for Point2D {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point2D {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point2D::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Point2D {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Point2D::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Point2D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Point2D::new(-self.x, -self.y)
    }
}

impl std::fmt::Display for Point2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_distance() {
        let a = Point2D::ZERO;
        let b = Point2D::new(3.0, 4.0);
        assert_relative_eq!(a.distance(b), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_about() {
        let p = Point2D::new(2.0, 1.0);
        let rotated = p.rotate_about(FRAC_PI_2, Point2D::new(1.0, 1.0));
        assert_relative_eq!(rotated.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(rotated.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let mut points = vec![
            Point2D::new(5.0, 5.0),
            Point2D::new(0.0, 0.0),
            Point2D::new(5.0, 0.0),
            Point2D::new(4.0, 100.0),
        ];
        points.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(
            points,
            vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(4.0, 100.0),
                Point2D::new(5.0, 0.0),
                Point2D::new(5.0, 5.0),
            ]
        );
    }

    #[test]
    fn test_normalized_zero() {
        assert_eq!(Point2D::ZERO.normalized(), Point2D::ZERO);
        let unit = Point2D::new(0.0, -3.0).normalized();
        assert_relative_eq!(unit.y, -1.0, epsilon = 1e-12);
    }
}
