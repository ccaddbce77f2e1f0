//! Infinite line and bounded segment types.
//!
//! A [`Line2D`] is unbounded and carries an orientation: its first defining
//! point is the reference origin used for line coordinates, and the forward
//! direction runs from the first defining point toward the second.
//! A [`Segment2D`] is the bounded piece between two endpoints.

use serde::{Deserialize, Serialize};

use super::Point2D;
use crate::error::{Error, Result};

/// An infinite 2D line through two distinct points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line2D {
    p1: Point2D,
    p2: Point2D,
}

impl Line2D {
    /// Create a line through two points.
    ///
    /// Fails with [`Error::DegenerateLine`] if the points coincide.
    pub fn new(p1: Point2D, p2: Point2D) -> Result<Self> {
        if p1 == p2 {
            return Err(Error::DegenerateLine);
        }
        Ok(Self { p1, p2 })
    }

    /// Create a line through `point` with the given slope (dy/dx).
    ///
    /// The second defining point is one unit further along x, so the
    /// forward direction always has positive x.
    pub fn from_point_slope(point: Point2D, slope: f64) -> Self {
        Self {
            p1: point,
            p2: Point2D::new(point.x + 1.0, point.y + slope),
        }
    }

    /// Reference (origin) point of the line.
    #[inline]
    pub fn p1(&self) -> Point2D {
        self.p1
    }

    /// Second defining point.
    #[inline]
    pub fn p2(&self) -> Point2D {
        self.p2
    }

    /// Direction vector from `p1` to `p2` (not normalized).
    #[inline]
    pub fn direction(&self) -> Point2D {
        self.p2 - self.p1
    }

    /// Unit direction vector.
    #[inline]
    pub fn unit_direction(&self) -> Point2D {
        self.direction().normalized()
    }

    /// Slope dy/dx, or `None` for vertical lines.
    pub fn slope(&self) -> Option<f64> {
        let d = self.direction();
        if d.x == 0.0 { None } else { Some(d.y / d.x) }
    }

    /// Signed coordinate of the orthogonal projection of `point`, measured
    /// from `p1` along the forward direction.
    #[inline]
    pub fn coordinate_of(&self, point: Point2D) -> f64 {
        (point - self.p1).dot(self.unit_direction())
    }

    /// Orthogonal projection of `point` onto the line.
    #[inline]
    pub fn projection(&self, point: Point2D) -> Point2D {
        let dir = self.direction();
        let t = (point - self.p1).dot(dir) / dir.length_squared();
        self.p1 + dir * t
    }

    /// Perpendicular distance from `point` to the line.
    #[inline]
    pub fn distance_to_point(&self, point: Point2D) -> f64 {
        let dir = self.direction();
        (point - self.p1).cross(dir).abs() / dir.length()
    }
}

/// A bounded line segment between two endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment2D {
    /// First endpoint
    pub p1: Point2D,
    /// Second endpoint
    pub p2: Point2D,
}

impl Segment2D {
    /// Create a segment from two endpoints.
    #[inline]
    pub fn new(p1: Point2D, p2: Point2D) -> Self {
        Self { p1, p2 }
    }

    /// Direction vector from `p1` to `p2`.
    #[inline]
    pub fn direction(&self) -> Point2D {
        self.p2 - self.p1
    }

    /// Length of the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().length()
    }

    /// Midpoint of the segment.
    #[inline]
    pub fn midpoint(&self) -> Point2D {
        Point2D::new((self.p1.x + self.p2.x) * 0.5, (self.p1.y + self.p2.y) * 0.5)
    }

    /// Check approximate equality with endpoints in the same order.
    pub fn approx_eq(&self, other: &Segment2D, epsilon: f64) -> bool {
        self.p1.approx_eq(other.p1, epsilon) && self.p2.approx_eq(other.p2, epsilon)
    }

    /// Check approximate equality regardless of endpoint order.
    pub fn approx_eq_unordered(&self, other: &Segment2D, epsilon: f64) -> bool {
        self.approx_eq(other, epsilon)
            || (self.p1.approx_eq(other.p2, epsilon) && self.p2.approx_eq(other.p1, epsilon))
    }
}

impl std::fmt::Display for Segment2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.p1, self.p2)
    }
}
