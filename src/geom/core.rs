use std::ops::{Add, Mul, Sub};

use serde::Serialize;

// ─────────────────────────────────────────────────────────────────────────────
// Point2
// ─────────────────────────────────────────────────────────────────────────────

/// A point (or offset) in the 2D drawing plane.
///
/// Generators work in a normalized unit square; callers scale into pixel or
/// physical space, so a single value type serves as both position and vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    /// The origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a Point2 from an array.
    #[must_use]
    pub const fn from_array(arr: [f64; 2]) -> Self {
        Self::new(arr[0], arr[1])
    }

    #[must_use]
    pub const fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    #[must_use]
    pub const fn add_point(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }

    #[must_use]
    pub const fn sub_point(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }

    #[must_use]
    pub const fn mul_scalar(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s)
    }

    /// Component-wise scaling about the origin.
    #[must_use]
    pub const fn scale(self, sx: f64, sy: f64) -> Self {
        Self::new(self.x * sx, self.y * sy)
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Linear interpolation between two points.
    /// Returns `self * (1 - t) + rhs * t`.
    #[must_use]
    pub fn lerp(self, rhs: Self, t: f64) -> Self {
        Self::new(
            self.x + (rhs.x - self.x) * t,
            self.y + (rhs.y - self.y) * t,
        )
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        self.sub_point(other).length()
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Default for Point2 {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl From<[f64; 2]> for Point2 {
    fn from(arr: [f64; 2]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Point2> for [f64; 2] {
    fn from(p: Point2) -> Self {
        p.to_array()
    }
}

impl Add for Point2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        self.add_point(rhs)
    }
}

impl Sub for Point2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_point(rhs)
    }
}

impl Mul<f64> for Point2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        self.mul_scalar(rhs)
    }
}

/// Evaluates the cubic power-basis product `[1, t, t², t³] · M · P`.
///
/// `basis` is indexed `[power][control point]`, so each row holds the weights
/// that the corresponding power of `t` applies to the four control points.
#[must_use]
pub(crate) fn cubic_basis_point(basis: &[[f64; 4]; 4], points: &[Point2; 4], t: f64) -> Point2 {
    let powers = [1.0, t, t * t, t * t * t];
    let mut result = Point2::ORIGIN;
    for (column, point) in points.iter().enumerate() {
        let weight: f64 = powers
            .iter()
            .zip(basis.iter())
            .map(|(power, row)| power * row[column])
            .sum();
        result = result.add_point(point.mul_scalar(weight));
    }
    result
}

// ─────────────────────────────────────────────────────────────────────────────
// Tolerance
// ─────────────────────────────────────────────────────────────────────────────

/// Tolerance configuration for numeric comparisons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub eps: f64,
}

impl Tolerance {
    /// Default geometric tolerance (1e-9).
    pub const DEFAULT: Self = Self { eps: 1e-9 };

    #[must_use]
    pub const fn new(eps: f64) -> Self {
        Self { eps }
    }

    #[must_use]
    pub fn approx_eq_f64(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.eps
    }

    #[must_use]
    pub fn approx_eq_point2(self, a: Point2, b: Point2) -> bool {
        a.distance_to(b) <= self.eps
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::{Point2, Tolerance, cubic_basis_point};

    #[test]
    fn point_arithmetic() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(3.0, -1.0);
        assert_eq!(a + b, Point2::new(4.0, 1.0));
        assert_eq!(b - a, Point2::new(2.0, -3.0));
        assert_eq!(a * 2.0, Point2::new(2.0, 4.0));
        assert_eq!(a.scale(2.0, 3.0), Point2::new(2.0, 6.0));
        assert_eq!(Point2::new(0.0, 0.0).distance_to(Point2::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn identity_basis_selects_control_points() {
        let identity = [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0],
        ];
        let points = [
            Point2::new(7.0, 8.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(3.0, 3.0),
        ];
        assert_eq!(cubic_basis_point(&identity, &points, 0.3), Point2::new(7.0, 8.0));
    }

    #[test]
    fn tolerance_compares_points() {
        let tol = Tolerance::new(1e-6);
        assert!(tol.approx_eq_point2(Point2::new(1.0, 1.0), Point2::new(1.0, 1.0 + 1e-7)));
        assert!(!tol.approx_eq_point2(Point2::new(1.0, 1.0), Point2::new(1.0, 1.1)));
    }
}
