use super::core::{Point2, cubic_basis_point};
use super::curve::{Curve2, CurveError, ensure_finite, sample_uniform};

/// Tension of the standard uniform Catmull-Rom spline.
pub const DEFAULT_TENSION: f64 = 0.5;

/// Cardinal spline through a list of points.
///
/// The stored list is the caller's points plus two synthetic end points,
/// mirrored through the first and last point (`p₀' = 2·p₀ − p₁`), so that the
/// true ends get a tangent without a real neighbour. Segment `i` runs from
/// stored point `i + 1` to `i + 2`.
#[derive(Debug, Clone, PartialEq)]
pub struct CatmullRomCurve {
    points: Vec<Point2>,
    tension: f64,
}

impl CatmullRomCurve {
    pub fn new(points: &[Point2]) -> Result<Self, CurveError> {
        if points.len() < 2 {
            return Err(CurveError::NotEnoughPoints {
                min: 2,
                found: points.len(),
            });
        }
        ensure_finite(points)?;

        let first = points[0];
        let second = points[1];
        let last = points[points.len() - 1];
        let before_last = points[points.len() - 2];

        let mut extended = Vec::with_capacity(points.len() + 2);
        extended.push(first.mul_scalar(2.0).sub_point(second));
        extended.extend_from_slice(points);
        extended.push(last.mul_scalar(2.0).sub_point(before_last));

        Ok(Self {
            points: extended,
            tension: DEFAULT_TENSION,
        })
    }

    #[must_use]
    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = tension;
        self
    }

    #[must_use]
    pub fn tension(&self) -> f64 {
        self.tension
    }

    /// All stored points, including the two synthetic end points.
    #[must_use]
    pub fn control_points(&self) -> &[Point2] {
        &self.points
    }

    /// The points the curve passes through.
    #[must_use]
    pub fn interpolated_points(&self) -> &[Point2] {
        &self.points[1..self.points.len() - 1]
    }

    #[must_use]
    pub fn spline_count(&self) -> usize {
        self.points.len() - 3
    }

    /// Evaluates the curve at `u ∈ [0, spline_count()]`.
    pub fn sample(&self, u: f64) -> Result<Point2, CurveError> {
        let count = self.spline_count();
        let max = count as f64;
        if u.is_nan() || u < 0.0 || u > max {
            return Err(CurveError::ParameterOutOfRange { parameter: u, max });
        }

        let index = (u.floor() as usize).min(count - 1);
        let t = u - index as f64;
        let local = [
            self.points[index],
            self.points[index + 1],
            self.points[index + 2],
            self.points[index + 3],
        ];
        Ok(cubic_basis_point(&cardinal_basis(self.tension), &local, t))
    }

    /// `count` points at uniform parameter spacing over the full range.
    #[must_use]
    pub fn regular_sample(&self, count: usize) -> Vec<Point2> {
        sample_uniform(self, count)
    }
}

impl Curve2 for CatmullRomCurve {
    fn point_at(&self, u: f64) -> Point2 {
        let (u0, u1) = self.domain();
        let clamped = if u.is_nan() { u0 } else { u.clamp(u0, u1) };
        // In range after clamping; the fallback is only reachable for an empty domain.
        self.sample(clamped).unwrap_or(self.points[1])
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, self.spline_count() as f64)
    }
}

/// Cardinal spline basis in power form for tension `s`.
#[must_use]
pub fn cardinal_basis(s: f64) -> [[f64; 4]; 4] {
    [
        [0.0, 1.0, 0.0, 0.0],
        [-s, 0.0, s, 0.0],
        [2.0 * s, s - 3.0, 3.0 - 2.0 * s, -s],
        [-s, 2.0 - s, s - 2.0, s],
    ]
}

#[cfg(test)]
mod tests {
    use super::cardinal_basis;

    #[test]
    fn basis_rows_sum_to_interpolation_constraints() {
        let basis = cardinal_basis(0.5);
        let at_one: Vec<f64> = (0..4)
            .map(|column| basis.iter().map(|row| row[column]).sum())
            .collect();
        assert_eq!(at_one, vec![0.0, 0.0, 1.0, 0.0]);
        assert_eq!(basis[0], [0.0, 1.0, 0.0, 0.0]);
    }
}
