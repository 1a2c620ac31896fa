use super::core::{Point2, cubic_basis_point};
use super::curve::{Curve2, CurveError, ensure_finite, sample_uniform};

/// Number of uniform parameter samples in a spline's distance table.
pub const DEFAULT_TABLE_SAMPLES: usize = 1000;

/// Cubic Bézier basis in power form: row `k` holds the weights of `t^k`.
pub const BEZIER_BASIS: [[f64; 4]; 4] = [
    [1.0, 0.0, 0.0, 0.0],
    [-3.0, 3.0, 0.0, 0.0],
    [3.0, -6.0, 3.0, 0.0],
    [-1.0, 3.0, -3.0, 1.0],
];

// ─────────────────────────────────────────────────────────────────────────────
// DistanceTable
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceEntry {
    pub parameter: f64,
    pub distance: f64,
}

/// Cumulative chord length at uniformly spaced parameters in `[0, 1]`.
///
/// Distances are partial sums of non-negative chord lengths, so the table is
/// monotonically non-decreasing in both columns.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable {
    entries: Vec<DistanceEntry>,
}

impl DistanceTable {
    /// Builds a table with `samples` entries (at least two: both ends of the domain).
    #[must_use]
    pub fn build<F>(samples: usize, point_at: F) -> Self
    where
        F: Fn(f64) -> Point2,
    {
        let samples = samples.max(2);
        let mut entries = Vec::with_capacity(samples);
        let mut previous = point_at(0.0);
        let mut total = 0.0;
        entries.push(DistanceEntry {
            parameter: 0.0,
            distance: 0.0,
        });

        for i in 1..samples {
            let parameter = if i + 1 == samples {
                1.0
            } else {
                i as f64 / (samples - 1) as f64
            };
            let point = point_at(parameter);
            total += point.distance_to(previous);
            entries.push(DistanceEntry {
                parameter,
                distance: total,
            });
            previous = point;
        }

        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[DistanceEntry] {
        &self.entries
    }

    /// Distance stored in the last entry.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.entries.last().map_or(0.0, |entry| entry.distance)
    }

    /// Maps an arc-length distance to a parameter by linear interpolation
    /// inside the bracketing pair of entries.
    ///
    /// Distances outside `[0, total_length()]` are clamped to the domain ends.
    #[must_use]
    pub fn parameter_at(&self, distance: f64) -> f64 {
        let Some(last) = self.entries.last() else {
            return 0.0;
        };
        let target = if distance.is_nan() {
            0.0
        } else {
            distance.clamp(0.0, last.distance)
        };

        let upper = self
            .entries
            .partition_point(|entry| entry.distance < target)
            .min(self.entries.len() - 1);
        if upper == 0 {
            return self.entries[0].parameter;
        }

        let lo = self.entries[upper - 1];
        let hi = self.entries[upper];
        let span = hi.distance - lo.distance;
        if span <= 0.0 {
            return hi.parameter;
        }
        lo.parameter + (target - lo.distance) / span * (hi.parameter - lo.parameter)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// CubicBezierSpline
// ─────────────────────────────────────────────────────────────────────────────

/// A single cubic Bézier segment with a precomputed distance table.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicBezierSpline {
    points: [Point2; 4],
    table: DistanceTable,
}

impl CubicBezierSpline {
    #[must_use]
    pub fn new(points: [Point2; 4]) -> Self {
        Self::with_table_samples(points, DEFAULT_TABLE_SAMPLES)
    }

    #[must_use]
    pub fn with_table_samples(points: [Point2; 4], samples: usize) -> Self {
        let table = DistanceTable::build(samples, |t| cubic_basis_point(&BEZIER_BASIS, &points, t));
        Self { points, table }
    }

    /// Builds a spline from exactly four finite control points.
    pub fn from_slice(points: &[Point2]) -> Result<Self, CurveError> {
        let points: [Point2; 4] = points
            .try_into()
            .map_err(|_| CurveError::NotEnoughPoints {
                min: 4,
                found: points.len(),
            })?;
        ensure_finite(&points)?;
        Ok(Self::new(points))
    }

    #[must_use]
    pub const fn control_points(&self) -> &[Point2; 4] {
        &self.points
    }

    #[must_use]
    pub const fn distance_table(&self) -> &DistanceTable {
        &self.table
    }

    /// Evaluates `[1, t, t², t³] · M · P`. Valid for `t ∈ [0, 1]`; values
    /// outside extrapolate the cubic.
    #[must_use]
    pub fn sample(&self, t: f64) -> Point2 {
        cubic_basis_point(&BEZIER_BASIS, &self.points, t)
    }

    #[must_use]
    pub fn approx_length(&self) -> f64 {
        self.table.total_length()
    }

    /// Parameter at which the travelled distance equals `distance`, clamped to `[0, 1]`.
    #[must_use]
    pub fn distance_to_parameter(&self, distance: f64) -> f64 {
        self.table.parameter_at(distance)
    }

    /// `count` points at equal arc-length spacing, both ends included.
    #[must_use]
    pub fn regular_distance_sample(&self, count: usize) -> Vec<Point2> {
        arc_length_steps(self.approx_length(), count)
            .map(|distance| self.sample(self.distance_to_parameter(distance)))
            .collect()
    }

    /// `count` points at uniform parameter spacing, both ends included.
    #[must_use]
    pub fn regular_sample(&self, count: usize) -> Vec<Point2> {
        sample_uniform(self, count)
    }
}

impl Curve2 for CubicBezierSpline {
    fn point_at(&self, u: f64) -> Point2 {
        self.sample(u)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// CubicBezierCurve
// ─────────────────────────────────────────────────────────────────────────────

/// A chain of cubic splines sharing end points, addressed by one global
/// parameter `u ∈ [0, spline_count]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicBezierCurve {
    splines: Vec<CubicBezierSpline>,
    cumulative_lengths: Vec<f64>,
}

impl CubicBezierCurve {
    /// Strides through `points` three at a time: spline `i` uses points
    /// `3i..=3i+3`, so consecutive splines share an end point.
    pub fn from_points(points: &[Point2]) -> Result<Self, CurveError> {
        Self::with_table_samples(points, DEFAULT_TABLE_SAMPLES)
    }

    pub fn with_table_samples(points: &[Point2], samples: usize) -> Result<Self, CurveError> {
        if points.len() < 4 {
            return Err(CurveError::NotEnoughPoints {
                min: 4,
                found: points.len(),
            });
        }
        if (points.len() - 1) % 3 != 0 {
            return Err(CurveError::MisalignedPoints {
                count: points.len(),
            });
        }
        ensure_finite(points)?;

        let splines: Vec<CubicBezierSpline> = (0..points.len() - 1)
            .step_by(3)
            .map(|start| {
                CubicBezierSpline::with_table_samples(
                    [
                        points[start],
                        points[start + 1],
                        points[start + 2],
                        points[start + 3],
                    ],
                    samples,
                )
            })
            .collect();

        let cumulative_lengths = splines
            .iter()
            .scan(0.0, |total, spline| {
                *total += spline.approx_length();
                Some(*total)
            })
            .collect();

        Ok(Self {
            splines,
            cumulative_lengths,
        })
    }

    #[must_use]
    pub fn splines(&self) -> &[CubicBezierSpline] {
        &self.splines
    }

    #[must_use]
    pub fn spline_count(&self) -> usize {
        self.splines.len()
    }

    /// Running totals of spline lengths; entry `i` covers splines `0..=i`.
    #[must_use]
    pub fn cumulative_lengths(&self) -> &[f64] {
        &self.cumulative_lengths
    }

    #[must_use]
    pub fn approx_length(&self) -> f64 {
        self.cumulative_lengths.last().copied().unwrap_or(0.0)
    }

    /// Evaluates the curve at global parameter `u`: spline `floor(u)` at local
    /// parameter `frac(u)`. `u == spline_count()` yields the final end point.
    #[must_use]
    pub fn sample(&self, u: f64) -> Point2 {
        let (index, local) = self.locate(u);
        self.splines[index].sample(local)
    }

    /// Global parameter at which the travelled distance equals `distance`.
    ///
    /// Returns `spline_index + local_parameter`; distances are clamped to
    /// `[0, approx_length()]`.
    #[must_use]
    pub fn distance_to_global_parameter(&self, distance: f64) -> f64 {
        let total = self.approx_length();
        let target = if distance.is_nan() {
            0.0
        } else {
            distance.clamp(0.0, total)
        };

        let index = self
            .cumulative_lengths
            .partition_point(|&length| length < target)
            .min(self.splines.len() - 1);
        let preceding = if index == 0 {
            0.0
        } else {
            self.cumulative_lengths[index - 1]
        };

        index as f64 + self.splines[index].distance_to_parameter(target - preceding)
    }

    /// `count` points at equal arc-length spacing along the whole curve.
    #[must_use]
    pub fn regular_distance_sample(&self, count: usize) -> Vec<Point2> {
        arc_length_steps(self.approx_length(), count)
            .map(|distance| self.sample(self.distance_to_global_parameter(distance)))
            .collect()
    }

    /// `count` points at uniform global-parameter spacing.
    #[must_use]
    pub fn regular_sample(&self, count: usize) -> Vec<Point2> {
        sample_uniform(self, count)
    }

    fn locate(&self, u: f64) -> (usize, f64) {
        let last = self.splines.len() - 1;
        if u.is_nan() {
            return (0, 0.0);
        }
        if u <= 0.0 {
            return (0, u);
        }
        let index = (u.floor() as usize).min(last);
        (index, u - index as f64)
    }
}

impl Curve2 for CubicBezierCurve {
    fn point_at(&self, u: f64) -> Point2 {
        self.sample(u)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, self.splines.len() as f64)
    }
}

fn arc_length_steps(total: f64, count: usize) -> impl Iterator<Item = f64> {
    (0..count).map(move |i| {
        if count < 2 {
            0.0
        } else if i + 1 == count {
            total
        } else {
            total * (i as f64 / (count - 1) as f64)
        }
    })
}
