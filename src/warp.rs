//! Scalar shaping functions and the warps built from them.
//!
//! A [`WarpFunction`] turns a [`ScalarFunction`] into a sampler that returns
//! `n` normalised positions in `[0, 1]`, used as grid-line coordinates along
//! one axis.

use std::fmt;
use std::sync::Arc;

use meval::{Context, ContextProvider, Expr};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Point2;

/// Largest `|f(0)|` a position warp accepts as passing through the origin.
pub const ORIGIN_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FunctionError {
    #[error("invalid expression `{expression}`: {reason}")]
    InvalidExpression { expression: String, reason: String },
    #[error("piecewise linear function needs at least one point")]
    NoPoints,
    #[error("piecewise linear function points must be finite")]
    NonFinitePoint,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WarpError {
    #[error("position warp must satisfy f(0) = 0, got f(0) = {value}")]
    NonZeroOrigin { value: f64 },
    #[error("warp cannot be normalised: final value is zero")]
    DegenerateNormalization,
    #[error("warp function produced a non-finite value at sample {index}")]
    NonFinite { index: usize },
    #[error("warp sampling needs at least 2 samples, got {count}")]
    TooFewSamples { count: usize },
}

// ─────────────────────────────────────────────────────────────────────────────
// ScalarFunction
// ─────────────────────────────────────────────────────────────────────────────

/// User-supplied closure with a display name.
#[derive(Clone)]
pub struct CustomFunction {
    name: String,
    function: Arc<dyn Fn(f64) -> f64 + Send + Sync>,
}

impl CustomFunction {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for CustomFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomFunction")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A function `ℝ → ℝ`, the value carried on `Function` ports.
#[derive(Debug, Clone)]
pub enum ScalarFunction {
    Identity,
    /// `a + b·x + c·x² + d·x³`.
    Polynomial { coefficients: [f64; 4] },
    /// Linear interpolation through points sorted by `x`; constant outside.
    PiecewiseLinear { points: Vec<Point2> },
    Expression { source: String, expr: Expr },
    /// Deterministic value in `[min, max]` derived from `seed` and the bits of `x`.
    Random { seed: u64, min: f64, max: f64 },
    Custom(CustomFunction),
}

impl ScalarFunction {
    #[must_use]
    pub const fn polynomial(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self::Polynomial {
            coefficients: [a, b, c, d],
        }
    }

    pub fn piecewise_linear(mut points: Vec<Point2>) -> Result<Self, FunctionError> {
        if points.is_empty() {
            return Err(FunctionError::NoPoints);
        }
        if !points.iter().all(|point| point.is_finite()) {
            return Err(FunctionError::NonFinitePoint);
        }
        points.sort_by(|a, b| a.x.total_cmp(&b.x));
        Ok(Self::PiecewiseLinear { points })
    }

    /// Parses an expression in the single variable `x`.
    ///
    /// Unknown variables and functions are reported here rather than on
    /// every evaluation.
    pub fn expression(source: &str) -> Result<Self, FunctionError> {
        let invalid = |reason: String| FunctionError::InvalidExpression {
            expression: source.to_owned(),
            reason,
        };
        let expr: Expr = source.parse().map_err(|error| invalid(format!("{error}")))?;
        expr.eval_with_context((&VariableX(0.5), &Context::new()))
            .map_err(|error| invalid(format!("{error}")))?;
        Ok(Self::Expression {
            source: source.to_owned(),
            expr,
        })
    }

    #[must_use]
    pub const fn random(seed: u64, min: f64, max: f64) -> Self {
        Self::Random { seed, min, max }
    }

    pub fn custom<F>(name: impl Into<String>, function: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::Custom(CustomFunction {
            name: name.into(),
            function: Arc::new(function),
        })
    }

    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Self::Identity => x,
            Self::Polynomial { coefficients: [a, b, c, d] } => a + x * (b + x * (c + x * d)),
            Self::PiecewiseLinear { points } => piecewise_linear_at(points, x),
            Self::Expression { expr, .. } => expr
                .eval_with_context((&VariableX(x), &Context::new()))
                .unwrap_or(f64::NAN),
            Self::Random { seed, min, max } => {
                let mut rng = StdRng::seed_from_u64(seed ^ x.to_bits());
                let unit: f64 = rng.random();
                min + unit * (max - min)
            }
            Self::Custom(custom) => (custom.function)(x),
        }
    }

    /// Short label used in log output and previews.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Identity => "x".to_owned(),
            Self::Polynomial { coefficients: [a, b, c, d] } => {
                format!("{a} + {b}x + {c}x^2 + {d}x^3")
            }
            Self::PiecewiseLinear { points } => format!("piecewise linear ({} points)", points.len()),
            Self::Expression { source, .. } => source.clone(),
            Self::Random { seed, min, max } => format!("random[{min}, {max}] seed {seed}"),
            Self::Custom(custom) => custom.name.clone(),
        }
    }
}

struct VariableX(f64);

impl ContextProvider for VariableX {
    fn get_var(&self, name: &str) -> Option<f64> {
        (name == "x").then_some(self.0)
    }
}

fn piecewise_linear_at(points: &[Point2], x: f64) -> f64 {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return 0.0;
    };
    if x <= first.x {
        return first.y;
    }
    if x >= last.x {
        return last.y;
    }
    let upper = points.partition_point(|point| point.x <= x);
    let lo = points[upper - 1];
    let hi = points[upper];
    let span = hi.x - lo.x;
    if span <= 0.0 {
        return hi.y;
    }
    lo.lerp(hi, (x - lo.x) / span).y
}

// ─────────────────────────────────────────────────────────────────────────────
// WarpFunction
// ─────────────────────────────────────────────────────────────────────────────

/// A normalised position map over `[0, 1]`.
#[derive(Debug, Clone)]
pub enum WarpFunction {
    /// `f` read as a position: sample `i` is `f(uᵢ) / f(1)`.
    Position(ScalarFunction),
    /// `f` read as a step: sample `i` is the running sum of `f(u₁..uᵢ)`,
    /// normalised by the total.
    Relative(ScalarFunction),
}

impl WarpFunction {
    /// Fails with [`WarpError::NonZeroOrigin`] unless `f(0) = 0`.
    pub fn position(function: ScalarFunction) -> Result<Self, WarpError> {
        let value = function.eval(0.0);
        if value.is_nan() || value.abs() > ORIGIN_TOLERANCE {
            return Err(WarpError::NonZeroOrigin { value });
        }
        Ok(Self::Position(function))
    }

    #[must_use]
    pub const fn relative(function: ScalarFunction) -> Self {
        Self::Relative(function)
    }

    /// The identity position warp, evenly spaced samples.
    #[must_use]
    pub const fn identity() -> Self {
        Self::Position(ScalarFunction::Identity)
    }

    #[must_use]
    pub const fn function(&self) -> &ScalarFunction {
        match self {
            Self::Position(function) | Self::Relative(function) => function,
        }
    }

    /// Returns `count` values, the first `0` and the last exactly `1`.
    pub fn sample(&self, count: usize) -> Result<Vec<f64>, WarpError> {
        if count < 2 {
            return Err(WarpError::TooFewSamples { count });
        }
        log::trace!("warp sample count={count} function={}", self.function().label());

        let raw: Vec<f64> = match self {
            Self::Position(function) => uniform_parameters(count)
                .enumerate()
                .map(|(i, u)| if i == 0 { 0.0 } else { function.eval(u) })
                .collect(),
            Self::Relative(function) => {
                let mut total = 0.0;
                uniform_parameters(count)
                    .enumerate()
                    .map(|(i, u)| {
                        if i > 0 {
                            total += function.eval(u);
                        }
                        total
                    })
                    .collect()
            }
        };
        normalize(raw)
    }
}

/// `count` parameters evenly spaced over `[0, 1]`, the last exactly `1`.
pub fn uniform_parameters(count: usize) -> impl Iterator<Item = f64> {
    (0..count).map(move |i| {
        if count < 2 {
            0.0
        } else if i + 1 == count {
            1.0
        } else {
            i as f64 / (count - 1) as f64
        }
    })
}

fn normalize(mut values: Vec<f64>) -> Result<Vec<f64>, WarpError> {
    if let Some(index) = values.iter().position(|value| !value.is_finite()) {
        return Err(WarpError::NonFinite { index });
    }
    let last = values.last().copied().unwrap_or(0.0);
    if last == 0.0 {
        return Err(WarpError::DegenerateNormalization);
    }
    for value in &mut values {
        *value /= last;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::{FunctionError, ScalarFunction, WarpError, WarpFunction, uniform_parameters};
    use crate::geom::Point2;

    #[test]
    fn position_warp_spans_unit_interval() {
        let warp = WarpFunction::position(ScalarFunction::polynomial(0.0, 1.0, 3.0, 0.0)).unwrap();
        for n in 2..12 {
            let samples = warp.sample(n).unwrap();
            assert_eq!(samples.len(), n);
            assert_eq!(samples[0], 0.0);
            assert_eq!(samples[n - 1], 1.0);
        }
    }

    #[test]
    fn position_warp_rejects_offset_function() {
        let err = WarpFunction::position(ScalarFunction::polynomial(1.0, 1.0, 0.0, 0.0)).unwrap_err();
        assert_eq!(err, WarpError::NonZeroOrigin { value: 1.0 });
    }

    #[test]
    fn position_warp_with_zero_end_is_degenerate() {
        // x - x^2 vanishes at both ends.
        let warp = WarpFunction::position(ScalarFunction::polynomial(0.0, 1.0, -1.0, 0.0)).unwrap();
        assert_eq!(warp.sample(5), Err(WarpError::DegenerateNormalization));
    }

    #[test]
    fn relative_warp_of_constant_is_even() {
        let warp = WarpFunction::relative(ScalarFunction::polynomial(2.0, 0.0, 0.0, 0.0));
        let samples = warp.sample(5).unwrap();
        let expected = [0.0, 0.25, 0.5, 0.75, 1.0];
        for (value, expected) in samples.iter().zip(expected) {
            assert!((value - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn relative_warp_accumulates_steps() {
        let warp = WarpFunction::relative(ScalarFunction::Identity);
        // Steps 0.5 and 1.0 give cumulative 0, 0.5, 1.5.
        let samples = warp.sample(3).unwrap();
        assert_eq!(samples[0], 0.0);
        assert!((samples[1] - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(samples[2], 1.0);
    }

    #[test]
    fn relative_warp_of_zero_is_degenerate() {
        let warp = WarpFunction::relative(ScalarFunction::polynomial(0.0, 0.0, 0.0, 0.0));
        assert_eq!(warp.sample(4), Err(WarpError::DegenerateNormalization));
    }

    #[test]
    fn sampling_needs_two_points() {
        let warp = WarpFunction::identity();
        assert_eq!(warp.sample(1), Err(WarpError::TooFewSamples { count: 1 }));
        assert_eq!(warp.sample(2).unwrap(), vec![0.0, 1.0]);
    }

    #[test]
    fn non_finite_values_are_reported() {
        let warp = WarpFunction::position(ScalarFunction::expression("ln(1 - x) * x").unwrap()).unwrap();
        assert_eq!(warp.sample(3), Err(WarpError::NonFinite { index: 2 }));
    }

    #[test]
    fn expression_is_validated_on_construction() {
        assert!(matches!(
            ScalarFunction::expression("x + y"),
            Err(FunctionError::InvalidExpression { .. })
        ));
        assert!(ScalarFunction::expression("x +").is_err());
        let square = ScalarFunction::expression("x^2").unwrap();
        assert_eq!(square.eval(3.0), 9.0);
    }

    #[test]
    fn piecewise_linear_sorts_and_clamps() {
        let f = ScalarFunction::piecewise_linear(vec![
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 0.0),
            Point2::new(0.5, 0.5),
        ])
        .unwrap();
        assert_eq!(f.eval(-1.0), 0.0);
        assert_eq!(f.eval(0.25), 0.25);
        assert_eq!(f.eval(0.75), 1.25);
        assert_eq!(f.eval(4.0), 2.0);
        assert_eq!(
            ScalarFunction::piecewise_linear(Vec::new()).unwrap_err(),
            FunctionError::NoPoints
        );
    }

    #[test]
    fn random_is_deterministic_and_bounded() {
        let f = ScalarFunction::random(7, 1.0, 3.0);
        let g = ScalarFunction::random(7, 1.0, 3.0);
        for u in uniform_parameters(20) {
            let value = f.eval(u);
            assert_eq!(value, g.eval(u));
            assert!((1.0..=3.0).contains(&value));
        }
        assert_ne!(f.eval(0.5), ScalarFunction::random(8, 1.0, 3.0).eval(0.5));
    }

    #[test]
    fn custom_function_is_called() {
        let f = ScalarFunction::custom("double", |x| 2.0 * x);
        assert_eq!(f.eval(1.5), 3.0);
        assert_eq!(f.label(), "double");
    }

    #[test]
    fn relative_warp_evaluates_its_function_on_every_sample_call() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let step = ScalarFunction::custom("counted", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            1.0
        });
        let warp = WarpFunction::relative(step);

        warp.sample(5).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        warp.clone().sample(5).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 8);
    }
}
