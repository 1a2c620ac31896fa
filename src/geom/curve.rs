use super::core::Point2;

/// A parametric planar curve.
///
/// Implementors define `point_at` over `domain()`; the free functions in this
/// module only rely on those two methods.
pub trait Curve2 {
    fn point_at(&self, u: f64) -> Point2;

    #[must_use]
    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    #[error("curve requires at least {min} points, got {found}")]
    NotEnoughPoints { min: usize, found: usize },
    #[error("bezier curve requires 3k + 1 control points, got {count}")]
    MisalignedPoints { count: usize },
    #[error("parameter {parameter} lies outside the curve domain [0, {max}]")]
    ParameterOutOfRange { parameter: f64, max: f64 },
    #[error("curve control points must be finite")]
    NonFinitePoint,
}

/// Samples `count` points at uniform parameter steps across the curve domain.
///
/// Both domain ends are included. This is spacing in parameter space, not arc
/// length; on strongly curved segments the points bunch up.
#[must_use]
pub fn sample_uniform<C: Curve2 + ?Sized>(curve: &C, count: usize) -> Vec<Point2> {
    let (u0, u1) = curve.domain();
    match count {
        0 => Vec::new(),
        1 => vec![curve.point_at(u0)],
        _ => {
            let span = u1 - u0;
            (0..count)
                .map(|i| {
                    let u = if i + 1 == count {
                        u1
                    } else {
                        u0 + span * (i as f64 / (count - 1) as f64)
                    };
                    curve.point_at(u)
                })
                .collect()
        }
    }
}

/// Total length of the polyline through `points`.
#[must_use]
pub fn polyline_length(points: &[Point2]) -> f64 {
    points
        .windows(2)
        .map(|segment| segment[0].distance_to(segment[1]))
        .sum()
}

pub(crate) fn ensure_finite(points: &[Point2]) -> Result<(), CurveError> {
    if points.iter().all(|point| point.is_finite()) {
        Ok(())
    } else {
        Err(CurveError::NonFinitePoint)
    }
}
