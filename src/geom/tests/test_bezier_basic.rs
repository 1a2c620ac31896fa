use crate::geom::{
    CubicBezierCurve, CubicBezierSpline, Curve2, CurveError, Point2, Tolerance, polyline_length,
};

fn arch() -> [Point2; 4] {
    [
        Point2::new(0.0, 0.0),
        Point2::new(0.0, 1.0),
        Point2::new(1.0, 1.0),
        Point2::new(1.0, 0.0),
    ]
}

fn spacing(points: &[Point2]) -> Vec<f64> {
    points
        .windows(2)
        .map(|pair| pair[0].distance_to(pair[1]))
        .collect()
}

#[test]
fn spline_interpolates_first_and_last_control_point() {
    let spline = CubicBezierSpline::new(arch());
    assert_eq!(spline.sample(0.0), Point2::new(0.0, 0.0));
    assert_eq!(spline.sample(1.0), Point2::new(1.0, 0.0));
    assert!(Tolerance::DEFAULT.approx_eq_point2(spline.sample(0.5), Point2::new(0.5, 0.75)));
}

#[test]
fn spline_distance_table_is_monotonic() {
    let spline = CubicBezierSpline::new(arch());
    let entries = spline.distance_table().entries();
    assert_eq!(entries.len(), 1000);
    assert_eq!(entries[0].distance, 0.0);
    assert_eq!(entries[entries.len() - 1].parameter, 1.0);
    assert!(
        entries
            .windows(2)
            .all(|pair| pair[1].distance >= pair[0].distance && pair[1].parameter > pair[0].parameter)
    );
}

#[test]
fn regular_distance_sample_is_evenly_spaced() {
    let spline = CubicBezierSpline::new(arch());
    let points = spline.regular_distance_sample(51);
    assert_eq!(points.len(), 51);
    assert!(Tolerance::DEFAULT.approx_eq_point2(points[0], Point2::new(0.0, 0.0)));
    assert!(Tolerance::DEFAULT.approx_eq_point2(points[50], Point2::new(1.0, 0.0)));

    let steps = spacing(&points);
    let expected = spline.approx_length() / 50.0;
    assert!(steps.iter().all(|step| (step - expected).abs() < 1e-3));
}

#[test]
fn regular_sample_is_not_evenly_spaced_on_the_arch() {
    let spline = CubicBezierSpline::new(arch());
    let steps = spacing(&spline.regular_sample(51));
    let min = steps.iter().copied().fold(f64::INFINITY, f64::min);
    let max = steps.iter().copied().fold(0.0, f64::max);
    assert!(max - min > 1e-2);
}

#[test]
fn distance_to_parameter_handles_both_ends() {
    let spline = CubicBezierSpline::new(arch());
    assert_eq!(spline.distance_to_parameter(0.0), 0.0);
    assert_eq!(spline.distance_to_parameter(spline.approx_length()), 1.0);
    assert_eq!(spline.distance_to_parameter(spline.approx_length() * 2.0), 1.0);
}

#[test]
fn approx_length_matches_dense_polyline() {
    let spline = CubicBezierSpline::new(arch());
    let dense = polyline_length(&spline.regular_sample(5000));
    assert!((spline.approx_length() - dense).abs() < 1e-4);
}

#[test]
fn from_slice_rejects_wrong_point_count() {
    let err = CubicBezierSpline::from_slice(&arch()[..3]).unwrap_err();
    assert_eq!(err, CurveError::NotEnoughPoints { min: 4, found: 3 });
}

#[test]
fn curve_requires_three_k_plus_one_points() {
    let points: Vec<Point2> = (0..5).map(|i| Point2::new(f64::from(i), 0.0)).collect();
    assert_eq!(
        CubicBezierCurve::from_points(&points).unwrap_err(),
        CurveError::MisalignedPoints { count: 5 }
    );
    assert_eq!(
        CubicBezierCurve::from_points(&points[..3]).unwrap_err(),
        CurveError::NotEnoughPoints { min: 4, found: 3 }
    );
}

#[test]
fn curve_rejects_non_finite_points() {
    let mut points = arch().to_vec();
    points[2] = Point2::new(f64::NAN, 0.0);
    assert_eq!(
        CubicBezierCurve::from_points(&points).unwrap_err(),
        CurveError::NonFinitePoint
    );
}

#[test]
fn curve_global_parameter_selects_spline() {
    let points = [
        Point2::new(0.0, 0.0),
        Point2::new(0.0, 1.0),
        Point2::new(1.0, 1.0),
        Point2::new(1.0, 0.0),
        Point2::new(1.0, -1.0),
        Point2::new(2.0, -1.0),
        Point2::new(2.0, 0.0),
    ];
    let curve = CubicBezierCurve::from_points(&points).unwrap();
    let tol = Tolerance::DEFAULT;
    assert_eq!(curve.spline_count(), 2);
    assert_eq!(curve.domain(), (0.0, 2.0));
    assert!(tol.approx_eq_point2(curve.sample(0.0), points[0]));
    assert!(tol.approx_eq_point2(curve.sample(1.0), points[3]));
    assert!(tol.approx_eq_point2(curve.sample(2.0), points[6]));
    assert!(tol.approx_eq_point2(curve.sample(1.5), curve.splines()[1].sample(0.5)));
}

#[test]
fn distance_to_global_parameter_on_a_straight_chain() {
    let points: Vec<Point2> = (0..7).map(|i| Point2::new(f64::from(i), 0.0)).collect();
    let curve = CubicBezierCurve::from_points(&points).unwrap();
    assert!((curve.approx_length() - 6.0).abs() < 1e-9);
    assert_eq!(curve.cumulative_lengths().len(), 2);
    assert!((curve.distance_to_global_parameter(4.5) - 1.5).abs() < 1e-9);
    assert!((curve.distance_to_global_parameter(1.5) - 0.5).abs() < 1e-9);
    assert_eq!(curve.distance_to_global_parameter(-1.0), 0.0);
    assert!((curve.distance_to_global_parameter(100.0) - 2.0).abs() < 1e-9);
}

#[test]
fn curve_regular_distance_sample_spans_all_splines() {
    let points: Vec<Point2> = (0..7).map(|i| Point2::new(f64::from(i), 0.0)).collect();
    let curve = CubicBezierCurve::from_points(&points).unwrap();
    let samples = curve.regular_distance_sample(7);
    for (i, point) in samples.iter().enumerate() {
        assert!((point.x - i as f64).abs() < 1e-9, "sample {i} at {point:?}");
    }
}
