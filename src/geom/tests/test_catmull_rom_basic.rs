use crate::geom::{CatmullRomCurve, Curve2, CurveError, Point2, Tolerance};

fn zigzag() -> Vec<Point2> {
    vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 2.0),
        Point2::new(2.0, -1.0),
        Point2::new(4.0, 0.5),
    ]
}

#[test]
fn curve_passes_through_every_point() {
    let points = zigzag();
    let curve = CatmullRomCurve::new(&points).unwrap();
    assert_eq!(curve.spline_count(), 3);
    assert_eq!(curve.control_points().len(), 6);
    assert_eq!(curve.interpolated_points(), points.as_slice());

    let tol = Tolerance::DEFAULT;
    for (i, point) in points.iter().enumerate() {
        let sampled = curve.sample(i as f64).unwrap();
        assert!(tol.approx_eq_point2(sampled, *point), "u = {i}: {sampled:?}");
    }
}

#[test]
fn synthetic_end_points_are_mirrored() {
    let curve = CatmullRomCurve::new(&zigzag()).unwrap();
    let stored = curve.control_points();
    assert_eq!(stored[0], Point2::new(-1.0, -2.0));
    assert_eq!(stored[5], Point2::new(6.0, 2.0));
}

#[test]
fn two_points_give_a_straight_segment() {
    let curve = CatmullRomCurve::new(&[Point2::new(0.0, 0.0), Point2::new(2.0, 2.0)]).unwrap();
    let mid = curve.sample(0.5).unwrap();
    assert!(Tolerance::DEFAULT.approx_eq_point2(mid, Point2::new(1.0, 1.0)));
}

#[test]
fn out_of_range_parameter_is_rejected() {
    let curve = CatmullRomCurve::new(&zigzag()).unwrap();
    assert!(matches!(
        curve.sample(-0.1),
        Err(CurveError::ParameterOutOfRange { .. })
    ));
    assert!(matches!(
        curve.sample(3.1),
        Err(CurveError::ParameterOutOfRange { max, .. }) if max == 3.0
    ));
    assert!(curve.sample(f64::NAN).is_err());
    assert!(curve.sample(3.0).is_ok());
}

#[test]
fn single_point_is_not_a_curve() {
    assert_eq!(
        CatmullRomCurve::new(&[Point2::new(1.0, 1.0)]).unwrap_err(),
        CurveError::NotEnoughPoints { min: 2, found: 1 }
    );
}

#[test]
fn tension_changes_the_interior_but_not_the_knots() {
    let points = zigzag();
    let loose = CatmullRomCurve::new(&points).unwrap();
    let tight = CatmullRomCurve::new(&points).unwrap().with_tension(0.0);
    assert_eq!(tight.tension(), 0.0);
    assert_ne!(loose.sample(1.5).unwrap(), tight.sample(1.5).unwrap());
    assert!(Tolerance::DEFAULT.approx_eq_point2(tight.sample(2.0).unwrap(), points[2]));
}

#[test]
fn regular_sample_covers_the_domain() {
    let points = zigzag();
    let curve = CatmullRomCurve::new(&points).unwrap();
    let samples = curve.regular_sample(7);
    assert_eq!(samples.len(), 7);
    assert_eq!(curve.domain(), (0.0, 3.0));
    let tol = Tolerance::DEFAULT;
    assert!(tol.approx_eq_point2(samples[0], points[0]));
    assert!(tol.approx_eq_point2(samples[6], points[3]));
    assert!(tol.approx_eq_point2(curve.point_at(10.0), points[3]));
}
