use crate::geom::{Element, Ellipse, Point2, Polygon, Shape, Tolerance};

#[test]
fn polygon_transforms_return_new_values() {
    let square = Polygon::rectangle(0.0, 0.0, 1.0, 1.0);
    let scaled = square.scale(2.0, 3.0);
    let moved = square.translate(5.0, -1.0);

    assert_eq!(square.points()[2], Point2::new(1.0, 1.0));
    assert_eq!(scaled.points()[2], Point2::new(2.0, 3.0));
    assert_eq!(moved.points()[0], Point2::new(5.0, -1.0));
}

#[test]
fn regular_polygon_vertices_lie_on_the_circle() {
    let center = Point2::new(0.5, 0.5);
    let hexagon = Polygon::regular(6, center, 0.5, 0.0);
    assert_eq!(hexagon.points().len(), 6);
    let tol = Tolerance::DEFAULT;
    assert!(tol.approx_eq_point2(hexagon.points()[0], Point2::new(1.0, 0.5)));
    assert!(
        hexagon
            .points()
            .iter()
            .all(|p| tol.approx_eq_f64(p.distance_to(center), 0.5))
    );
}

#[test]
fn ellipse_scale_keeps_radii_positive() {
    let ellipse = Ellipse::new(Point2::new(1.0, 2.0), 0.5, 0.25);
    let mirrored = ellipse.scale(-2.0, 4.0);
    assert_eq!(mirrored.center, Point2::new(-2.0, 8.0));
    assert_eq!(mirrored.radius_x, 1.0);
    assert_eq!(mirrored.radius_y, 1.0);
    assert_eq!(ellipse.radius_x, 0.5);
}

#[test]
fn ellipse_translate_moves_only_the_center() {
    let ellipse = Ellipse::new(Point2::ORIGIN, 1.0, 2.0).translate(3.0, 4.0);
    assert_eq!(ellipse, Ellipse::new(Point2::new(3.0, 4.0), 1.0, 2.0));
}

#[test]
fn element_transforms_every_shape() {
    let mut stamp = Element::new();
    stamp.push(Polygon::rectangle(0.0, 0.0, 1.0, 1.0));
    stamp.push(Ellipse::new(Point2::new(0.5, 0.5), 0.5, 0.5));

    let placed = stamp.scale(2.0, 2.0).translate(10.0, 0.0);
    assert_eq!(placed.len(), 2);
    match &placed.shapes()[1] {
        Shape::Ellipse(ellipse) => {
            assert_eq!(ellipse.center, Point2::new(11.0, 1.0));
            assert_eq!(ellipse.radius_x, 1.0);
        }
        other => panic!("unexpected shape {other:?}"),
    }
    match &stamp.shapes()[0] {
        Shape::Polygon(polygon) => assert_eq!(polygon.points()[2], Point2::new(1.0, 1.0)),
        other => panic!("unexpected shape {other:?}"),
    }
}

#[test]
fn element_collects_and_extends() {
    let mut element: Element = (0..3)
        .map(|i| Shape::from(Polygon::rectangle(f64::from(i), 0.0, 1.0, 1.0)))
        .collect();
    element.extend(Element::new());
    element.extend(vec![Shape::from(Ellipse::new(Point2::ORIGIN, 1.0, 1.0))]);
    assert_eq!(element.len(), 4);
    assert!(!element.is_empty());
    assert_eq!((&element).into_iter().count(), 4);
}

#[test]
fn ellipse_outline_has_requested_segments() {
    let outline = Ellipse::new(Point2::ORIGIN, 2.0, 1.0).to_polygon(8);
    assert_eq!(outline.points().len(), 8);
    assert!(Tolerance::DEFAULT.approx_eq_point2(outline.points()[2], Point2::new(0.0, 1.0)));
}
