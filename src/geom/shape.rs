use serde::Serialize;

use super::core::Point2;

/// Closed polygon given by its vertices (no repeated closing vertex).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polygon {
    points: Vec<Point2>,
}

impl Polygon {
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Axis-aligned rectangle with its minimum corner at `(x, y)`.
    #[must_use]
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(vec![
            Point2::new(x, y),
            Point2::new(x + width, y),
            Point2::new(x + width, y + height),
            Point2::new(x, y + height),
        ])
    }

    /// Regular polygon with `sides` vertices on the circle around `center`.
    /// `rotation` is in radians; the first vertex sits at angle `rotation`.
    #[must_use]
    pub fn regular(sides: usize, center: Point2, radius: f64, rotation: f64) -> Self {
        let points = (0..sides)
            .map(|i| {
                let angle = rotation + std::f64::consts::TAU * (i as f64 / sides as f64);
                Point2::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                )
            })
            .collect();
        Self::new(points)
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[must_use]
    pub fn scale(&self, sx: f64, sy: f64) -> Self {
        Self::new(self.points.iter().map(|p| p.scale(sx, sy)).collect())
    }

    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        let offset = Point2::new(dx, dy);
        Self::new(self.points.iter().map(|p| p.add_point(offset)).collect())
    }
}

/// Axis-aligned ellipse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ellipse {
    pub center: Point2,
    pub radius_x: f64,
    pub radius_y: f64,
}

impl Ellipse {
    #[must_use]
    pub const fn new(center: Point2, radius_x: f64, radius_y: f64) -> Self {
        Self {
            center,
            radius_x,
            radius_y,
        }
    }

    /// Scales about the origin; radii stay non-negative under mirroring.
    #[must_use]
    pub fn scale(&self, sx: f64, sy: f64) -> Self {
        Self::new(
            self.center.scale(sx, sy),
            self.radius_x * sx.abs(),
            self.radius_y * sy.abs(),
        )
    }

    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(
            self.center.add_point(Point2::new(dx, dy)),
            self.radius_x,
            self.radius_y,
        )
    }

    /// Polygonal approximation with `segments` vertices.
    #[must_use]
    pub fn to_polygon(&self, segments: usize) -> Polygon {
        let points = (0..segments.max(3))
            .map(|i| {
                let angle = std::f64::consts::TAU * (i as f64 / segments.max(3) as f64);
                Point2::new(
                    self.center.x + self.radius_x * angle.cos(),
                    self.center.y + self.radius_y * angle.sin(),
                )
            })
            .collect();
        Polygon::new(points)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Shape {
    Polygon(Polygon),
    Ellipse(Ellipse),
}

impl Shape {
    #[must_use]
    pub fn scale(&self, sx: f64, sy: f64) -> Self {
        match self {
            Self::Polygon(polygon) => Self::Polygon(polygon.scale(sx, sy)),
            Self::Ellipse(ellipse) => Self::Ellipse(ellipse.scale(sx, sy)),
        }
    }

    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        match self {
            Self::Polygon(polygon) => Self::Polygon(polygon.translate(dx, dy)),
            Self::Ellipse(ellipse) => Self::Ellipse(ellipse.translate(dx, dy)),
        }
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}

impl From<Ellipse> for Shape {
    fn from(ellipse: Ellipse) -> Self {
        Self::Ellipse(ellipse)
    }
}

/// Ordered collection of shapes, the unit that nodes stamp into grid cells.
///
/// Transforms return new elements; a stamp placed into many cells never
/// shares storage with its placements.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Element {
    shapes: Vec<Shape>,
}

impl Element {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    #[must_use]
    pub fn scale(&self, sx: f64, sy: f64) -> Self {
        self.iter().map(|shape| shape.scale(sx, sy)).collect()
    }

    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        self.iter().map(|shape| shape.translate(dx, dy)).collect()
    }
}

impl FromIterator<Shape> for Element {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Self {
            shapes: iter.into_iter().collect(),
        }
    }
}

impl Extend<Shape> for Element {
    fn extend<I: IntoIterator<Item = Shape>>(&mut self, iter: I) {
        self.shapes.extend(iter);
    }
}

impl IntoIterator for Element {
    type Item = Shape;
    type IntoIter = std::vec::IntoIter<Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Element {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
