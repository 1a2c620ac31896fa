//! Stempelcomponenten: vormen in de eenheidscel `[0, 1]²`.
//!
//! Een repeater schaalt een stempel naar de celgrootte en verschuift hem naar
//! de celhoek, dus alle vormen hier worden rond `(0.5, 0.5)` opgebouwd.

use crate::geom::{CatmullRomCurve, CubicBezierCurve, Element, Ellipse, Point2, Polygon};
use crate::graph::port::PortType;
use crate::graph::property::{PropertyDescriptor, PropertyMap};
use crate::graph::value::Value;

use super::{Component, ComponentError, ComponentResult};

const OUTPUTS: &[PortType] = &[PortType::Element];

const CELL_CENTER: Point2 = Point2::new(0.5, 0.5);

const POLYGON_SCHEMA: &[PropertyDescriptor] = &[
    PropertyDescriptor::integer("sides", 6).with_range(3.0, 64.0),
    PropertyDescriptor::number("rotation", 0.0),
];

const ELLIPSE_SCHEMA: &[PropertyDescriptor] = &[
    PropertyDescriptor::number("rx", 0.5).with_range(0.0, 0.5),
    PropertyDescriptor::number("ry", 0.5).with_range(0.0, 0.5),
];

const BEZIER_SCHEMA: &[PropertyDescriptor] = &[
    PropertyDescriptor::points(
        "points",
        &[
            [0.5, 0.0],
            [1.0, 0.0],
            [1.0, 1.0],
            [0.5, 1.0],
            [0.0, 1.0],
            [0.0, 0.0],
            [0.5, 0.0],
        ],
    )
    .with_min(4.0),
    PropertyDescriptor::integer("samples", 64).with_range(3.0, 4096.0),
    PropertyDescriptor::text("sampling", "distance").with_options(SAMPLING_OPTIONS),
];

/// `distance`: gelijke booglengte tussen punten; `parameter`: gelijke stappen in t.
const SAMPLING_OPTIONS: &[&str] = &["distance", "parameter"];

const CATMULL_ROM_SCHEMA: &[PropertyDescriptor] = &[
    PropertyDescriptor::points(
        "points",
        &[[0.5, 0.0], [1.0, 0.5], [0.5, 1.0], [0.0, 0.5], [0.5, 0.0]],
    )
    .with_min(2.0),
    PropertyDescriptor::integer("samples", 64).with_range(3.0, 4096.0),
    PropertyDescriptor::number("tension", 0.5).with_range(0.0, 1.0),
];

/// Beschikbare componenten binnen deze module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Polygon,
    Ellipse,
    BezierShape,
    CatmullRomShape,
}

/// Metadata voor registraties in de componentregistry.
#[derive(Debug, Clone, Copy)]
pub struct Registration {
    pub names: &'static [&'static str],
    pub kind: ComponentKind,
}

pub const REGISTRATIONS: &[Registration] = &[
    Registration {
        names: &["Polygon", "Pol"],
        kind: ComponentKind::Polygon,
    },
    Registration {
        names: &["Ellipse", "Circle"],
        kind: ComponentKind::Ellipse,
    },
    Registration {
        names: &["Bezier Shape", "Bezier"],
        kind: ComponentKind::BezierShape,
    },
    Registration {
        names: &["Catmull-Rom Shape", "Catmull Rom", "Catmull-Rom"],
        kind: ComponentKind::CatmullRomShape,
    },
];

impl Component for ComponentKind {
    fn compute(&self, _inputs: &[Option<Value>], properties: &PropertyMap) -> ComponentResult {
        let element = match self {
            Self::Polygon => polygon_stamp(properties)?,
            Self::Ellipse => ellipse_stamp(properties)?,
            Self::BezierShape => bezier_stamp(properties)?,
            Self::CatmullRomShape => catmull_rom_stamp(properties)?,
        };
        Ok(Some(Value::Element(element)))
    }
}

impl ComponentKind {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Polygon => "Polygon",
            Self::Ellipse => "Ellipse",
            Self::BezierShape => "Bezier Shape",
            Self::CatmullRomShape => "Catmull-Rom Shape",
        }
    }

    #[must_use]
    pub fn input_ports(&self) -> &'static [PortType] {
        &[]
    }

    #[must_use]
    pub fn output_ports(&self) -> &'static [PortType] {
        OUTPUTS
    }

    #[must_use]
    pub fn schema(&self) -> &'static [PropertyDescriptor] {
        match self {
            Self::Polygon => POLYGON_SCHEMA,
            Self::Ellipse => ELLIPSE_SCHEMA,
            Self::BezierShape => BEZIER_SCHEMA,
            Self::CatmullRomShape => CATMULL_ROM_SCHEMA,
        }
    }

    #[must_use]
    pub fn resizable(&self) -> bool {
        true
    }
}

fn single(shape: impl Into<crate::geom::Shape>) -> Element {
    let mut element = Element::new();
    element.push(shape);
    element
}

fn polygon_stamp(properties: &PropertyMap) -> Result<Element, ComponentError> {
    let sides = usize::try_from(properties.integer("sides")?)
        .map_err(|_| ComponentError::new("Polygon vereist een positief aantal zijden"))?;
    let rotation = properties.number("rotation")?.to_radians();
    Ok(single(Polygon::regular(sides, CELL_CENTER, 0.5, rotation)))
}

fn ellipse_stamp(properties: &PropertyMap) -> Result<Element, ComponentError> {
    let rx = properties.number("rx")?;
    let ry = properties.number("ry")?;
    Ok(single(Ellipse::new(CELL_CENTER, rx, ry)))
}

fn bezier_stamp(properties: &PropertyMap) -> Result<Element, ComponentError> {
    let points = properties.points("points")?;
    let samples = sample_count(properties)?;
    let curve = CubicBezierCurve::from_points(&points)?;
    let outline = match properties.text("sampling")? {
        "parameter" => curve.regular_sample(samples),
        _ => curve.regular_distance_sample(samples),
    };
    Ok(single(Polygon::new(outline)))
}

fn catmull_rom_stamp(properties: &PropertyMap) -> Result<Element, ComponentError> {
    let points = properties.points("points")?;
    let samples = sample_count(properties)?;
    let curve = CatmullRomCurve::new(&points)?.with_tension(properties.number("tension")?);
    Ok(single(Polygon::new(curve.regular_sample(samples))))
}

fn sample_count(properties: &PropertyMap) -> Result<usize, ComponentError> {
    let samples = properties.integer("samples")?;
    usize::try_from(samples)
        .map_err(|_| ComponentError::new(format!("ongeldig aantal samples: {samples}")))
}
