//! Componenten die stempels over de cellen van een grid verdelen.

use crate::geom::{Element, Grid, GridCell};
use crate::graph::port::PortType;
use crate::graph::property::{PropertyDescriptor, PropertyMap};
use crate::graph::value::Value;

use super::{Component, ComponentResult};

const REPEATER_INPUTS: &[PortType] = &[PortType::Grid, PortType::Element];
const CHECKERBOARD_INPUTS: &[PortType] = &[PortType::Grid, PortType::Element, PortType::Element];
const OUTPUTS: &[PortType] = &[PortType::Element];

/// Beschikbare componenten binnen deze module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    ShapeRepeater,
    Checkerboard,
}

/// Metadata voor registraties in de componentregistry.
#[derive(Debug, Clone, Copy)]
pub struct Registration {
    pub names: &'static [&'static str],
    pub kind: ComponentKind,
}

pub const REGISTRATIONS: &[Registration] = &[
    Registration {
        names: &["Shape Repeater", "Repeater", "Repeat"],
        kind: ComponentKind::ShapeRepeater,
    },
    Registration {
        names: &["Checkerboard", "Checker"],
        kind: ComponentKind::Checkerboard,
    },
];

impl Component for ComponentKind {
    fn compute(&self, inputs: &[Option<Value>], _properties: &PropertyMap) -> ComponentResult {
        let Some(grid) = input(inputs, 0) else {
            return Ok(None);
        };
        let grid = grid.expect_grid()?;

        match self {
            Self::ShapeRepeater => {
                let Some(stamp) = input(inputs, 1) else {
                    return Ok(None);
                };
                let stamp = stamp.expect_element()?;
                Ok(Some(Value::Element(repeat(grid, stamp))))
            }
            Self::Checkerboard => {
                let (Some(first), Some(second)) = (input(inputs, 1), input(inputs, 2)) else {
                    return Ok(None);
                };
                let first = first.expect_element()?;
                let second = second.expect_element()?;
                Ok(Some(Value::Element(checkerboard(grid, first, second))))
            }
        }
    }
}

impl ComponentKind {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::ShapeRepeater => "Shape Repeater",
            Self::Checkerboard => "Checkerboard",
        }
    }

    #[must_use]
    pub fn input_ports(&self) -> &'static [PortType] {
        match self {
            Self::ShapeRepeater => REPEATER_INPUTS,
            Self::Checkerboard => CHECKERBOARD_INPUTS,
        }
    }

    #[must_use]
    pub fn output_ports(&self) -> &'static [PortType] {
        OUTPUTS
    }

    #[must_use]
    pub fn schema(&self) -> &'static [PropertyDescriptor] {
        &[]
    }

    #[must_use]
    pub fn resizable(&self) -> bool {
        true
    }
}

fn input(inputs: &[Option<Value>], index: usize) -> Option<&Value> {
    inputs.get(index).and_then(Option::as_ref)
}

/// Een nieuwe kopie van `stamp`, geschaald naar de cel en verschoven naar de celhoek.
fn place(stamp: &Element, cell: &GridCell) -> Element {
    stamp
        .scale(cell.width, cell.height)
        .translate(cell.x, cell.y)
}

/// Plaatst `stamp` in elke cel van `grid`, kolom voor kolom.
#[must_use]
pub fn repeat(grid: &Grid, stamp: &Element) -> Element {
    let mut output = Element::new();
    for cell in grid.cells() {
        output.extend(place(stamp, &cell));
    }
    output
}

/// Wisselt `first` en `second` af als een dambord.
///
/// Per kolom wisselt de startstempel, binnen een kolom wisselt de stempel per
/// rij. Cel `(i, j)` krijgt zo `first` precies als `i + j` even is.
#[must_use]
pub fn checkerboard(grid: &Grid, first: &Element, second: &Element) -> Element {
    let mut output = Element::new();
    let mut column_start = true;
    for column in 0..grid.column_count() {
        let mut current = column_start;
        for row in 0..grid.row_count() {
            if let Some(cell) = grid.cell(column, row) {
                let stamp = if current { first } else { second };
                output.extend(place(stamp, &cell));
            }
            current = !current;
        }
        column_start = !column_start;
    }
    output
}

#[cfg(test)]
mod tests {
    use super::{ComponentKind, checkerboard, repeat};
    use crate::components::Component;
    use crate::geom::{Element, Ellipse, Grid, Point2, Polygon, Shape};
    use crate::graph::property::PropertyMap;
    use crate::graph::value::Value;

    fn unit_square() -> Element {
        let mut element = Element::new();
        element.push(Polygon::rectangle(0.0, 0.0, 1.0, 1.0));
        element
    }

    fn unit_dot() -> Element {
        let mut element = Element::new();
        element.push(Ellipse::new(Point2::new(0.5, 0.5), 0.5, 0.5));
        element
    }

    #[test]
    fn repeat_places_one_copy_per_cell() {
        let grid = Grid::new(vec![0.0, 0.25, 1.0], vec![0.0, 0.5, 1.0]);
        let output = repeat(&grid, &unit_square());
        assert_eq!(output.len(), 4);
        let Shape::Polygon(second) = &output.shapes()[1] else {
            panic!("expected polygon");
        };
        // Tweede cel: kolom 0, rij 1.
        assert_eq!(second.points()[0], Point2::new(0.0, 0.5));
        assert_eq!(second.points()[2], Point2::new(0.25, 1.0));
    }

    #[test]
    fn checkerboard_alternates_in_both_directions() {
        let grid = Grid::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 2.0]);
        let output = checkerboard(&grid, &unit_square(), &unit_dot());
        let is_square: Vec<bool> = output
            .iter()
            .map(|shape| matches!(shape, Shape::Polygon(_)))
            .collect();
        // Kolom-major: (0,0) (0,1) (1,0) (1,1) (2,0) (2,1).
        assert_eq!(is_square, vec![true, false, false, true, true, false]);
    }

    #[test]
    fn missing_inputs_yield_absent() {
        let grid = Some(Value::Grid(Grid::new(vec![0.0, 1.0], vec![0.0, 1.0])));
        let stamp = Some(Value::Element(unit_square()));
        let properties = PropertyMap::default();

        let repeater = ComponentKind::ShapeRepeater;
        assert!(repeater.compute(&[None, stamp.clone()], &properties).unwrap().is_none());
        assert!(repeater.compute(&[grid.clone(), None], &properties).unwrap().is_none());

        let board = ComponentKind::Checkerboard;
        assert!(board.compute(&[grid.clone(), stamp.clone(), None], &properties).unwrap().is_none());
        assert!(board.compute(&[grid, None, stamp], &properties).unwrap().is_none());
    }

    #[test]
    fn stamp_is_not_mutated_by_placement() {
        let stamp = unit_square();
        let grid = Grid::new(vec![0.0, 2.0, 4.0], vec![0.0, 2.0]);
        let inputs = [Some(Value::Grid(grid)), Some(Value::Element(stamp.clone()))];
        let output = ComponentKind::ShapeRepeater
            .compute(&inputs, &PropertyMap::default())
            .unwrap()
            .unwrap();
        assert_eq!(output.expect_element().unwrap().len(), 2);
        assert_eq!(stamp, unit_square());
    }
}
