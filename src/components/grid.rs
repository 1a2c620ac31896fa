//! Het Grid-component: kolom- en rijgrenzen uit twee warps.

use crate::geom::Grid;
use crate::graph::port::PortType;
use crate::graph::property::{PropertyDescriptor, PropertyMap};
use crate::graph::value::Value;
use crate::warp::WarpFunction;

use super::{Component, ComponentError, ComponentResult};

const INPUTS: &[PortType] = &[PortType::Warp, PortType::Warp];
const OUTPUTS: &[PortType] = &[PortType::Grid];

/// Bovengrens voor het aantal cellen per as.
pub const MAX_CELLS: i64 = 1024;

#[allow(clippy::cast_precision_loss)]
const GRID_SCHEMA: &[PropertyDescriptor] = &[
    PropertyDescriptor::integer("width", 4).with_range(1.0, MAX_CELLS as f64),
    PropertyDescriptor::integer("height", 4).with_range(1.0, MAX_CELLS as f64),
];

/// Beschikbare componenten binnen deze module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Grid,
}

/// Metadata voor registraties in de componentregistry.
#[derive(Debug, Clone, Copy)]
pub struct Registration {
    pub names: &'static [&'static str],
    pub kind: ComponentKind,
}

pub const REGISTRATIONS: &[Registration] = &[Registration {
    names: &["Grid", "Warped Grid"],
    kind: ComponentKind::Grid,
}];

impl Component for ComponentKind {
    fn compute(&self, inputs: &[Option<Value>], properties: &PropertyMap) -> ComponentResult {
        match self {
            Self::Grid => compute_grid(inputs, properties),
        }
    }
}

impl ComponentKind {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grid => "Grid",
        }
    }

    #[must_use]
    pub fn input_ports(&self) -> &'static [PortType] {
        INPUTS
    }

    #[must_use]
    pub fn output_ports(&self) -> &'static [PortType] {
        OUTPUTS
    }

    #[must_use]
    pub fn schema(&self) -> &'static [PropertyDescriptor] {
        GRID_SCHEMA
    }

    #[must_use]
    pub fn resizable(&self) -> bool {
        true
    }
}

fn compute_grid(inputs: &[Option<Value>], properties: &PropertyMap) -> ComponentResult {
    let columns = cell_count(properties, "width")?;
    let rows = cell_count(properties, "height")?;

    let x_warp = axis_warp(inputs, 0, "x")?;
    let y_warp = axis_warp(inputs, 1, "y")?;

    let grid = Grid::new(x_warp.sample(columns + 1)?, y_warp.sample(rows + 1)?);
    Ok(Some(Value::Grid(grid)))
}

fn cell_count(properties: &PropertyMap, name: &str) -> Result<usize, ComponentError> {
    let count = properties.integer(name)?;
    (1..=MAX_CELLS)
        .contains(&count)
        .then(|| usize::try_from(count).ok())
        .flatten()
        .ok_or_else(|| {
            ComponentError::new(format!(
                "Grid vereist `{name}` tussen 1 en {MAX_CELLS}, kreeg {count}"
            ))
        })
}

/// Een niet-aangesloten of afwezige warp valt terug op de identiteitswarp.
fn axis_warp(
    inputs: &[Option<Value>],
    index: usize,
    axis: &str,
) -> Result<WarpFunction, ComponentError> {
    match inputs.get(index) {
        Some(Some(value)) => Ok(value.expect_warp()?.clone()),
        _ => {
            log::debug!("grid: geen warp voor de {axis}-as, identiteitswarp gebruikt");
            Ok(WarpFunction::identity())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ComponentKind, MAX_CELLS};
    use crate::components::Component;
    use crate::graph::property::{PropertyError, PropertyMap, PropertyValue};
    use crate::graph::value::Value;
    use crate::warp::{ScalarFunction, WarpFunction};

    fn properties(width: i64, height: i64) -> PropertyMap {
        let schema = ComponentKind::Grid.schema();
        let mut map = PropertyMap::from_schema(schema);
        map.set(schema, "width", PropertyValue::Integer(width)).unwrap();
        map.set(schema, "height", PropertyValue::Integer(height)).unwrap();
        map
    }

    #[test]
    fn identity_grid_is_uniform() {
        let value = ComponentKind::Grid
            .compute(&[None, None], &properties(4, 2))
            .unwrap()
            .unwrap();
        let grid = value.expect_grid().unwrap();
        assert_eq!(grid.columns(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(grid.rows(), &[0.0, 0.5, 1.0]);
    }

    #[test]
    fn connected_warp_shapes_one_axis() {
        let warp = WarpFunction::position(ScalarFunction::polynomial(0.0, 0.0, 1.0, 0.0)).unwrap();
        let value = ComponentKind::Grid
            .compute(&[Some(Value::Warp(warp)), None], &properties(2, 2))
            .unwrap()
            .unwrap();
        let grid = value.expect_grid().unwrap();
        assert_eq!(grid.columns(), &[0.0, 0.25, 1.0]);
        assert_eq!(grid.rows(), &[0.0, 0.5, 1.0]);
    }

    #[test]
    fn degenerate_warp_fails() {
        let warp = WarpFunction::relative(ScalarFunction::polynomial(0.0, 0.0, 0.0, 0.0));
        let result = ComponentKind::Grid.compute(&[None, Some(Value::Warp(warp))], &properties(1, 1));
        assert!(result.is_err());
    }

    #[test]
    fn cell_count_is_capped() {
        let schema = ComponentKind::Grid.schema();
        let mut map = PropertyMap::from_schema(schema);
        map.set(schema, "width", PropertyValue::Integer(MAX_CELLS)).unwrap();
        let err = map
            .set(schema, "height", PropertyValue::Integer(1 << 42))
            .unwrap_err();
        assert!(matches!(err, PropertyError::OutOfRange { .. }));
        assert_eq!(map.integer("height").unwrap(), 4);
    }
}
