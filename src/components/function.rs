//! Componenten die een scalaire functie leveren (`Function`-poort).

use crate::graph::port::PortType;
use crate::graph::property::{PropertyDescriptor, PropertyMap};
use crate::graph::value::Value;
use crate::warp::ScalarFunction;

use super::{Component, ComponentError, ComponentResult};

const OUTPUTS: &[PortType] = &[PortType::Function];

const POLYNOMIAL_SCHEMA: &[PropertyDescriptor] = &[
    PropertyDescriptor::number("a", 0.0),
    PropertyDescriptor::number("b", 1.0),
    PropertyDescriptor::number("c", 0.0),
    PropertyDescriptor::number("d", 0.0),
];

const PIECEWISE_SCHEMA: &[PropertyDescriptor] =
    &[PropertyDescriptor::points("points", &[[0.0, 0.0], [1.0, 1.0]]).with_min(1.0)];

const EXPRESSION_SCHEMA: &[PropertyDescriptor] = &[PropertyDescriptor::text("expression", "x")];

const RANDOM_SCHEMA: &[PropertyDescriptor] = &[
    PropertyDescriptor::integer("seed", 0).with_min(0.0),
    PropertyDescriptor::number("min", 0.5),
    PropertyDescriptor::number("max", 1.5),
];

/// Beschikbare componenten binnen deze module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Identity,
    Polynomial,
    PiecewiseLinear,
    Expression,
    Random,
}

/// Metadata voor registraties in de componentregistry.
#[derive(Debug, Clone, Copy)]
pub struct Registration {
    pub names: &'static [&'static str],
    pub kind: ComponentKind,
}

/// Volledige lijst van componentregistraties voor de functiecomponenten.
pub const REGISTRATIONS: &[Registration] = &[
    Registration {
        names: &["Identity", "Id"],
        kind: ComponentKind::Identity,
    },
    Registration {
        names: &["Polynomial", "Cubic", "Poly"],
        kind: ComponentKind::Polynomial,
    },
    Registration {
        names: &["Piecewise Linear", "Piecewise", "Linear Interpolation"],
        kind: ComponentKind::PiecewiseLinear,
    },
    Registration {
        names: &["Expression", "Expr"],
        kind: ComponentKind::Expression,
    },
    Registration {
        names: &["Random", "Rnd"],
        kind: ComponentKind::Random,
    },
];

impl Component for ComponentKind {
    fn compute(&self, _inputs: &[Option<Value>], properties: &PropertyMap) -> ComponentResult {
        let function = match self {
            Self::Identity => ScalarFunction::Identity,
            Self::Polynomial => ScalarFunction::polynomial(
                properties.number("a")?,
                properties.number("b")?,
                properties.number("c")?,
                properties.number("d")?,
            ),
            Self::PiecewiseLinear => ScalarFunction::piecewise_linear(properties.points("points")?)?,
            Self::Expression => ScalarFunction::expression(properties.text("expression")?)?,
            Self::Random => random_function(properties)?,
        };
        Ok(Some(Value::Function(function)))
    }
}

impl ComponentKind {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Identity => "Identity",
            Self::Polynomial => "Polynomial",
            Self::PiecewiseLinear => "Piecewise Linear",
            Self::Expression => "Expression",
            Self::Random => "Random",
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
            Self::Identity => &[],
            Self::Polynomial => POLYNOMIAL_SCHEMA,
            Self::PiecewiseLinear => PIECEWISE_SCHEMA,
            Self::Expression => EXPRESSION_SCHEMA,
            Self::Random => RANDOM_SCHEMA,
        }
    }

    #[must_use]
    pub fn resizable(&self) -> bool {
        false
    }
}

fn random_function(properties: &PropertyMap) -> Result<ScalarFunction, ComponentError> {
    let seed = u64::try_from(properties.integer("seed")?)
        .map_err(|_| ComponentError::new("Random vereist een niet-negatieve seed"))?;
    let min = properties.number("min")?;
    let max = properties.number("max")?;
    if min > max {
        return Err(ComponentError::new(format!(
            "Random vereist min <= max, kreeg [{min}, {max}]"
        )));
    }
    Ok(ScalarFunction::random(seed, min, max))
}
