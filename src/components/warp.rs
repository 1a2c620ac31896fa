//! Componenten die een scalaire functie omzetten in een warp.

use crate::graph::port::PortType;
use crate::graph::property::{PropertyDescriptor, PropertyMap};
use crate::graph::value::Value;
use crate::warp::WarpFunction;

use super::{Component, ComponentResult};

const INPUTS: &[PortType] = &[PortType::Function];
const OUTPUTS: &[PortType] = &[PortType::Warp];

/// Beschikbare componenten binnen deze module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    PositionWarp,
    RelativeWarp,
}

/// Metadata voor registraties in de componentregistry.
#[derive(Debug, Clone, Copy)]
pub struct Registration {
    pub names: &'static [&'static str],
    pub kind: ComponentKind,
}

pub const REGISTRATIONS: &[Registration] = &[
    Registration {
        names: &["Position Warp", "Positional Warp", "PWarp"],
        kind: ComponentKind::PositionWarp,
    },
    Registration {
        names: &["Relative Warp", "RWarp"],
        kind: ComponentKind::RelativeWarp,
    },
];

impl Component for ComponentKind {
    fn compute(&self, inputs: &[Option<Value>], _properties: &PropertyMap) -> ComponentResult {
        let Some(Some(input)) = inputs.first() else {
            return Ok(None);
        };
        let function = input.expect_function()?.clone();
        let warp = match self {
            Self::PositionWarp => WarpFunction::position(function)?,
            Self::RelativeWarp => WarpFunction::relative(function),
        };
        Ok(Some(Value::Warp(warp)))
    }
}

impl ComponentKind {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::PositionWarp => "Position Warp",
            Self::RelativeWarp => "Relative Warp",
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
        &[]
    }

    #[must_use]
    pub fn resizable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::ComponentKind;
    use crate::components::{Component, ComponentError};
    use crate::graph::property::PropertyMap;
    use crate::graph::value::Value;
    use crate::warp::{ScalarFunction, WarpError};

    #[test]
    fn missing_function_yields_absent_warp() {
        let properties = PropertyMap::default();
        assert!(ComponentKind::PositionWarp.compute(&[None], &properties).unwrap().is_none());
        assert!(ComponentKind::RelativeWarp.compute(&[], &properties).unwrap().is_none());
    }

    #[test]
    fn position_warp_reports_origin_violation() {
        let inputs = [Some(Value::Function(ScalarFunction::polynomial(1.0, 1.0, 0.0, 0.0)))];
        let err = ComponentKind::PositionWarp
            .compute(&inputs, &PropertyMap::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ComponentError::Warp(WarpError::NonZeroOrigin { .. })
        ));
    }

    #[test]
    fn relative_warp_accepts_any_function() {
        let inputs = [Some(Value::Function(ScalarFunction::polynomial(1.0, 0.0, 0.0, 0.0)))];
        let value = ComponentKind::RelativeWarp
            .compute(&inputs, &PropertyMap::default())
            .unwrap()
            .unwrap();
        let samples = value.expect_warp().unwrap().sample(3).unwrap();
        assert_eq!(samples, vec![0.0, 0.5, 1.0]);
    }
}
