//! Weergavecomponent: geeft een visualiseerbare waarde ongewijzigd door
//! zodat een host er een preview van kan maken.

use crate::graph::port::PortType;
use crate::graph::property::{PropertyDescriptor, PropertyMap};
use crate::graph::value::Value;

use super::{Component, ComponentResult};

const PORTS: &[PortType] = &[PortType::Visualisable];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Preview,
}

#[derive(Debug, Clone, Copy)]
pub struct Registration {
    pub names: &'static [&'static str],
    pub kind: ComponentKind,
}

pub const REGISTRATIONS: &[Registration] = &[Registration {
    names: &["Preview", "Display", "Visualise"],
    kind: ComponentKind::Preview,
}];

impl Component for ComponentKind {
    fn compute(&self, inputs: &[Option<Value>], _properties: &PropertyMap) -> ComponentResult {
        match self {
            Self::Preview => Ok(inputs.first().cloned().flatten()),
        }
    }
}

impl ComponentKind {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Preview => "Preview",
        }
    }

    #[must_use]
    pub fn input_ports(&self) -> &'static [PortType] {
        PORTS
    }

    #[must_use]
    pub fn output_ports(&self) -> &'static [PortType] {
        PORTS
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
