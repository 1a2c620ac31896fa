//! Component registry en evaluatie-logica.

use std::collections::HashMap;
use std::fmt;

use crate::geom::CurveError;
use crate::graph::port::PortType;
use crate::graph::property::{PropertyDescriptor, PropertyError, PropertyMap};
use crate::graph::value::{Value, ValueError};
use crate::warp::{FunctionError, WarpError};

pub mod combination;
pub mod display;
pub mod function;
pub mod grid;
pub mod repeat;
pub mod shape;
pub mod warp;

/// Fouttype voor component-evaluaties.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentError {
    /// Een generieke fout met een bericht.
    Message(String),
    Property(PropertyError),
    Value(ValueError),
    Function(FunctionError),
    Warp(WarpError),
    Curve(CurveError),
}

impl ComponentError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}

impl fmt::Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(s) => f.write_str(s),
            Self::Property(error) => write!(f, "ongeldige eigenschap: {error}"),
            Self::Value(error) => write!(f, "ongeldige invoer: {error}"),
            Self::Function(error) => write!(f, "ongeldige functie: {error}"),
            Self::Warp(error) => write!(f, "warp mislukt: {error}"),
            Self::Curve(error) => write!(f, "curve mislukt: {error}"),
        }
    }
}

impl std::error::Error for ComponentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Message(_) => None,
            Self::Property(error) => Some(error),
            Self::Value(error) => Some(error),
            Self::Function(error) => Some(error),
            Self::Warp(error) => Some(error),
            Self::Curve(error) => Some(error),
        }
    }
}

impl From<PropertyError> for ComponentError {
    fn from(error: PropertyError) -> Self {
        Self::Property(error)
    }
}

impl From<ValueError> for ComponentError {
    fn from(error: ValueError) -> Self {
        Self::Value(error)
    }
}

impl From<FunctionError> for ComponentError {
    fn from(error: FunctionError) -> Self {
        Self::Function(error)
    }
}

impl From<WarpError> for ComponentError {
    fn from(error: WarpError) -> Self {
        Self::Warp(error)
    }
}

impl From<CurveError> for ComponentError {
    fn from(error: CurveError) -> Self {
        Self::Curve(error)
    }
}

/// Resultaat van een component-executie. `Ok(None)` betekent dat een
/// benodigde invoer ontbreekt; dat is geen fout.
pub type ComponentResult = Result<Option<Value>, ComponentError>;

/// Trait die alle componentimplementaties dienen te implementeren.
///
/// `inputs` bevat één plaats per ingang, in de volgorde van de poorten;
/// `None` staat voor een niet-aangesloten of afwezige waarde.
pub trait Component {
    fn compute(&self, inputs: &[Option<Value>], properties: &PropertyMap) -> ComponentResult;
}

/// Beschikbare componenttypen binnen de registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Function(function::ComponentKind),
    Warp(warp::ComponentKind),
    Grid(grid::ComponentKind),
    Shape(shape::ComponentKind),
    Repeat(repeat::ComponentKind),
    Display(display::ComponentKind),
}

impl Component for ComponentKind {
    fn compute(&self, inputs: &[Option<Value>], properties: &PropertyMap) -> ComponentResult {
        match self {
            Self::Function(component) => component.compute(inputs, properties),
            Self::Warp(component) => component.compute(inputs, properties),
            Self::Grid(component) => component.compute(inputs, properties),
            Self::Shape(component) => component.compute(inputs, properties),
            Self::Repeat(component) => component.compute(inputs, properties),
            Self::Display(component) => component.compute(inputs, properties),
        }
    }
}

impl ComponentKind {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Function(component) => component.name(),
            Self::Warp(component) => component.name(),
            Self::Grid(component) => component.name(),
            Self::Shape(component) => component.name(),
            Self::Repeat(component) => component.name(),
            Self::Display(component) => component.name(),
        }
    }

    #[must_use]
    pub fn input_ports(&self) -> &'static [PortType] {
        match self {
            Self::Function(component) => component.input_ports(),
            Self::Warp(component) => component.input_ports(),
            Self::Grid(component) => component.input_ports(),
            Self::Shape(component) => component.input_ports(),
            Self::Repeat(component) => component.input_ports(),
            Self::Display(component) => component.input_ports(),
        }
    }

    #[must_use]
    pub fn output_ports(&self) -> &'static [PortType] {
        match self {
            Self::Function(component) => component.output_ports(),
            Self::Warp(component) => component.output_ports(),
            Self::Grid(component) => component.output_ports(),
            Self::Shape(component) => component.output_ports(),
            Self::Repeat(component) => component.output_ports(),
            Self::Display(component) => component.output_ports(),
        }
    }

    #[must_use]
    pub fn schema(&self) -> &'static [PropertyDescriptor] {
        match self {
            Self::Function(component) => component.schema(),
            Self::Warp(component) => component.schema(),
            Self::Grid(component) => component.schema(),
            Self::Shape(component) => component.schema(),
            Self::Repeat(component) => component.schema(),
            Self::Display(component) => component.schema(),
        }
    }

    #[must_use]
    pub fn resizable(&self) -> bool {
        match self {
            Self::Function(component) => component.resizable(),
            Self::Warp(component) => component.resizable(),
            Self::Grid(component) => component.resizable(),
            Self::Shape(component) => component.resizable(),
            Self::Repeat(component) => component.resizable(),
            Self::Display(component) => component.resizable(),
        }
    }
}

/// Registry die componentimplementaties opzoekt op naam.
#[derive(Debug, Clone)]
pub struct ComponentRegistry {
    by_name: HashMap<String, ComponentKind>,
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        let mut registry = Self::new();

        for registration in function::REGISTRATIONS {
            registry.register_names(registration.names, ComponentKind::Function(registration.kind));
        }
        for registration in warp::REGISTRATIONS {
            registry.register_names(registration.names, ComponentKind::Warp(registration.kind));
        }
        for registration in grid::REGISTRATIONS {
            registry.register_names(registration.names, ComponentKind::Grid(registration.kind));
        }
        for registration in shape::REGISTRATIONS {
            registry.register_names(registration.names, ComponentKind::Shape(registration.kind));
        }
        for registration in repeat::REGISTRATIONS {
            registry.register_names(registration.names, ComponentKind::Repeat(registration.kind));
        }
        for registration in display::REGISTRATIONS {
            registry.register_names(registration.names, ComponentKind::Display(registration.kind));
        }

        registry
    }
}

impl ComponentRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_name: HashMap::new(),
        }
    }

    pub fn register_names(&mut self, names: &[&str], kind: ComponentKind) {
        for name in names {
            let key = normalize_name(name);
            self.by_name.insert(key, kind);
        }
    }

    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<ComponentKind> {
        self.by_name.get(&normalize_name(name)).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{ComponentKind, ComponentRegistry, display, repeat, shape, warp};

    #[test]
    fn lookup_by_name_and_alias() {
        let registry = ComponentRegistry::default();

        let by_name = registry.resolve("Shape Repeater").unwrap();
        assert_eq!(
            by_name,
            ComponentKind::Repeat(repeat::ComponentKind::ShapeRepeater)
        );

        let by_alias = registry.resolve("  pwarp ").unwrap();
        assert_eq!(by_alias, ComponentKind::Warp(warp::ComponentKind::PositionWarp));

        let catmull = registry.resolve("catmull-rom").unwrap();
        assert_eq!(
            catmull,
            ComponentKind::Shape(shape::ComponentKind::CatmullRomShape)
        );

        assert!(registry.resolve("Extrude").is_none());
    }

    #[test]
    fn resolved_kinds_report_their_canonical_name() {
        let registry = ComponentRegistry::default();
        assert_eq!(registry.resolve("checker").unwrap().name(), "Checkerboard");
        assert_eq!(
            registry.resolve("display").unwrap(),
            ComponentKind::Display(display::ComponentKind::Preview)
        );
        assert!(!registry.is_empty());
    }
}
