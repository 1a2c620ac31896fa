//! Eigenschappen van nodes: statische schema's per nodetype en de
//! gevalideerde waarden per node-instantie.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geom::Point2;

/// Waarde van een eigenschap zoals een host die aanlevert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Integer(i64),
    Number(f64),
    Text(String),
    Points(Vec<[f64; 2]>),
}

impl PropertyValue {
    #[must_use]
    pub fn kind(&self) -> PropertyKind {
        match self {
            Self::Integer(_) => PropertyKind::Integer,
            Self::Number(_) => PropertyKind::Number,
            Self::Text(_) => PropertyKind::Text,
            Self::Points(_) => PropertyKind::Points,
        }
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<[f64; 2]>> for PropertyValue {
    fn from(value: Vec<[f64; 2]>) -> Self {
        Self::Points(value)
    }
}

/// Typetag van een eigenschap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Integer,
    Number,
    Text,
    Points,
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "Integer",
            Self::Number => "Number",
            Self::Text => "Text",
            Self::Points => "Points",
        };
        f.write_str(name)
    }
}

/// Standaardwaarde uit een statisch schema.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyDefault {
    Integer(i64),
    Number(f64),
    Text(&'static str),
    Points(&'static [[f64; 2]]),
}

impl PropertyDefault {
    #[must_use]
    pub const fn kind(self) -> PropertyKind {
        match self {
            Self::Integer(_) => PropertyKind::Integer,
            Self::Number(_) => PropertyKind::Number,
            Self::Text(_) => PropertyKind::Text,
            Self::Points(_) => PropertyKind::Points,
        }
    }

    #[must_use]
    pub fn to_value(self) -> PropertyValue {
        match self {
            Self::Integer(value) => PropertyValue::Integer(value),
            Self::Number(value) => PropertyValue::Number(value),
            Self::Text(value) => PropertyValue::Text(value.to_owned()),
            Self::Points(points) => PropertyValue::Points(points.to_vec()),
        }
    }
}

/// Beschrijving van één eigenschap in het schema van een nodetype.
///
/// Voor `Integer` en `Number` gelden `min`/`max` als inclusieve grenzen; voor
/// `Points` begrenzen ze het aantal punten. Een niet-lege `options`-lijst
/// beperkt `Text` tot die waarden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyDescriptor {
    pub name: &'static str,
    pub default: PropertyDefault,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub options: &'static [&'static str],
}

impl PropertyDescriptor {
    #[must_use]
    pub const fn new(name: &'static str, default: PropertyDefault) -> Self {
        Self {
            name,
            default,
            min: None,
            max: None,
            options: &[],
        }
    }

    #[must_use]
    pub const fn integer(name: &'static str, default: i64) -> Self {
        Self::new(name, PropertyDefault::Integer(default))
    }

    #[must_use]
    pub const fn number(name: &'static str, default: f64) -> Self {
        Self::new(name, PropertyDefault::Number(default))
    }

    #[must_use]
    pub const fn text(name: &'static str, default: &'static str) -> Self {
        Self::new(name, PropertyDefault::Text(default))
    }

    #[must_use]
    pub const fn points(name: &'static str, default: &'static [[f64; 2]]) -> Self {
        Self::new(name, PropertyDefault::Points(default))
    }

    #[must_use]
    pub const fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub const fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    #[must_use]
    pub const fn with_options(mut self, options: &'static [&'static str]) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub const fn kind(&self) -> PropertyKind {
        self.default.kind()
    }

    /// Controleert `value` tegen deze beschrijving. Een `Integer` wordt voor
    /// een `Number`-eigenschap omgezet.
    pub fn validate(&self, value: &PropertyValue) -> Result<PropertyValue, PropertyError> {
        let value = match (self.kind(), value) {
            (PropertyKind::Number, PropertyValue::Integer(integer)) => {
                PropertyValue::Number(*integer as f64)
            }
            (expected, found) if expected == found.kind() => found.clone(),
            (expected, found) => {
                return Err(PropertyError::TypeMismatch {
                    name: self.name.to_owned(),
                    expected,
                    found: found.kind(),
                });
            }
        };

        match &value {
            PropertyValue::Integer(integer) => self.check_range(*integer as f64)?,
            PropertyValue::Number(number) => {
                if !number.is_finite() {
                    return Err(PropertyError::NonFinite {
                        name: self.name.to_owned(),
                    });
                }
                self.check_range(*number)?;
            }
            PropertyValue::Text(text) => {
                if !self.options.is_empty() && !self.options.contains(&text.as_str()) {
                    return Err(PropertyError::NotAnOption {
                        name: self.name.to_owned(),
                        value: text.clone(),
                    });
                }
            }
            PropertyValue::Points(points) => {
                if points.iter().flatten().any(|coordinate| !coordinate.is_finite()) {
                    return Err(PropertyError::NonFinite {
                        name: self.name.to_owned(),
                    });
                }
                self.check_range(points.len() as f64)?;
            }
        }

        Ok(value)
    }

    fn check_range(&self, value: f64) -> Result<(), PropertyError> {
        let below = self.min.is_some_and(|min| value < min);
        let above = self.max.is_some_and(|max| value > max);
        if below || above {
            return Err(PropertyError::OutOfRange {
                name: self.name.to_owned(),
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Zoekt een beschrijving op naam in een schema.
#[must_use]
pub fn descriptor<'a>(schema: &'a [PropertyDescriptor], name: &str) -> Option<&'a PropertyDescriptor> {
    schema.iter().find(|descriptor| descriptor.name == name)
}

/// Fouten bij het zetten of lezen van eigenschappen.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PropertyError {
    #[error("onbekende eigenschap `{name}`")]
    UnknownProperty { name: String },
    #[error("eigenschap `{name}` verwacht `{expected}` maar kreeg `{found}`")]
    TypeMismatch {
        name: String,
        expected: PropertyKind,
        found: PropertyKind,
    },
    #[error("waarde {value} voor eigenschap `{name}` valt buiten het bereik [{}, {}]", bound(.min), bound(.max))]
    OutOfRange {
        name: String,
        value: f64,
        min: Option<f64>,
        max: Option<f64>,
    },
    #[error("`{value}` is geen geldige optie voor eigenschap `{name}`")]
    NotAnOption { name: String, value: String },
    #[error("eigenschap `{name}` moet eindig zijn")]
    NonFinite { name: String },
}

fn bound(limit: &Option<f64>) -> String {
    limit.map_or_else(|| "-".to_owned(), |value| value.to_string())
}

/// Gevalideerde eigenschapswaarden van één node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyMap {
    values: BTreeMap<String, PropertyValue>,
}

impl PropertyMap {
    /// Alle standaardwaarden uit het schema.
    #[must_use]
    pub fn from_schema(schema: &[PropertyDescriptor]) -> Self {
        let values = schema
            .iter()
            .map(|descriptor| (descriptor.name.to_owned(), descriptor.default.to_value()))
            .collect();
        Self { values }
    }

    /// Standaardwaarden, overschreven door de (gevalideerde) waarden van een host.
    pub fn from_values(
        schema: &[PropertyDescriptor],
        values: &BTreeMap<String, PropertyValue>,
    ) -> Result<Self, PropertyError> {
        let mut map = Self::from_schema(schema);
        for (name, value) in values {
            map.set(schema, name, value.clone())?;
        }
        Ok(map)
    }

    pub fn set(
        &mut self,
        schema: &[PropertyDescriptor],
        name: &str,
        value: PropertyValue,
    ) -> Result<(), PropertyError> {
        let descriptor = descriptor(schema, name).ok_or_else(|| PropertyError::UnknownProperty {
            name: name.to_owned(),
        })?;
        let value = descriptor.validate(&value)?;
        self.values.insert(name.to_owned(), value);
        Ok(())
    }

    /// Bouwt een map voor een nieuw schema: waarden met een sleutel die in
    /// beide schema's voorkomt en geldig blijft worden overgenomen, de rest
    /// krijgt de standaardwaarde. Geeft ook de sleutels terug die verloren gaan.
    #[must_use]
    pub fn migrate(&self, schema: &[PropertyDescriptor]) -> (Self, Vec<String>) {
        let mut migrated = Self::from_schema(schema);
        let mut dropped = Vec::new();
        for (name, value) in &self.values {
            let carried = descriptor(schema, name)
                .and_then(|descriptor| descriptor.validate(value).ok());
            match carried {
                Some(value) => {
                    migrated.values.insert(name.clone(), value);
                }
                None => dropped.push(name.clone()),
            }
        }
        (migrated, dropped)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.values.get(name)
    }

    pub fn integer(&self, name: &str) -> Result<i64, PropertyError> {
        match self.require(name)? {
            PropertyValue::Integer(value) => Ok(*value),
            other => Err(mismatch(name, PropertyKind::Integer, other)),
        }
    }

    pub fn number(&self, name: &str) -> Result<f64, PropertyError> {
        match self.require(name)? {
            PropertyValue::Number(value) => Ok(*value),
            PropertyValue::Integer(value) => Ok(*value as f64),
            other => Err(mismatch(name, PropertyKind::Number, other)),
        }
    }

    pub fn text(&self, name: &str) -> Result<&str, PropertyError> {
        match self.require(name)? {
            PropertyValue::Text(value) => Ok(value),
            other => Err(mismatch(name, PropertyKind::Text, other)),
        }
    }

    pub fn points(&self, name: &str) -> Result<Vec<Point2>, PropertyError> {
        match self.require(name)? {
            PropertyValue::Points(points) => Ok(points.iter().copied().map(Point2::from).collect()),
            other => Err(mismatch(name, PropertyKind::Points, other)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn require(&self, name: &str) -> Result<&PropertyValue, PropertyError> {
        self.values
            .get(name)
            .ok_or_else(|| PropertyError::UnknownProperty {
                name: name.to_owned(),
            })
    }
}

fn mismatch(name: &str, expected: PropertyKind, found: &PropertyValue) -> PropertyError {
    PropertyError::TypeMismatch {
        name: name.to_owned(),
        expected,
        found: found.kind(),
    }
}
