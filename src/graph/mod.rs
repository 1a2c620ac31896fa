//! Kern datastructuren voor het modelleren van generatieve grafen.
//!
//! Een [`Graph`] is een arena van nodes; een [`NodeId`] is de index van een
//! node in die arena. Verbindingen worden als bronverwijzing per ingang op de
//! afnemende node bewaard, zodat pull-evaluatie direct langs de ingangen kan
//! lopen.

use std::collections::BTreeMap;
use std::fmt;

pub mod evaluator;
pub mod node;
pub mod port;
pub mod preview;
pub mod property;
pub mod topo;
pub mod value;

use evaluator::EvaluationError;
use node::{Node, NodeId, NodeKind};
use port::PortType;
use preview::Preview;
use property::{PropertyError, PropertyMap, PropertyValue};
use topo::{Topology, TopologyError};
use value::Value;

use crate::components::combination::Combination;

/// Graph container; nodes worden nooit verwijderd, zodat ids stabiel blijven.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
}

/// Wat er bij het wisselen van variant verloren ging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantSwitch {
    /// Eigenschappen die de nieuwe variant niet kent of niet accepteert.
    pub dropped_properties: Vec<String>,
    /// Ingangen waarvan de verbinding is losgemaakt.
    pub dropped_inputs: Vec<usize>,
}

impl Graph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Voeg een node toe met de standaardwaarden van zijn schema.
    pub fn add_node(&mut self, kind: impl Into<NodeKind>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        let node = Node::new(id, kind);
        log::debug!("node {} toegevoegd ({})", id.0, node.name());
        self.nodes.push(node);
        id
    }

    /// Voeg een node toe met eigenschappen van een host; die worden eerst
    /// tegen het schema gevalideerd.
    pub fn add_node_with_properties(
        &mut self,
        kind: impl Into<NodeKind>,
        values: &BTreeMap<String, PropertyValue>,
    ) -> Result<NodeId, GraphError> {
        let kind = kind.into();
        let id = NodeId::new(self.nodes.len());
        let properties = PropertyMap::from_values(kind.schema(), values)
            .map_err(|source| GraphError::Property { node: id, source })?;

        let mut node = Node::new(id, kind);
        *node.properties_mut() = properties;
        log::debug!("node {} toegevoegd ({})", id.0, node.name());
        self.nodes.push(node);
        Ok(id)
    }

    /// Verbindt de uitgang van `source` met ingang `port` van `target`.
    ///
    /// Een bestaande verbinding op die ingang wordt vervangen. Geeft de vorige
    /// bron terug.
    pub fn connect(
        &mut self,
        source: NodeId,
        target: NodeId,
        port: usize,
    ) -> Result<Option<NodeId>, GraphError> {
        let source_node = self.node(source).ok_or(GraphError::UnknownNode(source))?;
        let target_node = self.node(target).ok_or(GraphError::UnknownNode(target))?;

        let ports = target_node.input_ports();
        let expected = *ports.get(port).ok_or(GraphError::PortOutOfRange {
            node: target,
            port,
            arity: ports.len(),
        })?;
        let found = source_node.output_port();
        if !found.is_some_and(|found| expected.accepts(found)) {
            return Err(GraphError::IncompatiblePort {
                source,
                target,
                port,
                expected,
                found,
            });
        }

        topo::check_connection(self, source, target).map_err(GraphError::Cycle)?;

        let previous = self.node_mut(target)?.set_input(port, Some(source));
        log::debug!("verbinding {} -> {}[{port}] gemaakt", source.0, target.0);
        Ok(previous)
    }

    /// Maakt ingang `port` van `target` los en geeft de vorige bron terug.
    pub fn disconnect(&mut self, target: NodeId, port: usize) -> Result<Option<NodeId>, GraphError> {
        let node = self.node_mut(target)?;
        let arity = node.inputs().len();
        if port >= arity {
            return Err(GraphError::PortOutOfRange {
                node: target,
                port,
                arity,
            });
        }
        let previous = node.set_input(port, None);
        if let Some(source) = previous {
            log::debug!("verbinding {} -> {}[{port}] verwijderd", source.0, target.0);
        }
        Ok(previous)
    }

    /// Zet één eigenschap, gevalideerd tegen het schema van de actieve variant.
    pub fn set_property(
        &mut self,
        id: NodeId,
        name: &str,
        value: PropertyValue,
    ) -> Result<(), GraphError> {
        let node = self.node_mut(id)?;
        let schema = node.kind().schema();
        node.properties_mut()
            .set(schema, name, value)
            .map_err(|source| GraphError::Property { node: id, source })?;
        log::debug!("eigenschap `{name}` van node {} bijgewerkt", id.0);
        Ok(())
    }

    /// Selecteert kandidaat `index` van een combinatienode.
    ///
    /// Eigenschappen met een sleutel die ook in de nieuwe variant bestaat en
    /// daar geldig is blijven behouden. Verbindingen blijven staan als de
    /// ingang bestaat en het nieuwe poorttype de bron accepteert.
    pub fn select_variant(&mut self, id: NodeId, index: usize) -> Result<VariantSwitch, GraphError> {
        let node = self.node(id).ok_or(GraphError::UnknownNode(id))?;
        let NodeKind::Combination(current) = *node.kind() else {
            return Err(GraphError::NotACombination(id));
        };
        let combination = Combination::with_selection(current.kind(), index).ok_or(
            GraphError::VariantOutOfRange {
                node: id,
                index,
                count: current.candidates().len(),
            },
        )?;
        let kind = NodeKind::Combination(combination);

        let (properties, dropped_properties) = node.properties().migrate(kind.schema());

        let new_ports = kind.input_ports();
        let mut inputs = vec![None; new_ports.len()];
        let mut dropped_inputs = Vec::new();
        for (port, source) in node.inputs().iter().enumerate() {
            let Some(source) = *source else {
                continue;
            };
            let accepted = new_ports.get(port).is_some_and(|expected| {
                self.node(source)
                    .and_then(Node::output_port)
                    .is_some_and(|found| expected.accepts(found))
            });
            if accepted {
                inputs[port] = Some(source);
            } else {
                dropped_inputs.push(port);
            }
        }

        log::debug!(
            "node {} gewisseld naar {} (vervallen eigenschappen: {dropped_properties:?}, vervallen ingangen: {dropped_inputs:?})",
            id.0,
            kind.name()
        );
        self.node_mut(id)?.replace_kind(kind, properties, inputs);

        Ok(VariantSwitch {
            dropped_properties,
            dropped_inputs,
        })
    }

    /// Pull-evaluatie van één node; zie [`evaluator::compute`].
    pub fn compute(&self, id: NodeId) -> Result<Option<Value>, EvaluationError> {
        evaluator::compute(self, id)
    }

    /// Berekent `id` en maakt er een preview van.
    pub fn visualise(
        &self,
        id: NodeId,
        height: f64,
        aspect_ratio: f64,
    ) -> Result<Preview, EvaluationError> {
        let value = self.compute(id)?;
        preview::visualise(value.as_ref(), height, aspect_ratio)
            .map_err(|source| EvaluationError::PreviewFailed { node_id: id, source })
    }

    /// Alle nodes in een volgorde waarin elke bron vóór zijn afnemers komt.
    pub fn evaluation_order(&self) -> Result<Vec<NodeId>, TopologyError> {
        Topology::sort(self).map(|topology| topology.order)
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, GraphError> {
        self.nodes.get_mut(id.0).ok_or(GraphError::UnknownNode(id))
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Fouten die kunnen optreden bij het bewerken van de graph.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    UnknownNode(NodeId),
    PortOutOfRange {
        node: NodeId,
        port: usize,
        arity: usize,
    },
    IncompatiblePort {
        source: NodeId,
        target: NodeId,
        port: usize,
        expected: PortType,
        found: Option<PortType>,
    },
    Cycle(TopologyError),
    Property {
        node: NodeId,
        source: PropertyError,
    },
    NotACombination(NodeId),
    VariantOutOfRange {
        node: NodeId,
        index: usize,
        count: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode(id) => write!(f, "node {} niet gevonden in graph", id.0),
            Self::PortOutOfRange { node, port, arity } => write!(
                f,
                "node {} heeft geen ingang {port} (aantal ingangen: {arity})",
                node.0
            ),
            Self::IncompatiblePort {
                source,
                target,
                port,
                expected,
                found,
            } => match found {
                Some(found) => write!(
                    f,
                    "ingang {port} van node {} verwacht `{expected}`, maar node {} levert `{found}`",
                    target.0, source.0
                ),
                None => write!(f, "node {} heeft geen uitgang", source.0),
            },
            Self::Cycle(error) => write!(f, "verbinding geweigerd: {error}"),
            Self::Property { node, source } => {
                write!(f, "eigenschap van node {} ongeldig: {source}", node.0)
            }
            Self::NotACombination(id) => {
                write!(f, "node {} is geen combinatienode", id.0)
            }
            Self::VariantOutOfRange { node, index, count } => write!(
                f,
                "node {} heeft geen variant {index} (aantal varianten: {count})",
                node.0
            ),
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Cycle(error) => Some(error),
            Self::Property { source, .. } => Some(source),
            _ => None,
        }
    }
}
