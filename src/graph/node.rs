//! Definitie van nodes binnen de graph.

use crate::components::ComponentKind;
use crate::components::combination::Combination;
use crate::graph::port::PortType;
use crate::graph::property::{PropertyDescriptor, PropertyMap};

/// Identifier voor een node binnen de graph.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Ord, PartialOrd)]
pub struct NodeId(pub usize);

impl NodeId {
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }
}

impl From<usize> for NodeId {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

/// Het gedrag van een node: een vast component, of een combinatie die naar
/// de geselecteerde kandidaat delegeert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Component(ComponentKind),
    Combination(Combination),
}

impl NodeKind {
    /// Het component dat op dit moment rekent.
    #[must_use]
    pub fn active(&self) -> ComponentKind {
        match self {
            Self::Component(component) => *component,
            Self::Combination(combination) => combination.selected(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.active().name()
    }

    #[must_use]
    pub fn input_ports(&self) -> &'static [PortType] {
        self.active().input_ports()
    }

    #[must_use]
    pub fn output_ports(&self) -> &'static [PortType] {
        self.active().output_ports()
    }

    #[must_use]
    pub fn schema(&self) -> &'static [PropertyDescriptor] {
        self.active().schema()
    }

    #[must_use]
    pub fn resizable(&self) -> bool {
        self.active().resizable()
    }
}

impl From<ComponentKind> for NodeKind {
    fn from(component: ComponentKind) -> Self {
        Self::Component(component)
    }
}

impl From<Combination> for NodeKind {
    fn from(combination: Combination) -> Self {
        Self::Combination(combination)
    }
}

/// Node representatie binnen de graph.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unieke identifier binnen de graph.
    pub id: NodeId,
    kind: NodeKind,
    /// Bron per ingang; de lengte volgt altijd het aantal ingangen van `kind`.
    inputs: Vec<Option<NodeId>>,
    properties: PropertyMap,
}

impl Node {
    /// Nieuwe node zonder verbindingen, met de standaardwaarden uit het schema.
    #[must_use]
    pub fn new(id: NodeId, kind: impl Into<NodeKind>) -> Self {
        let kind = kind.into();
        Self {
            id,
            kind,
            inputs: vec![None; kind.input_ports().len()],
            properties: PropertyMap::from_schema(kind.schema()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    #[must_use]
    pub fn inputs(&self) -> &[Option<NodeId>] {
        &self.inputs
    }

    #[must_use]
    pub fn input(&self, port: usize) -> Option<NodeId> {
        self.inputs.get(port).copied().flatten()
    }

    /// Alle aangesloten bronnen, in poortvolgorde.
    pub fn sources(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.inputs.iter().flatten().copied()
    }

    #[must_use]
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    #[must_use]
    pub fn input_ports(&self) -> &'static [PortType] {
        self.kind.input_ports()
    }

    /// Het (enige) uitgangstype van deze node.
    #[must_use]
    pub fn output_port(&self) -> Option<PortType> {
        self.kind.output_ports().first().copied()
    }

    pub(crate) fn set_input(&mut self, port: usize, source: Option<NodeId>) -> Option<NodeId> {
        self.inputs
            .get_mut(port)
            .and_then(|slot| std::mem::replace(slot, source))
    }

    pub(crate) fn properties_mut(&mut self) -> &mut PropertyMap {
        &mut self.properties
    }

    /// Vervangt het gedrag, de eigenschappen en de ingangen in één keer.
    pub(crate) fn replace_kind(
        &mut self,
        kind: NodeKind,
        properties: PropertyMap,
        inputs: Vec<Option<NodeId>>,
    ) {
        self.kind = kind;
        self.properties = properties;
        self.inputs = inputs;
    }
}

#[cfg(test)]
mod tests {
    use super::{Node, NodeId, NodeKind};
    use crate::components::combination::{Combination, CombinationKind};
    use crate::components::{ComponentKind, repeat, shape};
    use crate::graph::port::PortType;

    #[test]
    fn new_node_has_one_slot_per_input() {
        let node = Node::new(
            NodeId::new(3),
            ComponentKind::Repeat(repeat::ComponentKind::Checkerboard),
        );
        assert_eq!(node.inputs(), &[None, None, None]);
        assert_eq!(node.input_ports(), &[PortType::Grid, PortType::Element, PortType::Element]);
        assert_eq!(node.output_port(), Some(PortType::Element));
        assert_eq!(node.sources().count(), 0);
    }

    #[test]
    fn combination_delegates_to_selection() {
        let kind = NodeKind::from(Combination::new(CombinationKind::Stamp));
        assert_eq!(kind.active(), ComponentKind::Shape(shape::ComponentKind::Polygon));
        assert_eq!(kind.name(), "Polygon");
        assert!(kind.resizable());

        let node = Node::new(NodeId::new(0), kind);
        assert_eq!(node.properties().integer("sides").unwrap(), 6);
    }

    #[test]
    fn set_input_returns_previous_source() {
        let mut node = Node::new(
            NodeId::new(1),
            ComponentKind::Repeat(repeat::ComponentKind::ShapeRepeater),
        );
        assert_eq!(node.set_input(0, Some(NodeId::new(7))), None);
        assert_eq!(node.set_input(0, Some(NodeId::new(8))), Some(NodeId::new(7)));
        assert_eq!(node.input(0), Some(NodeId::new(8)));
        assert_eq!(node.set_input(5, Some(NodeId::new(9))), None);
    }
}
