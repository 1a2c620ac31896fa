//! Pull-evaluatie van nodes.
//!
//! `compute` vraagt eerst de waarden van alle aangesloten bronnen op en geeft
//! die, samen met de eigenschappen, aan het actieve component. Er is geen
//! cache: een bron die door meerdere afnemers gebruikt wordt, rekent voor
//! elke afnemer opnieuw.

use std::collections::BTreeMap;
use std::fmt;

use crate::components::{Component, ComponentError};
use crate::graph::Graph;
use crate::graph::node::NodeId;
use crate::graph::preview::PreviewError;
use crate::graph::topo::{Topology, TopologyError};
use crate::graph::value::Value;

/// Resultaat van een evaluatie-run over de hele graph.
#[derive(Debug, Default, Clone)]
pub struct EvaluationResult {
    /// Uitkomst per node; `None` als een benodigde invoer ontbrak.
    pub node_outputs: BTreeMap<NodeId, Option<Value>>,
}

/// Fouttype voor evaluatieproblemen.
#[derive(Debug)]
pub enum EvaluationError {
    /// Topologiesortering is mislukt.
    Topology(TopologyError),
    /// Het component gaf een foutmelding tijdens evaluatie.
    ComponentFailed {
        node_id: NodeId,
        component: String,
        source: ComponentError,
    },
    /// De preview van een node kon niet gemaakt worden.
    PreviewFailed {
        node_id: NodeId,
        source: PreviewError,
    },
    /// De node kon niet teruggevonden worden in de graph.
    UnknownNode(NodeId),
}

impl EvaluationError {
    /// De componentfout achter deze evaluatiefout, indien aanwezig.
    #[must_use]
    pub fn component_error(&self) -> Option<&ComponentError> {
        match self {
            Self::ComponentFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Topology(err) => write!(f, "topologiesortering mislukt: {err}"),
            Self::ComponentFailed {
                node_id,
                component,
                source,
            } => write!(
                f,
                "component `{component}` (node {}) faalde: {}",
                node_id.0, source
            ),
            Self::PreviewFailed { node_id, source } => {
                write!(f, "preview van node {} mislukt: {source}", node_id.0)
            }
            Self::UnknownNode(node_id) => {
                write!(f, "node {} bestaat niet in de graph", node_id.0)
            }
        }
    }
}

impl std::error::Error for EvaluationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ComponentFailed { source, .. } => Some(source),
            Self::PreviewFailed { source, .. } => Some(source),
            Self::Topology(err) => Some(err),
            Self::UnknownNode(_) => None,
        }
    }
}

impl From<TopologyError> for EvaluationError {
    fn from(error: TopologyError) -> Self {
        Self::Topology(error)
    }
}

/// Berekent de waarde van `node_id`, inclusief al zijn bronnen.
///
/// Een niet-aangesloten ingang wordt als `None` doorgegeven; componenten die
/// die invoer nodig hebben geven zelf `None` terug.
pub fn compute(graph: &Graph, node_id: NodeId) -> Result<Option<Value>, EvaluationError> {
    let node = graph
        .node(node_id)
        .ok_or(EvaluationError::UnknownNode(node_id))?;

    let inputs = node
        .inputs()
        .iter()
        .map(|source| match source {
            Some(source) => compute(graph, *source),
            None => Ok(None),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let component = node.kind().active();
    log::trace!("compute node {} ({})", node_id.0, component.name());

    component
        .compute(&inputs, node.properties())
        .map_err(|error| {
            log::warn!(
                "component `{}` (node {}) faalde: {error}",
                component.name(),
                node_id.0
            );
            EvaluationError::ComponentFailed {
                node_id,
                component: component.name().to_owned(),
                source: error,
            }
        })
}

/// Berekent elke node van de graph, in topologische volgorde.
pub fn evaluate(graph: &Graph) -> Result<EvaluationResult, EvaluationError> {
    let topology = Topology::sort(graph)?;
    let mut result = EvaluationResult::default();
    for node_id in topology.order {
        let value = compute(graph, node_id)?;
        result.node_outputs.insert(node_id, value);
    }
    Ok(result)
}
