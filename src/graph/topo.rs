//! Topologische utilities over de ingangsverwijzingen van nodes.

use std::collections::{BTreeMap, HashSet, VecDeque};
use std::fmt;

use super::{Graph, node::NodeId};

/// Resultaat van een topologische sortering.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Topology {
    pub order: Vec<NodeId>,
}

/// Fouttype voor topologische sortering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    /// De graph bevat een cyclus. Bevat een pad dat de cyclus illustreert.
    Cycle { cycle: Vec<NodeId> },
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cycle { cycle } => {
                if cycle.is_empty() {
                    f.write_str("graph bevat een cyclus")
                } else {
                    let chain = cycle
                        .iter()
                        .map(|NodeId(id)| id.to_string())
                        .collect::<Vec<_>>()
                        .join(" -> ");
                    write!(f, "graph bevat een cyclus: {chain}")
                }
            }
        }
    }
}

impl std::error::Error for TopologyError {}

impl Topology {
    /// Sorteert alle nodes zodat elke bron vóór zijn afnemers komt (Kahn).
    /// Bij gelijke kandidaten gaat het laagste id voor.
    pub fn sort(graph: &Graph) -> Result<Self, TopologyError> {
        let mut indegree: BTreeMap<NodeId, usize> = BTreeMap::new();
        let mut consumers: BTreeMap<NodeId, Vec<NodeId>> = BTreeMap::new();

        for node in graph.nodes() {
            indegree.entry(node.id).or_insert(0);
            for source in node.sources() {
                consumers.entry(source).or_default().push(node.id);
                *indegree.entry(node.id).or_insert(0) += 1;
            }
        }

        let mut queue: VecDeque<NodeId> = indegree
            .iter()
            .filter_map(|(node, &count)| (count == 0).then_some(*node))
            .collect();
        let mut order = Vec::with_capacity(graph.node_count());

        while let Some(node) = queue.pop_front() {
            order.push(node);
            for consumer in consumers.get(&node).into_iter().flatten() {
                if let Some(count) = indegree.get_mut(consumer) {
                    *count -= 1;
                    if *count == 0 {
                        queue.push_back(*consumer);
                    }
                }
            }
        }

        if order.len() == graph.node_count() {
            return Ok(Self { order });
        }

        let remaining = graph
            .nodes()
            .iter()
            .map(|node| node.id)
            .find(|id| !order.contains(id));
        let cycle = remaining
            .and_then(|id| upstream_path(graph, id, id))
            .map(downstream_cycle)
            .unwrap_or_default();
        Err(TopologyError::Cycle { cycle })
    }
}

/// Controleert of een verbinding `source -> target` een cyclus zou sluiten.
///
/// Dat is zo wanneer `target` (direct of indirect) al een bron van `source`
/// is; de gevonden cyclus wordt dan in stroomrichting teruggegeven.
pub fn check_connection(graph: &Graph, source: NodeId, target: NodeId) -> Result<(), TopologyError> {
    if source == target {
        return Err(TopologyError::Cycle {
            cycle: vec![source, target],
        });
    }
    match upstream_path(graph, source, target) {
        Some(path) => {
            let mut cycle = downstream_cycle(path);
            cycle.push(target);
            Err(TopologyError::Cycle { cycle })
        }
        None => Ok(()),
    }
}

/// Zoekt via ingangsverwijzingen een pad van `start` terug naar `goal`.
/// Het pad begint bij `start` en eindigt bij `goal`.
fn upstream_path(graph: &Graph, start: NodeId, goal: NodeId) -> Option<Vec<NodeId>> {
    fn visit(
        graph: &Graph,
        node: NodeId,
        goal: NodeId,
        visited: &mut HashSet<NodeId>,
        path: &mut Vec<NodeId>,
    ) -> bool {
        path.push(node);
        let sources: Vec<NodeId> = graph
            .node(node)
            .map(|n| n.sources().collect())
            .unwrap_or_default();
        for source in sources {
            if source == goal {
                path.push(source);
                return true;
            }
            if visited.insert(source) && visit(graph, source, goal, visited, path) {
                return true;
            }
        }
        path.pop();
        false
    }

    let mut visited = HashSet::new();
    let mut path = Vec::new();
    visit(graph, start, goal, &mut visited, &mut path).then_some(path)
}

fn downstream_cycle(mut upstream: Vec<NodeId>) -> Vec<NodeId> {
    upstream.reverse();
    upstream
}
