/*
Shared relaxation loop for both engines. The frontier is a plain min-heap that tolerates
duplicate entries per node: improved nodes are pushed again and the stale entries are
discarded on pop through the visited check. Every pop counts as an extraction, stale or not.
*/

use std::fmt;
use std::str::FromStr;

use orx_priority_queue::*;
use tracing::{debug, trace};

use crate::astar::heuristic;
use crate::error::{Result, SearchError};
use crate::graph::{build_graph, BandGraph, NodeId, Weight};

/// Path cost from the source. Orders every finite cost below `Unreachable`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cost {
    Finite(Weight),
    Unreachable,
}

impl Cost {
    pub fn is_finite(&self) -> bool {
        matches!(self, Cost::Finite(_))
    }

    pub fn value(&self) -> Option<Weight> {
        match self {
            Cost::Finite(cost) => Some(*cost),
            Cost::Unreachable => None,
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Finite(cost) => write!(f, "{}", cost),
            Cost::Unreachable => f.write_str("inf"),
        }
    }
}

/// Work done by one search call. Pure instrumentation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OperationCounts {
    pub construction_steps: u64,
    pub extractions: u64,
    pub relaxations: u64,
    pub improvements: u64,
}

impl OperationCounts {
    pub fn total(&self) -> u64 {
        self.construction_steps + self.extractions + self.relaxations + self.improvements
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Source to destination, empty when the destination is unreachable.
    pub path: Vec<NodeId>,
    pub cost: Cost,
    pub counts: OperationCounts,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        self.cost.is_finite()
    }

    pub fn total_ops(&self) -> u64 {
        self.counts.total()
    }
}

/// Frontier ordering used by the shared loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Dijkstra: priority is the cost so far.
    Uniform,
    /// A*: priority is the cost so far plus `|destination - node|`.
    Heuristic,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Uniform, Strategy::Heuristic];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Uniform => "dijkstra",
            Strategy::Heuristic => "astar",
        }
    }

    fn priority(&self, cost: Weight, node_id: NodeId, destination: NodeId) -> Weight {
        match self {
            Strategy::Uniform => cost,
            Strategy::Heuristic => cost + heuristic(node_id, destination),
        }
    }

    pub fn run(&self, n: usize, source: NodeId, destination: NodeId) -> Result<SearchResult> {
        search(n, source, destination, *self)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dijkstra" | "uniform" => Ok(Strategy::Uniform),
            "astar" | "a*" | "heuristic" => Ok(Strategy::Heuristic),
            _ => Err(SearchError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Builds the band graph for `n` and searches it. The construction steps of the build
/// are part of the returned counts.
pub fn search(n: usize, source: NodeId, destination: NodeId, strategy: Strategy) -> Result<SearchResult> {
    let graph = build_graph(n);
    search_graph(&graph, source, destination, strategy)
}

pub fn search_graph(
    graph: &BandGraph,
    source: NodeId,
    destination: NodeId,
    strategy: Strategy,
) -> Result<SearchResult> {
    for node in [source, destination] {
        if !graph.contains(node) {
            return Err(SearchError::InvalidNode {
                node,
                n: graph.node_count(),
            });
        }
    }

    let size = graph.node_count() + 1;
    let mut best = vec![Cost::Unreachable; size];
    let mut predecessor: Vec<Option<NodeId>> = vec![None; size];
    let mut visited = vec![false; size];
    let mut counts = OperationCounts {
        construction_steps: graph.construction_steps(),
        ..OperationCounts::default()
    };

    // Keyed on (priority, node) so equal priorities pop the smaller id first.
    let mut frontier: BinaryHeap<NodeId, (Weight, NodeId)> = BinaryHeap::default();
    best[source] = Cost::Finite(0);
    frontier.push(source, (strategy.priority(0, source, destination), source));

    while let Some((node_id, (priority, _))) = frontier.pop() {
        counts.extractions += 1;
        if visited[node_id] {
            continue;
        }
        visited[node_id] = true;
        trace!(node_id, priority, "finalized");

        if node_id == destination {
            break;
        }

        // Only nodes with a finite cost ever enter the frontier.
        let Cost::Finite(cost_to_node) = best[node_id] else {
            continue;
        };
        for &(neighbor_id, weight) in graph.neighbors(node_id) {
            counts.relaxations += 1;
            if visited[neighbor_id] {
                continue;
            }
            let cost_to_neighbor = cost_to_node + weight;
            if Cost::Finite(cost_to_neighbor) < best[neighbor_id] {
                best[neighbor_id] = Cost::Finite(cost_to_neighbor);
                predecessor[neighbor_id] = Some(node_id);
                counts.improvements += 1;
                let key = strategy.priority(cost_to_neighbor, neighbor_id, destination);
                frontier.push(neighbor_id, (key, neighbor_id));
            }
        }
    }

    let cost = best[destination];
    let path = if cost.is_finite() {
        reconstruct_path(&predecessor, destination)
    } else {
        Vec::new()
    };

    debug!(
        strategy = strategy.name(),
        n = graph.node_count(),
        source,
        destination,
        %cost,
        total_ops = counts.total(),
        "search finished"
    );

    Ok(SearchResult { path, cost, counts })
}

fn reconstruct_path(predecessor: &[Option<NodeId>], destination: NodeId) -> Vec<NodeId> {
    let mut path = vec![destination];
    let mut current = destination;
    while let Some(previous) = predecessor[current] {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}
