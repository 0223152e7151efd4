use crate::error::Result;
use crate::graph::{NodeId, Weight};
use crate::search::{search, SearchResult, Strategy};

/// Remaining-cost estimate: the id distance to the destination.
///
/// A hop moves at most `BANDWIDTH` ids and costs at least `1 + 2`, so this never
/// overestimates and never drops by more than an edge's weight.
pub fn heuristic(node_id: NodeId, destination: NodeId) -> Weight {
    node_id.abs_diff(destination) as Weight
}

/// A* from `source` to `destination` on the band graph over `1..=n`, guided by [`heuristic`].
pub fn search_heuristic(n: usize, source: NodeId, destination: NodeId) -> Result<SearchResult> {
    search(n, source, destination, Strategy::Heuristic)
}
