use crate::error::Result;
use crate::graph::NodeId;
use crate::search::{search, SearchResult, Strategy};

/// Dijkstra from `source` to `destination` on the band graph over `1..=n`.
/// Stops as soon as the destination is finalized.
pub fn search_uniform(n: usize, source: NodeId, destination: NodeId) -> Result<SearchResult> {
    search(n, source, destination, Strategy::Uniform)
}
