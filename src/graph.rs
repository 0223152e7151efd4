/*
Band graph over node ids 1..=N. Every node i links to each j with |i - j| <= BANDWIDTH
(clipped to the id range), with weight i + j. The reverse edge j -> i is generated
when node j is processed, so the adjacency lists come out symmetric.
*/

pub type NodeId = usize;
pub type Weight = u64;

/// Maximum id distance between two adjacent nodes.
pub const BANDWIDTH: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct BandGraph {
    // Index 0 is never used so node ids index directly.
    pub(crate) adjacency: Vec<Vec<(NodeId, Weight)>>,
    pub(crate) construction_steps: u64,
}

impl BandGraph {
    /// Number of nodes, i.e. the largest valid node id.
    pub fn node_count(&self) -> usize {
        self.adjacency.len().saturating_sub(1)
    }

    pub fn contains(&self, node_id: NodeId) -> bool {
        node_id >= 1 && node_id <= self.node_count()
    }

    /// Outgoing `(neighbor, weight)` pairs in ascending neighbor order. Empty for unknown ids.
    pub fn neighbors(&self, node_id: NodeId) -> &[(NodeId, Weight)] {
        self.adjacency.get(node_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<Weight> {
        self.neighbors(from)
            .iter()
            .find(|&&(neighbor, _)| neighbor == to)
            .map(|&(_, weight)| weight)
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Candidate checks performed while building, self-candidates included.
    pub fn construction_steps(&self) -> u64 {
        self.construction_steps
    }
}

pub fn build_graph(n: usize) -> BandGraph {
    let mut adjacency: Vec<Vec<(NodeId, Weight)>> = vec![Vec::new(); n + 1];
    let mut construction_steps = 0;

    for i in 1..=n {
        let low = i.saturating_sub(BANDWIDTH).max(1);
        let high = (i + BANDWIDTH).min(n);
        for j in low..=high {
            construction_steps += 1;
            if j != i {
                adjacency[i].push((j, (i + j) as Weight));
            }
        }
    }

    BandGraph {
        adjacency,
        construction_steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_nodes_of_small_graph() {
        let graph = build_graph(8);
        assert_eq!(graph.node_count(), 8);
        assert_eq!(graph.neighbors(1), &[(2, 3), (3, 4), (4, 5)]);
        assert_eq!(graph.neighbors(8), &[(5, 13), (6, 14), (7, 15)]);
        assert_eq!(graph.neighbors(4), &[(1, 5), (2, 6), (3, 7), (5, 9), (6, 10), (7, 11)]);
    }

    #[test]
    fn counts_every_candidate_including_self() {
        // 4 + 5 + 6 + 7 + 7 + 6 + 5 + 4
        assert_eq!(build_graph(8).construction_steps(), 44);
        assert_eq!(build_graph(1).construction_steps(), 1);
        assert_eq!(build_graph(10).construction_steps(), 58);
    }

    #[test]
    fn single_node_has_no_edges() {
        let graph = build_graph(1);
        assert!(graph.contains(1));
        assert!(graph.neighbors(1).is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn empty_graph() {
        let graph = build_graph(0);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.construction_steps(), 0);
        assert!(!graph.contains(0));
        assert!(!graph.contains(1));
        assert!(graph.neighbors(1).is_empty());
    }

    #[test]
    fn edges_are_symmetric() {
        let graph = build_graph(25);
        for i in 1..=25 {
            for &(j, w) in graph.neighbors(i) {
                assert!(i.abs_diff(j) <= BANDWIDTH);
                assert_eq!(w, (i + j) as u64);
                assert_eq!(graph.edge_weight(j, i), Some(w));
            }
        }
        assert_eq!(graph.edge_weight(1, 5), None);
    }

    #[test]
    fn interior_nodes_have_six_edges() {
        let graph = build_graph(20);
        for i in 4..=17 {
            assert_eq!(graph.neighbors(i).len(), 2 * BANDWIDTH);
        }
        // 2 * (3 + 4 + 5) boundary edges + 14 interior nodes * 6
        assert_eq!(graph.edge_count(), 24 + 14 * 6);
    }
}
