use thiserror::Error;

use crate::graph::NodeId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("node {node} is outside the graph's id range [1, {n}]")]
    InvalidNode { node: NodeId, n: usize },

    #[error("unknown search strategy {0:?}, possible options are: (\"dijkstra\", \"astar\")")]
    UnknownStrategy(String),

    #[error("at least one timing trial is required")]
    EmptyTrials,
}

pub type Result<T> = std::result::Result<T, SearchError>;
