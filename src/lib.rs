//! Instrumented shortest-path search on a generated band graph.
//!
//! Nodes `1..=n` each connect to the nodes within [`BANDWIDTH`] ids of themselves, with
//! edge weight `i + j`. [`search_uniform`] (Dijkstra) and [`search_heuristic`] (A*) share
//! one relaxation loop and report the path, its [`Cost`] and the [`OperationCounts`]
//! spent getting there, so the two engines' work is directly comparable.

pub mod astar;
pub mod compare;
pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod logging;
pub mod search;

pub use astar::{heuristic, search_heuristic};
pub use dijkstra::search_uniform;
pub use error::{Result, SearchError};
pub use graph::{build_graph, BandGraph, NodeId, Weight, BANDWIDTH};
pub use search::{search, search_graph, Cost, OperationCounts, SearchResult, Strategy};
