//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Vertex`]: named, located nodes with ordered adjacency lists
//! - [`Edge`]: weighted, labeled directed links between vertices
//! - [`Graph`]: the owning store that enforces structural invariants
//! - [`ShortestPath`]: single-source Dijkstra snapshots

mod edge;
mod pathgraph;
mod shortest_path;
mod types;
mod vertex;
pub mod algorithms;

pub use edge::{Edge, MAX_WEIGHT};
pub use pathgraph::Graph;
pub use shortest_path::ShortestPath;
pub use types::{EdgeId, GraphView, Point};
pub use vertex::Vertex;
