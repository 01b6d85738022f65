//! # pathgraph
//!
//! An in-memory weighted graph of named, located vertices with reachability
//! queries, single-source shortest paths, and JSON persistence.
//!
//! ## Core Principles
//!
//! - **Owned Storage**: The graph owns every vertex and edge; handles are names and IDs
//! - **Read-Only Algorithms**: Traversals borrow the graph and never mark it
//! - **Snapshots**: Shortest-path results do not change when the graph does
//! - **Atomic Loads**: A failed load leaves the graph untouched
//!
//! ## Architecture
//!
//! ```text
//! Graph (vertices by name, edges by ID)
//!     ↓
//! GraphView (read-only capability)
//!     ↓
//! Algorithms (breadth-first, connectivity, Dijkstra)
//!
//! Codec (JSON document) ↔ Graph::save / Graph::load
//! ```
//!
//! ## Example
//!
//! ```rust
//! use pathgraph::{Graph, Point};
//!
//! let mut graph = Graph::new();
//! graph.add_vertex("Depot", Point::new(0, 0), None).unwrap();
//! graph.add_vertex("Store", Point::new(3, 4), Some("open late")).unwrap();
//! graph.add_edge("Depot", "Store", "main road", 5, false).unwrap();
//!
//! assert_eq!(graph.edge_count(), 2);
//! assert!(graph.are_vertices_connected("Store", "Depot"));
//!
//! let paths = graph.path_information("Depot").unwrap();
//! assert_eq!(paths.distance_to("Store"), 5.0);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod codec;
pub mod error;
pub mod graph;

// Re-export main types
pub use codec::JsonOptions;
pub use error::{GraphError, Result};
pub use graph::algorithms::{Control, VisitSet};
pub use graph::{Edge, EdgeId, Graph, GraphView, Point, ShortestPath, Vertex, MAX_WEIGHT};
