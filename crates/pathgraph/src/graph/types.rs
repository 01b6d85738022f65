//! Core graph types: locations, edge IDs, and the read-only graph view.

use super::edge::Edge;
use super::vertex::Vertex;
use serde::{Deserialize, Serialize};

/// Identifier of an edge inside a graph's edge arena (monotonic counter).
pub type EdgeId = u64;

/// A 2D integer location for placing a vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: i32,
    /// Vertical coordinate
    pub y: i32,
}

impl Point {
    /// Create a point at `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Read-only access to a graph's structure.
///
/// Traversal and shortest-path computations only need this capability, so
/// they can never mutate the graph they are walking. Structural mutation is
/// only available through [`Graph`](super::Graph) itself.
pub trait GraphView {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of directed edges (a bidirectional pair counts twice).
    fn edge_count(&self) -> usize;

    /// Look up a vertex by name.
    fn vertex(&self, name: &str) -> Option<&Vertex>;

    /// All vertex names, in the graph's iteration order.
    fn vertex_names(&self) -> Vec<&str>;

    /// Outgoing edges of `name`, in insertion order.
    ///
    /// Returns an empty list when the vertex does not exist.
    fn outgoing(&self, name: &str) -> Vec<&Edge>;

    /// Check whether a vertex exists.
    fn contains_vertex(&self, name: &str) -> bool {
        self.vertex(name).is_some()
    }
}
