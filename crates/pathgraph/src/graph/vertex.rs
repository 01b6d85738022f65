//! Named, located vertices and their adjacency lists.

use super::edge::Edge;
use super::types::{EdgeId, Point};

/// A vertex in the graph.
///
/// The name is the vertex identity and never changes once created. Location and
/// data may be updated freely through [`Graph::vertex_mut`](super::Graph::vertex_mut).
///
/// Adjacency is kept as two ordered lists of edge IDs into the owning graph's
/// edge arena: `outgoing` holds edges that start here, `incoming` holds edges
/// that end here. Only the graph may change these lists.
#[derive(Debug, Clone)]
pub struct Vertex {
    name: String,
    location: Point,
    data: Option<String>,
    incoming: Vec<EdgeId>,
    outgoing: Vec<EdgeId>,
}

impl Vertex {
    pub(crate) fn new(name: impl Into<String>, location: Point, data: Option<String>) -> Self {
        Self {
            name: name.into(),
            location,
            data,
            incoming: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    /// The vertex name, unique within its graph.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the vertex is placed.
    pub fn location(&self) -> Point {
        self.location
    }

    /// Move the vertex.
    pub fn set_location(&mut self, location: Point) {
        self.location = location;
    }

    /// Optional free-form data.
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    /// Replace the free-form data.
    pub fn set_data(&mut self, data: Option<String>) {
        self.data = data;
    }

    /// IDs of edges ending at this vertex, in insertion order.
    pub fn incoming_edges(&self) -> &[EdgeId] {
        &self.incoming
    }

    /// IDs of edges starting at this vertex, in insertion order.
    pub fn outgoing_edges(&self) -> &[EdgeId] {
        &self.outgoing
    }

    /// Number of edges starting here.
    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    /// Number of edges ending here.
    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }

    /// Register an edge in the matching adjacency list.
    ///
    /// An edge starting here is outgoing (self-loops included); one ending
    /// here is incoming. Returns `false` if the edge does not touch this vertex.
    pub(crate) fn attach(&mut self, id: EdgeId, edge: &Edge) -> bool {
        if edge.from() == self.name {
            self.outgoing.push(id);
        } else if edge.to() == self.name {
            self.incoming.push(id);
        } else {
            return false;
        }
        true
    }

    /// Drop an edge from whichever adjacency list holds it.
    pub(crate) fn detach(&mut self, id: EdgeId) -> bool {
        if let Some(pos) = self.outgoing.iter().position(|e| *e == id) {
            self.outgoing.remove(pos);
            return true;
        }
        if let Some(pos) = self.incoming.iter().position(|e| *e == id) {
            self.incoming.remove(pos);
            return true;
        }
        false
    }

    /// Empty both adjacency lists, returning every edge ID that was attached.
    pub(crate) fn take_edges(&mut self) -> Vec<EdgeId> {
        let mut ids = std::mem::take(&mut self.outgoing);
        ids.append(&mut self.incoming);
        ids
    }
}
